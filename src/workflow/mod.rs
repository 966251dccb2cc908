pub mod quiz_session;
pub mod score;

pub use quiz_session::{QuizSession, QuizState};
pub use score::{review, QuestionReview, QuizScore, ScoreBand};
