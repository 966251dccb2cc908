//! 测验评分
//!
//! 由会话快照和题目实时计算，不保存在会话中

use crate::models::QuizQuestion;
use crate::workflow::quiz_session::QuizSession;

/// 成绩分档（仅用于展示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// ≥ 80%
    Excellent,
    /// ≥ 60%
    Good,
    KeepStudying,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "优秀！",
            ScoreBand::Good => "做得不错！",
            ScoreBand::KeepStudying => "继续加油！",
        }
    }
}

/// 测验得分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    /// 统计已选答案与正确答案一致的题目数量
    pub fn compute(session: &QuizSession, quiz: &[QuizQuestion]) -> Self {
        let correct = quiz
            .iter()
            .enumerate()
            .filter(|(index, question)| session.selected_answer(*index) == Some(question.correct_answer))
            .count();

        Self {
            correct,
            total: quiz.len(),
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }

    pub fn band(&self) -> ScoreBand {
        if self.correct * 100 >= self.total * 80 && self.total > 0 {
            ScoreBand::Excellent
        } else if self.correct * 100 >= self.total * 60 && self.total > 0 {
            ScoreBand::Good
        } else {
            ScoreBand::KeepStudying
        }
    }
}

/// 单题作答回顾
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionReview<'a> {
    pub question: &'a QuizQuestion,
    pub selected: Option<usize>,
    pub is_correct: bool,
}

/// 逐题回顾
pub fn review<'a>(session: &QuizSession, quiz: &'a [QuizQuestion]) -> Vec<QuestionReview<'a>> {
    quiz.iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = session.selected_answer(index);
            QuestionReview {
                question,
                selected,
                is_correct: selected == Some(question.correct_answer),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(len: usize) -> Vec<QuizQuestion> {
        (0..len)
            .map(|i| QuizQuestion {
                question: format!("Q{}", i + 1),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_answer: 1,
                explanation: String::new(),
            })
            .collect()
    }

    /// 依次作答并在最后一题结束
    fn answer_all(quiz: &[QuizQuestion], answers: &[usize]) -> QuizSession {
        let mut session = QuizSession::new(quiz);
        for &answer in answers {
            session = session.select(answer).unwrap().advance().unwrap();
        }
        session
    }

    #[test]
    fn test_three_of_five_is_good() {
        let quiz = quiz(5);
        let session = answer_all(&quiz, &[1, 1, 1, 0, 3]);
        assert!(session.is_completed());

        let score = QuizScore::compute(&session, &quiz);
        assert_eq!(score, QuizScore { correct: 3, total: 5 });
        assert_eq!(score.percentage(), 60.0);
        assert_eq!(score.band(), ScoreBand::Good);
    }

    #[test]
    fn test_bands() {
        let band = |correct, total| QuizScore { correct, total }.band();
        assert_eq!(band(5, 5), ScoreBand::Excellent);
        assert_eq!(band(4, 5), ScoreBand::Excellent);
        assert_eq!(band(2, 5), ScoreBand::KeepStudying);
        assert_eq!(band(0, 0), ScoreBand::KeepStudying);
    }

    #[test]
    fn test_unanswered_questions_count_as_wrong() {
        let quiz = quiz(3);
        let session = QuizSession::new(&quiz).select(1).unwrap();
        let score = QuizScore::compute(&session, &quiz);
        assert_eq!(score.correct, 1);

        let reviews = review(&session, &quiz);
        assert!(reviews[0].is_correct);
        assert_eq!(reviews[1].selected, None);
        assert!(!reviews[1].is_correct);
    }
}
