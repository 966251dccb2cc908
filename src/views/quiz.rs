//! 测验页面：答题 + 成绩

use std::fmt;

use crate::models::QuizQuestion;
use crate::workflow::{QuestionReview, QuizScore, QuizSession};

const PROGRESS_WIDTH: usize = 30;

/// 进度条，例如 `[██████░░░░]`
fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(PROGRESS_WIDTH - filled))
}

/// 当前题目页
pub fn render_quiz(session: &QuizSession, quiz: &[QuizQuestion]) -> String {
    let index = session.current_question_index();
    match quiz.get(index) {
        Some(question) => QuestionPage { session, question, total: quiz.len() }.to_string(),
        None => String::new(),
    }
}

/// 成绩页
pub fn render_results(score: &QuizScore, reviews: &[QuestionReview<'_>]) -> String {
    ResultsPage { score, reviews }.to_string()
}

struct QuestionPage<'a> {
    session: &'a QuizSession,
    question: &'a QuizQuestion,
    total: usize,
}

impl QuestionPage<'_> {
    fn hints(&self) -> String {
        let index = self.session.current_question_index();
        let mut hints = vec![format!("1-{} 选择答案", self.question.options.len())];
        if index > 0 {
            hints.push("p 上一题".to_string());
        }
        if self.session.can_advance() {
            let next = if self.session.is_last_question() { "n 完成" } else { "n 下一题" };
            hints.push(next.to_string());
        }
        hints.push("b 返回".to_string());
        hints.join("  |  ")
    }
}

impl fmt::Display for QuestionPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.session.current_question_index();

        writeln!(f, "🧠 互动测验  {} / {}", index + 1, self.total)?;
        writeln!(f, "{}", progress_bar(self.session.progress_percent()))?;
        writeln!(f)?;
        writeln!(f, "第 {} 题", index + 1)?;
        writeln!(f, "{}", self.question.question)?;
        writeln!(f)?;

        let selected = self.session.selected_answer(index);
        for (i, option) in self.question.options.iter().enumerate() {
            let marker = if selected == Some(i) { "◉" } else { "○" };
            writeln!(f, "  {} {}. {}", marker, i + 1, option)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.hints())
    }
}

struct ResultsPage<'a> {
    score: &'a QuizScore,
    reviews: &'a [QuestionReview<'a>],
}

impl fmt::Display for ResultsPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.score;

        writeln!(f, "🏆 测验结果")?;
        writeln!(f, "{}", "─".repeat(60))?;
        writeln!(f, "{}/{}", score.correct, score.total)?;
        writeln!(f, "正确率 {:.0}%", score.percentage())?;
        writeln!(f, "{}", score.band().label())?;
        writeln!(f)?;
        writeln!(f, "🧠 答案回顾")?;

        for review in self.reviews {
            let icon = if review.is_correct { "✅" } else { "❌" };
            writeln!(f, "{} {}", icon, review.question.question)?;

            let your_answer = review
                .selected
                .and_then(|i| review.question.option(i))
                .unwrap_or("（未作答）");
            writeln!(f, "   你的答案: {}", your_answer)?;

            if !review.is_correct {
                writeln!(
                    f,
                    "   正确答案: {}",
                    review.question.correct_option().unwrap_or_default()
                )?;
            }
            writeln!(f, "   {}", review.question.explanation)?;
        }

        writeln!(f)?;
        writeln!(f, "r 重新测验  |  b 返回")
    }
}
