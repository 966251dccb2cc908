//! 文档相关页面：摘要、思考题、分析概览

use std::fmt;

use crate::models::DocumentAnalysis;

/// 摘要页
///
/// `lossy` 为 true 时提示提取结果可能不可靠
pub fn render_summary(analysis: &DocumentAnalysis, file_name: &str, lossy: bool) -> String {
    SummaryPage {
        analysis,
        file_name,
        lossy,
    }
    .to_string()
}

/// 思考题页
pub fn render_questions(analysis: &DocumentAnalysis) -> String {
    QuestionsPage(analysis).to_string()
}

/// 分析概览页（文档统计 + 后续建议）
pub fn render_overview(analysis: &DocumentAnalysis) -> String {
    OverviewPage(analysis).to_string()
}

struct SummaryPage<'a> {
    analysis: &'a DocumentAnalysis,
    file_name: &'a str,
    lossy: bool,
}

impl fmt::Display for SummaryPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;

        writeln!(f, "📄 文档摘要  [{}]", analysis.difficulty)?;
        writeln!(f, "{}", self.file_name)?;
        if self.lossy {
            writeln!(f, "⚠️ 该格式未经真正解析，只有 .txt 能可靠提取文本，结果可能不准确")?;
        }
        writeln!(f, "{}", "─".repeat(60))?;

        writeln!(f, "📖 摘要")?;
        writeln!(f, "{}\n", analysis.summary)?;

        writeln!(f, "🔑 要点")?;
        for point in &analysis.key_points {
            writeln!(f, "  • {}", point)?;
        }

        writeln!(f, "{}", "─".repeat(60))?;
        writeln!(
            f,
            "要点: {}  |  思考题: {}  |  测验: {}",
            analysis.key_points.len(),
            analysis.questions.len(),
            analysis.quiz.len()
        )
    }
}

struct QuestionsPage<'a>(&'a DocumentAnalysis);

impl fmt::Display for QuestionsPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "❓ 思考题")?;
        writeln!(f, "用这些问题加深对内容的理解")?;
        writeln!(f, "{}", "─".repeat(60))?;
        for (i, question) in self.0.questions.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, question)?;
        }
        Ok(())
    }
}

struct OverviewPage<'a>(&'a DocumentAnalysis);

impl fmt::Display for OverviewPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;

        writeln!(f, "🏆 完整分析")?;
        writeln!(f, "{}", "─".repeat(60))?;
        writeln!(f, "文档统计")?;
        writeln!(f, "  识别的要点:   {}", analysis.key_points.len())?;
        writeln!(f, "  生成的思考题: {}", analysis.questions.len())?;
        writeln!(f, "  测验题数量:   {}", analysis.quiz.len())?;
        writeln!(f, "  难度等级:     {}", analysis.difficulty)?;
        writeln!(f)?;
        writeln!(f, "下一步")?;
        writeln!(f, "  • 阅读摘要，了解整体内容")?;
        writeln!(f, "  • 思考提出的问题")?;
        writeln!(f, "  • 通过测验检验掌握程度")?;
        writeln!(f, "  • 复习答错的知识点")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuizQuestion};

    fn analysis() -> DocumentAnalysis {
        DocumentAnalysis {
            summary: "Um resumo.".to_string(),
            key_points: vec!["p1".into(), "p2".into()],
            questions: vec!["Por quê?".into(), "Como?".into()],
            quiz: vec![QuizQuestion {
                question: "Q".into(),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_answer: 0,
                explanation: "E".into(),
            }],
            difficulty: Difficulty::Basic,
        }
    }

    #[test]
    fn test_render_summary() {
        let out = render_summary(&analysis(), "aula.txt", false);
        assert!(out.contains("aula.txt"));
        assert!(out.contains("[基础]"));
        assert!(out.contains("  • p2"));
        assert!(out.contains("要点: 2  |  思考题: 2  |  测验: 1"));
        assert!(!out.contains("⚠️"));

        let lossy = render_summary(&analysis(), "aula.pdf", true);
        assert!(lossy.contains("⚠️"));
    }

    #[test]
    fn test_render_questions_numbered() {
        let out = render_questions(&analysis());
        assert!(out.contains("1. Por quê?"));
        assert!(out.contains("2. Como?"));
    }

    #[test]
    fn test_render_overview() {
        let out = render_overview(&analysis());
        assert!(out.contains("测验题数量:   1"));
        assert!(out.contains("难度等级:     基础"));
    }
}
