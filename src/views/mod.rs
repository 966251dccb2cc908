//! 展示层
//!
//! 所有渲染函数都是当前状态的纯函数，只返回字符串，不做任何输出

pub mod document;
pub mod quiz;

pub use document::{render_overview, render_questions, render_summary};
pub use quiz::{render_quiz, render_results};

/// 结果页签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Summary,
    Questions,
    Quiz,
    Results,
}

impl Tab {
    /// 从用户输入解析页签
    pub fn from_command(command: &str) -> Option<Self> {
        match command.trim().to_lowercase().as_str() {
            "s" | "summary" | "摘要" => Some(Tab::Summary),
            "q" | "questions" | "思考题" => Some(Tab::Questions),
            "z" | "quiz" | "测验" => Some(Tab::Quiz),
            "r" | "results" | "结果" => Some(Tab::Results),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Summary => "摘要",
            Tab::Questions => "思考题",
            Tab::Quiz => "测验",
            Tab::Results => "结果",
        }
    }
}

/// 页签菜单
pub fn render_menu() -> String {
    format!(
        "{}\ns {}  |  q {}  |  z {}  |  r {}  |  u <路径> 上传新文件  |  x 退出",
        "=".repeat(60),
        Tab::Summary.title(),
        Tab::Questions.title(),
        Tab::Quiz.title(),
        Tab::Results.title()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_command() {
        assert_eq!(Tab::from_command(" S \n"), Some(Tab::Summary));
        assert_eq!(Tab::from_command("quiz"), Some(Tab::Quiz));
        assert_eq!(Tab::from_command("结果"), Some(Tab::Results));
        assert_eq!(Tab::from_command("x"), None);
        assert_eq!(Tab::from_command("u notes.txt"), None);
    }

    #[test]
    fn test_menu_lists_upload() {
        let menu = render_menu();
        assert!(menu.contains("z 测验"));
        assert!(menu.contains("u <路径> 上传新文件"));
    }
}
