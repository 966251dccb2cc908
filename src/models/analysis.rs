use serde::{Deserialize, Serialize};

/// 文档分析结果
///
/// 每次上传生成一次，之后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    /// 摘要（提示词要求不超过 300 词）
    pub summary: String,
    /// 要点，通常 5-8 条
    pub key_points: Vec<String>,
    /// 开放式思考题，通常 5 道
    pub questions: Vec<String>,
    /// 单选测验题
    pub quiz: Vec<QuizQuestion>,
    pub difficulty: Difficulty,
}

/// 单选测验题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    /// 固定 4 个选项
    pub options: Vec<String>,
    /// 正确选项在 `options` 中的索引
    pub correct_answer: usize,
    /// 作答后展示的解析
    pub explanation: String,
}

impl QuizQuestion {
    /// 选项索引对应的文本
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.option(self.correct_answer)
    }
}

/// 文档难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "basic", alias = "Básico", alias = "基础")]
    Basic,
    #[serde(alias = "intermediate", alias = "Intermediário", alias = "中级")]
    Intermediate,
    #[serde(alias = "advanced", alias = "Avançado", alias = "高级")]
    Advanced,
}

impl Difficulty {
    /// 获取显示名称
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Basic => "基础",
            Difficulty::Intermediate => "中级",
            Difficulty::Advanced => "高级",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "summary": "s",
            "keyPoints": ["a", "b"],
            "questions": ["q"],
            "quiz": [{
                "question": "1+1?",
                "options": ["1", "2", "3", "4"],
                "correctAnswer": 1,
                "explanation": "e"
            }],
            "difficulty": "Intermediate"
        }"#;

        let analysis: DocumentAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.key_points, vec!["a", "b"]);
        assert_eq!(analysis.quiz[0].correct_answer, 1);
        assert_eq!(analysis.quiz[0].correct_option(), Some("2"));
        assert_eq!(analysis.difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn test_difficulty_aliases() {
        let parse = |s: &str| serde_json::from_str::<Difficulty>(&format!("\"{}\"", s)).unwrap();
        assert_eq!(parse("Básico"), Difficulty::Basic);
        assert_eq!(parse("Intermediário"), Difficulty::Intermediate);
        assert_eq!(parse("Avançado"), Difficulty::Advanced);
        assert_eq!(parse("advanced"), Difficulty::Advanced);
        assert!(serde_json::from_str::<Difficulty>("\"Expert\"").is_err());
    }
}
