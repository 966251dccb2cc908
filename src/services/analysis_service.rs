//! 文档分析服务 - 业务能力层
//!
//! 只负责"文本 → 分析结果"：构建提示词、调用一次 LLM、解析并校验 JSON。
//! 不重试，不缓存。

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::clients::{ChatBackend, ChatRequest};
use crate::error::{AnalysisError, AppResult};
use crate::models::DocumentAnalysis;
use crate::utils::logging::truncate_text;

/// 进入提示词的最大字符数
pub const MAX_CONTENT_CHARS: usize = 8000;

/// 内容被截断时追加的标记
pub const TRUNCATION_MARKER: &str = "...";

pub const TEMPERATURE: f32 = 0.7;

pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// 每道测验题的选项数
pub const OPTIONS_PER_QUESTION: usize = 4;

/// 文档分析服务
pub struct AnalysisService<B> {
    backend: B,
    model_name: String,
}

impl<B: ChatBackend> AnalysisService<B> {
    pub fn new(backend: B, model_name: impl Into<String>) -> Self {
        Self {
            backend,
            model_name: model_name.into(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 分析文档
    ///
    /// 发起一次请求并等待完整响应；内容为空、不是 JSON 或结构不符都返回错误
    pub async fn analyze(&self, content: &str, file_name: &str) -> AppResult<DocumentAnalysis> {
        let request = ChatRequest {
            model: self.model_name.clone(),
            prompt: build_prompt(content, file_name),
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        info!("🤖 正在分析文档: {} ({} 字符)", file_name, content.chars().count());

        let response = self.backend.complete(&request).await?;

        let text = match response {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!("LLM 返回内容为空 (模型: {})", self.model_name);
                return Err(AnalysisError::EmptyResponse {
                    model: self.model_name.clone(),
                }
                .into());
            }
        };

        debug!("LLM 响应: {}", truncate_text(&text, 200));

        let analysis = parse_analysis(&text)?;

        info!(
            "✓ 分析完成: {} 个要点, {} 道思考题, {} 道测验题, 难度: {}",
            analysis.key_points.len(),
            analysis.questions.len(),
            analysis.quiz.len(),
            analysis.difficulty
        );

        Ok(analysis)
    }
}

/// 构建分析提示词
///
/// 内容只保留前 8000 个字符，超出时在内容后追加截断标记
pub fn build_prompt(content: &str, file_name: &str) -> String {
    let truncated = content.chars().count() > MAX_CONTENT_CHARS;
    let body: String = content.chars().take(MAX_CONTENT_CHARS).collect();
    let marker = if truncated { TRUNCATION_MARKER } else { "" };

    format!(
        r#"请分析以下文档，并提供：

1. 摘要（summary）：简洁、信息充分的摘要（不超过 300 词）
2. 要点（keyPoints）：文档的 5-8 个要点
3. 思考题（questions）：5 个关于内容的开放式思考问题
4. 测验（quiz）：5 道单选题，每道题 4 个选项，注明正确答案的索引（从 0 开始）和解析
5. 难度（difficulty）：只能是 Basic、Intermediate 或 Advanced 之一

文档："{file_name}"
内容：
{body} {marker}

只返回一个合法的 JSON 对象，不要返回任何其他内容：
{{
  "summary": "摘要",
  "keyPoints": ["要点 1", "要点 2"],
  "questions": ["问题 1", "问题 2"],
  "quiz": [
    {{
      "question": "题目",
      "options": ["选项 1", "选项 2", "选项 3", "选项 4"],
      "correctAnswer": 0,
      "explanation": "解析"
    }}
  ],
  "difficulty": "Basic|Intermediate|Advanced"
}}"#
    )
}

/// 去掉包裹在外层的 Markdown 代码块
fn strip_code_fence(text: &str) -> &str {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let re = FENCE.get_or_init(|| {
        Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("代码块正则无效")
    });

    re.captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text)
        .trim()
}

/// 解析并校验 LLM 返回的 JSON
pub fn parse_analysis(text: &str) -> Result<DocumentAnalysis, AnalysisError> {
    let json = strip_code_fence(text);

    let analysis: DocumentAnalysis = serde_json::from_str(json).map_err(|source| {
        warn!("无法解析 LLM 返回的 JSON: {}", source);
        AnalysisError::InvalidJson { source }
    })?;

    validate_analysis(&analysis)?;

    Ok(analysis)
}

/// 结构校验
///
/// 测验题数量、选项数量和正确答案索引不合法时拒绝；要点和思考题数量只记录警告
pub fn validate_analysis(analysis: &DocumentAnalysis) -> Result<(), AnalysisError> {
    if analysis.quiz.is_empty() {
        return Err(AnalysisError::InvalidSchema {
            reason: "测验题列表为空".to_string(),
        });
    }

    for (index, question) in analysis.quiz.iter().enumerate() {
        if question.options.len() != OPTIONS_PER_QUESTION {
            return Err(AnalysisError::InvalidSchema {
                reason: format!(
                    "第 {} 道测验题有 {} 个选项，应为 {} 个",
                    index + 1,
                    question.options.len(),
                    OPTIONS_PER_QUESTION
                ),
            });
        }

        if question.correct_answer >= question.options.len() {
            return Err(AnalysisError::InvalidSchema {
                reason: format!(
                    "第 {} 道测验题的正确答案索引 {} 超出范围 [0, {}]",
                    index + 1,
                    question.correct_answer,
                    question.options.len() - 1
                ),
            });
        }
    }

    if !(5..=8).contains(&analysis.key_points.len()) {
        warn!("要点数量为 {}，预期 5-8 个", analysis.key_points.len());
    }
    if analysis.questions.len() != 5 {
        warn!("思考题数量为 {}，预期 5 个", analysis.questions.len());
    }

    Ok(())
}
