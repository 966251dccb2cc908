use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件校验失败（大小 / 类型）
    #[error("文件校验失败: {0}")]
    Validation(#[from] ValidationError),
    /// 提取后的文本为空
    #[error("文件内容为空: {file_name}")]
    EmptyContent { file_name: String },
    /// 文本提取失败
    #[error("文本提取失败: {0}")]
    Extraction(#[from] ExtractionError),
    /// 文档分析失败
    #[error("文档分析失败: {0}")]
    Analysis(#[from] AnalysisError),
    /// 测验状态错误
    #[error("测验错误: {0}")]
    Quiz(#[from] QuizError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件校验错误
#[derive(Debug, Error)]
pub enum ValidationError {
    /// 文件超过大小上限
    #[error("文件过大 ({size} 字节)，上限为 {limit} 字节")]
    FileTooLarge { size: u64, limit: u64 },
    /// 既不是支持的 MIME 类型，也不是支持的扩展名
    #[error("不支持的文件格式: {name} (类型: {mime})")]
    UnsupportedType { name: String, mime: String },
}

/// 文本提取错误
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// 读取文件字节失败
    #[error("读取文件失败 ({name}): {source}")]
    ReadFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
    /// 不是合法的 UTF-8 文本
    #[error("无法将 {name} 解码为 UTF-8 文本: {source}")]
    InvalidUtf8 {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// 文档分析错误
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {message}")]
    RequestFailed { model: String, message: String },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyResponse { model: String },
    /// 返回内容不是合法 JSON
    #[error("LLM返回的内容不是合法 JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
    /// JSON 结构不符合分析结果格式
    #[error("LLM返回的分析结果格式不正确: {reason}")]
    InvalidSchema { reason: String },
}

/// 测验状态机错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// 测验已完成，答案只读
    #[error("测验已完成，无法继续作答")]
    Completed,
    /// 测验尚未完成
    #[error("测验尚未完成，无法重新开始")]
    NotCompleted,
    /// 选项索引超出范围
    #[error("选项 {option} 超出范围 (共 {count} 个选项)")]
    OptionOutOfRange { option: usize, count: usize },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件解析失败
    #[error("配置文件 {path} 解析失败: {source}")]
    FileParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建LLM API调用错误
    pub fn llm_api_failed(model: impl Into<String>, message: impl ToString) -> Self {
        AppError::Analysis(AnalysisError::RequestFailed {
            model: model.into(),
            message: message.to_string(),
        })
    }

    /// 展示给用户的提示信息
    ///
    /// 所有错误都在最近的边界转换为这段文字，会话仍可继续使用
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(ValidationError::FileTooLarge { .. }) => {
                "文件过大，最大支持 10MB。".to_string()
            }
            AppError::Validation(ValidationError::UnsupportedType { .. }) => {
                "不支持的格式，请使用 TXT、PDF、DOC 或 DOCX。".to_string()
            }
            AppError::EmptyContent { .. } => "文件为空，或无法从中提取文本。".to_string(),
            AppError::Extraction(_) => "无法提取文件中的文本，请尝试其他格式。".to_string(),
            AppError::Analysis(_) => "文档分析失败，请重试。".to_string(),
            other => other.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_details() {
        let err = AppError::llm_api_failed("gpt-4o", "connection refused");
        assert_eq!(err.user_message(), "文档分析失败，请重试。");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_quiz_error_passthrough() {
        let err = AppError::from(QuizError::Completed);
        assert_eq!(err.user_message(), "测验错误: 测验已完成，无法继续作答");
    }
}
