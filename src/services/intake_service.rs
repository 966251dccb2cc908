//! 文件接收服务 - 业务能力层
//!
//! 只负责"校验 + 提取文本"，不关心后续分析
//!
//! PDF / Word 不做真正的解析，只把原始字节按 UTF-8 有损解码。
//! 只有 `.txt` 能可靠提取，其余格式会标记为有损并提示用户。

use phf::phf_set;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult, ExtractionError, ValidationError};
use crate::models::FileSource;

/// 文件大小上限：10MB
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

static SUPPORTED_MIME_TYPES: phf::Set<&'static str> = phf_set! {
    "text/plain",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
};

const SUPPORTED_EXTENSIONS: [&str; 4] = [".txt", ".pdf", ".doc", ".docx"];

/// 文档类型（决定提取方式）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Word,
    Other,
}

impl DocumentKind {
    /// 是否能可靠提取文本
    pub fn is_reliable(self) -> bool {
        matches!(self, DocumentKind::PlainText)
    }
}

/// 提取得到的文本
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub kind: DocumentKind,
    /// 是否为有损解码（二进制格式）
    pub lossy: bool,
}

/// 文件接收服务
///
/// 职责：
/// - 校验文件大小和类型
/// - 将字节解码为文本
#[derive(Debug, Clone)]
pub struct IntakeService {
    max_file_size: u64,
}

impl IntakeService {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// 校验并提取文本
    pub async fn intake<F: FileSource>(&self, file: &F) -> AppResult<ExtractedText> {
        let kind = self.validate(file)?;
        self.extract(file, kind).await
    }

    /// 校验文件大小和类型，不读取文件内容
    pub fn validate<F: FileSource>(&self, file: &F) -> AppResult<DocumentKind> {
        if file.size() > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size: file.size(),
                limit: self.max_file_size,
            }
            .into());
        }

        if !is_supported(file.mime_type(), file.name()) {
            return Err(ValidationError::UnsupportedType {
                name: file.name().to_string(),
                mime: file.mime_type().to_string(),
            }
            .into());
        }

        Ok(detect_kind(file.mime_type(), file.name()))
    }

    /// 读取字节并解码为文本
    pub async fn extract<F: FileSource>(&self, file: &F, kind: DocumentKind) -> AppResult<ExtractedText> {
        let bytes = file
            .read_bytes()
            .await
            .map_err(|source| ExtractionError::ReadFailed {
                name: file.name().to_string(),
                source,
            })?;

        debug!("读取 {} 完成: {} 字节, 类型: {:?}", file.name(), bytes.len(), kind);

        let (text, lossy) = match kind {
            DocumentKind::Pdf | DocumentKind::Word => {
                warn!(
                    "{} 为二进制格式，仅按原始字节解码，提取结果可能不完整",
                    file.name()
                );
                (String::from_utf8_lossy(&bytes).into_owned(), true)
            }
            DocumentKind::PlainText | DocumentKind::Other => {
                let text = String::from_utf8(bytes).map_err(|source| ExtractionError::InvalidUtf8 {
                    name: file.name().to_string(),
                    source,
                })?;
                (text, false)
            }
        };

        if text.trim().is_empty() {
            return Err(AppError::EmptyContent {
                file_name: file.name().to_string(),
            });
        }

        Ok(ExtractedText { text, kind, lossy })
    }
}

impl Default for IntakeService {
    fn default() -> Self {
        Self::new()
    }
}

/// MIME 类型或扩展名任一匹配即支持
fn is_supported(mime_type: &str, file_name: &str) -> bool {
    let name = file_name.to_lowercase();
    SUPPORTED_MIME_TYPES.contains(mime_type)
        || SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// 根据 MIME 类型和扩展名判断文档类型
pub fn detect_kind(mime_type: &str, file_name: &str) -> DocumentKind {
    let name = file_name.to_lowercase();

    if mime_type == "text/plain" || name.ends_with(".txt") {
        DocumentKind::PlainText
    } else if mime_type == "application/pdf" || name.ends_with(".pdf") {
        DocumentKind::Pdf
    } else if mime_type.contains("word") || name.ends_with(".docx") || name.ends_with(".doc") {
        DocumentKind::Word
    } else {
        DocumentKind::Other
    }
}
