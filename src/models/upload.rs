//! 上传文件句柄
//!
//! 校验只需要名称、大小和类型；字节内容按需读取

use std::future::Future;
use std::path::PathBuf;

use phf::phf_map;

/// 扩展名 → MIME 类型
static EXTENSION_MIME_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "txt" => "text/plain",
    "pdf" => "application/pdf",
    "doc" => "application/msword",
    "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
};

/// 无法识别时使用的 MIME 类型
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// 根据文件名猜测 MIME 类型
pub fn guess_mime_type(file_name: &str) -> &'static str {
    file_name
        .rsplit_once('.')
        .and_then(|(_, ext)| EXTENSION_MIME_TYPES.get(ext.to_lowercase().as_str()).copied())
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// 上传文件句柄
pub trait FileSource {
    /// 文件名（含扩展名）
    fn name(&self) -> &str;

    /// 声明的文件大小（字节）
    fn size(&self) -> u64;

    /// MIME 类型，可能为空
    fn mime_type(&self) -> &str;

    /// 读取全部字节
    fn read_bytes(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send;
}

/// 磁盘上的文件
#[derive(Debug, Clone)]
pub struct DiskFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileSource for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    async fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

/// 内存中的文件，例如拖放或粘贴得到的内容
#[derive(Debug, Clone)]
pub struct InMemoryFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// 根据文件名推断 MIME 类型
    pub fn guessed(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let mime_type = guess_mime_type(&name).to_string();
        Self::new(name, mime_type, bytes)
    }
}

impl FileSource for InMemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    async fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("notes.txt"), "text/plain");
        assert_eq!(guess_mime_type("Report.PDF"), "application/pdf");
        assert_eq!(
            guess_mime_type("thesis.final.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(guess_mime_type("archive.zip"), FALLBACK_MIME_TYPE);
        assert_eq!(guess_mime_type("README"), FALLBACK_MIME_TYPE);
        assert_eq!(guess_mime_type("notes.md"), FALLBACK_MIME_TYPE);
    }

    #[tokio::test]
    async fn test_in_memory_file() {
        let file = InMemoryFile::guessed("a.txt", "hello");
        assert_eq!(file.size(), 5);
        assert_eq!(file.mime_type(), "text/plain");
        assert_eq!(file.read_bytes().await.unwrap(), b"hello");
    }
}
