use std::path::Path;

use tokio::fs;

use crate::error::{AppError, AppResult, FileError};
use crate::models::upload::{guess_mime_type, DiskFile};

/// 从磁盘路径构造上传文件句柄
///
/// 只读取元数据（名称、大小），文件内容在提取文本时才读取
pub async fn load_disk_file(path: &Path) -> AppResult<DiskFile> {
    if !path.exists() {
        return Err(AppError::File(FileError::NotFound {
            path: path.display().to_string(),
        }));
    }

    let metadata = fs::metadata(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    tracing::debug!("已加载文件句柄: {} ({} 字节)", name, metadata.len());

    Ok(DiskFile {
        path: path.to_path_buf(),
        mime_type: guess_mime_type(&name).to_string(),
        size: metadata.len(),
        name,
    })
}
