//! 文档处理器 - 编排层
//!
//! 串联"文件接收 → 文档分析"，任一步失败都不产生部分结果

use tracing::{error, info};

use crate::clients::ChatBackend;
use crate::error::AppResult;
use crate::models::{DocumentAnalysis, FileSource};
use crate::services::{AnalysisService, DocumentKind, IntakeService};
use crate::utils::logging;

/// 处理完成的文档
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    /// 文本是否为有损解码
    pub lossy: bool,
    pub analysis: DocumentAnalysis,
}

/// 文档处理器
pub struct DocumentProcessor<B> {
    intake: IntakeService,
    analysis: AnalysisService<B>,
}

impl<B: ChatBackend> DocumentProcessor<B> {
    pub fn new(intake: IntakeService, analysis: AnalysisService<B>) -> Self {
        Self { intake, analysis }
    }

    /// 处理单个文件
    pub async fn process<F: FileSource>(&self, file: &F) -> AppResult<ProcessedDocument> {
        info!("📁 正在处理文件: {}", file.name());

        let extracted = self.intake.intake(file).await.map_err(|e| {
            error!("❌ 文件接收失败 ({}): {}", file.name(), e);
            e
        })?;

        logging::log_file_accepted(file.name(), extracted.text.chars().count(), extracted.lossy);

        let analysis = self
            .analysis
            .analyze(&extracted.text, file.name())
            .await
            .map_err(|e| {
                error!("❌ 文档分析失败 ({}): {}", file.name(), e);
                e
            })?;

        Ok(ProcessedDocument {
            file_name: file.name().to_string(),
            kind: extracted.kind,
            lossy: extracted.lossy,
            analysis,
        })
    }
}
