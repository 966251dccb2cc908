//! # Doc Quiz
//!
//! 上传文档，调用 LLM 生成摘要、思考题和单选测验，并在终端中交互作答
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 外部 LLM 服务，`ChatBackend` 是唯一的出站接口
//!
//! ### ② 业务能力层（Services）
//! - `IntakeService` - 文件校验 + 文本提取
//! - `AnalysisService` - 构建提示词、调用 LLM、解析并校验 JSON
//!
//! ### ③ 流程层（Workflow）
//! - `QuizSession` - 测验状态机，每次转换返回新快照
//! - `QuizScore` - 评分与分档
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/document_processor` - intake → analysis
//! - `orchestrator/app` - 页签循环与测验交互
//!
//! `views/` 只根据状态渲染字符串，不持有状态。

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod views;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ChatBackend, ChatRequest, LlmClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, DocumentAnalysis, QuizQuestion};
pub use orchestrator::{App, DocumentProcessor, ProcessedDocument, RunOutcome};
pub use services::{AnalysisService, IntakeService};
pub use workflow::{QuizScore, QuizSession, ScoreBand};
