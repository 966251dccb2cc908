//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责把各项能力串成完整流程，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `document_processor` - 文档处理器
//! - 文件接收（校验 + 提取文本）
//! - 调用一次 LLM 得到分析结果
//! - 失败时不产生部分结果
//!
//! ### `app` - 交互式应用
//! - 加载磁盘文件，委托 document_processor 处理
//! - 页签循环（摘要 / 思考题 / 测验 / 结果）
//! - 测验会话的创建与丢弃
//! - 把错误转换为用户提示，会话不中断
//! - 失败后或菜单中 `u <路径>` 重新上传，在同一个会话内重新处理
//!
//! ## 层次关系
//!
//! ```text
//! app (页签循环)
//!     ↓
//! document_processor (intake → analysis)
//!     ↓
//! services (能力层：intake / analysis)     workflow (测验会话 / 评分)
//!     ↓
//! clients (LLM 后端)
//! ```

pub mod app;
pub mod document_processor;

pub use app::{App, InteractionEnd, RunOutcome};
pub use document_processor::{DocumentProcessor, ProcessedDocument};
