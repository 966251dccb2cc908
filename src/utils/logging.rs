/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数。日志写到 stderr，界面输出写到 stdout。
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则根据 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 文档分析启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🤖 模型: {} ({})", config.llm_model_name, config.llm_api_base_url);
    if !config.has_api_key() {
        warn!("⚠️ 未设置 LLM_API_KEY / OPENAI_API_KEY");
    }
    info!("{}", "=".repeat(60));
}

/// 记录文件接收结果
///
/// # 参数
/// - `file_name`: 文件名
/// - `chars`: 提取的字符数
/// - `lossy`: 是否有损解码
pub fn log_file_accepted(file_name: &str, chars: usize, lossy: bool) {
    info!("✓ 已接收文件: {} ({} 字符)", file_name, chars);
    if lossy {
        warn!("⚠️ {} 未经真正解析，提取的文本可能是乱码", file_name);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
