use clap::Parser;
use std::path::PathBuf;

/// 上传文档，生成摘要、思考题和互动测验
#[derive(Parser, Debug)]
#[command(name = "doc_quiz", version, about)]
pub struct Cli {
    /// 要分析的文档（TXT、PDF、DOC、DOCX，最大 10MB）
    pub input: PathBuf,

    /// TOML 配置文件，环境变量会覆盖其中的值
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 覆盖配置中的模型名称
    #[arg(short, long)]
    pub model: Option<String>,

    /// 显示详细日志
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
