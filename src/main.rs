mod cli;

use anyhow::Result;
use clap::Parser;
use doc_quiz::utils::logging;
use doc_quiz::{App, Config, RunOutcome};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // 加载配置
    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path).await?.with_env_overrides(),
        None => Config::from_env(),
    };
    if let Some(model) = cli.model {
        config.llm_model_name = model;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config);

    // 初始化并运行应用
    let app = App::initialize(&config);
    let stdin = std::io::stdin();
    let outcome = app.run(&cli.input, stdin.lock(), std::io::stdout()).await?;

    match outcome {
        RunOutcome::Analyzed => info!("👋 会话结束"),
        RunOutcome::Rejected { message } => info!("👋 会话结束，最后一次上传未成功: {}", message),
    }

    Ok(())
}
