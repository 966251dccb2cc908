use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult, ConfigError};

/// 程序配置
///
/// 加载顺序：默认值 → TOML 配置文件（可选）→ 环境变量
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        toml::from_str(&content).map_err(|e| {
            AppError::Config(ConfigError::FileParseFailed {
                path: path.display().to_string(),
                source: e,
            })
        })
    }

    /// 用环境变量覆盖已有配置
    pub fn with_env_overrides(self) -> Self {
        let llm_api_key = pick_api_key(
            std::env::var("LLM_API_KEY").ok(),
            std::env::var("OPENAI_API_KEY").ok(),
            self.llm_api_key,
        );

        Self {
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            llm_api_key,
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
        }
    }

    /// 是否配置了 API 密钥
    pub fn has_api_key(&self) -> bool {
        !self.llm_api_key.trim().is_empty()
    }
}

/// 依次取第一个非空的密钥，都为空时保留原值
fn pick_api_key(primary: Option<String>, fallback: Option<String>, current: String) -> String {
    primary
        .into_iter()
        .chain(fallback)
        .find(|key| !key.trim().is_empty())
        .unwrap_or(current)
}
