//! LLM API 客户端
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use std::future::Future;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// 单次对话补全请求
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    /// 唯一的一条用户消息
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// 对话补全后端
///
/// 返回第一个候选的消息内容；没有候选或内容缺失时返回 `None`
pub trait ChatBackend {
    fn complete(&self, request: &ChatRequest) -> impl Future<Output = AppResult<Option<String>>> + Send;
}

/// LLM 客户端
///
/// 由配置显式构造，不使用全局单例
pub struct LlmClient {
    client: Client<OpenAIConfig>,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

impl ChatBackend for LlmClient {
    async fn complete(&self, request: &ChatRequest) -> AppResult<Option<String>> {
        debug!("调用 LLM API，模型: {}", request.model);
        debug!("用户消息长度: {} 字符", request.prompt.chars().count());

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(request.prompt.as_str())
            .build()
            .map_err(|e| AppError::llm_api_failed(&request.model, e))?;

        let api_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(|e| AppError::llm_api_failed(&request.model, e))?;

        let response = self.client.chat().create(api_request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AppError::llm_api_failed(&request.model, e)
        })?;

        debug!("LLM API 调用成功");

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_api_key() {
        let config = Config::default();
        assert!(!config.has_api_key());
        let _client = LlmClient::new(&config);
    }
}
