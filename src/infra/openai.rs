use crate::core::completion::CompletionProvider;
use crate::infra::config::Settings;
use crate::models::wire::{CompletionRequest, CompletionResponse};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    completions_url: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("构建 HTTP 客户端失败")?;
        Ok(Self {
            http,
            api_key: settings.api_key.clone(),
            completions_url: format!("{}/completions", settings.api_base.trim_end_matches('/')),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let body = CompletionRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("无法连接上游补全 API")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!(match status.as_u16() {
                401 => format!("上游鉴权失败 (401): {}", detail),
                429 => format!("上游限流 (429): {}", detail),
                _ => format!("上游返回错误状态 {}: {}", status, detail),
            });
        }

        let parsed: CompletionResponse =
            response.json().await.context("上游响应不是合法 JSON")?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .context("上游响应缺少 choices")?;
        Ok(choice.text)
    }
}
