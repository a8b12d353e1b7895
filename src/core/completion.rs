use async_trait::async_trait;

/// 补全能力抽象：HTTP 层只依赖该 trait，便于在测试中注入假实现
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

/// 一进一出：提问原样转发给上游，返回文本去除首尾空白
pub async fn answer(provider: &dyn CompletionProvider, prompt: &str) -> anyhow::Result<String> {
    let text = provider.complete(prompt).await?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeProvider {
        reply: Option<&'static str>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CompletionProvider for FakeProvider {
        async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
            self.seen.lock().unwrap().push(prompt.to_string());
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(anyhow::anyhow!("simulated upstream failure")),
            }
        }
    }

    #[tokio::test]
    async fn forwards_prompt_unmodified_and_trims_reply() {
        let provider = FakeProvider {
            reply: Some("  world \n"),
            seen: Mutex::new(Vec::new()),
        };
        let out = answer(&provider, "Hello").await.unwrap();
        assert_eq!(out, "world");
        assert_eq!(provider.seen.lock().unwrap().as_slice(), ["Hello"]);
    }

    #[tokio::test]
    async fn empty_prompt_is_still_forwarded() {
        let provider = FakeProvider {
            reply: Some("ok"),
            seen: Mutex::new(Vec::new()),
        };
        let out = answer(&provider, "").await.unwrap();
        assert_eq!(out, "ok");
        assert_eq!(provider.seen.lock().unwrap().as_slice(), [""]);
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let provider = FakeProvider {
            reply: None,
            seen: Mutex::new(Vec::new()),
        };
        let err = answer(&provider, "Hello").await.unwrap_err();
        assert!(err.to_string().contains("simulated upstream failure"));
    }
}
