use anyhow::Context;
use std::env;

/// 运行配置：启动时读取一次环境变量，之后通过构造函数注入，不使用全局单例
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        Ok(Self {
            api_key,
            api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: env::var("GODMODE_MODEL")
                .unwrap_or_else(|_| "text-davinci-003".to_string()),
            max_tokens: parse_or("GODMODE_MAX_TOKENS", 100),
            port: parse_or("GODMODE_PORT", 5000),
        })
    }
}

// 非法数值静默回退到默认值
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
