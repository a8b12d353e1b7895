use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub prompt: String, // 用户提问内容，缺省视为空串
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: String,
}
