use crate::ax_state::AppState;
use crate::core::completion;
use crate::models::context::{AskRequest, AskResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// POST /ask：把提问转发给上游补全 API，成功返回去除空白的文本
/// 上游任何失败（鉴权/限流/网络/响应解析）统一 502，细节只进日志
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> impl IntoResponse {
    match completion::answer(state.completions.as_ref(), &payload.prompt).await {
        Ok(text) => Json(AskResponse { response: text }).into_response(),
        Err(e) => {
            error!("上游补全调用失败: {:#}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "completion request failed" })),
            )
                .into_response()
        }
    }
}
