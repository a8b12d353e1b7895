mod api;
mod core;
mod infra;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::api::ask::ask;
use crate::api::page::index;
use crate::core::completion::CompletionProvider;
use crate::infra::config::Settings;
use crate::infra::openai::OpenAiClient;

pub mod ax_state {
    use super::*;
    pub struct AppState {
        pub completions: Arc<dyn CompletionProvider>,
    }
}

pub fn app(state: Arc<ax_state::AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("godmode=info,tower_http=info")),
        )
        .init();

    // 配置在启动时加载一次，之后只读
    let settings = Settings::from_env()?;
    let client = OpenAiClient::new(&settings)?;
    let state = Arc::new(ax_state::AppState {
        completions: Arc::new(client),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    println!("🚀 Godmode 运行在 http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
