use axum::response::Html;

/// GET /：返回内嵌的静态页面，任何查询参数都不影响内容
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../web/index.html"))
}
