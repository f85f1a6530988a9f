use axum::{http::StatusCode, response::IntoResponse};

pub static INDEX_TAG: &str = "index";

pub const BANNER: &str = "Dice API up and running";

#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Service is running", body = String)
    ),
)]
pub async fn index() -> impl IntoResponse {
    (StatusCode::OK, BANNER)
}
