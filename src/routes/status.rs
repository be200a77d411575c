use crate::routes::constants::STATUS_RUNNING;
use axum::Json;

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const fn running() -> Self {
        Self {
            status: STATUS_RUNNING,
        }
    }
}

/// Status endpoint
///
/// Always answers 200 OK with `{"status": "Railway is running ✅"}`.
/// Nothing from the request is inspected.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::running())
}
