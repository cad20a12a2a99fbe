//! # Health Check Handler
//!
//! برای بررسی سلامت سرویس

use axum::{extract::State, Json};

use crate::{models::HealthResponse, services::AppState};

// =====================================
// Health Check
// =====================================
/// بررسی سلامت سرویس
///
/// همیشه 200 برمیگردونه؛ اگه دیتاست لود نشده باشه `status` میشه `degraded`.
/// اگه `EAGER_LOAD` خاموش باشه، اولین health check لود رو انجام میده.
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "dataset_loaded": true
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_dataset(state.dataset.is_available()))
}
