//! # Stats Handler

use axum::{extract::State, Json};

use crate::{error::Result, models::DatasetStats, services::AppState};

/// آمار دیتاست
///
/// # Endpoint
/// `GET /api/stats`
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DatasetStats>> {
    Ok(Json(state.dataset.stats()?))
}
