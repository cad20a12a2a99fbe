//! # Prayer Times Handlers

use axum::{extract::State, Json};

use crate::{
    api::extractors::ApiPath,
    error::Result,
    models::PrayerTime,
    services::AppState,
};

/// اوقات شرعی یک مکان
///
/// # Endpoint
/// `GET /api/prayer/times/:location`
pub async fn get_prayer_times(
    State(state): State<AppState>,
    ApiPath(location): ApiPath<String>,
) -> Result<Json<PrayerTime>> {
    Ok(Json(state.prayer.get_prayer_times(&location)?))
}

/// slug مکان‌های موجود به ترتیب الفبایی
///
/// # Endpoint
/// `GET /api/prayer/locations`، `GET /api/prayer`، `GET /api/prayer/`
pub async fn list_locations(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.prayer.list_locations()?))
}
