//! # Hadith Handlers

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    api::extractors::ApiPath,
    error::Result,
    models::Hadith,
    services::AppState,
};

/// پارامترهای `/:collection/:number`
#[derive(Debug, Deserialize)]
pub struct HadithPath {
    pub collection: String,
    pub number: i64,
}

/// یک حدیث
///
/// # Endpoint
/// `GET /api/hadith/:collection/:number`
pub async fn get_hadith(
    State(state): State<AppState>,
    ApiPath(HadithPath { collection, number }): ApiPath<HadithPath>,
) -> Result<Json<Hadith>> {
    Ok(Json(state.hadith.get_hadith(&collection, number)?))
}

/// همه‌ی احادیث به ترتیب (مجموعه، شماره)
///
/// # Endpoint
/// `GET /api/hadith/list`، `GET /api/hadith`، `GET /api/hadith/`
pub async fn list_hadiths(State(state): State<AppState>) -> Result<Json<Vec<Hadith>>> {
    Ok(Json(state.hadith.list_hadiths()?))
}
