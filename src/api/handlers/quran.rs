//! # Quran Handlers

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    api::extractors::ApiPath,
    error::Result,
    models::{Surah, Verse},
    services::AppState,
};

/// پارامتر `/surah/:number`
#[derive(Debug, Deserialize)]
pub struct SurahPath {
    pub number: i64,
}

/// پارامترهای `/verse/:surah/:number`
#[derive(Debug, Deserialize)]
pub struct VersePath {
    pub surah: i64,
    pub number: i64,
}

/// پارامتر `/verses/:surah`
#[derive(Debug, Deserialize)]
pub struct SurahVersesPath {
    pub surah: i64,
}

// =====================================
// Get Surah
// =====================================
/// اطلاعات یک سوره
///
/// # Endpoint
/// `GET /api/quran/surah/:number`
///
/// # Response
/// ```json
/// {
///   "number": 1,
///   "name": "الفاتحة",
///   "englishName": "Al-Fatiha",
///   "numberOfVerses": 7,
///   "revelationType": "Meccan"
/// }
/// ```
pub async fn get_surah(
    State(state): State<AppState>,
    ApiPath(SurahPath { number }): ApiPath<SurahPath>,
) -> Result<Json<Surah>> {
    Ok(Json(state.quran.get_surah(number)?))
}

// =====================================
// List Surahs
// =====================================
/// همه‌ی سوره‌ها به ترتیب شماره
///
/// # Endpoint
/// `GET /api/quran/surah`، `GET /api/quran`، `GET /api/quran/`
pub async fn list_surahs(State(state): State<AppState>) -> Result<Json<Vec<Surah>>> {
    Ok(Json(state.quran.list_surahs()?))
}

// =====================================
// Get Verse
// =====================================
/// یک آیه
///
/// # Endpoint
/// `GET /api/quran/verse/:surah/:number`
pub async fn get_verse(
    State(state): State<AppState>,
    ApiPath(VersePath { surah, number }): ApiPath<VersePath>,
) -> Result<Json<Verse>> {
    Ok(Json(state.quran.get_verse(surah, number)?))
}

// =====================================
// List Verses
// =====================================
/// آیات یک سوره؛ برای سوره‌ی ناموجود `[]`
///
/// # Endpoint
/// `GET /api/quran/verses/:surah`
pub async fn list_verses(
    State(state): State<AppState>,
    ApiPath(SurahVersesPath { surah }): ApiPath<SurahVersesPath>,
) -> Result<Json<Vec<Verse>>> {
    Ok(Json(state.quran.list_verses_by_surah(surah)?))
}
