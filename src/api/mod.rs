//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **State**: اشتراک state بین handlers
//! - **Middleware**: پردازش قبل/بعد از handler
//! - **Tower**: زیرساخت middleware
//!
//! ## ساختار URL‌ها (همه GET):
//! - `/api/quran/surah/:number` - یک سوره
//! - `/api/quran/surah` - همه‌ی سوره‌ها (همچنین `/api/quran` و `/api/quran/`)
//! - `/api/quran/verse/:surah/:number` - یک آیه
//! - `/api/quran/verses/:surah` - آیات یک سوره
//! - `/api/hadith/:collection/:number` - یک حدیث
//! - `/api/hadith/list` - همه‌ی احادیث (همچنین `/api/hadith` و `/api/hadith/`)
//! - `/api/prayer/times/:location` - اوقات شرعی یک مکان
//! - `/api/prayer/locations` - مکان‌ها (همچنین `/api/prayer` و `/api/prayer/`)
//! - `/api/stats` - آمار دیتاست
//! - `/health` - Health check

mod extractors;
mod handlers;
mod middleware;

pub use extractors::*;
pub use handlers::*;
pub use middleware::*;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, services::AppState, store::Catalog};

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # مفاهیم:
/// - `.merge()`: ترکیب router‌های هر بخش
/// - `.layer()`: اضافه کردن middleware
/// - `.with_state()`: تزریق state
///
/// مسیرهای بدون `/` و با `/` آخر صریحا ثبت شدن؛ axum خودش اینا رو یکی نمیکنه.
///
/// # Arguments
/// * `catalog` - منبع دیتاست (ممکنه هنوز لود نشده باشه)
/// * `config` - تنظیمات برنامه
pub fn create_router(catalog: Catalog, config: Config) -> Router {
    let state = AppState::new(catalog, config);
    let timeout = state.config.request_timeout();

    Router::new()
        .merge(quran_routes())
        .merge(hadith_routes())
        .merge(prayer_routes())
        .route("/api/stats", get(handlers::stats::get_stats))
        .route("/health", get(handlers::health::health_check))
        .layer(
            ServiceBuilder::new()
                // Tracing - لاگ کردن request‌ها
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(axum_middleware::from_fn(middleware::request_timing))
                // Timeout - حداکثر زمان پردازش
                .layer(TimeoutLayer::new(timeout))
                // Compression - فشرده‌سازی response
                .layer(CompressionLayer::new())
                // CORS - API فقط خواندنی و عمومیه
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// Route‌های قرآن
fn quran_routes() -> Router<AppState> {
    Router::new()
        .route("/api/quran", get(handlers::quran::list_surahs))
        .route("/api/quran/", get(handlers::quran::list_surahs))
        .route("/api/quran/surah", get(handlers::quran::list_surahs))
        .route("/api/quran/surah/:number", get(handlers::quran::get_surah))
        .route("/api/quran/verse/:surah/:number", get(handlers::quran::get_verse))
        .route("/api/quran/verses/:surah", get(handlers::quran::list_verses))
}

/// Route‌های حدیث
fn hadith_routes() -> Router<AppState> {
    Router::new()
        .route("/api/hadith", get(handlers::hadith::list_hadiths))
        .route("/api/hadith/", get(handlers::hadith::list_hadiths))
        .route("/api/hadith/list", get(handlers::hadith::list_hadiths))
        .route("/api/hadith/:collection/:number", get(handlers::hadith::get_hadith))
}

/// Route‌های اوقات شرعی
fn prayer_routes() -> Router<AppState> {
    Router::new()
        .route("/api/prayer", get(handlers::prayer::list_locations))
        .route("/api/prayer/", get(handlers::prayer::list_locations))
        .route("/api/prayer/locations", get(handlers::prayer::list_locations))
        .route("/api/prayer/times/:location", get(handlers::prayer::get_prayer_times))
}
