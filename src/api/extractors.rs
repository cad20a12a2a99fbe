//! # Custom Extractors
//!
//! ## مفاهیم Rust + Axum:
//! - **Extractors**: نوع‌هایی که از request داده استخراج میکنن
//! - **FromRequestParts**: trait برای ساخت extractor
//! - **Rejection**: نوع خطا برای extractors
//!
//! `axum::extract::Path` خودش وقتی `"abc"` به `i64` تبدیل نشه یک پاسخ 400
//! متنی برمیگردونه. این wrapper همون رو به `AppError` تبدیل میکنه تا بدنه‌ی
//! خطا همه‌جا یک شکل (JSON) داشته باشه.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

// =====================================
// Path Extractor
// =====================================
/// استخراج پارامترهای مسیر با خطای سازگار با API
///
/// # استفاده در handler:
/// ```rust,ignore
/// async fn handler(ApiPath(SurahPath { number }): ApiPath<SurahPath>) -> ... {
///     // number حتما یک i64 معتبره
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => {
                debug!(uri = %parts.uri, error = %rejection.body_text(), "Rejected path parameters");
                Err(path_rejection_to_error(rejection))
            }
        }
    }
}

/// نگاشت rejection به خطای برنامه
///
/// پارامتری که parse نشه تقصیر کلاینته (400)؛ بقیه یعنی route اشتباه تعریف شده (500)
fn path_rejection_to_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(e) => {
            AppError::BadRequest(format!("invalid path parameter: {}", e.body_text()))
        }
        other => AppError::Internal(other.body_text()),
    }
}
