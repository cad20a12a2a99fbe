//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## دو لایه خطا
//!
//! - [`LoadError`]: خطای لود دیتاست. این خطا یک بار ساخته میشه و cache میشه،
//!   برای همین باید `Clone` باشه (خطای `serde_json` کلون نمیشه، پس فقط پیامش رو نگه میداریم)
//! - [`AppError`]: خطای سطح درخواست که مستقیم به پاسخ HTTP تبدیل میشه
//!
//! ## نگاشت به HTTP
//!
//! | خطا | کد |
//! |---|---|
//! | `BadRequest` (پارامتر عددی نامعتبر) | 400 |
//! | `NotFound` | 404 |
//! | `DataUnavailable` (لود دیتاست fail شده) | 500 |

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// به جای نوشتن `Result<Surah, AppError>` میتونیم بنویسیم `Result<Surah>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Documents
// =====================================
/// سه سند JSON که دیتاست رو تشکیل میدن
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Document {
    /// سوره‌ها و آیات
    Quran,
    /// لیست احادیث
    Hadith,
    /// جدول اوقات شرعی
    PrayerTimes,
}

impl Document {
    /// همه سندها به ترتیب لود
    pub const ALL: [Document; 3] = [Document::Quran, Document::Hadith, Document::PrayerTimes];

    /// نام فایل سند
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Quran => "quran.json",
            Self::Hadith => "hadith.json",
            Self::PrayerTimes => "prayer_times.json",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// =====================================
// Load Error
// =====================================
/// خطای لود دیتاست
///
/// # مفاهیم:
/// - `Clone`: این خطا در `OnceCell` ذخیره میشه و به همه caller‌ها کپیش داده میشه
/// - `PartialEq`: برای اینکه تست‌ها بتونن مقایسه کنن که همه یک خطا رو دیدن
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// سند پیدا نشد یا خونده نشد
    #[error("failed to read {document}: {reason}")]
    Missing { document: Document, reason: String },

    /// محتوای سند قابل parse نبود
    #[error("failed to parse {document}: {reason}")]
    Malformed { document: Document, reason: String },
}

impl LoadError {
    /// سندی که باعث خطا شده
    #[must_use]
    pub fn document(&self) -> Document {
        match self {
            Self::Missing { document, .. } | Self::Malformed { document, .. } => *document,
        }
    }

    /// ساخت خطای Malformed از خطای serde
    pub fn malformed(document: Document, reason: impl fmt::Display) -> Self {
        Self::Malformed {
            document,
            reason: reason.to_string(),
        }
    }
}

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه با `?`
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// درخواست نامعتبر - 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// پیدا نشد - 404
    #[error("Not found: {0}")]
    NotFound(String),

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// دیتاست در دسترس نیست - 500
    /// این همون خطای cache شده‌ی loader هست
    #[error("Dataset unavailable: {0}")]
    DataUnavailable(#[from] LoadError),

    /// خطای داخلی سرور - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// خطای سرور
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    /// خطای IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            // 5xx Server Errors
            Self::DataUnavailable(_)
            | Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// سوره پیدا نشد
    #[must_use]
    pub fn surah_not_found(number: i64) -> Self {
        Self::NotFound(format!("surah {} not found", number))
    }

    /// آیه پیدا نشد
    #[must_use]
    pub fn verse_not_found(surah: i64, verse: i64) -> Self {
        Self::NotFound(format!("verse {}:{} not found", surah, verse))
    }

    /// حدیث پیدا نشد
    #[must_use]
    pub fn hadith_not_found(collection: &str, number: i64) -> Self {
        Self::NotFound(format!("hadith {}:{} not found", collection, number))
    }

    /// اوقات شرعی برای این مکان پیدا نشد
    #[must_use]
    pub fn prayer_times_not_found(location: &str) -> Self {
        Self::NotFound(format!("prayer times for '{}' not found", location))
    }
}

// =====================================
// Error Response DTO
// =====================================
/// ساختار پاسخ خطا در API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// کد خطا (مثلا "Not Found")
    pub error: String,

    /// پیام خطا
    pub message: String,

    /// کد وضعیت HTTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    /// ساخت پاسخ خطای جدید
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// اضافه کردن کد وضعیت
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status.as_u16());
        self
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// این باعث میشه بتونیم AppError رو مستقیم از handler برگردونیم:
/// ```rust,ignore
/// async fn handler() -> Result<Json<Surah>, AppError> { ... }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // لاگ کردن خطاهای سرور
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        let status = self.status_code();

        let error_response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            self.to_string(),
        )
        .with_status(status);

        (status, Json(error_response)).into_response()
    }
}

// =====================================
// Option Extensions
// =====================================
/// Extension trait برای Option
pub trait OptionExt<T> {
    /// تبدیل None به خطای دلخواه (معمولا NotFound)
    fn ok_or_not_found(self, err: impl FnOnce() -> AppError) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, err: impl FnOnce() -> AppError) -> Result<T> {
        self.ok_or_else(err)
    }
}
