//! # Islamic Data API Library
//!
//! یک API فقط‌خواندنی برای سه دیتاست: متن قرآن، احادیث، و اوقات شرعی.
//! سندها به صورت JSON داخل باینری هستن و یک بار در حافظه لود میشن.
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه - اینجا!
//! ├── main.rs         # نقطه ورود باینری
//! ├── config/         # مدیریت تنظیمات
//! ├── error/          # تعریف خطاها
//! ├── store/          # منبع سندها، لود یک‌باره، repository‌ها
//! ├── models/         # مدل‌های داده
//! ├── services/       # API دسترسی (NotFound و غیره)
//! ├── api/            # لایه HTTP
//! └── utils/          # توابع کمکی
//! data/               # سندهای JSON که embed میشن
//! ```
//!
//! ## مثال استفاده
//!
//! ```rust
//! use islamic_api::{config::Config, services::AppState, store::Catalog};
//!
//! let state = AppState::new(Catalog::embedded(), Config::default());
//! let fatiha = state.quran.get_surah(1).unwrap();
//! assert_eq!(fatiha.verse_count, 7);
//! ```

// =====================================
// Module Declarations
// =====================================

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// ماژول دیتاست در حافظه
pub mod store;

/// ماژول مدل‌های داده (Domain Models)
pub mod models;

/// ماژول سرویس‌ها
pub mod services;

/// ماژول API و HTTP Handlers
pub mod api;

/// ماژول توابع کمکی
pub mod utils;

// =====================================
// Re-exports
// =====================================

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// کاربرد:
/// ```rust
/// use islamic_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{AppError, LoadError, Result};
    pub use crate::models::*;
    pub use crate::services::*;
    pub use crate::store::{Catalog, Dataset};
}
