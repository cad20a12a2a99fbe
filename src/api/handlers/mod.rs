//! # HTTP Handlers
//!
//! handler‌ها فقط پارامترها رو استخراج میکنن و سرویس رو صدا میزنن.
//! تبدیل خطا به status code کار `AppError::into_response` هست.

pub mod quran;
pub mod hadith;
pub mod prayer;
pub mod health;
pub mod stats;
