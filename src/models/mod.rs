//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده
//! - **Derive Macros**: تولید خودکار کد
//! - **Serialize/Deserialize**: تبدیل JSON
//! - **`#[serde(rename_all = "camelCase")]`**: نام فیلدها در JSON به سبک camelCase
//! - **Composite Keys**: کلیدهای ترکیبی با `Ord` برای ترتیب قطعی
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: داده‌ای که از سندهای JSON خونده میشه (`Surah`, `Verse`, ...)
//! - **Key**: شناسه‌ی یکتای هر entity در map‌های داخلی
//! - **DTO**: برای ارسال به API (`HealthResponse`, `DatasetStats`)
//!
//! همه‌ی entity‌ها بعد از لود immutable هستن؛ هیچ‌جا `&mut` بهشون داده نمیشه.

mod quran;
mod hadith;
mod prayer;
mod dto;

// Re-export همه مدل‌ها
pub use quran::*;
pub use hadith::*;
pub use prayer::*;
pub use dto::*;
