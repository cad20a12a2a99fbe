//! # ماژول سرویس‌ها (Accessor Layer)
//!
//! این ماژول API دسترسی به دیتاست رو پیاده‌سازی میکنه.
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- تبدیل None به NotFound (اینجا!)
//! ├─────────────────┤
//! │ Repository Layer│  <-- Option / Vec مرتب
//! ├─────────────────┤
//! │     Catalog     │  <-- لود یک‌باره + map‌های immutable
//! └─────────────────┘
//! ```
//!
//! هر متد سرویس دقیقا یک متد repository صدا میزنه و repository اول دیتاست رو
//! از `Catalog` میگیره، پس خطای لود همیشه قبل از NotFound دیده میشه.

mod dataset_service;
mod hadith_service;
mod prayer_service;
mod quran_service;

pub use dataset_service::*;
pub use hadith_service::*;
pub use prayer_service::*;
pub use quran_service::*;

use std::sync::Arc;

use crate::{config::Config, store::Catalog};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// # مفاهیم:
/// - `Arc<T>`: Reference counting برای thread-safe sharing
/// - `Clone`: فقط Arc‌ها کلون میشن، نه داده
/// - همه‌ی سرویس‌ها یک `Catalog` مشترک دارن، پس دیتاست فقط یک بار لود میشه
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    pub quran: Arc<QuranService>,
    pub hadith: Arc<HadithService>,
    pub prayer: Arc<PrayerService>,
    pub dataset: Arc<DatasetService>,
}

impl AppState {
    /// ساخت AppState جدید
    ///
    /// # مفاهیم:
    /// - Dependency Injection: catalog از بیرون تزریق میشه
    #[must_use]
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            config: Arc::new(config),
            quran: Arc::new(QuranService::new(catalog.clone())),
            hadith: Arc::new(HadithService::new(catalog.clone())),
            prayer: Arc::new(PrayerService::new(catalog.clone())),
            dataset: Arc::new(DatasetService::new(catalog)),
        }
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Document};
    use crate::store::{tests as fixtures, MemorySource};

    fn state() -> AppState {
        let catalog = Catalog::new(
            MemorySource::new()
                .with(Document::Quran, fixtures::QURAN)
                .with(Document::Hadith, fixtures::HADITH)
                .with(Document::PrayerTimes, fixtures::PRAYER),
        );
        AppState::new(catalog, Config::default())
    }

    #[test]
    fn test_get_surah_returns_matching_number() {
        let state = state();
        for surah in state.quran.list_surahs().unwrap() {
            let found = state.quran.get_surah(surah.number).unwrap();
            assert_eq!(found.number, surah.number);
        }
    }

    #[test]
    fn test_get_surah_not_found() {
        let state = state();
        assert!(matches!(state.quran.get_surah(999_999), Err(AppError::NotFound(_))));
        assert!(matches!(state.quran.get_surah(-1), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_get_verse() {
        let state = state();
        assert_eq!(state.quran.get_verse(1, 2).unwrap().arabic_text, "b");
        assert!(matches!(state.quran.get_verse(1, 9), Err(AppError::NotFound(_))));
        assert!(matches!(state.quran.get_verse(-1, 1), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_list_verses_for_absent_surah_is_empty() {
        let state = state();
        assert!(state.quran.list_verses_by_surah(50).unwrap().is_empty());
        assert!(state.quran.list_verses_by_surah(-5).unwrap().is_empty());
        assert_eq!(state.quran.list_verses_by_surah(1).unwrap().len(), 2);
    }

    #[test]
    fn test_hadith_accessors() {
        let state = state();
        assert_eq!(state.hadith.get_hadith("muslim", 1).unwrap().id, "m1");
        assert!(matches!(
            state.hadith.get_hadith("tirmidhi", 1),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(state.hadith.list_hadiths().unwrap().len(), 3);
    }

    #[test]
    fn test_prayer_accessors() {
        let state = state();
        assert_eq!(state.prayer.get_prayer_times("mecca").unwrap().location, "Mecca");
        assert!(matches!(
            state.prayer.get_prayer_times("Mecca"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(state.prayer.list_locations().unwrap(), vec!["mecca", "new-york"]);
    }

    /// خطای لود قبل از NotFound دیده میشه
    #[test]
    fn test_load_failure_wins_over_not_found() {
        let state = AppState::new(Catalog::new(MemorySource::new()), Config::default());

        assert!(matches!(state.quran.get_surah(-1), Err(AppError::DataUnavailable(_))));
        assert!(matches!(
            state.prayer.get_prayer_times("Not A Slug"),
            Err(AppError::DataUnavailable(_))
        ));
        assert!(!state.dataset.is_available());
        assert!(state.dataset.stats().is_err());
    }
}
