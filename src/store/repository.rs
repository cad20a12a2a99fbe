//! # Repository Pattern
//!
//! دسترسی تایپ‌شده به map‌های دیتاست.
//!
//! ## Repository Pattern چیه؟
//! یه لایه انتزاعی بین منطق برنامه و محل ذخیره‌ی داده.
//! سرویس‌ها نمیدونن داده از فایل اومده یا embed شده یا از حافظه.
//!
//! ## مفاهیم Rust:
//! - **Associated Types**: `type Entity` و `type Id`
//! - **`?Sized`**: اجازه میده `Id = str` باشه (کلید prayer times)
//! - هر متد دقیقا یک بار `catalog.dataset()` رو صدا میزنه؛ اگه لود fail شده باشه
//!   خطای cache شده با `?` بالا میره، قبل از اینکه به کلید نگاه بشه
//!
//! repository‌ها `Option` برمیگردونن؛ تبدیل به `NotFound` کار سرویس‌هاست.
//! لیست کامل فقط برای entity‌هایی هست که API لیستشون رو میده.

use crate::{
    error::Result,
    models::{Hadith, HadithKey, PrayerTime, Surah, Verse, VerseKey},
};

use super::Catalog;

// =====================================
// Base Repository Trait
// =====================================
/// Trait پایه برای همه Repository‌ها
pub trait Repository: Send + Sync {
    /// نوع Entity که این repository باهاش کار میکنه
    type Entity: Send + Sync;

    /// نوع شناسه
    type Id: Send + Sync + ?Sized;

    /// پیدا کردن با شناسه
    fn find_by_id(&self, id: &Self::Id) -> Result<Option<Self::Entity>>;
}

// =====================================
// Surah Repository
// =====================================
#[derive(Debug, Clone)]
pub struct SurahRepository {
    catalog: Catalog,
}

impl SurahRepository {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// همه‌ی سوره‌ها به ترتیب شماره
    pub fn find_all(&self) -> Result<Vec<Surah>> {
        Ok(self.catalog.dataset()?.surahs().cloned().collect())
    }
}

impl Repository for SurahRepository {
    type Entity = Surah;
    type Id = i64;

    fn find_by_id(&self, number: &i64) -> Result<Option<Surah>> {
        Ok(self.catalog.dataset()?.surah(*number).cloned())
    }
}

// =====================================
// Verse Repository
// =====================================
#[derive(Debug, Clone)]
pub struct VerseRepository {
    catalog: Catalog,
}

impl VerseRepository {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// آیات یک سوره به ترتیب شماره آیه (سوره‌ی ناموجود = لیست خالی)
    pub fn find_by_surah(&self, surah: i64) -> Result<Vec<Verse>> {
        Ok(self.catalog.dataset()?.verses_of(surah).cloned().collect())
    }
}

impl Repository for VerseRepository {
    type Entity = Verse;
    type Id = VerseKey;

    fn find_by_id(&self, key: &VerseKey) -> Result<Option<Verse>> {
        Ok(self.catalog.dataset()?.verse(*key).cloned())
    }
}

// =====================================
// Hadith Repository
// =====================================
#[derive(Debug, Clone)]
pub struct HadithRepository {
    catalog: Catalog,
}

impl HadithRepository {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// همه‌ی احادیث به ترتیب (مجموعه، شماره)
    pub fn find_all(&self) -> Result<Vec<Hadith>> {
        Ok(self.catalog.dataset()?.hadiths().cloned().collect())
    }
}

impl Repository for HadithRepository {
    type Entity = Hadith;
    type Id = HadithKey;

    fn find_by_id(&self, key: &HadithKey) -> Result<Option<Hadith>> {
        Ok(self.catalog.dataset()?.hadith(key).cloned())
    }
}

// =====================================
// Prayer Time Repository
// =====================================
#[derive(Debug, Clone)]
pub struct PrayerTimeRepository {
    catalog: Catalog,
}

impl PrayerTimeRepository {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// slug همه‌ی مکان‌ها به ترتیب الفبایی
    pub fn locations(&self) -> Result<Vec<String>> {
        Ok(self
            .catalog
            .dataset()?
            .prayer_locations()
            .map(ToString::to_string)
            .collect())
    }
}

impl Repository for PrayerTimeRepository {
    type Entity = PrayerTime;
    type Id = str;

    fn find_by_id(&self, slug: &str) -> Result<Option<PrayerTime>> {
        Ok(self.catalog.dataset()?.prayer_time(slug).cloned())
    }
}
