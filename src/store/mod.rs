//! # لایه داده (In-Memory Store)
//!
//! این ماژول سه سند JSON رو یک بار parse میکنه و به چهار map تبدیل میکنه:
//!
//! ```text
//! surah number        -> Surah
//! (surah, verse)      -> Verse
//! (collection, number)-> Hadith
//! location slug       -> PrayerTime
//! ```
//!
//! ## مفاهیم Rust:
//! - **`BTreeMap`**: map مرتب؛ پیمایشش همیشه بر اساس کلید صعودیه،
//!   پس لیست‌ها بدون sort جداگانه ترتیب قطعی دارن
//! - **`once_cell::sync::OnceCell`**: مقداردهی دقیقا یک‌باره، حتی اگه چند thread
//!   همزمان صداش کنن. بقیه‌ی thread‌ها منتظر میمونن تا اولی تموم کنه
//! - **`Arc<T>`**: اشتراک دیتاست immutable بین همه‌ی درخواست‌ها
//!
//! ## الگوهای طراحی:
//! - Dependency Injection: `Catalog` در `main` ساخته میشه و به router داده میشه،
//!   هیچ state سراسری (global) وجود نداره
//! - Repository Pattern: دسترسی تایپ‌شده روی map‌ها (فایل `repository.rs`)

mod repository;
mod source;

pub use repository::*;
pub use source::*;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    error::{Document, LoadError},
    models::{DatasetStats, Hadith, HadithKey, PrayerTime, Surah, Verse, VerseKey},
    utils,
};

// =====================================
// Document Layouts
// =====================================
/// شکل سند `quran.json`
#[derive(Debug, Deserialize)]
struct QuranDocument {
    #[serde(default)]
    surahs: Vec<Surah>,
    #[serde(default)]
    verses: Vec<Verse>,
}

// =====================================
// Dataset
// =====================================
/// دیتاست کامل لود شده
///
/// بعد از ساخت هیچ متد `&mut self` نداره؛ تا آخر عمر process همین‌طور میمونه.
#[derive(Debug)]
pub struct Dataset {
    surahs: BTreeMap<i64, Surah>,
    verses: BTreeMap<VerseKey, Verse>,
    hadiths: BTreeMap<HadithKey, Hadith>,
    prayer_times: BTreeMap<String, PrayerTime>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// خوندن و parse کردن هر سه سند از یک منبع
    ///
    /// # Errors
    /// اولین سندی که پیدا نشه یا parse نشه، کل لود رو fail میکنه
    pub fn load(source: &dyn DatasetSource) -> Result<Self, LoadError> {
        let quran = source.read(Document::Quran)?;
        let hadith = source.read(Document::Hadith)?;
        let prayer_times = source.read(Document::PrayerTimes)?;

        Self::from_documents(&quran, &hadith, &prayer_times)
    }

    /// ساخت دیتاست از محتوای خام سه سند
    ///
    /// # Errors
    /// [`LoadError::Malformed`] اگه یکی از سندها JSON معتبر با شکل درست نباشه
    pub fn from_documents(
        quran: &str,
        hadith: &str,
        prayer_times: &str,
    ) -> Result<Self, LoadError> {
        let quran: QuranDocument = serde_json::from_str(quran)
            .map_err(|e| LoadError::malformed(Document::Quran, e))?;

        let hadiths: Vec<Hadith> = serde_json::from_str(hadith)
            .map_err(|e| LoadError::malformed(Document::Hadith, e))?;

        let prayer_times: BTreeMap<String, PrayerTime> = serde_json::from_str(prayer_times)
            .map_err(|e| LoadError::malformed(Document::PrayerTimes, e))?;

        // کلید غیر-slug رد نمیشه؛ فقط با تطابق دقیق پیدا میشه
        for location in prayer_times.keys().filter(|k| !utils::is_valid_slug(k)) {
            warn!(document = %Document::PrayerTimes, %location, "Location key is not a lowercase slug");
        }

        Ok(Self {
            surahs: index(Document::Quran, quran.surahs, |s| s.number),
            verses: index(Document::Quran, quran.verses, Verse::key),
            hadiths: index(Document::Hadith, hadiths, Hadith::key),
            prayer_times,
            loaded_at: Utc::now(),
        })
    }

    // ----------------------------------------
    // Quran
    // ----------------------------------------

    #[must_use]
    pub fn surah(&self, number: i64) -> Option<&Surah> {
        self.surahs.get(&number)
    }

    /// همه‌ی سوره‌ها به ترتیب صعودی شماره
    pub fn surahs(&self) -> impl Iterator<Item = &Surah> {
        self.surahs.values()
    }

    #[must_use]
    pub fn verse(&self, key: VerseKey) -> Option<&Verse> {
        self.verses.get(&key)
    }

    /// آیات یک سوره به ترتیب شماره آیه
    ///
    /// چون کلید اول بر اساس سوره مرتبه، آیات هر سوره یک بازه‌ی پیوسته هستن
    pub fn verses_of(&self, surah: i64) -> impl Iterator<Item = &Verse> {
        let range: RangeInclusive<VerseKey> = VerseKey::first_of(surah)..=VerseKey::last_of(surah);
        self.verses.range(range).map(|(_, verse)| verse)
    }

    // ----------------------------------------
    // Hadith
    // ----------------------------------------

    #[must_use]
    pub fn hadith(&self, key: &HadithKey) -> Option<&Hadith> {
        self.hadiths.get(key)
    }

    /// همه‌ی احادیث به ترتیب (مجموعه، شماره)
    pub fn hadiths(&self) -> impl Iterator<Item = &Hadith> {
        self.hadiths.values()
    }

    // ----------------------------------------
    // Prayer Times
    // ----------------------------------------

    #[must_use]
    pub fn prayer_time(&self, slug: &str) -> Option<&PrayerTime> {
        self.prayer_times.get(slug)
    }

    /// slug همه‌ی مکان‌ها به ترتیب الفبایی
    pub fn prayer_locations(&self) -> impl Iterator<Item = &str> {
        self.prayer_times.keys().map(String::as_str)
    }

    // ----------------------------------------
    // Stats
    // ----------------------------------------

    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            surahs: self.surahs.len(),
            verses: self.verses.len(),
            hadiths: self.hadiths.len(),
            prayer_locations: self.prayer_times.len(),
            loaded_at: self.loaded_at,
        }
    }
}

/// ساخت map از لیست entity‌ها
///
/// کلید تکراری: ورودی بعدی جایگزین قبلی میشه و یک هشدار لاگ میشه
fn index<K, V>(document: Document, items: Vec<V>, key: impl Fn(&V) -> K) -> BTreeMap<K, V>
where
    K: Ord + fmt::Display,
{
    let mut map = BTreeMap::new();
    for item in items {
        let k = key(&item);
        if map.contains_key(&k) {
            warn!(%document, key = %k, "Duplicate key in dataset, keeping the later entry");
        }
        map.insert(k, item);
    }
    map
}

// =====================================
// Catalog
// =====================================
/// منبع داده + نگهبان لود یک‌باره
///
/// # مفاهیم:
/// - `#[derive(Clone)]`: فقط `Arc` کلون میشه، نه داده
/// - نتیجه‌ی لود (موفق یا خطا) در `OnceCell` cache میشه و دیگه تکرار نمیشه
///
/// # مثال
/// ```rust
/// use islamic_api::store::Catalog;
///
/// let catalog = Catalog::embedded();
/// let dataset = catalog.dataset().unwrap();
/// assert!(dataset.surah(1).is_some());
/// ```
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    source: Box<dyn DatasetSource>,
    cell: OnceCell<Result<Arc<Dataset>, LoadError>>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("source", &self.inner.source)
            .field("loaded", &self.inner.cell.get().is_some())
            .finish()
    }
}

impl Catalog {
    /// ساخت catalog روی یک منبع دلخواه (هنوز چیزی لود نمیشه)
    #[must_use]
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            inner: Arc::new(CatalogInner {
                source: Box::new(source),
                cell: OnceCell::new(),
            }),
        }
    }

    /// catalog روی سندهای embed شده
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// انتخاب منبع بر اساس تنظیمات
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        match &config.data_dir {
            Some(dir) => Self::new(DirectorySource::new(dir)),
            None => Self::embedded(),
        }
    }

    /// گرفتن دیتاست؛ اولین صدا زدن لود رو انجام میده
    ///
    /// # Errors
    /// خطای cache شده‌ی لود. همه‌ی caller‌ها همون خطا رو میگیرن.
    pub fn dataset(&self) -> Result<Arc<Dataset>, LoadError> {
        self.inner
            .cell
            .get_or_init(|| self.load())
            .clone()
    }

    /// مطمئن شو لود انجام شده (بدون نیاز به خود دیتاست)
    ///
    /// # Errors
    /// خطای cache شده‌ی لود
    pub fn ensure_loaded(&self) -> Result<(), LoadError> {
        self.dataset().map(|_| ())
    }

    /// آیا لود انجام شده و موفق بوده؟
    ///
    /// این متد خودش لود رو شروع نمیکنه
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.inner.cell.get(), Some(Ok(_)))
    }

    /// توضیح منبع برای لاگ
    #[must_use]
    pub fn source_description(&self) -> String {
        self.inner.source.describe()
    }

    fn load(&self) -> Result<Arc<Dataset>, LoadError> {
        let source = self.inner.source.describe();
        let started = Instant::now();

        match Dataset::load(self.inner.source.as_ref()) {
            Ok(dataset) => {
                let stats = dataset.stats();
                info!(
                    %source,
                    surahs = stats.surahs,
                    verses = stats.verses,
                    hadiths = stats.hadiths,
                    prayer_locations = stats.prayer_locations,
                    elapsed_ms = %started.elapsed().as_millis(),
                    "Dataset loaded"
                );
                Ok(Arc::new(dataset))
            }
            Err(e) => {
                error!(%source, error = %e, "Dataset failed to load");
                Err(e)
            }
        }
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) const QURAN: &str = r#"{
        "surahs": [
            {"number": 2, "name": "البقرة", "englishName": "Al-Baqara", "numberOfVerses": 286, "revelationType": "Medinan"},
            {"number": 1, "name": "الفاتحة", "englishName": "Al-Fatiha", "numberOfVerses": 7, "revelationType": "Meccan"},
            {"number": 114, "name": "الناس", "englishName": "An-Nas", "numberOfVerses": 6, "revelationType": "Meccan"}
        ],
        "verses": [
            {"surahNumber": 1, "verseNumber": 2, "arabicText": "b", "englishText": "b", "translation": "t"},
            {"surahNumber": 2, "verseNumber": 1, "arabicText": "c", "englishText": "c", "translation": "t"},
            {"surahNumber": 1, "verseNumber": 1, "arabicText": "a", "englishText": "a", "translation": "t", "audioUrl": "https://example.com/1_1.mp3"}
        ]
    }"#;

    pub(crate) const HADITH: &str = r#"[
        {"id": "m1", "collection": "muslim", "bookNumber": 1, "hadithNumber": 1, "arabicText": "", "englishText": "", "grade": "Sahih", "reference": "Muslim 1"},
        {"id": "b10", "collection": "bukhari", "bookNumber": 1, "hadithNumber": 10, "arabicText": "", "englishText": "", "grade": "Sahih", "reference": "Bukhari 10"},
        {"id": "b2", "collection": "bukhari", "bookNumber": 1, "hadithNumber": 2, "arabicText": "", "englishText": "", "grade": "Sahih", "reference": "Bukhari 2"}
    ]"#;

    pub(crate) const PRAYER: &str = r#"{
        "new-york": {"date": "2024-01-01", "fajr": "06:03", "sunrise": "07:20", "dhuhr": "12:04", "asr": "14:30", "maghrib": "16:49", "isha": "18:06", "location": "New York"},
        "mecca": {"date": "2024-01-01", "fajr": "05:35", "sunrise": "06:56", "dhuhr": "12:24", "asr": "15:28", "maghrib": "17:51", "isha": "19:21", "location": "Mecca"}
    }"#;

    pub(crate) fn sample() -> Dataset {
        Dataset::from_documents(QURAN, HADITH, PRAYER).unwrap()
    }

    #[test]
    fn test_surahs_are_ascending() {
        let numbers: Vec<i64> = sample().surahs().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 114]);
    }

    #[test]
    fn test_verses_of_surah_are_ascending_and_scoped() {
        let dataset = sample();

        let keys: Vec<String> = dataset.verses_of(1).map(|v| v.key().to_string()).collect();
        assert_eq!(keys, vec!["1:1", "1:2"]);

        assert_eq!(dataset.verses_of(114).count(), 0);
        assert_eq!(dataset.verses_of(i64::MAX).count(), 0);
        assert_eq!(dataset.verses_of(-1).count(), 0);
    }

    #[test]
    fn test_hadiths_ordered_by_collection_then_number() {
        let keys: Vec<String> = sample().hadiths().map(|h| h.key().to_string()).collect();
        assert_eq!(keys, vec!["bukhari:2", "bukhari:10", "muslim:1"]);
    }

    #[test]
    fn test_prayer_locations_sorted() {
        let dataset = sample();
        let slugs: Vec<&str> = dataset.prayer_locations().collect();
        assert_eq!(slugs, vec!["mecca", "new-york"]);
        assert_eq!(dataset.prayer_time("mecca").unwrap().location, "Mecca");
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(
            (stats.surahs, stats.verses, stats.hadiths, stats.prayer_locations),
            (3, 3, 3, 2)
        );
    }

    /// کلید تکراری: آخری برنده‌ست
    #[test]
    fn test_duplicate_keys_keep_later_entry() {
        let quran = r#"{"surahs": [
            {"number": 1, "name": "old", "englishName": "Old", "numberOfVerses": 1, "revelationType": "Meccan"},
            {"number": 1, "name": "new", "englishName": "New", "numberOfVerses": 7, "revelationType": "Meccan"}
        ]}"#;
        let dataset = Dataset::from_documents(quran, "[]", "{}").unwrap();

        assert_eq!(dataset.surahs().count(), 1);
        assert_eq!(dataset.surah(1).unwrap().name, "new");
        assert_eq!(dataset.stats().verses, 0);
    }

    #[test]
    fn test_malformed_documents() {
        let err = Dataset::from_documents("{not json", HADITH, PRAYER).unwrap_err();
        assert_eq!(err.document(), Document::Quran);

        let err = Dataset::from_documents(QURAN, r#"{"hadiths": []}"#, PRAYER).unwrap_err();
        assert_eq!(err.document(), Document::Hadith);

        let err = Dataset::from_documents(QURAN, HADITH, "[]").unwrap_err();
        assert_eq!(err.document(), Document::PrayerTimes);
    }

    /// کلید غیر-slug دیتاست رو خراب نمیکنه و با همون شکل پیدا میشه
    #[test]
    fn test_non_slug_location_key_loads() {
        let prayer = r#"{
            "new_york": {"date": "", "fajr": "06:03", "sunrise": "", "dhuhr": "", "asr": "", "maghrib": "", "isha": "", "location": "New York"},
            "mecca": {"date": "", "fajr": "05:35", "sunrise": "", "dhuhr": "", "asr": "", "maghrib": "", "isha": "", "location": "Mecca"}
        }"#;
        let dataset = Dataset::from_documents(QURAN, HADITH, prayer).unwrap();

        assert_eq!(dataset.prayer_time("new_york").unwrap().fajr, "06:03");
        assert!(dataset.prayer_time("new-york").is_none());
        assert_eq!(dataset.prayer_locations().collect::<Vec<_>>(), vec!["mecca", "new_york"]);
    }

    /// عدد منفی یا خیلی بزرگ در سندها مجازه
    #[test]
    fn test_negative_and_wide_numbers_load() {
        let quran = r#"{
            "surahs": [{"number": -1, "name": "", "englishName": "", "numberOfVerses": 0, "revelationType": ""}],
            "verses": [{"surahNumber": -1, "verseNumber": 5000000000, "arabicText": "", "englishText": "", "translation": ""}]
        }"#;
        let hadith = r#"[
            {"id": "neg", "collection": "bukhari", "bookNumber": -1, "hadithNumber": -3, "arabicText": "", "englishText": "", "grade": "", "reference": ""}
        ]"#;
        let dataset = Dataset::from_documents(quran, hadith, PRAYER).unwrap();

        assert_eq!(dataset.surah(-1).unwrap().number, -1);
        assert_eq!(dataset.verses_of(-1).count(), 1);
        assert!(dataset.verse(VerseKey::new(-1, 5_000_000_000)).is_some());
        assert_eq!(
            dataset.hadith(&HadithKey::new("bukhari", -3)).unwrap().book_number,
            -1
        );
    }

    #[test]
    fn test_catalog_caches_error() {
        let catalog = Catalog::new(MemorySource::new().with(Document::Quran, QURAN));

        let first = catalog.dataset().unwrap_err();
        let second = catalog.dataset().unwrap_err();

        assert_eq!(first, second);
        assert_eq!(first.document(), Document::Hadith);
        assert!(!catalog.is_loaded());
    }

    #[test]
    fn test_catalog_returns_same_dataset() {
        let catalog = Catalog::new(
            MemorySource::new()
                .with(Document::Quran, QURAN)
                .with(Document::Hadith, HADITH)
                .with(Document::PrayerTimes, PRAYER),
        );
        assert!(!catalog.is_loaded());

        let a = catalog.dataset().unwrap();
        let b = catalog.clone().dataset().unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(catalog.is_loaded());
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let catalog = Catalog::embedded();
        assert!(catalog.ensure_loaded().is_ok());
        assert_eq!(catalog.source_description(), "embedded");
    }
}
