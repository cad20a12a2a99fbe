//! # سرویس قرآن
//!
//! GetSurah, GetVerse, ListSurahs, ListVersesBySurah

use tracing::{debug, instrument};

use crate::{
    error::{AppError, OptionExt, Result},
    models::{Surah, Verse, VerseKey},
    store::{Catalog, Repository, SurahRepository, VerseRepository},
};

/// سرویس دسترسی به سوره‌ها و آیات
#[derive(Debug, Clone)]
pub struct QuranService {
    surahs: SurahRepository,
    verses: VerseRepository,
}

impl QuranService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            surahs: SurahRepository::new(catalog.clone()),
            verses: VerseRepository::new(catalog),
        }
    }

    /// گرفتن یک سوره
    ///
    /// # Errors
    /// - `NotFound`: سوره‌ای با این شماره نیست
    /// - `DataUnavailable`: دیتاست لود نشده
    #[instrument(skip(self))]
    pub fn get_surah(&self, number: i64) -> Result<Surah> {
        self.surahs
            .find_by_id(&number)?
            .ok_or_not_found(|| AppError::surah_not_found(number))
    }

    /// گرفتن یک آیه
    #[instrument(skip(self))]
    pub fn get_verse(&self, surah: i64, verse: i64) -> Result<Verse> {
        self.verses
            .find_by_id(&VerseKey::new(surah, verse))?
            .ok_or_not_found(|| AppError::verse_not_found(surah, verse))
    }

    /// همه‌ی سوره‌ها به ترتیب صعودی
    #[instrument(skip(self))]
    pub fn list_surahs(&self) -> Result<Vec<Surah>> {
        self.surahs.find_all()
    }

    /// آیات یک سوره
    ///
    /// سوره‌ی ناموجود خطا نیست؛ لیست خالی برمیگرده
    #[instrument(skip(self))]
    pub fn list_verses_by_surah(&self, surah: i64) -> Result<Vec<Verse>> {
        let verses = self.verses.find_by_surah(surah)?;

        debug!(count = verses.len(), "Listed verses");
        Ok(verses)
    }
}
