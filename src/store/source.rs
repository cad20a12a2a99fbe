//! # منبع سندها (Dataset Source)
//!
//! این فایل مشخص میکنه سه سند JSON از کجا خونده بشن.
//!
//! ## مفاهیم Rust:
//! - **Traits**: تعریف interface مشترک برای منابع مختلف
//! - **`Cow<'static, str>`**: داده‌ی embed شده قرض گرفته میشه (بدون کپی)،
//!   داده‌ی خونده شده از دیسک مالکیت داره
//! - **`include_str!`**: قرار دادن فایل در باینری موقع کامپایل
//! - **`Send + Sync`**: منبع بین thread‌ها share میشه
//!
//! ## پیاده‌سازی‌ها
//! - [`EmbeddedSource`]: پیش‌فرض؛ سندها داخل باینری هستن
//! - [`DirectorySource`]: خوندن از یک پوشه روی دیسک (`DATA_DIR`)
//! - [`MemorySource`]: سندها از قبل در حافظه هستن (تست‌ها و استفاده به عنوان کتابخانه)

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Document, LoadError};

// =====================================
// Source Trait
// =====================================
/// منبعی که سندهای دیتاست رو فراهم میکنه
///
/// loader برای هر سند دقیقا یک بار `read` رو صدا میزنه.
pub trait DatasetSource: Send + Sync + fmt::Debug {
    /// خوندن محتوای خام یک سند
    ///
    /// # Errors
    /// [`LoadError::Missing`] اگه سند وجود نداشته باشه یا خونده نشه
    fn read(&self, document: Document) -> Result<Cow<'static, str>, LoadError>;

    /// توضیح کوتاه برای لاگ‌ها
    fn describe(&self) -> String;
}

// =====================================
// Embedded Source
// =====================================
/// سندهایی که موقع کامپایل داخل باینری قرار گرفتن
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

const EMBEDDED_QURAN: &str = include_str!("../../data/quran.json");
const EMBEDDED_HADITH: &str = include_str!("../../data/hadith.json");
const EMBEDDED_PRAYER_TIMES: &str = include_str!("../../data/prayer_times.json");

impl DatasetSource for EmbeddedSource {
    fn read(&self, document: Document) -> Result<Cow<'static, str>, LoadError> {
        let contents = match document {
            Document::Quran => EMBEDDED_QURAN,
            Document::Hadith => EMBEDDED_HADITH,
            Document::PrayerTimes => EMBEDDED_PRAYER_TIMES,
        };
        Ok(Cow::Borrowed(contents))
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

// =====================================
// Directory Source
// =====================================
/// خوندن سندها از یک پوشه
///
/// نام فایل‌ها ثابته: `quran.json`, `hadith.json`, `prayer_times.json`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DatasetSource for DirectorySource {
    fn read(&self, document: Document) -> Result<Cow<'static, str>, LoadError> {
        let path = self.root.join(document.file_name());
        debug!(path = %path.display(), "Reading dataset document");

        fs::read_to_string(&path)
            .map(Cow::Owned)
            .map_err(|e| LoadError::Missing {
                document,
                reason: format!("{}: {}", path.display(), e),
            })
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

// =====================================
// Memory Source
// =====================================
/// سندهایی که از قبل در حافظه هستن
///
/// # مثال
/// ```rust
/// use islamic_api::error::Document;
/// use islamic_api::store::MemorySource;
///
/// let source = MemorySource::new()
///     .with(Document::Quran, r#"{"surahs": [], "verses": []}"#)
///     .with(Document::Hadith, "[]")
///     .with(Document::PrayerTimes, "{}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<Document, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// اضافه کردن (یا جایگزین کردن) یک سند
    #[must_use]
    pub fn with(mut self, document: Document, contents: impl Into<String>) -> Self {
        self.documents.insert(document, contents.into());
        self
    }
}

impl DatasetSource for MemorySource {
    fn read(&self, document: Document) -> Result<Cow<'static, str>, LoadError> {
        self.documents
            .get(&document)
            .map(|contents| Cow::Owned(contents.clone()))
            .ok_or_else(|| LoadError::Missing {
                document,
                reason: "document not provided".to_string(),
            })
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// همه‌ی سندهای embed شده JSON معتبر هستن
    #[test]
    fn test_embedded_documents_are_json() {
        for document in Document::ALL {
            let contents = EmbeddedSource.read(document).unwrap();
            assert!(
                serde_json::from_str::<serde_json::Value>(&contents).is_ok(),
                "{} is not valid JSON",
                document
            );
        }
    }

    #[test]
    fn test_directory_source_missing_file() {
        let source = DirectorySource::new("/definitely/not/a/real/islamic-api/dir");
        let err = source.read(Document::Hadith).unwrap_err();

        assert_eq!(err.document(), Document::Hadith);
        assert!(matches!(err, LoadError::Missing { .. }));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with(Document::Hadith, "[]");

        assert_eq!(source.read(Document::Hadith).unwrap(), "[]");
        assert!(source.read(Document::Quran).is_err());
        assert_eq!(source.describe(), "memory (1 documents)");
    }
}
