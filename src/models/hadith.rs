//! # مدل حدیث

use std::fmt;

use serde::{Deserialize, Serialize};

// =====================================
// Hadith Entity
// =====================================
/// یک حدیث از یک مجموعه (مثلا bukhari)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hadith {
    pub id: String,

    /// نام مجموعه، مثلا "bukhari" یا "muslim"
    pub collection: String,

    pub book_number: i64,
    pub hadith_number: i64,
    pub arabic_text: String,
    pub english_text: String,

    /// درجه صحت (Sahih, Hasan, ...)
    pub grade: String,
    pub reference: String,
}

impl Hadith {
    /// کلید ترکیبی این حدیث
    #[must_use]
    pub fn key(&self) -> HadithKey {
        HadithKey::new(self.collection.clone(), self.hadith_number)
    }
}

// =====================================
// Hadith Key
// =====================================
/// کلید ترکیبی (مجموعه، شماره حدیث)
///
/// ترتیب فیلدها مهمه: `derive(Ord)` اول بر اساس نام مجموعه (الفبایی)
/// و بعد بر اساس شماره مرتب میکنه.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HadithKey {
    pub collection: String,
    pub number: i64,
}

impl HadithKey {
    #[must_use]
    pub fn new(collection: impl Into<String>, number: i64) -> Self {
        Self {
            collection: collection.into(),
            number,
        }
    }
}

impl fmt::Display for HadithKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.collection, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hadith_key_orders_by_collection_then_number() {
        let mut keys = vec![
            HadithKey::new("muslim", 1),
            HadithKey::new("bukhari", 10),
            HadithKey::new("bukhari", 2),
        ];
        keys.sort();

        assert_eq!(
            keys,
            vec![
                HadithKey::new("bukhari", 2),
                HadithKey::new("bukhari", 10),
                HadithKey::new("muslim", 1),
            ]
        );
    }

    #[test]
    fn test_hadith_deserialize() {
        let hadith: Hadith = serde_json::from_str(
            r#"{"id":"bukhari-1","collection":"bukhari","bookNumber":1,"hadithNumber":1,
                "arabicText":"","englishText":"","grade":"Sahih","reference":"Sahih al-Bukhari 1"}"#,
        )
        .unwrap();

        assert_eq!(hadith.key(), HadithKey::new("bukhari", 1));
        assert_eq!(hadith.key().to_string(), "bukhari:1");
    }

    #[test]
    fn test_hadith_negative_book_number() {
        let hadith: Hadith = serde_json::from_str(
            r#"{"id":"x","collection":"bukhari","bookNumber":-1,"hadithNumber":-7,
                "arabicText":"","englishText":"","grade":"","reference":""}"#,
        )
        .unwrap();

        assert_eq!(hadith.book_number, -1);
        assert_eq!(hadith.key(), HadithKey::new("bukhari", -7));
    }
}
