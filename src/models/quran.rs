//! # مدل‌های قرآن
//!
//! سوره (Surah) و آیه (Verse)

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =====================================
// Surah Entity
// =====================================
/// یک سوره از قرآن
///
/// # مفاهیم:
/// - `#[serde(rename = "...")]`: نام فیلد در JSON با نام فیلد Rust فرق داره
/// - `alias`: موقع خوندن، نام جایگزین هم قبول میشه
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    /// شماره سوره (کلید یکتا)
    pub number: i64,

    /// نام عربی
    pub name: String,

    /// نام انگلیسی
    pub english_name: String,

    /// تعداد آیات
    #[serde(rename = "numberOfVerses", alias = "verseCount")]
    pub verse_count: i64,

    /// مکی یا مدنی
    pub revelation_type: String,
}

// =====================================
// Verse Entity
// =====================================
/// یک آیه
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub surah_number: i64,
    pub verse_number: i64,
    pub arabic_text: String,
    pub english_text: String,
    pub translation: String,

    /// آدرس فایل صوتی (اختیاری)
    /// اگه نباشه یا خالی باشه، در خروجی JSON هم نمیاد
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub audio_url: Option<String>,
}

/// رشته‌ی خالی همون نبودن مقداره
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Verse {
    /// کلید ترکیبی این آیه
    #[must_use]
    pub fn key(&self) -> VerseKey {
        VerseKey::new(self.surah_number, self.verse_number)
    }
}

// =====================================
// Verse Key
// =====================================
/// کلید ترکیبی (سوره، آیه)
///
/// # مفاهیم:
/// - `derive(Ord)`: مقایسه به ترتیب فیلدها، یعنی اول سوره بعد آیه
/// - این ترتیب باعث میشه `BTreeMap<VerseKey, _>` آیات هر سوره رو پشت سر هم نگه داره
///   و بشه با `range` همه‌ی آیات یه سوره رو گرفت
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseKey {
    pub surah: i64,
    pub verse: i64,
}

impl VerseKey {
    #[must_use]
    pub const fn new(surah: i64, verse: i64) -> Self {
        Self { surah, verse }
    }

    /// اولین کلید ممکن برای یک سوره
    #[must_use]
    pub const fn first_of(surah: i64) -> Self {
        Self::new(surah, i64::MIN)
    }

    /// آخرین کلید ممکن برای یک سوره
    #[must_use]
    pub const fn last_of(surah: i64) -> Self {
        Self::new(surah, i64::MAX)
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surah_json_field_names() {
        let surah: Surah = serde_json::from_str(
            r#"{"number":1,"name":"الفاتحة","englishName":"Al-Fatiha","numberOfVerses":7,"revelationType":"Meccan"}"#,
        )
        .unwrap();

        assert_eq!(surah.verse_count, 7);

        let json = serde_json::to_value(&surah).unwrap();
        assert_eq!(json["englishName"], "Al-Fatiha");
        assert_eq!(json["numberOfVerses"], 7);
    }

    /// نام `verseCount` هم موقع خوندن قبول میشه
    #[test]
    fn test_surah_accepts_verse_count_alias() {
        let surah: Surah = serde_json::from_str(
            r#"{"number":112,"name":"الإخلاص","englishName":"Al-Ikhlas","verseCount":4,"revelationType":"Meccan"}"#,
        )
        .unwrap();

        assert_eq!(surah.verse_count, 4);
    }

    #[test]
    fn test_verse_audio_url_is_omitted_when_absent() {
        let verse: Verse = serde_json::from_str(
            r#"{"surahNumber":1,"verseNumber":1,"arabicText":"a","englishText":"b","translation":"Sahih International"}"#,
        )
        .unwrap();

        assert_eq!(verse.audio_url, None);
        let json = serde_json::to_value(&verse).unwrap();
        assert!(json.get("audioUrl").is_none());
    }

    /// `"audioUrl": ""` مثل نبودنش رفتار میکنه
    #[test]
    fn test_verse_empty_audio_url_is_omitted() {
        let verse: Verse = serde_json::from_str(
            r#"{"surahNumber":1,"verseNumber":2,"arabicText":"a","englishText":"b","translation":"t","audioUrl":""}"#,
        )
        .unwrap();

        assert_eq!(verse.audio_url, None);
        let json = serde_json::to_value(&verse).unwrap();
        assert!(json.get("audioUrl").is_none());
    }

    #[test]
    fn test_verse_accepts_negative_numbers() {
        let verse: Verse = serde_json::from_str(
            r#"{"surahNumber":-1,"verseNumber":5000000000,"arabicText":"","englishText":"","translation":""}"#,
        )
        .unwrap();

        assert_eq!(verse.key(), VerseKey::new(-1, 5_000_000_000));
    }

    #[test]
    fn test_verse_key_ordering() {
        let mut keys = vec![
            VerseKey::new(2, 1),
            VerseKey::new(1, 7),
            VerseKey::new(1, 2),
        ];
        keys.sort();

        assert_eq!(
            keys,
            vec![VerseKey::new(1, 2), VerseKey::new(1, 7), VerseKey::new(2, 1)]
        );
        assert!(VerseKey::first_of(2) < VerseKey::new(2, 1));
        assert!(VerseKey::last_of(1) < VerseKey::first_of(2));
        assert!(VerseKey::last_of(-1) < VerseKey::first_of(0));
    }

    #[test]
    fn test_verse_key_display() {
        assert_eq!(VerseKey::new(2, 255).to_string(), "2:255");
    }
}
