//! # مدل اوقات شرعی

use serde::{Deserialize, Serialize};

/// اوقات شرعی یک روز برای یک مکان
///
/// زمان‌ها به صورت رشته (مثلا `"05:12"`) نگه داشته میشن، همون‌طور که در سند هستن.
/// کلید این entity، slug مکان هست که در سند JSON به عنوان کلید object میاد.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTime {
    pub date: String,
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,

    /// نام نمایشی مکان (مثلا "New York")
    pub location: String,
}
