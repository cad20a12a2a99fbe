//! # Data Transfer Objects (DTOs)
//!
//! DTO‌هایی که فقط برای پاسخ API استفاده میشن.
//! Entity‌ها (سوره، آیه، ...) بدون wrapper برگردونده میشن.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dataset_loaded: bool,
}

impl HealthResponse {
    /// ساخت پاسخ بر اساس وضعیت دیتاست
    #[must_use]
    pub fn from_dataset(dataset_loaded: bool) -> Self {
        Self {
            status: if dataset_loaded { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            dataset_loaded,
        }
    }
}

// =====================================
// Statistics
// =====================================
/// آمار دیتاست لود شده
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub surahs: usize,
    pub verses: usize,
    pub hadiths: usize,
    pub prayer_locations: usize,
    pub loaded_at: DateTime<Utc>,
}
