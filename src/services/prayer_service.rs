//! # سرویس اوقات شرعی

use tracing::instrument;

use crate::{
    error::{AppError, OptionExt, Result},
    models::PrayerTime,
    store::{Catalog, PrayerTimeRepository, Repository},
};

#[derive(Debug, Clone)]
pub struct PrayerService {
    prayer_times: PrayerTimeRepository,
}

impl PrayerService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            prayer_times: PrayerTimeRepository::new(catalog),
        }
    }

    /// اوقات شرعی یک مکان
    ///
    /// کلید با تطابق دقیق پیدا میشه (`New-York` با `new-york` یکی نیست)
    #[instrument(skip(self))]
    pub fn get_prayer_times(&self, location: &str) -> Result<PrayerTime> {
        self.prayer_times
            .find_by_id(location)?
            .ok_or_not_found(|| AppError::prayer_times_not_found(location))
    }

    /// slug همه‌ی مکان‌ها به ترتیب الفبایی
    #[instrument(skip(self))]
    pub fn list_locations(&self) -> Result<Vec<String>> {
        self.prayer_times.locations()
    }
}
