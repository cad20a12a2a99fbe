//! # سرویس حدیث

use tracing::instrument;

use crate::{
    error::{AppError, OptionExt, Result},
    models::{Hadith, HadithKey},
    store::{Catalog, HadithRepository, Repository},
};

#[derive(Debug, Clone)]
pub struct HadithService {
    hadiths: HadithRepository,
}

impl HadithService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            hadiths: HadithRepository::new(catalog),
        }
    }

    /// گرفتن یک حدیث با (مجموعه، شماره)
    ///
    /// نام مجموعه case-sensitive هست، همون‌طور که در سند آمده
    #[instrument(skip(self))]
    pub fn get_hadith(&self, collection: &str, number: i64) -> Result<Hadith> {
        self.hadiths
            .find_by_id(&HadithKey::new(collection, number))?
            .ok_or_not_found(|| AppError::hadith_not_found(collection, number))
    }

    /// همه‌ی احادیث به ترتیب (مجموعه، شماره)
    #[instrument(skip(self))]
    pub fn list_hadiths(&self) -> Result<Vec<Hadith>> {
        self.hadiths.find_all()
    }
}
