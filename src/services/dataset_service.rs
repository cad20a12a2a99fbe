//! # سرویس وضعیت دیتاست
//!
//! برای `/health` و `/api/stats`

use tracing::instrument;

use crate::{error::Result, models::DatasetStats, store::Catalog};

#[derive(Debug, Clone)]
pub struct DatasetService {
    catalog: Catalog,
}

impl DatasetService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// آیا دیتاست قابل استفاده‌ست؟
    ///
    /// اگه هنوز لود نشده، همین‌جا لود میشه
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.catalog.ensure_loaded().is_ok()
    }

    /// آمار دیتاست
    #[instrument(skip(self))]
    pub fn stats(&self) -> Result<DatasetStats> {
        Ok(self.catalog.dataset()?.stats())
    }
}
