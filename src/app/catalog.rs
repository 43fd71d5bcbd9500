//! Shared, reloadable snapshot of the source tables.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, Datasets};
use crate::ports::TableSource;

/// Holds the current tables. Readers take an `Arc` snapshot; a reload swaps
/// in a new snapshot without touching the ones already handed out.
#[derive(Debug)]
pub struct DatasetCatalog {
    current: RwLock<Arc<Datasets>>,
}

impl DatasetCatalog {
    pub fn new(datasets: Datasets) -> Self {
        Self { current: RwLock::new(Arc::new(datasets)) }
    }

    pub fn load<S: TableSource>(ctx: &AppContext<S>) -> Result<Self, AppError> {
        Ok(Self::new(ctx.load_datasets()?))
    }

    pub fn snapshot(&self) -> Arc<Datasets> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Load all tables again and make them current.
    ///
    /// On failure the previous snapshot stays current.
    pub fn reload<S: TableSource>(&self, ctx: &AppContext<S>) -> Result<Arc<Datasets>, AppError> {
        let fresh = Arc::new(ctx.load_datasets()?);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = fresh.clone();
        info!(people = fresh.profiles.len(), "reloaded datasets");
        Ok(fresh)
    }
}
