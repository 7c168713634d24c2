use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use rust_decimal::Decimal;

use super::snapshot::InventorySnapshot;
use super::source::{InventoryError, InventorySource};
use crate::utils::{AppError, AppResult};

/// Read-through TTL cache over one [`InventorySource`]
///
/// Holds a single snapshot. Concurrent misses coalesce into one load via
/// `try_get_with`. Failed loads are not cached.
#[derive(Clone)]
pub struct InventoryCache {
    source: Arc<dyn InventorySource>,
    cache: Cache<(), Arc<InventorySnapshot>>,
}

impl InventoryCache {
    pub fn new(source: Arc<dyn InventorySource>, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(1).time_to_live(ttl).build();
        Self { source, cache }
    }

    /// Current snapshot, loading it on a miss
    pub async fn snapshot(&self) -> AppResult<Arc<InventorySnapshot>> {
        let source = Arc::clone(&self.source);
        self.cache
            .try_get_with((), async move {
                let snapshot = source.load().await?;
                tracing::info!(
                    source = %source.describe(),
                    items = snapshot.items().len(),
                    "Inventory snapshot loaded"
                );
                Ok::<_, InventoryError>(Arc::new(snapshot))
            })
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Inventory load failed");
                AppError::from(e.as_ref())
            })
    }

    /// Reference quantity of one item, 0 if unknown
    pub async fn current_quantity(&self, item_name: &str) -> AppResult<Decimal> {
        Ok(self.snapshot().await?.current_quantity(item_name))
    }

    /// Drop the cached snapshot so the next read refetches
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
        tracing::info!("Inventory cache invalidated");
    }
}
