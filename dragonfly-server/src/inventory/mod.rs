//! 库存模块
//!
//! - [`InventorySnapshot`] - 解析后的库存表
//! - [`InventorySource`] - 快照来源 (发布的 CSV / 固定数据)
//! - [`InventoryCache`] - 带 TTL 的读穿缓存
//! - [`views`] - 汇总、列表、分组

mod cache;
mod snapshot;
mod source;
pub mod views;

pub use cache::InventoryCache;
pub use snapshot::InventorySnapshot;
pub use source::{InventoryError, InventorySource, MissingSource, PublishedCsvSource, StaticSource};
