//! Inventory API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{InventoryListing, InventorySummary};

use crate::core::ServerState;
use crate::inventory::views;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub group: Option<String>,
}

/// GET /api/inventory - 库存列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<InventoryListing>> {
    let snapshot = state.inventory.snapshot().await?;
    Ok(Json(views::listing(&snapshot, query.group.as_deref())))
}

/// GET /api/inventory/summary - 库存汇总
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<InventorySummary>> {
    let snapshot = state.inventory.snapshot().await?;
    Ok(Json(views::summary(&snapshot)))
}

/// GET /api/inventory/groups - 分组名称 (首次出现顺序)
pub async fn groups(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    let snapshot = state.inventory.snapshot().await?;
    Ok(Json(views::groups(&snapshot)))
}

/// POST /api/inventory/refresh - 清除缓存，下次读取重新拉取
pub async fn refresh(State(state): State<ServerState>) -> Json<bool> {
    state.inventory.invalidate();
    Json(true)
}
