//! Orders API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{OrderCreate, OrderRecord, OrderStatus};

use crate::auth::Session;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<OrderStatus>,
}

/// GET /api/orders - 订单列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<OrderRecord>>> {
    let orders = state.orders.list(query.status)?;
    Ok(Json(orders))
}

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    session: Session,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderRecord>> {
    let order = state.orders.create(payload, &session).await?;
    Ok(Json(order))
}

/// POST /api/orders/{id}/complete - 完成订单
pub async fn complete(
    State(state): State<ServerState>,
    session: Session,
    Path(id): Path<String>,
) -> AppResult<Json<OrderRecord>> {
    let order = state.orders.complete(&id, &session).await?;
    Ok(Json(order))
}
