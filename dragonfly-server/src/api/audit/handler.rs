//! Audit API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{
    ArchiveOutcome, AuditEntryCreate, AuditLogEntry, AuditProgress, VarianceOrder, VarianceRow,
};

use crate::auth::Session;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct VarianceQuery {
    #[serde(default)]
    pub order: VarianceOrder,
}

/// GET /api/audit/entries - 当前盘点记录
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<AuditLogEntry>>> {
    Ok(Json(state.audit.active_entries()?))
}

/// POST /api/audit/entries - 记录一次盘点
pub async fn record(
    State(state): State<ServerState>,
    session: Session,
    Json(payload): Json<AuditEntryCreate>,
) -> AppResult<Json<AuditLogEntry>> {
    let entry = state.audit.record(payload, &session)?;
    Ok(Json(entry))
}

/// GET /api/audit/variance - 差异报告
pub async fn variance(
    State(state): State<ServerState>,
    Query(query): Query<VarianceQuery>,
) -> AppResult<Json<Vec<VarianceRow>>> {
    Ok(Json(state.audit.variance(query.order).await?))
}

/// GET /api/audit/progress - 盘点进度
pub async fn progress(State(state): State<ServerState>) -> AppResult<Json<AuditProgress>> {
    Ok(Json(state.audit.progress().await?))
}

/// POST /api/audit/archive - 归档 (Active -> Closed)
pub async fn archive(
    State(state): State<ServerState>,
    session: Session,
) -> AppResult<Json<ArchiveOutcome>> {
    Ok(Json(state.audit.archive(&session)?))
}
