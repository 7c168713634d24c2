//! Audit API 模块 (盘点)
//!
//! | 路径 | 方法 | 说明 | 操作员 |
//! |------|------|------|--------|
//! | /api/audit/entries | GET | 当前盘点记录 | 否 |
//! | /api/audit/entries | POST | 记录盘点 | 是 |
//! | /api/audit/variance | GET | 差异报告 (`?order=name\|reference_desc\|variance_asc`) | 否 |
//! | /api/audit/progress | GET | 盘点进度 | 否 |
//! | /api/audit/archive | POST | 归档当前盘点 | 是 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/audit", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/entries", get(handler::list).post(handler::record))
        .route("/variance", get(handler::variance))
        .route("/progress", get(handler::progress))
        .route("/archive", post(handler::archive))
}
