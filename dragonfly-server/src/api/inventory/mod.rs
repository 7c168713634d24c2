//! Inventory API 模块 (库存)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/inventory | GET | 库存列表 (`?group=`) |
//! | /api/inventory/summary | GET | 汇总与分组合计 |
//! | /api/inventory/groups | GET | 分组名称 |
//! | /api/inventory/refresh | POST | 清除快照缓存 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/inventory", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/summary", get(handler::summary))
        .route("/groups", get(handler::groups))
        .route("/refresh", post(handler::refresh))
}
