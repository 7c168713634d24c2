//! Orders API 模块 (订单)
//!
//! | 路径 | 方法 | 说明 | 操作员 |
//! |------|------|------|--------|
//! | /api/orders | GET | 订单列表 (`?status=Pending\|Completed`) | 否 |
//! | /api/orders | POST | 下单 | 是 |
//! | /api/orders/{id}/complete | POST | 完成订单 | 是 |
//!
//! 订单号包含 `#`，路径中需编码为 `%23`。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}/complete", post(handler::complete))
}
