//! HTTP API 路由
//!
//! | 模块 | 前缀 |
//! |------|------|
//! | [`health`] | /health |
//! | [`inventory`] | /api/inventory |
//! | [`orders`] | /api/orders |
//! | [`audit`] | /api/audit |

pub mod audit;
pub mod health;
pub mod inventory;
pub mod middleware;
pub mod orders;

use axum::Router;

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(inventory::router())
        .merge(orders::router())
        .merge(audit::router())
}
