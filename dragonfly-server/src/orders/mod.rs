//! 订单模块
//!
//! - [`allocator`] - 每日订单号分配 (纯函数)
//! - [`OrderService`] - 下单、查询、完成订单

pub mod allocator;
mod service;

pub use allocator::allocate;
pub use service::{ORDER_HEADERS, ORDERS_SHEET, OrderService, order_from_row};
