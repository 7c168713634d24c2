//! 盘点模块
//!
//! - [`variance`] - 差异汇总、进度、归档 (纯函数)
//! - [`AuditService`] - 记录盘点、生成报告、归档

mod service;
pub mod variance;

pub use service::{AUDIT_HEADERS, AUDIT_SHEET, AuditService, entry_from_row};
