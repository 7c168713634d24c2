//! 操作员身份
//!
//! - [`Session`] - 每个请求的操作员会话 (X-Operator 请求头)

mod session;

pub use session::{OPERATOR_HEADER, Session};
