//! Data models
//!
//! Shared between the server and its API clients. Sheet-backed records use
//! the exact status words the worksheets hold (`Pending`, `Closed`, ...).

pub mod audit;
pub mod inventory;
pub mod order;

// Re-exports
pub use audit::*;
pub use inventory::*;
pub use order::*;
