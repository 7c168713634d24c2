//! Shared types for the Dragonfly stock desk
//!
//! Domain models, the unified error system and formatting helpers used by
//! both the sheet layer and the server.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
