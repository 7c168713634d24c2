use dragonfly_sheet::SheetError;
use thiserror::Error;

use crate::inventory::InventoryError;

/// 启动与运行错误 (请求级错误使用 [`crate::utils::AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储错误: {0}")]
    Storage(#[from] SheetError),

    #[error("库存来源错误: {0}")]
    Inventory(#[from] InventoryError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
