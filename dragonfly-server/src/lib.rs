//! Dragonfly Stock Desk - 库存、订单与盘点服务
//!
//! # 架构概述
//!
//! - **库存** (`inventory`): 从发布的 CSV 读取库存快照，带 TTL 缓存
//! - **订单** (`orders`): 每日订单号分配、下单、完成
//! - **盘点** (`audit`): 实盘记录、差异报告、进度、归档
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! dragonfly-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # 操作员会话 (X-Operator)
//! ├── api/           # HTTP 路由和处理器
//! ├── inventory/     # 库存快照与缓存
//! ├── orders/        # 订单号分配与订单服务
//! ├── audit/         # 盘点差异与盘点服务
//! └── utils/         # 日志、时间等工具
//! ```

pub mod api;
pub mod audit;
pub mod auth;
pub mod core;
pub mod inventory;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use auth::Session;
pub use core::{Config, Server, ServerState, build_router};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境
///
/// 1. 加载 `.env` (如果存在)
/// 2. 初始化日志 (LOG_LEVEL / LOG_DIR)
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ____                              ______
   / __ \_________ _____ _____  ____/ __/ /_  __
  / / / / ___/ __ `/ __ `/ __ \/ __ \/ /_/ / / / /
 / /_/ / /  / /_/ / /_/ / /_/ / / / / __/ / /_/ /
/_____/_/   \__,_/\__, /\____/_/ /_/_/ /_/\__, /
                 /____/                  /____/
    "#
    );
}
