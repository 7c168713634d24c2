use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;

/// Default business timezone (order-ID dates and record timestamps)
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// 服务器配置 - 库存台的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | INVENTORY_CSV_URL | (空) | 库存表发布的 CSV 地址 |
/// | INVENTORY_TTL_SECS | 60 | 库存快照缓存时间(秒) |
/// | BUSINESS_TIMEZONE | Asia/Kolkata | 业务时区 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (空) | 日志文件目录 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/dragonfly HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 库存 CSV 地址，为空时没有库存来源
    pub inventory_csv_url: Option<String>,
    /// 库存快照缓存时间
    pub inventory_ttl_secs: u64,
    /// 业务时区
    pub timezone: Tz,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            inventory_csv_url: std::env::var("INVENTORY_CSV_URL")
                .ok()
                .filter(|u| !u.trim().is_empty()),
            inventory_ttl_secs: std::env::var("INVENTORY_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            timezone: std::env::var("BUSINESS_TIMEZONE")
                .ok()
                .and_then(|tz| {
                    tz.parse::<Tz>()
                        .map_err(|e| tracing::warn!("Invalid BUSINESS_TIMEZONE {}: {}", tz, e))
                        .ok()
                })
                .unwrap_or(DEFAULT_TIMEZONE),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录: {work_dir}/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 工作簿文件: {work_dir}/database/dragonfly.redb
    pub fn workbook_path(&self) -> PathBuf {
        self.database_dir().join("dragonfly.redb")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())
    }

    pub fn inventory_ttl(&self) -> Duration {
        Duration::from_secs(self.inventory_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
