use std::sync::Arc;
use std::time::Instant;

use dragonfly_sheet::Workbook;

use crate::audit::{AUDIT_HEADERS, AUDIT_SHEET, AuditService};
use crate::core::{Config, Result};
use crate::inventory::{InventoryCache, InventorySource, MissingSource, PublishedCsvSource};
use crate::orders::{ORDER_HEADERS, ORDERS_SHEET, OrderService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | orders | OrderService | 订单服务 |
/// | audit | AuditService | 盘点服务 |
/// | inventory | InventoryCache | 库存快照缓存 |
///
/// 除库存快照外不缓存任何业务数据，每个请求都重新读取工作表。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 订单服务
    pub orders: OrderService,
    /// 盘点服务
    pub audit: AuditService,
    /// 库存快照缓存
    pub inventory: InventoryCache,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 测试中配合 [`Workbook::open_in_memory`] 和 `StaticSource` 使用，
    /// 通常使用 [`initialize()`](Self::initialize) 代替
    pub fn new(
        config: Config,
        workbook: Workbook,
        inventory_source: Arc<dyn InventorySource>,
    ) -> Result<Self> {
        let orders_sheet = workbook.worksheet(ORDERS_SHEET, ORDER_HEADERS)?;
        let audit_sheet = workbook.worksheet(AUDIT_SHEET, AUDIT_HEADERS)?;

        let inventory = InventoryCache::new(inventory_source, config.inventory_ttl());
        let orders = OrderService::new(Arc::new(orders_sheet), config.timezone);
        let audit = AuditService::new(Arc::new(audit_sheet), inventory.clone(), config.timezone);

        Ok(Self {
            config,
            orders,
            audit,
            inventory,
            started_at: Instant::now(),
        })
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录结构
    /// 2. 打开 `{work_dir}/database/dragonfly.redb`
    /// 3. 选择库存来源 (未配置 INVENTORY_CSV_URL 时库存接口返回错误)
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let workbook_path = config.workbook_path();
        let workbook = Workbook::open(&workbook_path)?;
        tracing::info!(path = %workbook_path.display(), "Workbook opened");

        let source: Arc<dyn InventorySource> = match &config.inventory_csv_url {
            Some(url) => Arc::new(PublishedCsvSource::new(url.clone(), config.request_timeout())?),
            None => {
                tracing::warn!("INVENTORY_CSV_URL not set, inventory endpoints will fail");
                Arc::new(MissingSource)
            }
        };

        Self::new(config.clone(), workbook, source)
    }

    /// 运行时间 (秒)
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
