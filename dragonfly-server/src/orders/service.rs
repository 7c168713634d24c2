//! Order workflow over the `Orders` worksheet

use std::sync::Arc;

use chrono_tz::Tz;
use dragonfly_sheet::{Row, RowStore};
use shared::models::{OrderCreate, OrderId, OrderRecord, OrderStatus};
use shared::util::non_empty;

use super::allocator::allocate;
use crate::auth::Session;
use crate::utils::time::business_now;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Worksheet name
pub const ORDERS_SHEET: &str = "Orders";

/// Header row of the `Orders` worksheet
pub const ORDER_HEADERS: &[&str] = &[
    "Order ID",
    "Timestamp",
    "Customer Name",
    "Items",
    "Status",
    "Completed By",
    "Notes",
];

const COL_STATUS: usize = 4;
const COL_COMPLETED_BY: usize = 5;

/// Read an order row. Unknown status cells count as pending.
pub fn order_from_row(row: &Row) -> OrderRecord {
    OrderRecord {
        id: OrderId::from(row.get("Order ID").trim()),
        created_at: row.get("Timestamp").to_string(),
        customer: row.get("Customer Name").to_string(),
        items: row.get("Items").to_string(),
        status: OrderStatus::from_cell(row.get("Status")),
        completed_by: non_empty(row.get("Completed By")),
        notes: non_empty(row.get("Notes")),
    }
}

/// Cells of a new order row, in header order
fn order_to_cells(order: &OrderRecord) -> Vec<String> {
    vec![
        order.id.to_string(),
        order.created_at.clone(),
        order.customer.clone(),
        order.items.clone(),
        order.status.as_str().to_string(),
        order.completed_by.clone().unwrap_or_default(),
        order.notes.clone().unwrap_or_default(),
    ]
}

/// 订单服务
///
/// allocate + append 在同一进程内由 `append_lock` 串行化；
/// 其他进程写同一张表时仍可能分配出重复单号。
#[derive(Clone)]
pub struct OrderService {
    sheet: Arc<dyn RowStore>,
    tz: Tz,
    /// 序列化所有 allocate + append 操作，防止 read-then-append 竞争
    append_lock: Arc<tokio::sync::Mutex<()>>,
}

impl OrderService {
    pub fn new(sheet: Arc<dyn RowStore>, tz: Tz) -> Self {
        Self {
            sheet,
            tz,
            append_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// All orders in sheet order, optionally filtered by status
    pub fn list(&self, status: Option<OrderStatus>) -> AppResult<Vec<OrderRecord>> {
        let orders = self
            .sheet
            .fetch_all_rows()?
            .iter()
            .map(order_from_row)
            .filter(|o| status.is_none_or(|s| o.status == s))
            .collect();
        Ok(orders)
    }

    /// Allocate an ID and append a pending order
    pub async fn create(&self, payload: OrderCreate, session: &Session) -> AppResult<OrderRecord> {
        let customer = payload.customer.trim();
        let items = payload.items.trim();
        if customer.is_empty() {
            return Err(AppError::required("customer"));
        }
        if items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty).with_detail("field", "items"));
        }

        let _guard = self.append_lock.lock().await;

        let existing = self.list(None)?;
        let now = business_now(self.tz);
        let order = OrderRecord {
            id: allocate(&existing, &now),
            created_at: shared::util::format_record_timestamp(&now),
            customer: customer.to_string(),
            items: items.to_string(),
            status: OrderStatus::Pending,
            completed_by: None,
            notes: payload.notes.as_deref().and_then(non_empty),
        };

        let locator = self.sheet.append_row(order_to_cells(&order))?;
        tracing::info!(
            order_id = %order.id,
            row = %locator,
            operator = %session.operator,
            "Order created"
        );

        Ok(order)
    }

    /// Mark a pending order completed and stamp the operator
    pub async fn complete(&self, id: &str, session: &Session) -> AppResult<OrderRecord> {
        let not_found =
            || AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id));

        // Match on the ID column only; notes or customer cells may repeat an ID
        let row = self
            .sheet
            .fetch_all_rows()?
            .into_iter()
            .find(|r| r.get("Order ID").trim() == id)
            .ok_or_else(not_found)?;
        let locator = row.locator;
        let mut order = order_from_row(&row);

        if order.status == OrderStatus::Completed {
            return Err(AppError::new(ErrorCode::OrderAlreadyCompleted).with_detail("order_id", id));
        }

        self.sheet
            .update_cell(locator, COL_STATUS, OrderStatus::Completed.as_str())?;
        self.sheet
            .update_cell(locator, COL_COMPLETED_BY, &session.operator)?;

        order.status = OrderStatus::Completed;
        order.completed_by = Some(session.operator.clone());
        tracing::info!(order_id = %id, operator = %session.operator, "Order completed");

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragonfly_sheet::Workbook;

    fn service() -> OrderService {
        let sheet = Workbook::open_in_memory()
            .unwrap()
            .worksheet(ORDERS_SHEET, ORDER_HEADERS)
            .unwrap();
        OrderService::new(Arc::new(sheet), chrono_tz::Asia::Kolkata)
    }

    fn payload(customer: &str, items: &str) -> OrderCreate {
        OrderCreate {
            customer: customer.into(),
            items: items.into(),
            notes: None,
        }
    }

    fn today_prefix() -> String {
        OrderId::prefix_for(business_now(chrono_tz::Asia::Kolkata).date_naive())
    }

    #[test]
    fn test_header_columns_line_up() {
        assert_eq!(ORDER_HEADERS[COL_STATUS], "Status");
        assert_eq!(ORDER_HEADERS[COL_COMPLETED_BY], "Completed By");
    }

    #[tokio::test]
    async fn test_create_numbers_orders_per_day() {
        let svc = service();
        let session = Session::new("Meera");

        let first = svc.create(payload("Asha", "2 x Box A"), &session).await.unwrap();
        let second = svc.create(payload("Ravi", "1 x Tape"), &session).await.unwrap();

        let prefix = today_prefix();
        assert_eq!(first.id.as_str(), format!("{}1", prefix));
        assert_eq!(second.id.as_str(), format!("{}2", prefix));
        assert_eq!(first.status, OrderStatus::Pending);

        let stored = svc.list(None).unwrap();
        assert_eq!(stored, vec![first, second]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let svc = service();

        let mut handles = Vec::new();
        for i in 0..8 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                let session = Session::new("Meera");
                svc.create(payload(&format!("Customer {}", i), "Box"), &session)
                    .await
                    .unwrap()
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        ids.sort_by_key(|id| id.sequence());
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(ids.last().and_then(|id| id.sequence()), Some(8));
    }

    #[tokio::test]
    async fn test_create_validates_payload() {
        let svc = service();
        let session = Session::new("Meera");

        let err = svc.create(payload("  ", "Box"), &session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = svc.create(payload("Asha", ""), &session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);

        assert!(svc.list(None).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_complete_order() {
        let svc = service();
        let order = svc
            .create(payload("Asha", "Box"), &Session::new("Meera"))
            .await
            .unwrap();

        let done = svc
            .complete(order.id.as_str(), &Session::new("Kiran"))
            .await
            .unwrap();
        assert_eq!(done.status, OrderStatus::Completed);
        assert_eq!(done.completed_by.as_deref(), Some("Kiran"));

        let stored = svc.list(Some(OrderStatus::Completed)).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].completed_by.as_deref(), Some("Kiran"));
        assert!(svc.list(Some(OrderStatus::Pending)).unwrap().is_empty());

        let err = svc
            .complete(order.id.as_str(), &Session::new("Kiran"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderAlreadyCompleted);
    }

    #[tokio::test]
    async fn test_complete_unknown_order() {
        let svc = service();
        svc.create(payload("Asha", "Box"), &Session::new("Meera"))
            .await
            .unwrap();

        let err = svc
            .complete("01.01.20..#1", &Session::new("Kiran"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);

        // A customer name is not an order ID
        let err = svc.complete("Asha", &Session::new("Kiran")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[tokio::test]
    async fn test_notes_are_trimmed_and_optional() {
        let svc = service();
        let mut create = payload("Asha", "Box");
        create.notes = Some("  deliver after 5 ".into());

        let order = svc.create(create, &Session::new("Meera")).await.unwrap();
        assert_eq!(order.notes.as_deref(), Some("deliver after 5"));

        let mut create = payload("Ravi", "Tape");
        create.notes = Some("   ".into());
        let order = svc.create(create, &Session::new("Meera")).await.unwrap();
        assert_eq!(order.notes, None);
    }

    #[tokio::test]
    async fn test_complete_ignores_id_repeated_in_other_cells() {
        let svc = service();
        let session = Session::new("Meera");
        let second_id = format!("{}2", today_prefix());

        let mut create = payload("Asha", "Box");
        create.notes = Some(second_id.clone());
        let first = svc.create(create, &session).await.unwrap();
        let second = svc.create(payload("Ravi", "Tape"), &session).await.unwrap();
        assert_eq!(second.id.as_str(), second_id);

        let done = svc.complete(&second_id, &Session::new("Kiran")).await.unwrap();
        assert_eq!(done.id, second.id);
        assert_eq!(done.customer, "Ravi");

        let stored = svc.list(None).unwrap();
        assert_eq!(stored[0].id, first.id);
        assert_eq!(stored[0].status, OrderStatus::Pending);
        assert_eq!(stored[1].status, OrderStatus::Completed);
        assert_eq!(stored[1].completed_by.as_deref(), Some("Kiran"));
    }
}
