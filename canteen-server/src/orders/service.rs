//! Order service
//!
//! Validates form input against the current menu, writes the order and
//! assigns its number inside one transaction, and serves lookups.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Order, OrderCreate};
use sqlx::SqlitePool;

use super::{Menu, OrderError, ValidationError, generate_order_number};
use crate::auth::StaffKey;
use crate::db::repository::order;
use crate::utils::validation::required_text;

/// Raw order form fields, exactly as submitted
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct OrderForm {
    pub name: Option<String>,
    pub class_section: Option<String>,
    pub item: Option<String>,
}

#[derive(Clone, Debug)]
pub struct OrderService {
    pool: SqlitePool,
    menu: Arc<RwLock<Menu>>,
    staff_key: StaffKey,
}

impl OrderService {
    pub fn new(pool: SqlitePool, menu: Menu, staff_key: StaffKey) -> Self {
        Self {
            pool,
            menu: Arc::new(RwLock::new(menu)),
            staff_key,
        }
    }

    /// Snapshot of the current menu
    pub fn menu(&self) -> Menu {
        self.menu.read().clone()
    }

    /// Swap in a new menu; stored orders keep the item they were placed with
    pub fn replace_menu(&self, menu: Menu) {
        *self.menu.write() = menu;
    }

    /// Validate the form and build the row to insert
    ///
    /// Missing fields are reported before an invalid item, matching what
    /// the form asks the student to fix first.
    pub fn validate(&self, form: &OrderForm) -> Result<OrderCreate, ValidationError> {
        let item = form
            .item
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingFields);
        let student_name = required_text(form.name.as_deref())?;
        let class_section = required_text(form.class_section.as_deref())?;
        let item = item?;

        let menu = self.menu.read();
        let selected = menu.resolve(item)?;

        Ok(OrderCreate {
            student_name,
            class_section,
            item_name: selected.name.clone(),
            price: selected.price,
            created_at: shared::util::now_utc(),
        })
    }

    /// Place an order and return it with its final number
    ///
    /// Insert and numbering share one transaction; if either step fails the
    /// transaction is dropped and the insert rolls back.
    pub async fn place_order(&self, form: &OrderForm) -> Result<Order, OrderError> {
        let data = self.validate(form)?;
        self.create(data).await
    }

    async fn create(&self, data: OrderCreate) -> Result<Order, OrderError> {
        let mut tx = self.pool.begin().await?;
        let id = order::insert_pending(&mut *tx, &data).await?;
        let order_number = generate_order_number(data.created_at, Some(id));
        order::set_order_number(&mut *tx, id, &order_number).await?;
        tx.commit().await?;

        tracing::info!(
            order_number = %order_number,
            id,
            item = %data.item_name,
            "Order placed"
        );

        Ok(Order {
            id,
            order_number,
            student_name: data.student_name,
            class_section: data.class_section,
            item_name: data.item_name,
            price: data.price,
            created_at: data.created_at,
        })
    }

    pub async fn get_order_by_number(&self, order_number: &str) -> Result<Order, OrderError> {
        order::find_by_number(&self.pool, order_number)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_number.to_string()))
    }

    /// All orders, newest first, for holders of the staff key
    ///
    /// A wrong or missing key is rejected before the database is touched.
    pub async fn list_orders(&self, provided_key: Option<&str>) -> Result<Vec<Order>, OrderError> {
        if !self.staff_key.matches(provided_key) {
            tracing::warn!("Rejected order listing: invalid staff key");
            return Err(OrderError::Unauthorized);
        }
        Ok(order::find_all_desc(&self.pool).await?)
    }
}
