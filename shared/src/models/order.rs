//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One submitted order (one row of the `orders` table)
///
/// `item_name` and `price` are a snapshot of the menu entry at order time,
/// so later menu edits never change a stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// `YYYYMMDD-NNNN`, unique
    pub order_number: String,
    pub student_name: String,
    pub class_section: String,
    pub item_name: String,
    /// Price in whole currency units
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

/// Validated order waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCreate {
    pub student_name: String,
    pub class_section: String,
    pub item_name: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of `GET /api/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}
