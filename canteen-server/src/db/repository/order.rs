//! Order Repository
//!
//! Orders are written in two steps inside one transaction: the row is
//! inserted with [`PENDING_ORDER_NUMBER`] to obtain its id, then patched
//! with the final number. Readers only ever see committed rows, so the
//! placeholder never leaves the transaction.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderCreate};
use sqlx::{SqliteConnection, SqlitePool};

/// Placeholder order number held by a row between insert and patch
pub const PENDING_ORDER_NUMBER: &str = "pending";

const ORDER_COLUMNS: &str =
    "id, order_number, student_name, class_section, item_name, price, created_at";

/// Insert a row carrying the placeholder number, returning its id
pub async fn insert_pending(conn: &mut SqliteConnection, data: &OrderCreate) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (student_name, class_section, item_name, price, created_at, order_number) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
    )
    .bind(&data.student_name)
    .bind(&data.class_section)
    .bind(&data.item_name)
    .bind(data.price)
    .bind(data.created_at)
    .bind(PENDING_ORDER_NUMBER)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

/// Replace the placeholder number of a pending row
///
/// Rows that already carry a final number are never touched.
pub async fn set_order_number(
    conn: &mut SqliteConnection,
    id: i64,
    order_number: &str,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE orders SET order_number = ?1 WHERE id = ?2 AND order_number = ?3")
        .bind(order_number)
        .bind(id)
        .bind(PENDING_ORDER_NUMBER)
        .execute(conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Pending order {id} not found")));
    }
    Ok(())
}

pub async fn find_by_number(pool: &SqlitePool, order_number: &str) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE order_number = ? LIMIT 1"
    ))
    .bind(order_number)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

/// All orders, newest (highest id) first
pub async fn find_all_desc(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders ORDER BY id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use chrono::{TimeZone, Utc};

    fn sample(name: &str) -> OrderCreate {
        OrderCreate {
            student_name: name.to_string(),
            class_section: "8B".to_string(),
            item_name: "Masala Dosa".to_string(),
            price: 80,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_patch() {
        let db = DbService::in_memory().await.unwrap();
        let mut tx = db.pool.begin().await.unwrap();
        let id = insert_pending(&mut tx, &sample("Asha")).await.unwrap();
        set_order_number(&mut tx, id, "20240115-0001").await.unwrap();
        tx.commit().await.unwrap();

        let order = find_by_number(&db.pool, "20240115-0001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(order.id, id);
        assert_eq!(order.student_name, "Asha");
        assert_eq!(order.price, 80);
        assert_eq!(order.created_at, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn test_rollback_leaves_no_pending_row() {
        let db = DbService::in_memory().await.unwrap();
        {
            let mut tx = db.pool.begin().await.unwrap();
            insert_pending(&mut tx, &sample("Asha")).await.unwrap();
            // dropped without commit
        }
        assert_eq!(count(&db.pool).await.unwrap(), 0);
        assert!(find_by_number(&db.pool, PENDING_ORDER_NUMBER).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_uncommitted_rows_are_invisible_to_other_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.db");
        let db = DbService::new(path.to_str().unwrap()).await.unwrap();

        let mut tx = db.pool.begin().await.unwrap();
        let id = insert_pending(&mut tx, &sample("Asha")).await.unwrap();

        // The transaction holds one pooled connection; these reads use another
        assert!(find_by_number(&db.pool, PENDING_ORDER_NUMBER).await.unwrap().is_none());
        assert_eq!(count(&db.pool).await.unwrap(), 0);

        set_order_number(&mut tx, id, "20240115-0001").await.unwrap();
        assert!(find_by_number(&db.pool, "20240115-0001").await.unwrap().is_none());

        tx.commit().await.unwrap();
        let order = find_by_number(&db.pool, "20240115-0001").await.unwrap().unwrap();
        assert_eq!(order.id, id);
        assert!(find_by_number(&db.pool, PENDING_ORDER_NUMBER).await.unwrap().is_none());

        db.pool.close().await;
    }

    #[tokio::test]
    async fn test_set_order_number_only_patches_pending_rows() {
        let db = DbService::in_memory().await.unwrap();
        let mut tx = db.pool.begin().await.unwrap();
        let id = insert_pending(&mut tx, &sample("Asha")).await.unwrap();
        set_order_number(&mut tx, id, "20240115-0001").await.unwrap();

        let err = set_order_number(&mut tx, id, "20240115-9999").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        tx.commit().await.unwrap();

        assert!(find_by_number(&db.pool, "20240115-9999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_number_is_rejected() {
        let db = DbService::in_memory().await.unwrap();
        let mut tx = db.pool.begin().await.unwrap();
        let first = insert_pending(&mut tx, &sample("Asha")).await.unwrap();
        set_order_number(&mut tx, first, "20240115-0001").await.unwrap();
        let second = insert_pending(&mut tx, &sample("Ravi")).await.unwrap();

        let err = set_order_number(&mut tx, second, "20240115-0001").await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_find_all_desc_orders_by_id() {
        let db = DbService::in_memory().await.unwrap();
        let mut tx = db.pool.begin().await.unwrap();
        for (i, name) in ["Asha", "Ravi", "Meera"].iter().enumerate() {
            let id = insert_pending(&mut tx, &sample(name)).await.unwrap();
            set_order_number(&mut tx, id, &format!("20240115-{:04}", i + 1))
                .await
                .unwrap();
        }
        tx.commit().await.unwrap();

        let orders = find_all_desc(&db.pool).await.unwrap();
        let names: Vec<_> = orders.iter().map(|o| o.student_name.as_str()).collect();
        assert_eq!(names, ["Meera", "Ravi", "Asha"]);
        assert!(orders.windows(2).all(|w| w[0].id > w[1].id));
    }
}
