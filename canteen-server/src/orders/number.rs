//! Order numbering
//!
//! `YYYYMMDD-NNNN`: the UTC date of creation, then the row id zero-padded
//! to at least four digits. Ids above 9999 keep all their digits so numbers
//! stay unique once a day has seen more than ten thousand orders overall.
//! Without an id the sequence falls back to the epoch seconds modulo 10000.

use chrono::{DateTime, Utc};

/// Modulus applied to the epoch-seconds fallback
pub const FALLBACK_MODULUS: i64 = 10_000;

/// Derive the display number for an order created at `created_at`
///
/// `id_hint` is the storage-assigned row id; `None` or a non-positive value
/// selects the timestamp fallback.
pub fn generate_order_number(created_at: DateTime<Utc>, id_hint: Option<i64>) -> String {
    let date_part = created_at.format("%Y%m%d");
    match id_hint.filter(|id| *id > 0) {
        Some(id) => format!("{date_part}-{id:04}"),
        None => {
            let seq = created_at.timestamp().rem_euclid(FALLBACK_MODULUS);
            format!("{date_part}-{seq:04}")
        }
    }
}
