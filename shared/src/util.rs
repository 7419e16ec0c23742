use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time, truncated to whole microseconds.
///
/// SQLite stores the timestamp as text; truncating keeps the value that was
/// written equal to the value read back.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
