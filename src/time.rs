use std::time::{SystemTime, UNIX_EPOCH};
use chrono::{DateTime, Utc};

/// A timestamp from Steam.
pub type ServerTime = DateTime<Utc>;

/// Converts a Unix timestamp into a [`ServerTime`].
pub fn timestamp_to_server_time(timestamp: i64) -> ServerTime {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
}

/// Seconds since the Unix epoch on the local clock.
pub fn get_system_time() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs(),
        // should never occur
        Err(_) => 0,
    }
}
