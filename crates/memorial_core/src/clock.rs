//! Wall-clock helpers shared by stamping and id generation.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix time in epoch milliseconds.
///
/// A clock set before 1970 yields `0` instead of panicking.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
