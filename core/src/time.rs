//! Time related utils.

use chrono::DateTime;
use chrono::Utc;

/// The current wall-clock time.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// The current wall-clock time as epoch milliseconds.
///
/// This is the timestamp format the NCP API gateway expects in the
/// `x-ncp-apigw-timestamp` header.
pub fn now_millis() -> i64 {
    now().timestamp_millis()
}
