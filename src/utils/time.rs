//! Time helpers
//!
//! All timestamps are Unix millis (`i64`); the repository layer never
//! deals in date strings.

/// Current time as Unix millis.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
