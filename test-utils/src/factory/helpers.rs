//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values are offset into the snowflake range so they look like Discord ids.
///
/// # Returns
/// - `i64` - Next unique id
pub fn next_id() -> i64 {
    100_000_000_000_000_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
