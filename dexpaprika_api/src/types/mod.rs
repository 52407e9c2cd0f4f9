//! Request parameter types and response helpers.
//!
//! Responses themselves are opaque [`serde_json::Value`]s.

mod ohlcv;
pub use self::ohlcv::alias_ohlcv;

mod time_bound;
pub use self::time_bound::TimeBound;
