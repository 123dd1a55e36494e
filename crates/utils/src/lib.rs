pub mod error;
pub mod rate_limit;
pub mod sensitive;
pub mod settings;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of items returned by any list endpoint.
pub const FETCH_LIMIT_MAX: i64 = 50;

pub const FETCH_LIMIT_DEFAULT: i64 = 20;
