//! # Utilities Library
//!
//! Shared utility functions for environment variables, time, and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse_or};
pub use time::{format_time, now_utc, seconds_from};
pub use validation::{
    validate_email_shape, validate_equals, validate_min_utf16_len, validate_not_empty,
};
