//! # Logging Infrastructure
//!
//! File-based structured logging for the auth screen.
//!
//! - **File logging**: `logs/auth-screen.log`, rotated daily, non-blocking writes
//! - **Console logging**: compact stderr output for development
//! - **Panic hook**: panics land in the log with their location
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: `auth_screen=info,warn`)
//! - `AUTH_SCREEN_LOG_DIR`: Log directory (default: `logs`)
//! - `AUTH_SCREEN_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off, default on)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
