//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::get_env_or;

pub const DEFAULT_LOG_LEVEL: &str = "auth_screen=info,warn";
pub const LOG_FILE_NAME: &str = "auth-screen.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding the rotated log files
    pub log_dir: PathBuf,
    /// Filter directive (e.g., "auth_screen=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            stderr: true,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            log_dir: PathBuf::from(get_env_or("AUTH_SCREEN_LOG_DIR", "logs")),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            stderr: get_env_or("AUTH_SCREEN_LOG_STDERR", "1") != "0",
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
