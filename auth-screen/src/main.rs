//! # Auth Screen
//!
//! Native login and registration window.
//!
//! ## Running
//!
//! ```bash
//! IDENTITY_API_KEY=... cargo run -p auth-screen
//! ```
//!
//! Variables may also come from a `.env` file in the working directory.

use std::process::ExitCode;
use std::sync::Arc;

use auth_screen::debug::{init_logger, LogConfig};
use auth_screen::ui::widgets::NotificationManager;
use auth_screen::ui::AuthWindow;
use auth_screen::utils::runtime::TOKIO_RT;
use auth_screen::{App, AppError, IdentityClient, IdentityConfig};

const WINDOW_TITLE: &str = "Sign in";

fn main() -> ExitCode {
    // Missing .env is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let _log_guard = init_logger(&LogConfig::from_env());
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Auth screen exited with an error");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> auth_screen::Result<()> {
    let config = IdentityConfig::from_env()?;
    tracing::info!(config = ?config, "Starting auth screen");

    let gateway = Arc::new(IdentityClient::new(config)?);

    // Handlers spawn gateway calls from UI callbacks on this thread.
    let _runtime = TOKIO_RT.enter();

    let app = App::new(gateway, NotificationManager::new());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(AuthWindow::new(app)))),
    )
    .map_err(|e| AppError::Window(e.to_string()))
}
