//! Global Tokio runtime for gateway calls.
//!
//! eframe drives the UI on the main thread without an async executor, while the
//! gateway is async (reqwest). The binary enters this runtime before starting the event
//! loop so handlers can `tokio::spawn` from UI callbacks; results travel back to the UI
//! thread over the app's event channel.
//!
//! ```rust,no_run
//! use auth_screen::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! // tokio::spawn is now usable from this thread
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for gateway calls")
});
