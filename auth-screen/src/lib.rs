//! # Auth Screen - Library Root
//!
//! Login and registration form for an email/password identity provider, with a native
//! egui window on top.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              auth-screen (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  ui        - eframe window, form screen, toasts        │
//! │  app       - form state, validation, submit machine    │
//! │  services  - Identity Toolkit REST gateway (reqwest)   │
//! └────────────────────────────────────────────────────────┘
//!                           │ HTTPS
//!                           ▼
//!               ┌─────────────────────────┐
//!               │  Identity Toolkit API   │
//!               │  accounts:signUp, ...   │
//!               └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`App`] controller, [`AppState`], handlers and event processing
//! - **config**: [`IdentityConfig`] loaded from the environment
//! - **core**: error types and the [`AuthGateway`] / [`NotificationSink`] seams
//! - **debug**: logging initialization
//! - **services**: [`IdentityClient`], the production [`AuthGateway`]
//! - **ui**: egui rendering
//! - **utils**: form validation rules and the Tokio runtime

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppState, Field, Mode, ResetOutcome, SubmitOutcome};
pub use config::IdentityConfig;
pub use core::{
    AppError, AuthGateway, AuthUser, GatewayError, Notification, NotificationSink, Result,
};
pub use services::IdentityClient;
