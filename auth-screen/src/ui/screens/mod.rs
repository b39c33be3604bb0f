//! # Screens
//!
//! Full-window layouts.

pub mod auth;
