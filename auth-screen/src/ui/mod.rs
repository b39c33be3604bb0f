//! # User Interface
//!
//! egui shell over the form controller. Screens read a snapshot of the state and return
//! the actions the user took; [`window::AuthWindow`] applies them to the controller.
//!
//! ```text
//! ui/
//! ├── theme.rs          - Colors and egui style
//! ├── window.rs         - eframe::App implementation
//! ├── screens/auth.rs   - Login and registration form
//! └── widgets/          - Form elements and toast notifications
//! ```

pub mod screens;
pub mod theme;
pub mod widgets;
pub mod window;

pub use theme::Theme;
pub use window::AuthWindow;
