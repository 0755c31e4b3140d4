// Terminal UI implementation using ratatui
// The pretty face of gitfolio

pub mod app;
pub mod contact;
pub mod runner;
pub mod ui;

pub use app::{App, InputMode, ProjectModal};
pub use contact::{ContactField, ContactForm};
pub use runner::run_tui;
