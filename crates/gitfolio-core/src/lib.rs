// Core business logic lives here - the brain of the operation
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod panel;
pub mod providers;
pub mod source;
pub mod theme;

pub use config::Config;
pub use error::Error;
pub use panel::{LoadFailure, PanelState, ProjectPanel};
pub use source::ProjectSource;
pub use theme::Theme;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
