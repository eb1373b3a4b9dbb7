pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::{build_router, AppState};
pub use crate::app::server::Server;
pub use crate::config::ServiceConfig;
pub use crate::core::directory::ActivityDirectory;
pub use crate::domain::ports::ActivityStore;
pub use crate::utils::error::{Result, SignupError};
