pub mod api;
pub mod auth;
pub mod config;
pub mod cors;
pub mod error;
pub mod models;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
