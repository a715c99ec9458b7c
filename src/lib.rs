pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod filters;
pub mod inbox;
pub mod listing;
pub mod models;
pub mod session;
pub mod store;

pub use app::AppState;
pub use config::Config;
pub use error::{RentifyError, Result};
