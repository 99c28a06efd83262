pub mod config;
pub mod http;

pub use config::ServerConfig;
pub use http::{AppState, PAYMENT_PATH, build_router};
