pub mod cli;
pub mod client;
pub mod config;

pub use client::{ClientError, PaymentClient, PaymentRequest, PaymentResponse, ResponseBody};
pub use config::ClientConfig;
