pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{endpoints, PubCashApi};
pub use client::ApiClient;
pub use error::ClientError;
