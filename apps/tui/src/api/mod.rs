pub mod client;
pub mod error;
pub mod models;
pub mod request;

pub use client::ApiClient;
pub use error::ApiError;
