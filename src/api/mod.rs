//! HTTP client for the remote post service

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use models::{Comment, Post, ServiceBanner};
