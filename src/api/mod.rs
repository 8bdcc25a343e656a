//! Client for the remote registry service that owns every record this
//! console displays. All reads and writes go through [`ApiClient`]; nothing
//! is persisted locally.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
