//! Stockdesk Client - Talks to the inventory backend.
//!
//! Every endpoint answers with a `{success, data}` envelope. [`ApiClient`]
//! unwraps it, caches reference lists (products, customers, expense
//! categories) for a short time, and exposes one typed method per endpoint.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`error`] - Client error type
//! - [`dashboard`] - Concurrent fetch + aggregation into an overview
//!
//! Submissions (`submit_*`) validate a form from [`stockdesk_core::validation`]
//! before anything is sent, so an invalid form never reaches the network.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cache;
mod client;
pub mod config;
pub mod dashboard;
pub mod error;
mod resources;

pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use dashboard::{Dashboard, Overview};
pub use error::ApiError;
