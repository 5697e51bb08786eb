//! Stockdesk Core - Shared records, reports and validation.
//!
//! This crate provides the pieces shared by every Stockdesk component:
//! - `client` - Async REST client for the inventory backend
//! - `cli` - Command-line dashboard and data entry
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here can be unit-tested against in-memory records.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, money, discounts, emails and statuses
//! - [`models`] - Wire records and payloads exchanged with the backend
//! - [`report`] - Aggregation of record lists into dashboard reports
//! - [`validation`] - Form validation producing field-keyed error maps

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod report;
pub mod types;
pub mod validation;

pub use types::*;
