//! Emporium Core - Shared types library.
//!
//! This crate provides common types used across all Emporium components:
//! - `storefront` - Server-rendered storefront (catalog, basket, account, orders)
//! - `cli` - Command-line tools for catalog maintenance
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no session access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
