//! In-memory repositories for storefront data.
//!
//! # Stores
//!
//! - `users` - Accounts (email, Argon2 password hash, name, profile)
//! - `orders` - Order lines recorded at checkout
//!
//! Both live for the lifetime of the process; there is no persistence
//! layer. Visitor state (basket, currency, overlay flags) lives in the
//! session store instead, see [`crate::providers`].

pub mod orders;
pub mod users;

use thiserror::Error;

pub use orders::{NewOrder, OrderRepository};
pub use users::UserRepository;

/// Repository operation errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Record not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Unique constraint violated.
    #[error("conflict: {0}")]
    Conflict(String),
}
