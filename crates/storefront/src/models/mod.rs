//! Domain models for storefront.
//!
//! Plain state types: everything a provider stores in the session and
//! everything the in-memory repositories hand back. No I/O lives here.

pub mod cart;
pub mod order;
pub mod overlay;
pub mod session;
pub mod user;

pub use cart::{Cart, CartLine};
pub use order::Order;
pub use overlay::{Overlay, OverlayFlags};
pub use session::{CurrentUser, keys as session_keys};
pub use user::{Profile, User};
