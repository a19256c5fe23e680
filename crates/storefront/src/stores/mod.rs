//! Persisted stores over the key-value backend.
//!
//! Each store owns one fixed key and is the single source of truth for the
//! state behind it. Renderers never cache store state between requests; they
//! re-read on every render, which is what keeps the header badge, mini-cart,
//! and cart page from diverging.

pub mod cart;
pub mod session;

pub use cart::CartStore;
pub use session::{SessionStore, SignInError};
