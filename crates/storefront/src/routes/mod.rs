//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (mini-cart host)
//! GET  /health                 - Health check
//! GET  /shop                   - Menu page
//! GET  /signin                 - Sign-in page
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (triggers cart-updated, item-added)
//! POST /cart/update            - Adjust quantity by delta (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! GET  /cart/mini              - Mini-cart list (fragment)
//!
//! # Checkout
//! POST /checkout               - Clear the cart, return order-complete fragment
//!
//! # Auth (mock)
//! POST /auth/signin            - Sign-in action (inline errors on the form)
//! POST /auth/guest             - Continue as guest (clears the session)
//! ```
//!
//! Every mutation response carries an `HX-Trigger: cart-updated` header; the
//! badge and mini-cart fragments re-fetch on that event, which is what keeps
//! all rendered cart views consistent with the store.

pub mod cart;
pub mod home;
pub mod shop;
pub mod signin;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/mini", get(cart::mini))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signin", post(signin::sign_in))
        .route("/guest", post(signin::guest))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(home::home))
        .route("/shop", get(shop::menu))
        .route("/signin", get(signin::signin_page))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(cart::checkout))
        // Auth routes
        .nest("/auth", auth_routes())
}
