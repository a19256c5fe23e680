//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation commits to the cart store before the response is built, and
//! every mutation response carries an `HX-Trigger` header so the badge and
//! mini-cart re-fetch their fragments. The cosmetic collaborators (fly-to-cart
//! on `item-added`, confetti on `checkout-completed`) ride the same events and
//! never gate the mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use delish_core::{Cart, CartLine, ItemId};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub glyph: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: "₹0".to_string(),
            count: 0,
        }
    }
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            glyph: line.glyph.clone(),
            quantity: line.qty,
            unit_price: line.price.to_string(),
            line_price: line.line_total().to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total: cart.total_price().to_string(),
            count: cart.total_count(),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: String,
}

/// Quantity adjustment form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: String,
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub user_email: Option<String>,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Mini-cart list fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/mini_cart.html")]
pub struct MiniCartTemplate {
    pub cart: CartView,
}

/// Order-complete fragment template, swapped in place of the cart items.
#[derive(Template, WebTemplate)]
#[template(path = "cart/complete.html")]
pub struct CheckoutCompleteTemplate;

// =============================================================================
// Trigger Headers
// =============================================================================

/// `HX-Trigger` header announcing a cart mutation.
fn cart_updated() -> AppendHeaders<[(&'static str, String); 1]> {
    AppendHeaders([("HX-Trigger", json!({"cart-updated": {}}).to_string())])
}

/// `HX-Trigger` header for an add: `cart-updated` plus `item-added` carrying
/// the glyph the fly-to-cart animation clones.
fn item_added(glyph: &str) -> AppendHeaders<[(&'static str, String); 1]> {
    let payload = json!({
        "cart-updated": {},
        "item-added": {"glyph": glyph},
    });
    AppendHeaders([("HX-Trigger", payload.to_string())])
}

/// `HX-Trigger` header for checkout: `cart-updated` plus the confetti cue.
fn checkout_completed() -> AppendHeaders<[(&'static str, String); 1]> {
    let payload = json!({
        "cart-updated": {},
        "checkout-completed": {},
    });
    AppendHeaders([("HX-Trigger", payload.to_string())])
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = CartView::from(&state.carts().cart());
    let user_email = state
        .sessions()
        .current_session()
        .map(|s| s.email.into_inner());

    CartShowTemplate { cart, user_email }
}

/// Add one unit of a catalog item to the cart (HTMX).
///
/// Merges into the existing line for the item if there is one. Unknown
/// catalog ids are a 404 - there is nothing to snapshot.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ItemId::new(form.id);
    let item = state
        .catalog()
        .find(&id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?
        .clone();

    let cart = state.carts().add_item(&item)?;

    Ok((
        item_added(&item.glyph),
        CartCountTemplate {
            count: cart.total_count(),
        },
    )
        .into_response())
}

/// Adjust a line's quantity by a delta (HTMX).
///
/// A delta that drives the quantity to zero or below removes the line; an
/// unknown id leaves the cart untouched. Either way the current cart items
/// fragment is returned.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let cart = state
        .carts()
        .change_quantity(&ItemId::new(form.id), form.delta)?;

    Ok((
        cart_updated(),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let cart = state.carts().remove_item(&ItemId::new(form.id))?;

    Ok((
        cart_updated(),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Empty the cart (HTMX).
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Response> {
    let cart = state.carts().clear()?;

    Ok((
        cart_updated(),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.carts().total_count(),
    }
}

/// Get the mini-cart list (HTMX).
#[instrument(skip(state))]
pub async fn mini(State(state): State<AppState>) -> impl IntoResponse {
    MiniCartTemplate {
        cart: CartView::from(&state.carts().cart()),
    }
}

/// Complete the order: empty the cart and swap in the thank-you fragment.
///
/// The cart is cleared before the response is sent; the confetti collaborator
/// fires off the `checkout-completed` trigger and never delays the mutation.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Response> {
    state.carts().clear()?;

    Ok((checkout_completed(), CheckoutCompleteTemplate).into_response())
}
