//! Menu page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use delish_core::CatalogItem;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Menu card display data for templates.
#[derive(Clone)]
pub struct MenuCardView {
    pub id: String,
    pub name: String,
    pub glyph: String,
    pub price: String,
}

impl From<&CatalogItem> for MenuCardView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            glyph: item.glyph.clone(),
            price: item.price.to_string(),
        }
    }
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub items: Vec<MenuCardView>,
    pub user_email: Option<String>,
}

/// Display the menu page.
#[instrument(skip(state))]
pub async fn menu(State(state): State<AppState>) -> impl IntoResponse {
    let items = state.catalog().items().iter().map(MenuCardView::from).collect();
    let user_email = state
        .sessions()
        .current_session()
        .map(|s| s.email.into_inner());

    ShopTemplate { items, user_email }
}
