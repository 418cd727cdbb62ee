//! Catalog listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tower_sessions::Session;
use tracing::instrument;

use luvyn_core::{Price, ProductId};

use crate::error::Result;
use crate::filters;
use crate::models::Product;
use crate::routes::{MessageQuery, Nav};
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
        }
    }
}

/// Catalog listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub nav: Nav,
    pub error: Option<String>,
    pub products: Vec<ProductView>,
}

/// Display the catalog listing.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> Result<HomeTemplate> {
    let nav = Nav::load(&session).await?;
    let products = state
        .products()
        .all()
        .iter()
        .map(ProductView::from)
        .collect();

    Ok(HomeTemplate {
        nav,
        error: query.error,
        products,
    })
}
