//! Cart route handlers.
//!
//! The cart lives in the session. Every mutation loads it, applies one
//! operation, and stores it back; two racing requests from the same
//! session are last-write-wins. Expected failures (unknown product,
//! unknown line, malformed input) log a warning and redirect back with
//! the cart unchanged.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use luvyn_core::{LineItemId, Price, ProductId};

use crate::error::Result;
use crate::filters;
use crate::models::{Cart, CartError, CartLine, session_keys};
use crate::routes::{MessageQuery, Nav};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: LineItemId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
            line_total: line.price.times(line.quantity),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub total: Price,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            item_count: cart.item_count(),
            total: cart.total_price(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, defaulting to an empty one.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get(session_keys::CART).await?.unwrap_or_default())
}

/// Store the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Update cart form data. The quantity arrives as untrusted text and is
/// coerced to an integer by the handler.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub quantity: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub nav: Nav,
    pub error: Option<String>,
    pub cart: CartView,
}

/// Checkout confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub nav: Nav,
}

/// Display the cart page with totals.
#[instrument(skip(session))]
pub async fn show(session: Session, Query(query): Query<MessageQuery>) -> Result<CartShowTemplate> {
    let nav = Nav::load(&session).await?;
    let cart = load_cart(&session).await?;

    Ok(CartShowTemplate {
        nav,
        error: query.error,
        cart: CartView::from(&cart),
    })
}

/// Add one unit of a product to the cart.
///
/// Adding a product that already has a line increments its quantity
/// instead of creating a duplicate line.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<String>,
) -> Result<Response> {
    let Ok(product_id) = product_id.parse::<i32>() else {
        tracing::warn!(%product_id, "non-numeric product id in add-to-cart");
        return Ok(Redirect::to("/").into_response());
    };

    let Some(product) = state.products().by_id(ProductId::new(product_id)) else {
        tracing::warn!(product_id, "unknown product in add-to-cart");
        return Ok(Redirect::to("/?error=unknown_product").into_response());
    };

    let mut cart = load_cart(&session).await?;
    cart.add(&product);
    save_cart(&session, &cart).await?;

    Ok(Redirect::to("/cart").into_response())
}

/// Set a line's quantity; zero or below removes the line.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Path(item_id): Path<String>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let Ok(item_id) = item_id.parse::<i32>() else {
        tracing::warn!(%item_id, "non-numeric line item id in cart update");
        return Ok(Redirect::to("/cart").into_response());
    };

    let Ok(quantity) = form.quantity.trim().parse::<i64>() else {
        tracing::warn!(quantity = %form.quantity, "malformed quantity in cart update");
        return Ok(Redirect::to("/cart?error=invalid_quantity").into_response());
    };

    let mut cart = load_cart(&session).await?;
    match cart.set_quantity(LineItemId::new(item_id), quantity) {
        Ok(()) => save_cart(&session, &cart).await?,
        Err(CartError::LineNotFound(id)) => {
            tracing::warn!(%id, "unknown line item in cart update");
            return Ok(Redirect::to("/cart?error=unknown_item").into_response());
        }
    }

    Ok(Redirect::to("/cart").into_response())
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Path(item_id): Path<String>,
) -> Result<Response> {
    let Ok(item_id) = item_id.parse::<i32>() else {
        tracing::warn!(%item_id, "non-numeric line item id in cart remove");
        return Ok(Redirect::to("/cart").into_response());
    };

    let mut cart = load_cart(&session).await?;
    match cart.remove(LineItemId::new(item_id)) {
        Ok(()) => save_cart(&session, &cart).await?,
        Err(CartError::LineNotFound(id)) => {
            tracing::warn!(%id, "unknown line item in cart remove");
            return Ok(Redirect::to("/cart?error=unknown_item").into_response());
        }
    }

    Ok(Redirect::to("/cart").into_response())
}

/// Display the static checkout confirmation view.
///
/// Deliberately does not touch the cart: there is no payment flow in the
/// demo, so this page is a dead end by design.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Result<CheckoutTemplate> {
    let nav = Nav::load(&session).await?;
    Ok(CheckoutTemplate { nav })
}
