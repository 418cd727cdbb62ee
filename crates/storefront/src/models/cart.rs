//! Session-scoped shopping cart.
//!
//! The cart is an ordered list of line items, unique by product, stored
//! in the session as a whole. Mutations are plain synchronous methods;
//! handlers load the cart from the session, mutate it, and store it back,
//! so concurrent requests on the same session are last-write-wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use luvyn_core::{LineItemId, Price, ProductId};

use crate::models::Product;

/// Errors from cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The addressed line item is not in the cart.
    #[error("no line item {0} in cart")]
    LineNotFound(LineItemId),
}

/// One entry in the cart.
///
/// `name` and `price` are snapshots of the product's display fields taken
/// when the product was first added; the line id addresses the entry for
/// update and remove and is unique within its cart only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineItemId,
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    /// Always `>= 1`; an update that would reach 0 removes the line.
    pub quantity: u32,
}

/// A per-session ordered collection of cart line items.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    /// Last line id handed out; ids are monotonically increasing.
    next_line_id: i32,
}

impl Cart {
    /// Add one unit of a product.
    ///
    /// If the product already has a line, its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended, snapshotting the
    /// product's name and price. Returns the id of the affected line.
    pub fn add(&mut self, product: &Product) -> LineItemId {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
            return line.id;
        }

        self.next_line_id += 1;
        let id = LineItemId::new(self.next_line_id);
        self.lines.push(CartLine {
            id,
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        });
        id
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or below removes the line, keeping the
    /// `quantity >= 1` invariant for everything that stays.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if no line matches; the cart is
    /// unchanged in that case.
    pub fn set_quantity(&mut self, line_id: LineItemId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return self.remove(line_id);
        }

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id == line_id)
            .ok_or(CartError::LineNotFound(line_id))?;
        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Ok(())
    }

    /// Remove a line, preserving the relative order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if no line matches; the cart is
    /// unchanged in that case.
    pub fn remove(&mut self, line_id: LineItemId) -> Result<(), CartError> {
        let position = self
            .lines
            .iter()
            .position(|line| line.id == line_id)
            .ok_or(CartError::LineNotFound(line_id))?;
        self.lines.remove(position);
        Ok(())
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines, recomputed on every call.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity))
    }

    /// Total price across all lines, recomputed on every call.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines
            .iter()
            .map(|line| line.price.times(line.quantity))
            .sum()
    }
}
