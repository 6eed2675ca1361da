use crate::domain::model::{CartLine, ProductId, ProductRef};
use crate::utils::error::CartError;
use std::rc::Rc;

pub type CartResult<T> = std::result::Result<T, CartError>;

/// Ordered list of cart lines, at most one per product id.
///
/// Every mutation checks its preconditions before touching the list, so a
/// returned error always leaves the cart as it was.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    pub fn add(&mut self, product: &ProductRef, quantity: i64) -> CartResult<()> {
        if !product.is_available() {
            return Err(CartError::unavailable(product.name()));
        }
        if quantity <= 0 {
            return Err(CartError::invalid_quantity(product.name(), quantity));
        }
        let quantity = quantity.unsigned_abs();

        match self.position(product.id()) {
            Some(idx) => {
                let current = self.lines[idx].quantity;
                self.lines[idx].quantity = current.checked_add(quantity).ok_or_else(|| {
                    CartError::InvalidOperation {
                        product: product.name().to_string(),
                        reason: format!("quantity would exceed {}", u64::MAX),
                    }
                })?;
            }
            None => self.lines.push(CartLine {
                product: Rc::clone(product),
                quantity,
            }),
        }
        Ok(())
    }

    /// Overwrites the quantity of an existing line. Zero is accepted and the
    /// line stays in the cart.
    pub fn update_quantity(&mut self, product: &ProductRef, new_quantity: i64) -> CartResult<()> {
        if !product.is_available() {
            return Err(CartError::unavailable(product.name()));
        }
        if new_quantity < 0 {
            return Err(CartError::invalid_quantity(product.name(), new_quantity));
        }
        let quantity = new_quantity.unsigned_abs();

        let idx = self
            .position(product.id())
            .ok_or_else(|| CartError::not_found(product.name()))?;
        self.lines[idx].quantity = quantity;
        Ok(())
    }

    pub fn remove_item(&mut self, product: &ProductRef) -> CartResult<()> {
        let idx = self
            .position(product.id())
            .ok_or_else(|| CartError::not_found(product.name()))?;
        self.lines.remove(idx);
        Ok(())
    }

    /// Sum of price * quantity over all lines, read through the products now.
    pub fn calculate_total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.subtotal()))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> + '_ {
        self.lines.iter()
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<u64> {
        self.position(id).map(|idx| self.lines[idx].quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product.id() == id)
    }
}
