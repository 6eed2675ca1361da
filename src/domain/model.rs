use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub type ProductId = i64;

/// A catalog entry. Everything but availability is fixed at construction;
/// availability sits in a `Cell` so the catalog can toggle it while carts
/// still hold the same shared product.
#[derive(Debug)]
pub struct Product {
    id: ProductId,
    name: String,
    price: u64,
    available: Cell<bool>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: u64, available: bool) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            available: Cell::new(available),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.available.get()
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: ${}, Available: {}",
            self.id,
            self.name,
            self.price,
            self.is_available()
        )
    }
}

/// Shared handle to a catalog product.
pub type ProductRef = Rc<Product>;

/// One product held by a cart together with its quantity.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub(crate) product: ProductRef,
    pub(crate) quantity: u64,
}

impl CartLine {
    pub fn product(&self) -> &ProductRef {
        &self.product
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Price times quantity, using the product's price at call time.
    pub fn subtotal(&self) -> u64 {
        self.product.price().saturating_mul(self.quantity)
    }
}

/// Serializable description of a product, as found in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl From<&ProductSpec> for Product {
    fn from(spec: &ProductSpec) -> Self {
        Product::new(spec.id, spec.name.clone(), spec.price, spec.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_display() {
        let laptop = Product::new(1, "Laptop", 1000, true);
        assert_eq!(
            laptop.to_string(),
            "ID: 1, Name: Laptop, Price: $1000, Available: true"
        );
    }

    #[test]
    fn test_availability_is_visible_through_shared_handles() {
        let product: ProductRef = Rc::new(Product::new(2, "HeadPhone", 50, true));
        let other = Rc::clone(&product);
        other.set_available(false);
        assert!(!product.is_available());
    }

    #[test]
    fn test_line_subtotal() {
        let line = CartLine {
            product: Rc::new(Product::new(1, "Laptop", 1000, true)),
            quantity: 3,
        };
        assert_eq!(line.subtotal(), 3000);
    }
}
