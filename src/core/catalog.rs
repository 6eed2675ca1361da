use crate::domain::model::{Product, ProductId, ProductRef, ProductSpec};
use crate::utils::error::{AppError, Result};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Known products keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: BTreeMap<ProductId, ProductRef>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and blank names.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for product in products {
            if product.name().trim().is_empty() {
                return Err(AppError::CatalogError {
                    message: format!("product {} has an empty name", product.id()),
                });
            }
            let id = product.id();
            if map.insert(id, Rc::new(product)).is_some() {
                return Err(AppError::CatalogError {
                    message: format!("duplicate product id {}", id),
                });
            }
        }
        Ok(Self { products: map })
    }

    pub fn from_specs(specs: &[ProductSpec]) -> Result<Self> {
        Self::new(specs.iter().map(Product::from))
    }

    /// Laptop and HeadPhone, the catalog used when no config file is given.
    pub fn default_products() -> Self {
        let products = [
            (1, "Laptop", 1000),
            (2, "HeadPhone", 50),
        ]
        .into_iter()
        .map(|(id, name, price)| (id, Rc::new(Product::new(id, name, price, true))))
        .collect();
        Self { products }
    }

    pub fn get(&self, id: ProductId) -> Result<ProductRef> {
        self.products
            .get(&id)
            .cloned()
            .ok_or(AppError::UnknownProduct { id })
    }

    /// Products in ascending id order.
    pub fn products(&self) -> impl Iterator<Item = &ProductRef> + '_ {
        self.products.values()
    }

    /// Flips availability; lines already in carts see the change.
    pub fn set_availability(&self, id: ProductId, available: bool) -> Result<()> {
        self.get(id)?.set_available(available);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
