use std::collections::HashMap;

use storefront_core::{DomainError, DomainResult, Money, ProductName};

use crate::product::Product;

/// The Inventory Store: the catalog plus live stock counters.
///
/// Products keep their configuration order for listing. Stock is the only
/// mutable field, and only through [`decrement_stock`](Self::decrement_stock),
/// [`increment_stock`](Self::increment_stock) and [`restock`](Self::restock).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    products: Vec<Product>,
    initial_stock: Vec<u32>,
    index: HashMap<ProductName, usize>,
}

impl InventoryStore {
    /// Build a store from products, rejecting duplicate names.
    ///
    /// Also rejects catalogs whose whole stock, priced out, does not fit in
    /// [`Money`]: a cart never holds more than the catalog, so its totals
    /// cannot overflow either.
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        let mut catalog_value = Money::ZERO;
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.name().clone(), position).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate product name: {}",
                    product.name()
                )));
            }
            catalog_value = product
                .unit_price()
                .checked_mul(u64::from(product.stock()))
                .and_then(|value| catalog_value.checked_add(value))
                .ok_or_else(|| {
                    DomainError::validation(format!(
                        "catalog value overflows at {}",
                        product.name()
                    ))
                })?;
        }

        let initial_stock = products.iter().map(Product::stock).collect();
        Ok(Self {
            products,
            initial_stock,
            index,
        })
    }

    /// Look up a product; `None` when the catalog does not carry it.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.index.get(name).map(|&i| &self.products[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Stock the product had when the catalog was loaded.
    pub fn initial_stock(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&i| self.initial_stock[i])
    }

    /// Take one unit out of stock.
    ///
    /// Fails with `OutOfStock` (and leaves stock untouched) when none remain.
    pub fn decrement_stock(&mut self, name: &str) -> DomainResult<()> {
        self.product_mut(name)?.take_one()
    }

    /// Return one unit to stock. There is no upper bound: every returned unit
    /// was previously taken out.
    pub fn increment_stock(&mut self, name: &str) -> DomainResult<()> {
        self.restock(name, 1)
    }

    /// Return `units` units to stock at once.
    pub fn restock(&mut self, name: &str, units: u32) -> DomainResult<()> {
        self.product_mut(name)?.put_back(units);
        Ok(())
    }

    fn product_mut(&mut self, name: &str) -> DomainResult<&mut Product> {
        let position = *self
            .index
            .get(name)
            .ok_or_else(|| DomainError::product_not_found(name))?;
        Ok(&mut self.products[position])
    }
}
