use serde::{Deserialize, Serialize};

use storefront_core::{Money, ProductName, ValueObject};

/// One unit of a product in the cart, paid or free.
///
/// The unit price is copied when the line is created, so later catalog changes
/// never alter lines already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product: ProductName,
    unit_price: Money,
    is_free: bool,
}

impl CartLine {
    pub fn paid(product: ProductName, unit_price: Money) -> Self {
        Self {
            product,
            unit_price,
            is_free: false,
        }
    }

    pub fn free(product: ProductName, unit_price: Money) -> Self {
        Self {
            product,
            unit_price,
            is_free: true,
        }
    }

    pub fn product(&self) -> &ProductName {
        &self.product
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn is_free(&self) -> bool {
        self.is_free
    }

    pub fn is_paid(&self) -> bool {
        !self.is_free
    }

    pub fn is_for(&self, name: &str) -> bool {
        self.product.as_str() == name
    }
}

impl ValueObject for CartLine {}
