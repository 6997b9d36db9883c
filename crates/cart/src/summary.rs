//! Per-product view of the cart, as a storefront lists it.

use serde::Serialize;

use storefront_core::{Money, ProductName};

use crate::cart::Cart;
use crate::totals::CartTotals;

/// One product's row in the cart listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummaryLine {
    pub product: ProductName,
    pub unit_price: Money,
    pub paid: usize,
    pub free: usize,
    /// Price of the paid units only.
    pub line_subtotal: Money,
}

impl CartSummaryLine {
    pub fn quantity(&self) -> usize {
        self.paid + self.free
    }

    pub fn has_free_units(&self) -> bool {
        self.free > 0
    }
}

/// Cart grouped by product, in order of each product's first line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartSummaryLine>,
    pub totals: CartTotals,
}

impl CartSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        let mut lines: Vec<CartSummaryLine> = Vec::new();

        for line in cart.lines() {
            let position = match lines.iter().position(|row| row.product == *line.product()) {
                Some(position) => position,
                None => {
                    lines.push(CartSummaryLine {
                        product: line.product().clone(),
                        unit_price: line.unit_price(),
                        paid: 0,
                        free: 0,
                        line_subtotal: Money::ZERO,
                    });
                    lines.len() - 1
                }
            };

            let row = &mut lines[position];
            if line.is_free() {
                row.free += 1;
            } else {
                row.paid += 1;
                row.line_subtotal += line.unit_price();
            }
        }

        Self {
            lines,
            totals: CartTotals::from_lines(cart.lines()),
        }
    }

    /// Drives the empty-cart view and hides checkout.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, name: &str) -> Option<&CartSummaryLine> {
        self.lines.iter().find(|row| row.product.as_str() == name)
    }
}
