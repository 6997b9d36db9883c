use serde::Serialize;

use storefront_core::Money;

use crate::line::CartLine;

/// Aggregate money figures for the whole cart.
///
/// `subtotal` prices every line, `savings` the free lines, `total` the paid
/// lines; `subtotal == savings + total` by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub savings: Money,
    pub total: Money,
}

impl CartTotals {
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Self {
        lines.into_iter().fold(Self::default(), |mut totals, line| {
            totals.subtotal += line.unit_price();
            if line.is_free() {
                totals.savings += line.unit_price();
            } else {
                totals.total += line.unit_price();
            }
            totals
        })
    }

    pub fn is_balanced(&self) -> bool {
        self.subtotal == self.savings + self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductName;

    fn pears(is_free: bool) -> CartLine {
        let name = ProductName::new("Pears").unwrap();
        if is_free {
            CartLine::free(name, Money::from_cents(239))
        } else {
            CartLine::paid(name, Money::from_cents(239))
        }
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let totals = CartTotals::from_lines(std::iter::empty());
        assert_eq!(totals, CartTotals::default());
        assert!(totals.is_balanced());
    }

    #[test]
    fn free_lines_count_as_savings() {
        let lines = vec![pears(false), pears(false), pears(true), pears(false)];
        let totals = CartTotals::from_lines(&lines);

        assert_eq!(totals.subtotal, Money::from_cents(956));
        assert_eq!(totals.savings, Money::from_cents(239));
        assert_eq!(totals.total, Money::from_cents(717));
        assert!(totals.is_balanced());
    }
}
