use serde::Serialize;

use crate::line::CartLine;

/// Paid/free line counts for one product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub paid: usize,
    pub free: usize,
}

impl LineCounts {
    pub fn total(self) -> usize {
        self.paid + self.free
    }
}

/// Ordered sequence of cart lines.
///
/// Insertion order is what "most recently added" means for removals. Lines can
/// only be added or removed through the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines for one product, oldest first.
    pub fn lines_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CartLine> + 'a {
        self.lines.iter().filter(move |line| line.is_for(name))
    }

    pub fn counts(&self, name: &str) -> LineCounts {
        self.lines_for(name).fold(LineCounts::default(), |mut counts, line| {
            if line.is_free() {
                counts.free += 1;
            } else {
                counts.paid += 1;
            }
            counts
        })
    }

    /// Number of units of the product in the cart, paid and free.
    pub fn quantity(&self, name: &str) -> usize {
        self.lines_for(name).count()
    }

    pub(crate) fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Remove the most recently inserted line for `name` that satisfies `matches`.
    pub(crate) fn remove_last(
        &mut self,
        name: &str,
        matches: impl Fn(&CartLine) -> bool,
    ) -> Option<CartLine> {
        let position = self
            .lines
            .iter()
            .rposition(|line| line.is_for(name) && matches(line))?;
        Some(self.lines.remove(position))
    }

    /// Remove every line for `name`, keeping the relative order of the rest.
    pub(crate) fn remove_all(&mut self, name: &str) -> Vec<CartLine> {
        let (removed, kept): (Vec<CartLine>, Vec<CartLine>) = std::mem::take(&mut self.lines)
            .into_iter()
            .partition(|line| line.is_for(name));
        self.lines = kept;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Money, ProductName};

    fn paid(name: &str) -> CartLine {
        CartLine::paid(ProductName::new(name).unwrap(), Money::from_cents(100))
    }

    fn free(name: &str) -> CartLine {
        CartLine::free(ProductName::new(name).unwrap(), Money::from_cents(100))
    }

    fn cart(lines: Vec<CartLine>) -> Cart {
        let mut cart = Cart::new();
        for line in lines {
            cart.push(line);
        }
        cart
    }

    #[test]
    fn counts_split_paid_and_free_per_product() {
        let cart = cart(vec![paid("Pears"), paid("Apples"), paid("Pears"), free("Pears")]);
        assert_eq!(cart.counts("Pears"), LineCounts { paid: 2, free: 1 });
        assert_eq!(cart.counts("Apples"), LineCounts { paid: 1, free: 0 });
        assert_eq!(cart.counts("Kiwis"), LineCounts::default());
        assert_eq!(cart.quantity("Pears"), 3);
    }

    #[test]
    fn remove_last_picks_the_latest_matching_line() {
        let mut cart = cart(vec![
            paid("Pears"),
            paid("Pears"),
            free("Pears"),
            paid("Apples"),
            paid("Pears"),
        ]);

        let removed = cart.remove_last("Pears", CartLine::is_free).unwrap();
        assert!(removed.is_free());
        assert_eq!(cart.len(), 4);

        let removed = cart.remove_last("Pears", |_| true).unwrap();
        assert!(removed.is_paid());
        assert_eq!(cart.lines().last().unwrap(), &paid("Apples"));
    }

    #[test]
    fn remove_last_returns_none_without_a_match() {
        let mut cart = cart(vec![paid("Pears")]);
        assert!(cart.remove_last("Pears", CartLine::is_free).is_none());
        assert!(cart.remove_last("Apples", |_| true).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn remove_all_keeps_other_products_in_order() {
        let mut cart = cart(vec![paid("Oranges"), paid("Pears"), paid("Apples"), free("Pears")]);
        let removed = cart.remove_all("Pears");

        assert_eq!(removed.len(), 2);
        assert_eq!(cart.lines(), &[paid("Oranges"), paid("Apples")]);
    }
}
