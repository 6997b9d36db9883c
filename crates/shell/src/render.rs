//! Plain-text rendering of the storefront view.
//!
//! Every render starts from engine state; nothing is patched incrementally.

use std::fmt::Write;

use storefront_cart::{Cart, CartSummary, CartSummaryLine, CartTotals};
use storefront_inventory::Product;

pub const EMPTY_CART: &str = "Your cart is empty.";

/// One inventory entry with its cart controls.
pub fn inventory_item(product: &Product, quantity_in_cart: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.name());
    let _ = writeln!(out, "  Price: {}", product.unit_price());
    let _ = writeln!(out, "  Stock: {}", product.stock());
    if !product.promotions().is_empty() {
        let codes: Vec<&str> = product.promotions().iter().map(|p| p.code()).collect();
        let _ = writeln!(out, "  Available coupons: {}", codes.join(", "));
    }

    let controls = if quantity_in_cart == 0 {
        if product.is_in_stock() {
            "[Add to Cart]".to_string()
        } else {
            "Out of Stock".to_string()
        }
    } else {
        let plus = if product.is_in_stock() { "[+]" } else { "[+ disabled]" };
        format!("[-] {quantity_in_cart} {plus} [Remove]")
    };
    let _ = write!(out, "  {controls}");
    out
}

pub fn inventory(products: &[Product], cart: &Cart) -> String {
    products
        .iter()
        .map(|product| inventory_item(product, cart.quantity(product.name().as_str())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Pears x 3 (@ $2.39 each) (Paid: 2, Free: 1) - Subtotal: $4.78`
pub fn cart_line(line: &CartSummaryLine) -> String {
    let mut text = format!(
        "{} x {} (@ {} each)",
        line.product,
        line.quantity(),
        line.unit_price
    );
    if line.has_free_units() {
        let _ = write!(text, " (Paid: {}, Free: {})", line.paid, line.free);
    }
    let _ = write!(text, " - Subtotal: {}", line.line_subtotal);
    text
}

pub fn cart(summary: &CartSummary) -> String {
    if summary.is_empty() {
        return EMPTY_CART.to_string();
    }
    summary
        .lines
        .iter()
        .map(cart_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Totals block; the checkout prompt only shows for a non-empty cart.
pub fn totals(totals: &CartTotals, cart_is_empty: bool) -> String {
    let mut out = format!(
        "Subtotal: {}\nSavings: {}\nTotal: {}",
        totals.subtotal, totals.savings, totals.total
    );
    if !cart_is_empty {
        out.push_str("\nReady to check out.");
    }
    out
}

/// The full page: inventory, cart, summary.
pub fn storefront(products: &[Product], cart_state: &Cart) -> String {
    let summary = CartSummary::from_cart(cart_state);
    format!(
        "== Inventory ==\n{}\n\n== Cart ==\n{}\n\n== Summary ==\n{}\n",
        inventory(products, cart_state),
        cart(&summary),
        totals(&summary.totals, summary.is_empty()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_cart::CartEngine;
    use storefront_inventory::CatalogConfig;

    fn engine() -> CartEngine {
        CartEngine::new(CatalogConfig::default_catalog().into_store().unwrap())
    }

    #[test]
    fn fresh_inventory_offers_add_buttons() {
        let engine = engine();
        let pears = engine.product("Pears").unwrap();
        let text = inventory_item(pears, 0);

        assert!(text.starts_with("Pears\n"));
        assert!(text.contains("Price: $2.39"));
        assert!(text.contains("Stock: 7"));
        assert!(text.contains("Available coupons: B2GO"));
        assert!(text.ends_with("[Add to Cart]"));

        let apples = engine.product("Apples").unwrap();
        assert!(!inventory_item(apples, 0).contains("coupons"));
    }

    #[test]
    fn sold_out_products_disable_adding() {
        let mut engine = engine();
        engine.add_unit("Apples").unwrap();
        let apples = engine.product("Apples").unwrap();
        assert!(inventory_item(apples, 1).ends_with("[-] 1 [+ disabled] [Remove]"));
        assert!(inventory_item(apples, 0).ends_with("Out of Stock"));
    }

    #[test]
    fn cart_lines_show_free_units_and_paid_subtotal() {
        let mut engine = engine();
        engine.add_unit("Pears").unwrap();
        engine.add_unit("Pears").unwrap();
        engine.add_unit("Oranges").unwrap();

        let text = cart(&engine.summary());
        assert_eq!(
            text,
            "Pears x 3 (@ $2.39 each) (Paid: 2, Free: 1) - Subtotal: $4.78\n\
             Oranges x 1 (@ $1.25 each) - Subtotal: $1.25"
        );
    }

    #[test]
    fn empty_cart_hides_checkout() {
        let engine = engine();
        let page = storefront(engine.products(), engine.cart());
        assert!(page.contains(EMPTY_CART));
        assert!(page.contains("Subtotal: $0.00\nSavings: $0.00\nTotal: $0.00"));
        assert!(!page.contains("check out"));
    }

    #[test]
    fn summary_lists_all_three_figures() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.add_unit("Pears").unwrap();
        }
        let text = totals(&engine.compute_totals(), false);
        assert_eq!(
            text,
            "Subtotal: $9.56\nSavings: $2.39\nTotal: $7.17\nReady to check out."
        );
    }
}
