//! Promotion rules: how many free units a product's paid units earn.
//!
//! Every rule is a `match` over [`Promotion`], so adding a promotion kind fails
//! to compile until it is handled here.

use storefront_inventory::Promotion;

/// Whether the paid unit just added completes a reward under any promotion.
///
/// Buy-two-get-one-free rewards each completed pair: the paid count is
/// positive and even.
pub fn earns_free_unit(promotions: &[Promotion], paid: usize) -> bool {
    promotions.iter().any(|promotion| match promotion {
        Promotion::BuyTwoGetOneFree => paid > 0 && paid % 2 == 0,
    })
}

/// Upper bound on free units `paid` paid units can support.
///
/// Zero for products without a free-unit promotion.
pub fn max_free_units(promotions: &[Promotion], paid: usize) -> usize {
    promotions
        .iter()
        .map(|promotion| match promotion {
            Promotion::BuyTwoGetOneFree => paid / 2,
        })
        .max()
        .unwrap_or(0)
}
