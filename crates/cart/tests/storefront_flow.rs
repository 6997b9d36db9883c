use storefront_cart::{AddOutcome, CartEngine, CartEvent, RemoveOutcome};
use storefront_core::{DomainError, Money};
use storefront_inventory::CatalogConfig;

fn storefront() -> CartEngine {
    let inventory = CatalogConfig::default_catalog()
        .into_store()
        .expect("built-in catalog is valid");
    CartEngine::new(inventory)
}

fn stock(engine: &CartEngine, name: &str) -> u32 {
    engine.product(name).expect("product exists").stock()
}

#[test]
fn shopping_session_end_to_end() {
    let mut engine = storefront();
    let diagnostics = engine.subscribe();

    // Pears: buy two, the third is free.
    engine.add_unit("Pears").unwrap();
    engine.add_unit("Pears").unwrap();
    engine.add_unit("Pears").unwrap();
    assert_eq!(engine.cart_quantity("Pears"), 4);
    assert_eq!((engine.paid_count("Pears"), engine.free_count("Pears")), (3, 1));
    assert_eq!(stock(&engine, "Pears"), 3);

    // Apples: a single unit in stock.
    assert_eq!(engine.add_unit("Apples").unwrap(), AddOutcome::Added);
    assert_eq!(
        engine.add_unit("Apples").unwrap_err(),
        DomainError::out_of_stock("Apples")
    );
    assert_eq!(engine.cart_quantity("Apples"), 1);

    let totals = engine.compute_totals();
    assert_eq!(totals.total, Money::from_cents(717 + 200));
    assert_eq!(totals.savings, Money::from_cents(239));
    assert_eq!(totals.subtotal, Money::from_cents(956 + 200));

    // Empty the pears; apples stay.
    let outcome = engine.remove_all_units("Pears").unwrap();
    assert_eq!(outcome, RemoveOutcome { paid_removed: 3, free_removed: 1 });
    assert_eq!(stock(&engine, "Pears"), 7);
    assert_eq!(engine.cart_quantity("Apples"), 1);

    engine.remove_last_unit("Apples").unwrap();
    assert!(engine.cart().is_empty());
    assert!(engine.summary().is_empty());
    assert_eq!(stock(&engine, "Apples"), 1);
    engine.check_invariants().unwrap();

    let events = diagnostics.drain();
    assert!(events.iter().any(|e| matches!(
        e.payload(),
        CartEvent::OperationRejected { product, .. } if product == "Apples"
    )));
    assert!(events.iter().any(|e| matches!(
        e.payload(),
        CartEvent::ProductCleared { units: 4, .. }
    )));
}

#[test]
fn custom_catalog_from_json() {
    let config = CatalogConfig::from_json_str(
        r#"{ "products": [
            { "name": "Figs", "unit_price": 450, "stock": 2, "coupons": ["B2GO"] }
        ] }"#,
    )
    .unwrap();
    let mut engine = CartEngine::new(config.into_store().unwrap());

    engine.add_unit("Figs").unwrap();
    assert_eq!(engine.add_unit("Figs").unwrap(), AddOutcome::AddedRewardUnavailable);
    assert_eq!(engine.free_count("Figs"), 0);
    assert_eq!(engine.compute_totals().total, Money::from_cents(900));
}

#[test]
fn totals_stay_exact_at_the_largest_loadable_catalog() {
    let price = u64::MAX / 3;
    let json = format!(
        r#"{{ "products": [
            {{ "name": "Gold", "unit_price": {price}, "stock": 3, "coupons": ["B2GO"] }}
        ] }}"#
    );
    let inventory = CatalogConfig::from_json_str(&json).unwrap().into_store().unwrap();
    let mut engine = CartEngine::new(inventory);

    engine.add_unit("Gold").unwrap();
    assert_eq!(engine.add_unit("Gold").unwrap(), AddOutcome::AddedWithFreeUnit);

    let totals = engine.compute_totals();
    assert_eq!(totals.subtotal, Money::from_cents(u64::MAX));
    assert_eq!(totals.savings, Money::from_cents(price));
    assert_eq!(totals.total, Money::from_cents(price * 2));
    assert!(totals.is_balanced());
    assert_eq!(engine.summary().totals, totals);

    let too_rich = json.replace(r#""stock": 3"#, r#""stock": 4"#);
    assert!(CatalogConfig::from_json_str(&too_rich).unwrap().into_store().is_err());
}

#[test]
fn inventory_listing_reflects_live_stock() {
    let mut engine = storefront();
    engine.add_unit("Oranges").unwrap();

    let listing: Vec<(String, u32)> = engine
        .products()
        .iter()
        .map(|p| (p.name().to_string(), p.stock()))
        .collect();
    assert_eq!(
        listing,
        vec![
            ("Oranges".to_string(), 4),
            ("Apples".to_string(), 1),
            ("Pears".to_string(), 7),
        ]
    );
}
