//! Property tests for inventory ordering and removal.

use proptest::prelude::*;

use stockroom::{Inventory, Product};

/// (price in cents, id) pairs; small id range forces duplicates.
fn catalog() -> impl Strategy<Value = Vec<(u32, i64)>> {
    proptest::collection::vec((0u32..5_000, 0i64..20), 0..24)
}

fn build(entries: &[(u32, i64)]) -> Inventory {
    entries
        .iter()
        .enumerate()
        .map(|(i, &(cents, id))| {
            let price = f64::from(cents) / 100.0;
            if i % 2 == 0 {
                Product::food(format!("item{}", i), "Food", price, 1, id, "2024-01-01")
            } else {
                Product::electronics(format!("item{}", i), "Electronics", price, 1, id, "Acme")
            }
        })
        .collect()
}

fn names(inventory: &Inventory) -> Vec<String> {
    inventory.iter().map(|p| p.name().to_string()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after sorting, prices never decrease.
    #[test]
    fn property_sorted_prices_are_non_decreasing(entries in catalog()) {
        let mut inventory = build(&entries);
        inventory.sort_by_price();

        let prices: Vec<f64> = inventory.iter().map(|p| p.price().amount()).collect();
        for pair in prices.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{} before {}", pair[0], pair[1]);
        }
    }

    /// PROPERTY: sorting is idempotent and stable.
    #[test]
    fn property_sort_is_idempotent(entries in catalog()) {
        let mut once = build(&entries);
        once.sort_by_price();

        let mut twice = once.clone();
        twice.sort_by_price();

        prop_assert_eq!(names(&once), names(&twice));
    }

    /// PROPERTY: removing drops exactly the first matching id, or nothing.
    #[test]
    fn property_remove_takes_first_match_only(entries in catalog(), target in 0i64..20) {
        let mut inventory = build(&entries);
        let before = names(&inventory);
        let first = inventory.iter().position(|p| p.id() == target);

        let outcome = inventory.remove_product(target);

        match first {
            Some(index) => {
                prop_assert!(outcome.is_removed());
                let mut expected = before.clone();
                expected.remove(index);
                prop_assert_eq!(names(&inventory), expected);
            }
            None => {
                prop_assert!(!outcome.is_removed());
                prop_assert_eq!(names(&inventory), before);
            }
        }
    }

    /// PROPERTY: display-all yields one block per product.
    #[test]
    fn property_listing_has_one_block_per_product(entries in catalog()) {
        let inventory = build(&entries);
        let listing = inventory.display_all();

        prop_assert_eq!(listing.len(), entries.len());
        prop_assert_eq!(listing.is_empty(), entries.is_empty());
        let rendered = listing.render("$");
        prop_assert_eq!(rendered.matches("Product Name: ").count(), entries.len());
    }
}
