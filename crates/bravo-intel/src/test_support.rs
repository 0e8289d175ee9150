//! Record builders shared by the unit tests.

use std::str::FromStr;

use bravo_core::{Special, SpecialIntel, Store};
use rust_decimal::Decimal;

pub(crate) fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal literal")
}

pub(crate) fn special(store: Store, product_id: &str, name: &str, price: &str) -> Special {
    Special {
        id: None,
        store,
        product_id: product_id.to_string(),
        name: name.to_string(),
        brand: None,
        category: None,
        current_price: dec(price),
        original_price: None,
        discount_pct: None,
        image_url: None,
        product_url: None,
        special_type: None,
        valid_from: None,
        valid_to: None,
        scraped_at: None,
    }
}

pub(crate) fn discounted(store: Store, product_id: &str, pct: i32) -> Special {
    Special {
        discount_pct: Some(pct),
        ..special(store, product_id, "Test Product", "5.00")
    }
}

pub(crate) fn intel(store: Store, product_id: &str, name: &str) -> SpecialIntel {
    SpecialIntel {
        id: None,
        store,
        product_id: product_id.to_string(),
        name: name.to_string(),
        category: None,
        image_url: None,
        avg_frequency_days: None,
        frequency_class: None,
        days_since_last_special: None,
        expected_days_until_next: None,
        is_on_special_now: false,
        last_special_date: None,
        last_discount_pct: None,
        total_times_on_special: 0,
        updated_at: None,
    }
}
