//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use bravo_core::{Special, SpecialIntel};
use serde_json::{json, Value};

/// Builds a special from a JSON patch over a minimal valid row.
pub fn special(store: &str, product_id: &str, patch: Value) -> Special {
    let mut row = json!({
        "store": store,
        "product_id": product_id,
        "name": format!("Product {product_id}"),
        "current_price": "5.00",
    });
    merge(&mut row, patch);
    serde_json::from_value(row).expect("valid special fixture")
}

/// Builds an intel row from a JSON patch over a minimal valid row.
pub fn intel(store: &str, product_id: &str, patch: Value) -> SpecialIntel {
    let mut row = json!({
        "store": store,
        "product_id": product_id,
        "name": format!("Product {product_id}"),
    });
    merge(&mut row, patch);
    serde_json::from_value(row).expect("valid intel fixture")
}

fn merge(row: &mut Value, patch: Value) {
    if let (Some(row), Value::Object(patch)) = (row.as_object_mut(), patch) {
        row.extend(patch);
    }
}
