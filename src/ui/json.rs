use std::io::{self, Write};

use serde_json::json;
use stockroom::{Product, ProductKind};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// JSON view of a product for `--json` output.
pub fn product_json(product: &Product) -> serde_json::Value {
    let mut value = json!({
        "kind": product.kind().label(),
        "name": product.name(),
        "category": product.category(),
        "price": product.price().amount(),
        "quantity": product.quantity(),
        "id": product.id(),
    });

    match product.kind() {
        ProductKind::Food { expiry_date } => value["expiry_date"] = json!(expiry_date),
        ProductKind::Electronics { brand } => value["brand"] = json!(brand),
    }

    value
}
