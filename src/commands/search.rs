use anyhow::Result;
use serde_json::json;
use stockroom::SearchOutcome;

use super::context::AppContext;
use crate::ui::json::{emit, product_json};
use crate::ui::text::ColoredText;

pub fn cmd_search(ctx: &AppContext, name: &str) -> Result<()> {
    let inventory = ctx.inventory();
    let outcome = inventory.search_product(name);

    if ctx.json {
        let product = outcome.product().map(product_json);
        let found = product.is_some();
        emit(json!({
            "event": "search",
            "name": name,
            "found": found,
            "product": product,
        }))?;
        return Ok(());
    }

    let rendered = outcome.render(ctx.currency());
    match outcome {
        SearchOutcome::Found(_) => print!("{}", rendered),
        SearchOutcome::NotFound { .. } => {
            println!("{}", ColoredText::warning(rendered.trim_end()).render(ctx.color))
        }
    }

    Ok(())
}
