use anyhow::Result;
use serde_json::json;
use stockroom::Listing;

use super::context::AppContext;
use crate::ui::json::{emit, product_json};
use crate::ui::text::ColoredText;

pub fn cmd_list(ctx: &AppContext, sorted: bool) -> Result<()> {
    let mut inventory = ctx.inventory();
    if sorted {
        inventory.sort_by_price();
    }

    let listing = inventory.display_all();

    if ctx.json {
        let products: Vec<serde_json::Value> = inventory.iter().map(product_json).collect();
        emit(json!({
            "event": "list",
            "sorted": sorted,
            "count": listing.len(),
            "products": products,
        }))?;
        return Ok(());
    }

    match listing {
        Listing::Empty => {
            let message = listing.render(ctx.currency());
            println!("{}", ColoredText::info(message.trim_end()).render(ctx.color));
        }
        Listing::Products(_) => print!("{}", listing.render(ctx.currency())),
    }

    Ok(())
}
