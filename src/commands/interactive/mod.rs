//! Interactive command module
//!
//! Runs the catalog menu against a fresh startup inventory.

mod console;
mod menu;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use tracing::info;

use console::{ScriptedConsole, TerminalConsole};
use menu::MenuSession;

use super::context::AppContext;
use crate::ui::theme::prompt_theme;

pub fn cmd_interactive(ctx: &AppContext) -> Result<()> {
    if ctx.json {
        bail!("the interactive menu has no JSON mode; use `stockroom list --json`");
    }

    let mut inventory = ctx.inventory();
    let use_terminal =
        !ctx.plain && std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    info!(terminal = use_terminal, products = inventory.len(), "starting menu");

    if use_terminal {
        let console = TerminalConsole::new(prompt_theme(ctx.color));
        MenuSession::new(&mut inventory, console, ctx.currency())
            .with_color(ctx.color)
            .run()
    } else {
        let console = ScriptedConsole::new(std::io::stdin().lock(), std::io::stdout().lock());
        MenuSession::new(&mut inventory, console, ctx.currency())
            .with_color(ctx.color)
            .run()
    }
}
