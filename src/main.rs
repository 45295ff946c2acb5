//! Stockroom CLI - in-memory inventory catalog manager
//!
//! Usage: stockroom [COMMAND]
//!
//! Commands:
//!   menu    Interactive menu (default)
//!   list    Print the startup catalog
//!   search  Look up a product by exact name

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};
use commands::context::AppContext;
use ui::text::ColoredText;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        let message = ColoredText::error(format!("Error: {:#}", err));
        eprintln!("{}", message.render(std::io::stderr().is_terminal()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let ctx = AppContext::from_cli(&cli, &cwd)?;
    logging::init(cli.verbose, ctx.config.output.verbosity, ctx.color);
    tracing::debug!(config = ?ctx.config, "configuration resolved");

    match cli.command {
        None | Some(Commands::Menu) => commands::interactive::cmd_interactive(&ctx),
        Some(Commands::List { sorted }) => commands::list::cmd_list(&ctx, sorted),
        Some(Commands::Search { name }) => commands::search::cmd_search(&ctx, &name),
    }
}
