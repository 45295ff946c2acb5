use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Stockroom - in-memory inventory catalog manager
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'stockroom' without arguments for the interactive menu.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Config file (defaults to ./stockroom.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty catalog instead of the sample products
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Use numbered text prompts even on a terminal
    #[arg(long, global = true)]
    pub plain: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Print every product in the startup catalog
    List {
        /// Sort by ascending price first
        #[arg(long)]
        sorted: bool,
    },

    /// Look up a product by exact name
    Search {
        /// Product name (case-sensitive, exact match)
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command_is_interactive() {
        let cli = Cli::try_parse_from(["stockroom"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_list_sorted() {
        let cli = Cli::try_parse_from(["stockroom", "list", "--sorted"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { sorted: true })));
    }

    #[test]
    fn test_cli_search_takes_name() {
        let cli = Cli::try_parse_from(["stockroom", "search", "laptop", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Search { name }) => assert_eq!(name, "laptop"),
            other => panic!("expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from([
            "stockroom",
            "--color",
            "never",
            "--no-seed",
            "-vv",
            "menu",
            "--plain",
        ])
        .unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
        assert!(cli.no_seed);
        assert!(cli.plain);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Menu)));
    }
}
