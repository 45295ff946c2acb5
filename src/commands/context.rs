//! State shared by every command: resolved config and output settings.

use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use stockroom::config::{ColorMode, Config};
use stockroom::{build_inventory, Inventory};

use crate::cli::{Cli, ColorWhen};
use crate::ui::output::print_config_warnings;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub json: bool,
    pub color: bool,
    pub plain: bool,
}

impl AppContext {
    /// Load config and fold CLI flags over it.
    pub fn from_cli(cli: &Cli, cwd: &Path) -> Result<Self> {
        let (mut config, warnings) = Config::discover(cli.config.as_deref(), cwd)
            .context("failed to load configuration")?;

        if cli.no_seed {
            config.catalog.seed = false;
        }

        let color = resolve_color(cli.color, config.output.color, std::io::stdout().is_terminal());

        if !warnings.is_empty() && !cli.json {
            let path = warnings[0].file.clone();
            print_config_warnings(&path, &warnings, color);
        }

        Ok(Self {
            config,
            json: cli.json,
            color,
            plain: cli.plain,
        })
    }

    pub fn currency(&self) -> &str {
        &self.config.output.currency
    }

    /// Fresh startup inventory for this run.
    pub fn inventory(&self) -> Inventory {
        build_inventory(&self.config.catalog)
    }
}

pub fn resolve_color(cli: Option<ColorWhen>, config: ColorMode, is_tty: bool) -> bool {
    match cli {
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Auto) | None => match config {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => is_tty && std::env::var_os("NO_COLOR").is_none(),
        },
    }
}
