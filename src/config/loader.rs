//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{StockroomError, StockroomResult};

use super::types::{ColorMode, Config, Verbosity};
use super::PROJECT_CONFIG_FILE;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StockroomResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> StockroomResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StockroomError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // TOML admits `nan` and `inf`; the menu never lets those in either.
    if let Some(spec) = config
        .catalog
        .products
        .iter()
        .find(|spec| !spec.price().is_finite())
    {
        return Err(StockroomError::InvalidConfig {
            file: path.to_path_buf(),
            message: format!(
                "product '{}' (id {}) has a non-finite price",
                spec.name(),
                spec.id()
            ),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick a config file, load it and apply env overrides.
pub fn discover(
    explicit: Option<&Path>,
    cwd: &Path,
) -> StockroomResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match candidate_path(explicit, cwd)? {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => {
            debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok((with_env_overrides(config), warnings))
}

fn candidate_path(explicit: Option<&Path>, cwd: &Path) -> StockroomResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(StockroomError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let project_config = cwd.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        return Ok(Some(project_config));
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("stockroom/config.toml");
        if user_config.exists() {
            return Ok(Some(user_config));
        }
    }

    Ok(None)
}

/// Apply environment variable overrides (STOCKROOM_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // STOCKROOM_SEED
    if let Some(val) = lookup("STOCKROOM_SEED") {
        config.catalog.seed = val.to_lowercase() != "false" && val != "0";
    }

    // STOCKROOM_CURRENCY
    if let Some(currency) = lookup("STOCKROOM_CURRENCY") {
        config.output.currency = currency;
    }

    // STOCKROOM_COLOR
    if let Some(color) = lookup("STOCKROOM_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // STOCKROOM_VERBOSITY
    if let Some(verbosity) = lookup("STOCKROOM_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "catalog",
        "seed",
        "products",
        "kind",
        "name",
        "category",
        "price",
        "quantity",
        "id",
        "expiry_date",
        "brand",
        "output",
        "currency",
        "color",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
pub(super) fn parse_for_test(content: &str) -> StockroomResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new("stockroom.toml"))
}
