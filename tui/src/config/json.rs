use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::model::ConfigDraft;

pub const DEFAULT_CONFIG_PATH: &str = "regviz.json";
pub const CONFIG_ENV: &str = "REGVIZ_CONFIG";

/// Picks the config file to load.
///
/// An explicit path wins over the `REGVIZ_CONFIG` variable, and both win over a
/// `regviz.json` in the working directory. `None` means the built-in defaults apply.
pub fn resolve_path(arg: Option<String>, env_var: Option<String>) -> Option<PathBuf> {
    arg.or(env_var)
        .map(PathBuf::from)
        .or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            default.is_file().then_some(default)
        })
}

/// Resolves the config path from the process arguments and environment.
pub fn resolve_from_env() -> Option<PathBuf> {
    resolve_path(env::args().nth(1), env::var(CONFIG_ENV).ok())
}

/// Parses a [`ConfigDraft`] from JSON text. Missing fields take their defaults.
///
/// # Errors
/// Returns an error on malformed JSON or unknown fields.
pub fn parse(content: &str) -> Result<ConfigDraft> {
    serde_json::from_str(content).context("invalid config JSON")
}

/// Loads a [`ConfigDraft`] from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<ConfigDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config '{}'", path.display()))?;

    parse(&content).with_context(|| format!("in config '{}'", path.display()))
}
