//! Generator configuration
//!
//! A run is configured by [`GeneratorConfig`]. The defaults reproduce the fixed
//! behavior of the generator (marker `apigen:api`, credential header `X-Auth`
//! compared against `100500`, generated code importing `apigen::runtime`).
//!
//! The CLI takes no flags; instead an optional `apigen.toml` sitting next to the
//! input file is picked up automatically:
//!
//! ```toml
//! auth_header = "X-Api-Key"
//! auth_token = "s3cr3t"
//! required_with_default = "required-first"
//! required_int = "presence"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up alongside the input source
pub const CONFIG_FILE_NAME: &str = "apigen.toml";

/// What to do when a field is tagged both `required` and `default=...`
///
/// A required field cannot be silently defaulted, so the combination is
/// ambiguous. It is rejected unless explicitly opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequiredDefaultPolicy {
    /// Abort generation
    #[default]
    Reject,
    /// Check `required` on the raw value first; the default never applies
    RequiredFirst,
}

/// How `required` is checked on integer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequiredIntPolicy {
    /// A parsed zero counts as unset, so `0` fails a required check
    #[default]
    ZeroIsUnset,
    /// The raw parameter must be present and non-empty; zero is a legal value
    Presence,
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix identifying a routing annotation in a method doc comment
    pub marker: String,
    /// Header carrying the credential checked by `"auth": true` handlers
    pub auth_header: String,
    /// Expected credential value
    pub auth_token: String,
    /// Path of the runtime module imported by generated code
    pub runtime_path: String,
    /// Handling of `required` combined with `default`
    pub required_with_default: RequiredDefaultPolicy,
    /// Handling of `required` on integer fields
    pub required_int: RequiredIntPolicy,
    /// Run `rustfmt` over the written file
    pub format_output: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker: "apigen:api".to_string(),
            auth_header: "X-Auth".to_string(),
            auth_token: "100500".to_string(),
            runtime_path: "apigen::runtime".to_string(),
            required_with_default: RequiredDefaultPolicy::default(),
            required_int: RequiredIntPolicy::default(),
            format_output: true,
        }
    }
}

/// Load a generator config from a TOML file
///
/// Returns `Ok(None)` if the file doesn't exist and an error if it exists but
/// fails to parse.
pub fn load_generator_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!("Failed to read generator config: {}", config_path.display())
    })?;

    let config: GeneratorConfig = toml::from_str(&contents).with_context(|| {
        format!("Failed to parse generator config: {}", config_path.display())
    })?;

    Ok(Some(config))
}

/// Look for `apigen.toml` in the same directory as the input source
pub fn detect_config_path(input_path: &Path) -> Option<PathBuf> {
    let dir = match input_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the config for an input file: the sidecar if present, else defaults
pub fn resolve_config(input_path: &Path) -> anyhow::Result<GeneratorConfig> {
    match detect_config_path(input_path) {
        Some(path) => {
            tracing::info!(config = %path.display(), "using generator config");
            Ok(load_generator_config(&path)?.unwrap_or_default())
        }
        None => Ok(GeneratorConfig::default()),
    }
}
