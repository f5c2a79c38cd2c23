//! Configuration management for css-module-types
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CSS_MODULE_TYPES_` prefix)
//! 2. `./css-module-types.toml`, or the file passed with `--config`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # css-module-types.toml
//! src_dir = "app"
//! usage_hint = false
//! ```

use anyhow::{bail, Context};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "css-module-types.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "CSS_MODULE_TYPES_";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory scanned for CSS Modules
    pub src_dir: PathBuf,

    /// Print the import hint after a successful run
    pub usage_hint: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            usage_hint: true,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from defaults, `./css-module-types.toml` and the environment
    ///
    /// A missing config file is fine; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an environment variable holds an invalid value.
    pub fn load() -> anyhow::Result<Self> {
        Self::figment(Path::new(CONFIG_FILE))
            .extract()
            .context("Failed to load configuration")
    }

    /// Load configuration from a specific file, still honoring environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or holds invalid values.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }

        Self::figment(path)
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
