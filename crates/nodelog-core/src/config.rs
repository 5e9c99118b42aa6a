//! Configuration types for nodelog.
//!
//! [`LoggerConfig::load_from`] layers an optional TOML file and `NODELOG_*`
//! environment variables on top of the embedded defaults.
//! [`LoggerConfig::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use crate::console::Palette;
use crate::facade::FacadeBuilder;
use crate::registry;
use crate::{LogFacade, LogLevel};
use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

// `node_name` is left to `default_node_name` so it always matches the
// registry's fallback facade.
const DEFAULT_CONFIG: &str = r#"
[logger]
min_level      = "debug"
local_output   = true
sequence_start = 0

[console]
color = true

[console.colors]
debug = "cyan"
info  = "green"
warn  = "yellow"
error = "red"
fatal = "magenta"
"#;

/// Prefix for environment overrides, e.g. `NODELOG_LOGGER__MIN_LEVEL=warn`.
const ENV_PREFIX: &str = "NODELOG";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level logger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub logger: LoggerSection,
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// `[logger]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerSection {
    #[serde(default = "default_node_name")]
    pub node_name: String,
    #[serde(default = "default_min_level")]
    pub min_level: LogLevel,
    #[serde(default = "default_local_output")]
    pub local_output: bool,
    #[serde(default)]
    pub sequence_start: u32,
}

fn default_node_name() -> String { registry::DEFAULT_NODE_NAME.to_string() }
fn default_min_level() -> LogLevel { LogLevel::Debug }
fn default_local_output() -> bool { true }

impl Default for LoggerSection {
    fn default() -> Self {
        Self {
            node_name: default_node_name(),
            min_level: default_min_level(),
            local_output: default_local_output(),
            sequence_start: 0,
        }
    }
}

/// `[console]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub colors: ColorsConfig,
}

fn default_color() -> bool { true }

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            colors: ColorsConfig::default(),
        }
    }
}

/// `[console.colors]` section: one colour name per level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorsConfig {
    #[serde(default = "default_debug_color")]
    pub debug: String,
    #[serde(default = "default_info_color")]
    pub info: String,
    #[serde(default = "default_warn_color")]
    pub warn: String,
    #[serde(default = "default_error_color")]
    pub error: String,
    #[serde(default = "default_fatal_color")]
    pub fatal: String,
}

fn default_debug_color() -> String { "cyan".to_string() }
fn default_info_color() -> String { "green".to_string() }
fn default_warn_color() -> String { "yellow".to_string() }
fn default_error_color() -> String { "red".to_string() }
fn default_fatal_color() -> String { "magenta".to_string() }

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            debug: default_debug_color(),
            info: default_info_color(),
            warn: default_warn_color(),
            error: default_error_color(),
            fatal: default_fatal_color(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl LoggerConfig {
    /// Load `path` (if it exists) and `NODELOG_*` environment overrides,
    /// layered on top of the built-in defaults.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Parse a TOML document layered over the defaults. No environment
    /// overrides are applied.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Palette implied by the `[console]` section.
    pub fn palette(&self) -> Palette {
        if self.console.color {
            Palette::from_colors(&self.console.colors)
        } else {
            Palette::plain()
        }
    }

    /// A facade builder preloaded with this configuration. The transport and
    /// console writer are left for the caller.
    pub fn builder(&self) -> FacadeBuilder {
        LogFacade::builder(self.logger.node_name.clone())
            .min_level(self.logger.min_level)
            .local_output(self.logger.local_output)
            .sequence_start(self.logger.sequence_start)
            .palette(self.palette())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
