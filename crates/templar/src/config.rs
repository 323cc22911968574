//! # Configuration
//!
//! CLI settings are loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Resolved in priority order:
//! 1. **Environment variables**: `TEMPLAR_CHANNEL`, `TEMPLAR_INDENT`, `TEMPLAR_REQUIRE_RECORDS`.
//! 2. **Explicit file**: `--config <FILE>` (must exist).
//! 3. **Project Config**: `./templar.toml`.
//! 4. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Command-line flags override all of the above.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `channel` | `api_visible` | Channel used by `templar project` without `--channel` |
//! | `indent` | `4` | JSON indent width; `0` prints compact JSON |
//! | `require_records` | `false` | Fail when a projection has no records to project |

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use templar_core::Channel;

pub const CONFIG_FILE_NAME: &str = "templar.toml";

/// Configuration for templar, stored in `templar.toml`.
#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TemplarConfig {
    /// Channel to project on when none is given on the command line
    #[config(default = "api_visible", env = "TEMPLAR_CHANNEL")]
    pub channel: String,

    /// Indent width for JSON output; 0 means compact
    #[config(default = 4, env = "TEMPLAR_INDENT")]
    pub indent: usize,

    /// Treat an empty record selection as an error
    #[config(default = false, env = "TEMPLAR_REQUIRE_RECORDS")]
    pub require_records: bool,
}

impl Default for TemplarConfig {
    fn default() -> Self {
        Self {
            channel: "api_visible".to_string(),
            indent: 4,
            require_records: false,
        }
    }
}

impl TemplarConfig {
    /// Load from the standard search path, with an optional explicit file on top.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(explicit, &search_paths())
    }

    /// Load from `explicit` and then each of `search`, highest priority first.
    ///
    /// Files in `search` that don't exist are skipped.
    pub fn load_from(explicit: Option<&Path>, search: &[PathBuf]) -> Result<Self> {
        let mut builder = TemplarConfig::builder().env();
        if let Some(path) = explicit {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            builder = builder.file(path);
        }
        for path in search {
            builder = builder.file(path);
        }
        builder.load().context("failed to load configuration")
    }

    /// The configured channel, resolved against the channel registry.
    pub fn channel(&self) -> templar_core::Result<Channel> {
        Channel::parse(&self.channel)
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dirs) = ProjectDirs::from("", "", "templar") {
        paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    paths
}
