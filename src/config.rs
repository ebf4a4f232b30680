//! Demo scenario settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Environment variables: `RSTREE_*` prefix

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Parameters of the demo scenario: how many random values seed the tree,
/// which range they come from, and which larger range skews it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of random values the initial tree is built from
    pub seed_count: usize,
    /// Lower bound (inclusive) for seed values
    pub value_min: i64,
    /// Upper bound (inclusive) for seed values
    pub value_max: i64,
    /// Number of values inserted to unbalance the tree
    pub skew_count: usize,
    /// Lower bound (inclusive) for skew values
    pub skew_min: i64,
    /// Upper bound (inclusive) for skew values
    pub skew_max: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_count: 20,
            value_min: 1,
            value_max: 100,
            skew_count: 10,
            skew_min: 100,
            skew_max: 200,
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(dirs) = ProjectDirs::from("", "", "rstree") {
            let global = dirs.config_dir().join("rstree.toml");
            builder = builder.add_source(File::from(global).required(false));
        }

        builder
            .add_source(Environment::with_prefix("RSTREE"))
            .build()?
            .try_deserialize()
    }
}
