use crate::model::date::{self, DateBounds};
use crate::model::selection::DisabledSet;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Persistent picker configuration, stored as JSON.
///
/// All dates are `YYYY-MM-DD` literals; entries that fail the literal
/// format are dropped when the config is turned into runtime constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Month the picker opens on (defaults to today)
    #[serde(default)]
    pub initial_date: Option<String>,
    /// Inclusive lower selection bound
    #[serde(default)]
    pub min_date: Option<String>,
    /// Inclusive upper selection bound
    #[serde(default)]
    pub max_date: Option<String>,
    /// Individual dates excluded from selection
    #[serde(default)]
    pub disabled_dates: Vec<String>,
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".datepick-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// The initial calendar date, falling back to `today` when absent or
    /// malformed.
    pub fn initial_date(&self, today: NaiveDate) -> NaiveDate {
        self.initial_date
            .as_deref()
            .and_then(date::parse_iso)
            .unwrap_or(today)
    }

    /// The `[min, max]` bound; malformed bound strings are dropped.
    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(
            self.min_date.as_deref().and_then(date::parse_iso),
            self.max_date.as_deref().and_then(date::parse_iso),
        )
    }

    /// The runtime disabled set: parseable disabled dates plus the bounds.
    pub fn disabled_set(&self) -> DisabledSet {
        let dates: BTreeSet<NaiveDate> = self
            .disabled_dates
            .iter()
            .filter_map(|s| date::parse_iso(s))
            .collect();
        DisabledSet::new(dates, self.bounds())
    }
}
