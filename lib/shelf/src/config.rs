//! Centralized configuration.
//!
//! Every tunable of the feed and the playlist matcher is read here, once, from
//! environment variables. Missing variables fall back to defaults; malformed
//! ones are reported instead of silently ignored.

use std::{path::PathBuf, str::FromStr};

use crate::error::{Result, ShelfError};

#[derive(Debug, Clone, PartialEq)]
pub struct ShelfConfig {
    /// JSON library snapshot to load (`SHELF_LIBRARY_PATH`)
    pub library_path: Option<PathBuf>,
    /// Number of items in the recently added feed (`SHELF_RECENT_LIMIT`, default 7)
    pub recent_limit: usize,
    /// Window for the plain recent tracks list (`SHELF_RECENT_CUTOFF_DAYS`, default 7)
    pub recent_cutoff_days: u32,
    /// Share of a folder an album or artist must hold (`SHELF_MAJORITY_THRESHOLD`, default 0.70)
    pub majority_threshold: f64,
    /// Largest folder still shown as loose tracks (`SHELF_TRACK_FOLDER_MAX`, default 2)
    pub track_folder_max: usize,
    /// Allowed duration difference when matching playlist entries (`SHELF_DURATION_TOLERANCE`, default 10s)
    pub duration_tolerance: u32,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            recent_limit: 7,
            recent_cutoff_days: 7,
            majority_threshold: 0.7,
            track_folder_max: 2,
            duration_tolerance: 10,
        }
    }
}

impl ShelfConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            library_path: lookup("SHELF_LIBRARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            recent_limit: parse_or(&lookup, "SHELF_RECENT_LIMIT", defaults.recent_limit)?,
            recent_cutoff_days: parse_or(
                &lookup,
                "SHELF_RECENT_CUTOFF_DAYS",
                defaults.recent_cutoff_days,
            )?,
            majority_threshold: parse_or(
                &lookup,
                "SHELF_MAJORITY_THRESHOLD",
                defaults.majority_threshold,
            )?,
            track_folder_max: parse_or(
                &lookup,
                "SHELF_TRACK_FOLDER_MAX",
                defaults.track_folder_max,
            )?,
            duration_tolerance: parse_or(
                &lookup,
                "SHELF_DURATION_TOLERANCE",
                defaults.duration_tolerance,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.majority_threshold > 0.0 && self.majority_threshold <= 1.0) {
            return Err(ShelfError::Config {
                key: "SHELF_MAJORITY_THRESHOLD",
                message: format!("{} is outside (0, 1]", self.majority_threshold),
            });
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<T>().map_err(|e| ShelfError::Config {
                key,
                message: format!("{raw:?}: {e}"),
            })
        }
        _ => Ok(default),
    }
}
