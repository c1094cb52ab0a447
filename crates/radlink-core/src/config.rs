//! Link parameter configuration.
//!
//! Resolution order: environment variables → config file → defaults.
//!
//! Config file location:
//!   1. $RADLINK_CONFIG (explicit override)
//!   2. $XDG_CONFIG_HOME/radlink/config.toml
//!   3. ~/.config/radlink/config.toml
//!
//! Defaults match the shipped firmware protocol version. Overrides exist for
//! firmware variants with different channel capacities or LUT geometry; the
//! record catalog itself is compiled in and does not change with config.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wire::{CMD_PAYLOAD_MAX, LUT_CHUNK_MAX, RESP_PAYLOAD_MAX};

/// Top-level link configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub channel: ChannelConfig,
    pub lut: LutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Command payload capacity per transaction, in bytes.
    pub cmd_payload_max: usize,
    /// Response payload capacity per transaction, in bytes.
    pub resp_payload_max: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LutConfig {
    /// Maximum bytes per LUT upload chunk. Must not exceed the staging
    /// record capacity.
    pub chunk_max: usize,
}

// ── Defaults ──────────────────────────────────────────────────────────────────

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            channel: ChannelConfig::default(),
            lut: LutConfig::default(),
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            cmd_payload_max: CMD_PAYLOAD_MAX,
            resp_payload_max: RESP_PAYLOAD_MAX,
        }
    }
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            chunk_max: LUT_CHUNK_MAX,
        }
    }
}

// ── Path helpers ──────────────────────────────────────────────────────────────

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_or_home().join(".config"))
        .join("radlink")
}

fn dirs_or_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
    #[error("invalid link config: {0}")]
    Invalid(&'static str),
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl LinkConfig {
    /// Load config: env vars → file → defaults. Validates before returning.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::file_path();
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadFailed(path.clone(), e))?;
            toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(path.clone(), e))?
        } else {
            LinkConfig::default()
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Config file path.
    pub fn file_path() -> PathBuf {
        std::env::var("RADLINK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| config_dir().join("config.toml"))
    }

    /// Reject geometries no firmware variant can have.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel.cmd_payload_max == 0 || self.channel.resp_payload_max == 0 {
            return Err(ConfigError::Invalid("channel payload capacity is zero"));
        }
        if self.lut.chunk_max == 0 || self.lut.chunk_max > LUT_CHUNK_MAX {
            return Err(ConfigError::Invalid("lut chunk_max outside staging record capacity"));
        }
        Ok(())
    }

    /// Apply RADLINK_* env var overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Override application with an injected lookup, separated from the
    /// process environment so the key-to-field mapping is testable.
    /// Unparsable values leave the current setting untouched.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("RADLINK_CHANNEL__CMD_PAYLOAD_MAX") {
            if let Ok(n) = v.parse() {
                self.channel.cmd_payload_max = n;
            }
        }
        if let Some(v) = lookup("RADLINK_CHANNEL__RESP_PAYLOAD_MAX") {
            if let Ok(n) = v.parse() {
                self.channel.resp_payload_max = n;
            }
        }
        if let Some(v) = lookup("RADLINK_LUT__CHUNK_MAX") {
            if let Ok(n) = v.parse() {
                self.lut.chunk_max = n;
            }
        }
    }
}
