// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy `./tripweave.toml` > `~/.config/tripweave/tripweave.toml`
//! > `/etc/tripweave/tripweave.toml` with `TRIPWEAVE_` environment overrides.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TripweaveConfig;

/// Config sections that environment variables may address.
const SECTIONS: &[&str] = &["service", "currency", "planner", "chat", "catalog"];

pub(crate) const LOCAL_FILE: &str = "tripweave.toml";
pub(crate) const SYSTEM_FILE: &str = "/etc/tripweave/tripweave.toml";

/// Path of the per-user config file, if the platform has a config dir.
pub(crate) fn user_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tripweave").join(LOCAL_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tripweave/tripweave.toml`
/// 3. `~/.config/tripweave/tripweave.toml`
/// 4. `./tripweave.toml`
/// 5. `TRIPWEAVE_*` environment variables
pub fn load_config() -> Result<TripweaveConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<TripweaveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TripweaveConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TripweaveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TripweaveConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TripweaveConfig::default()))
        .merge(Toml::file(SYSTEM_FILE))
        .merge(Toml::file(user_file().unwrap_or_default()))
        .merge(Toml::file(LOCAL_FILE))
        .merge(env_provider())
}

/// Env provider mapping `TRIPWEAVE_<SECTION>_<KEY>` to `<section>.<key>`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `TRIPWEAVE_SERVICE_CHAT_PATH` lands on `service.chat_path`.
fn env_provider() -> Env {
    Env::prefixed("TRIPWEAVE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env key onto its dotted config path.
pub fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}
