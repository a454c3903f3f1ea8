// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

pub const DB_ENV: &str = "TALLYBOOK_DB";
pub const DEFAULT_LOG_FILTER: &str = "tallybook=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// `--db` beats `TALLYBOOK_DB`, which beats the platform data dir.
    pub fn resolve(db_flag: Option<&str>, db_env: Option<String>) -> Result<Self> {
        let db_path = match (db_flag, db_env) {
            (Some(flag), _) => PathBuf::from(flag),
            (None, Some(env)) if !env.trim().is_empty() => PathBuf::from(env.trim()),
            _ => crate::db::default_db_path()?,
        };
        Ok(Self {
            db_path,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        })
    }

    pub fn from_env_and_args(m: &clap::ArgMatches) -> Result<Self> {
        let flag = m.get_one::<String>("db").map(|s| s.as_str());
        Self::resolve(flag, std::env::var(DB_ENV).ok())
    }
}
