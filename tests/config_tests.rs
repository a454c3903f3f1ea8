// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use tallybook::config::{Config, DEFAULT_LOG_FILTER};

#[test]
fn db_flag_overrides_env() {
    let c = Config::resolve(Some("/tmp/a.sqlite"), Some("/tmp/b.sqlite".into())).unwrap();
    assert_eq!(c.db_path, PathBuf::from("/tmp/a.sqlite"));
    assert_eq!(c.log_filter, DEFAULT_LOG_FILTER);

    let c = Config::resolve(None, Some(" /tmp/b.sqlite ".into())).unwrap();
    assert_eq!(c.db_path, PathBuf::from("/tmp/b.sqlite"));
}

#[test]
fn rust_log_overrides_default_filter() {
    use tallybook::utils::env_filter;

    let f = env_filter(DEFAULT_LOG_FILTER, Some("tallybook=debug"));
    assert!(f.to_string().to_lowercase().contains("tallybook=debug"));

    let f = env_filter(DEFAULT_LOG_FILTER, None);
    assert!(f.to_string().to_lowercase().contains("tallybook=warn"));

    let f = env_filter(DEFAULT_LOG_FILTER, Some("   "));
    assert!(f.to_string().to_lowercase().contains("tallybook=warn"));

    let f = env_filter(DEFAULT_LOG_FILTER, Some("tallybook=loud"));
    assert!(f.to_string().to_lowercase().contains("tallybook=warn"));
}
