// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbuddy::config::Config;
use budgetbuddy::utils::{parse_amount, parse_color, parse_month, parse_percentage, parse_year};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn parsers_reject_bad_input() {
    assert_eq!(parse_color(" #AaBb09 ").unwrap(), "#aabb09");
    assert!(parse_color("#abc").is_err());
    assert!(parse_amount("-0.01").is_err());
    assert_eq!(parse_amount("0").unwrap(), rust_decimal::Decimal::ZERO);
    assert!(parse_percentage("100.5").is_err());
    assert!(parse_percentage("0").is_ok());
    assert_eq!(parse_month("2025-03").unwrap(), "2025-03");
    assert!(parse_month("2025-13").is_err());
    assert!(parse_year("25x").is_err());
}

#[test]
fn explicit_data_dir_wins() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("bb");
    let config = Config::resolve(root.to_str()).unwrap();
    assert_eq!(config.data_dir(), root.as_path());
    config.ensure_dirs().unwrap();
    assert!(config.backup_dir().is_dir());
    assert!(config.export_dir().is_dir());
    assert_eq!(
        config.db_path().file_name().map(Path::new),
        Some(Path::new("budgetbuddy.sqlite"))
    );
}

#[test]
fn month_is_zero_padded() {
    assert_eq!(parse_month("2025-3").unwrap(), "2025-03");
    assert_eq!(parse_month(" 2025-11 ").unwrap(), "2025-11");
}
