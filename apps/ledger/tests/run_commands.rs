use std::io::Write;

use clap::error::ErrorKind;
use serial_test::serial;

use discstore_ledger::error::AppError;
use discstore_ledger::run;

const CATALOG: &str = r#"
[store]
name = "Test Shop"
currency_symbol = "£"

[[catalog]]
id = "A1"
title = "Kind of Blue"
artist = "Miles Davis"
sale_price = "19.99"
purchase_price = "11.00"
quantity = 10
songs = ["So What", "Blue in Green"]

[[catalog]]
id = "B1"
title = "Pastel Blues"
artist = "Nina Simone"
sale_price = "14.99"
purchase_price = "8.00"
quantity = 5
"#;

fn config_file() -> tempfile::NamedTempFile {
    write_config(CATALOG)
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Runs `f` with `DISCSTORE_CONFIG` set to `value`, then restores it.
fn with_config_env<T>(value: &std::path::Path, f: impl FnOnce() -> T) -> T {
    let original = std::env::var_os("DISCSTORE_CONFIG");
    std::env::set_var("DISCSTORE_CONFIG", value);

    let result = f();

    match original {
        Some(original) => std::env::set_var("DISCSTORE_CONFIG", original),
        None => std::env::remove_var("DISCSTORE_CONFIG"),
    }
    result
}

fn run_with(file: &tempfile::NamedTempFile, words: &[&str]) -> Result<String, AppError> {
    let mut args = vec![
        "--config".to_string(),
        file.path().display().to_string(),
    ];
    args.extend(words.iter().map(|w| w.to_string()));
    run(args)
}

#[test]
fn list_uses_configured_catalog() {
    let file = config_file();
    let out = run_with(&file, &["list"]).unwrap();

    assert!(out.starts_with("Test Shop (2 discs)"));
    assert!(out.contains("Song List: So What, Blue in Green"));
    assert!(out.contains("Price: £19.99"));
}

#[test]
fn sell_within_stock() {
    let file = config_file();
    let out = run_with(&file, &["sell", "A1", "3"]).unwrap();
    assert_eq!(out, "Sold 3 × A1 (7 in stock)");
}

#[test]
fn oversell_is_reported() {
    let file = config_file();
    let err = run_with(&file, &["sell", "B1", "10"]).unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        err.to_string(),
        "Insufficient stock for B1: available 5, requested 10"
    );
}

#[test]
fn worst_selling_on_fresh_catalog_is_first_disc() {
    let file = config_file();
    let out = run_with(&file, &["worst"]).unwrap();
    assert!(out.starts_with("ID: A1"));
}

#[test]
fn json_output() {
    let file = config_file();
    let out = run_with(&file, &["--json", "artist", "Nina", "Simone"]).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["id"], "B1");
    assert_eq!(value[0]["quantity"], 5);
}

#[test]
fn help_does_not_need_config() {
    for args in [&["help"][..], &["--help"][..], &["sell", "--help"][..]] {
        let err = run(words(args)).unwrap_err();
        let AppError::Cli(e) = &err else {
            panic!("expected a command-line error, got {err:?}");
        };
        assert_eq!(e.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
        assert!(err.to_string().contains("Usage: discstore"));
    }
}

#[test]
fn bad_arguments_exit_with_usage_code() {
    let err = run(words(&["sell", "A1"])).unwrap_err();
    assert!(matches!(err, AppError::Cli(_)));
    assert_eq!(err.exit_code(), 2);

    let err = run(words(&["sell", "A1", "0"])).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn invalid_catalog_is_rejected() {
    let file = write_config(
        r#"
[[catalog]]
id = "A1"
title = ""
artist = "Nobody"
sale_price = "1.00"
purchase_price = "1.00"
"#,
    );

    let err = run_with(&file, &["list"]).unwrap_err();
    assert!(matches!(err, AppError::InvalidConfig(_)));
}

#[test]
fn padded_catalog_id_is_rejected_at_load() {
    let file = write_config(
        r#"
[[catalog]]
id = "A1 "
title = "Kind of Blue"
artist = "Miles Davis"
sale_price = "19.99"
purchase_price = "11.00"
quantity = 3
"#,
    );

    for args in [&["list"][..], &["sell", "A1", "1"][..]] {
        let err = run_with(&file, args).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)), "{err:?}");
    }
}

#[test]
#[serial]
fn config_path_from_environment() {
    let file = config_file();

    let out = with_config_env(file.path(), || run(words(&["list"]))).unwrap();
    assert!(out.starts_with("Test Shop (2 discs)"));
}

#[test]
#[serial]
fn missing_config_from_environment_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let result = with_config_env(&missing, || run(words(&["list"])));

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Io(_)), "{err:?}");
    assert_eq!(err.exit_code(), 1);
}
