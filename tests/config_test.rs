//! 設定ファイルテスト

use palette_advisor::config::{Config, CATALOG_ENV};
use std::sync::Arc;
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.default_limit, 3);
    assert!(config.catalog_path.is_none());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        default_limit: 5,
        extra_stop_words: vec!["好像".to_string()],
        ..Default::default()
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.default_limit, 5);
    assert_eq!(loaded.extra_stop_words, vec!["好像"]);
}

/// カタログファイルの読み込み
#[test]
fn test_load_catalog_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r##"[{"id": "night", "keywords": ["夜空", "星星"], "name": "夜", "colors": ["#000033", "#FFFF99"], "category": "nature"}]"##,
    )
    .unwrap();

    let catalog = Config::default().load_catalog(Some(&path)).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("night").unwrap().colors.len(), 2);
}

/// 設定を反映したエンジン
#[test]
fn test_build_recommender_applies_settings() {
    let config = Config {
        fallback_ids: vec!["snow".to_string(), "missing".to_string()],
        extra_stop_words: vec!["好像".to_string()],
        ..Default::default()
    };
    let catalog = Arc::new(palette_advisor::common::Catalog::builtin());
    let engine = config.build_recommender(catalog);

    let results = engine.recommend("好像", 3);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "snow");
}

fn write_catalog(dir: &std::path::Path, name: &str, id: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let json = format!(
        r##"[{{"id": "{}", "keywords": ["夜空"], "name": "{}", "colors": ["#000033"], "category": "nature"}}]"##,
        id, id
    );
    std::fs::write(&path, json).unwrap();
    path
}

/// カタログの優先順位（引数 > 環境変数 > 設定 > 組み込み）
///
/// 環境変数はプロセス共有のため、1つのテストで順に検証する。
#[test]
fn test_catalog_source_precedence() {
    let dir = tempdir().expect("Failed to create temp dir");
    let from_arg = write_catalog(dir.path(), "arg.json", "arg");
    let from_env = write_catalog(dir.path(), "env.json", "env");
    let from_config = write_catalog(dir.path(), "config.json", "config");

    let config = Config {
        catalog_path: Some(from_config.clone()),
        ..Default::default()
    };

    std::env::set_var(CATALOG_ENV, &from_env);
    assert_eq!(config.catalog_path(), Some(from_env.clone()));
    assert!(config.load_catalog(None).unwrap().get("env").is_some());
    assert!(config.load_catalog(Some(&from_arg)).unwrap().get("arg").is_some());

    // 空の環境変数は無視
    std::env::set_var(CATALOG_ENV, "  ");
    assert!(config.load_catalog(None).unwrap().get("config").is_some());

    std::env::remove_var(CATALOG_ENV);
    assert!(config.load_catalog(None).unwrap().get("config").is_some());
    assert_eq!(Config::default().load_catalog(None).unwrap().len(), 19);
}
