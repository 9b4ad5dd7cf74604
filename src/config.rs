use crate::error::{AdvisorError, Result};
use palette_advisor_common::{Catalog, Recommender, DEFAULT_FALLBACK_IDS, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// カタログファイルを指定する環境変数（設定ファイルより優先）
pub const CATALOG_ENV: &str = "PALETTE_ADVISOR_CATALOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// カタログJSON（未指定なら組み込みカタログ）
    pub catalog_path: Option<PathBuf>,
    pub default_limit: usize,
    pub fallback_ids: Vec<String>,
    /// 既定に追加するストップワード
    pub extra_stop_words: Vec<String>,
    /// 推薦キャッシュの最大件数
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_limit: DEFAULT_LIMIT,
            fallback_ids: DEFAULT_FALLBACK_IDS.iter().map(|s| s.to_string()).collect(),
            extra_stop_words: Vec::new(),
            cache_capacity: 1024,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            debug!(path = %path.display(), "設定を読み込みました");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdvisorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("palette-advisor").join("config.json"))
    }

    /// 使用するカタログのパス
    pub fn catalog_path(&self) -> Option<PathBuf> {
        // 環境変数を優先
        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.catalog_path.clone()
    }

    /// カタログを読み込む（`override_path` > 環境変数 > 設定 > 組み込み）
    pub fn load_catalog(&self, override_path: Option<&Path>) -> Result<Catalog> {
        let path = override_path.map(Path::to_path_buf).or_else(|| self.catalog_path());

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AdvisorError::FileNotFound(path.display().to_string()));
                }
                let catalog = Catalog::from_file(&path)?;
                debug!(path = %path.display(), palettes = catalog.len(), "カタログを読み込みました");
                Ok(catalog)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    /// 設定を反映したエンジンを作成
    pub fn build_recommender(&self, catalog: Arc<Catalog>) -> Recommender {
        for id in &self.fallback_ids {
            if catalog.get(id).is_none() {
                warn!(%id, "既定パレットがカタログにないため無視されます");
            }
        }

        Recommender::new(catalog)
            .with_fallback_ids(self.fallback_ids.iter().cloned())
            .with_stop_words(&self.extra_stop_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_limit, 3);
        assert_eq!(config.fallback_ids, vec!["rainbow", "happy", "cute"]);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_limit": 5}"#).unwrap();
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.cache_capacity, 1024);
        assert_eq!(config.fallback_ids.len(), 3);
    }
}
