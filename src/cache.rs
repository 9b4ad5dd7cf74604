//! 推薦結果キャッシュモジュール
//!
//! 正規化済みトークン列・件数・エンジンのバージョンをキーにして
//! 推薦結果をメモ化する。エンジンは純粋関数なので、キーが同じなら結果も同じ。
//! メモリ上のみで永続化はしない。

use palette_advisor_common::{normalized_key, Catalog, DisplayPalette, Recommender};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};

/// キャッシュキー
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// `recommender_version` の値
    pub version: String,
    pub tokens: String,
    pub limit: usize,
}

impl CacheKey {
    pub fn new<S: AsRef<str>>(version: &str, tokens: &[S], limit: usize) -> Self {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        Self {
            version: version.to_string(),
            tokens: normalized_key(&tokens),
            limit,
        }
    }
}

/// キャッシュ統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub evictions: usize,
}

/// 推薦結果キャッシュ（容量超過時は古い順に破棄）
#[derive(Debug, Clone)]
pub struct RecommendationCache {
    capacity: usize,
    entries: HashMap<CacheKey, Vec<DisplayPalette>>,
    order: VecDeque<CacheKey>,
    stats: CacheStats,
}

impl RecommendationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
            stats: CacheStats::default(),
        }
    }

    /// キャッシュをルックアップ（統計を更新）
    pub fn get(&mut self, key: &CacheKey) -> Option<&Vec<DisplayPalette>> {
        match self.entries.get(key) {
            Some(result) => {
                self.stats.hits += 1;
                Some(result)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// キャッシュに追加（容量0なら何もしない）
    pub fn insert(&mut self, key: CacheKey, result: Vec<DisplayPalette>) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(key.clone(), result).is_none() {
            self.order.push_back(key);
        }

        while self.entries.len() > self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    self.stats.evictions += 1;
                }
                None => break,
            }
        }
    }

    /// キャッシュになければ計算して保存
    pub fn get_or_insert_with<F>(&mut self, key: CacheKey, compute: F) -> Vec<DisplayPalette>
    where
        F: FnOnce() -> Vec<DisplayPalette>,
    {
        if let Some(result) = self.get(&key) {
            return result.clone();
        }

        let result = compute();
        self.insert(key, result.clone());
        result
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// 全エントリと統計を破棄
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats = CacheStats::default();
    }
}

impl Default for RecommendationCache {
    fn default() -> Self {
        Self::new(1024)
    }
}

/// カタログのバージョン（JSON表現のSHA-256）
pub fn catalog_version(catalog: &Catalog) -> String {
    let json = serde_json::to_vec(catalog).unwrap_or_default();
    hex::encode(Sha256::digest(&json))
}

/// エンジンのバージョン（カタログと既定パレットIDのSHA-256）
///
/// 推薦結果はトークン列・件数以外にこの2つだけに依存する。
pub fn recommender_version(recommender: &Recommender) -> String {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(recommender.catalog().as_ref()).unwrap_or_default());
    for id in recommender.fallback_ids() {
        hasher.update([0u8]);
        hasher.update(id.as_bytes());
    }
    hex::encode(hasher.finalize())
}
