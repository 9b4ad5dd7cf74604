//! 配色推薦エンジン
//!
//! ## 処理フロー
//! 1. 説明文をトークン化
//! 2. 全パレットを採点（スコア0は除外）
//! 3. スコア降順 → 一致キーワード数降順で安定ソート
//! 4. 一致なしなら既定パレットで代替
//! 5. 件数制限して表示用に射影
//!
//! カタログは `Arc` で共有し、推薦処理は `&self` のみで状態を持たない。

use crate::builtin::DEFAULT_FALLBACK_IDS;
use crate::catalog::Catalog;
use crate::matcher::{score_palette, Match};
use crate::palette::DisplayPalette;
use crate::tokenizer::Tokenizer;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// 既定の最大件数
pub const DEFAULT_LIMIT: usize = 3;

/// 推薦エンジン
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    tokenizer: Tokenizer,
    fallback_ids: Vec<String>,
}

impl Recommender {
    /// カタログからエンジンを作成
    ///
    /// カタログのキーワードはストップワード分割から保護される。
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let tokenizer = Tokenizer::new().with_protected_phrases(catalog.keywords());
        Self {
            catalog,
            tokenizer,
            fallback_ids: DEFAULT_FALLBACK_IDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 既定パレットのIDを差し替え
    pub fn with_fallback_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// ストップワードを追加
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokenizer = self.tokenizer.with_stop_words(words);
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn fallback_ids(&self) -> &[String] {
        &self.fallback_ids
    }

    /// 説明文から配色を推薦
    pub fn recommend(&self, description: &str, limit: usize) -> Vec<DisplayPalette> {
        let tokens = self.tokenizer.tokenize(description);
        self.recommend_tokens(&tokens, limit)
    }

    /// JSON値から推薦（文字列以外は入力なしとして扱う）
    pub fn recommend_value(&self, description: &Value, limit: usize) -> Vec<DisplayPalette> {
        let tokens = self.tokenizer.tokenize_value(description);
        self.recommend_tokens(&tokens, limit)
    }

    /// トークン化済みの入力から推薦
    pub fn recommend_tokens<S: AsRef<str>>(&self, tokens: &[S], limit: usize) -> Vec<DisplayPalette> {
        if limit == 0 {
            return Vec::new();
        }

        let mut matches = self.find_matches(tokens);
        if matches.is_empty() {
            matches = self.fallback_matches();
            debug!(count = matches.len(), "キーワード一致なし、既定パレットを使用");
        } else {
            rank(&mut matches);
        }

        matches.truncate(limit);
        matches.iter().map(Match::to_display).collect()
    }

    /// スコアが正のパレットを定義順に収集
    pub fn find_matches<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Match<'_>> {
        self.catalog
            .palettes()
            .iter()
            .filter_map(|palette| score_palette(palette, tokens))
            .inspect(|m| debug!(id = %m.palette.id, score = m.score, keywords = ?m.matched_keywords, "一致"))
            .collect()
    }

    /// 既定パレット（カタログにないIDは無視）
    fn fallback_matches(&self) -> Vec<Match<'_>> {
        self.fallback_ids
            .iter()
            .filter_map(|id| {
                let palette = self.catalog.get(id);
                if palette.is_none() {
                    debug!(%id, "既定パレットがカタログにありません");
                }
                palette
            })
            .map(Match::fallback)
            .collect()
    }

    /// 全パレット（スコアなし）
    pub fn list_all(&self) -> Vec<DisplayPalette> {
        self.catalog.palettes().iter().map(|p| p.to_display()).collect()
    }

    /// カテゴリで絞り込み（完全一致）
    pub fn list_by_category(&self, category: &str) -> Vec<DisplayPalette> {
        self.catalog.by_category(category).map(|p| p.to_display()).collect()
    }
}

/// スコア降順、同点は一致キーワード数降順（安定ソート）
pub fn rank(matches: &mut [Match<'_>]) {
    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.matched_keywords.len().cmp(&a.matched_keywords.len()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    fn palette(id: &str, keywords: &[&str]) -> Palette {
        Palette {
            id: id.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            name: id.to_string(),
            description: String::new(),
            colors: vec!["#000000".to_string()],
            category: "test".to_string(),
        }
    }

    fn recommender(palettes: Vec<Palette>) -> Recommender {
        Recommender::new(Arc::new(Catalog::new(palettes).unwrap()))
    }

    #[test]
    fn test_rank_by_score_then_keyword_count() {
        let engine = recommender(vec![
            palette("one", &["山"]),
            palette("two", &["山峰", "高山"]),
            palette("three", &["山脉"]),
        ]);
        // "山": one=10, two=5+5, three=5
        let ids: Vec<_> = engine.recommend("山", 5).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["two", "one", "three"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let engine = recommender(vec![
            palette("b", &["河"]),
            palette("a", &["河"]),
            palette("c", &["河"]),
        ]);
        for _ in 0..3 {
            let ids: Vec<_> = engine.recommend("河", 3).into_iter().map(|d| d.id).collect();
            assert_eq!(ids, vec!["b", "a", "c"]);
        }
    }

    #[test]
    fn test_fallback_skips_unknown_ids() {
        let engine = recommender(vec![palette("happy", &["快乐"]), palette("x", &["甲"])])
            .with_fallback_ids(["rainbow", "happy", "cute"]);
        let result = engine.recommend("完全无关", 3);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "happy");
        assert_eq!(result[0].confidence, Some(0.5));
        assert!(result[0].matched_keywords.is_empty());
    }

    #[test]
    fn test_limit_zero() {
        let engine = recommender(vec![palette("a", &["甲"])]).with_fallback_ids(["a"]);
        assert!(engine.recommend("甲", 0).is_empty());
        assert!(engine.recommend("", 0).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let engine = Recommender::new(Arc::new(Catalog::default()));
        assert!(engine.recommend("大海", 3).is_empty());
        assert!(engine.list_all().is_empty());
    }

    #[test]
    fn test_non_string_value_falls_back() {
        let engine = recommender(vec![palette("a", &["甲"])]).with_fallback_ids(["a"]);
        let result = engine.recommend_value(&serde_json::json!({"text": "甲"}), 3);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].confidence, Some(0.5));
    }

    #[test]
    fn test_extra_stop_words() {
        let engine = recommender(vec![palette("a", &["蓝"])])
            .with_fallback_ids(Vec::<String>::new())
            .with_stop_words(["蓝"]);
        assert!(engine.recommend("蓝", 3).is_empty());
    }

    #[test]
    fn test_list_by_category() {
        let mut other = palette("o", &["乙"]);
        other.category = "other".to_string();
        let engine = recommender(vec![palette("t", &["甲"]), other]);
        let listed = engine.list_by_category("other");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "o");
        assert!(listed[0].confidence.is_none());
        assert!(engine.list_by_category("missing").is_empty());
    }

    #[test]
    fn test_recommender_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Recommender>();
    }
}
