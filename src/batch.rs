//! バッチ推薦モジュール
//!
//! 入力形式:
//! - JSON配列: `[{"description": "...", "limit": 3}, ...]`
//! - テキスト: 1行1説明文（空行は無視）
//!
//! 同じ正規化キーは1度だけ計算し、未キャッシュ分は並列に処理する。

use crate::cache::{recommender_version, CacheKey, RecommendationCache};
use crate::error::{AdvisorError, Result};
use palette_advisor_common::{DisplayPalette, Recommender};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// バッチの1リクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// 説明文（文字列以外は入力なしとして扱う）
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// バッチの1結果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub description: Value,
    pub recommendations: Vec<DisplayPalette>,
}

/// 入力を解析（JSON配列として読めなければ行単位テキスト）
///
/// 説明文が1件もなければエラー。
pub fn parse_requests(content: &str) -> Result<Vec<BatchRequest>> {
    let trimmed = content.trim_start();
    let requests = if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<BatchRequest>>(trimmed) {
            Ok(requests) => requests,
            Err(e) => {
                debug!(error = %e, "JSON配列として読めないため行単位で解析します");
                parse_lines(content)
            }
        }
    } else {
        parse_lines(content)
    };

    if requests.is_empty() {
        return Err(AdvisorError::InvalidBatch("説明文がありません".into()));
    }
    Ok(requests)
}

fn parse_lines(content: &str) -> Vec<BatchRequest> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| BatchRequest {
            description: Value::String(line.to_string()),
            limit: None,
        })
        .collect()
}

/// バッチ推薦を実行（結果は入力順）
///
/// キャッシュ統計は重複を除いたキーごとに1回だけ数える。
pub fn run_batch(
    recommender: &Recommender,
    cache: &mut RecommendationCache,
    requests: &[BatchRequest],
    default_limit: usize,
) -> Vec<BatchResult> {
    let version = recommender_version(recommender);
    let tokenizer = recommender.tokenizer();

    let keyed: Vec<(CacheKey, Vec<String>)> = requests
        .iter()
        .map(|req| {
            let tokens = tokenizer.tokenize_value(&req.description);
            let limit = req.limit.unwrap_or(default_limit);
            (CacheKey::new(&version, &tokens, limit), tokens)
        })
        .collect();

    let mut resolved: HashMap<CacheKey, Vec<DisplayPalette>> = HashMap::new();
    let mut seen = HashSet::new();
    let mut pending: Vec<&(CacheKey, Vec<String>)> = Vec::new();

    for entry in &keyed {
        if !seen.insert(entry.0.clone()) {
            continue;
        }
        match cache.get(&entry.0) {
            Some(result) => {
                resolved.insert(entry.0.clone(), result.clone());
            }
            None => pending.push(entry),
        }
    }

    info!(requests = requests.len(), computed = pending.len(), "バッチ推薦");

    let computed: Vec<(CacheKey, Vec<DisplayPalette>)> = pending
        .into_par_iter()
        .map(|(key, tokens)| (key.clone(), recommender.recommend_tokens(tokens.as_slice(), key.limit)))
        .collect();

    for (key, result) in computed {
        cache.insert(key.clone(), result.clone());
        resolved.insert(key, result);
    }

    requests
        .iter()
        .zip(&keyed)
        .map(|(req, (key, _))| {
            let recommendations = resolved.get(key).cloned().unwrap_or_default();
            debug!(description = %req.description, count = recommendations.len(), "推薦");
            BatchResult {
                description: req.description.clone(),
                recommendations,
            }
        })
        .collect()
}
