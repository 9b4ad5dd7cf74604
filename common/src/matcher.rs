//! キーワード照合とスコア計算
//!
//! トークンとキーワードの一致判定:
//! - 完全一致 → 10点
//! - 部分一致（どちらかがもう一方を含む）→ 5点
//!
//! キーワードごとに最初に一致したトークンだけを採点する。
//! 同じ語が何度現れても1キーワードにつき1回しか加点しない。

use crate::palette::{DisplayPalette, Palette};

/// 完全一致の重み
pub const EXACT_WEIGHT: u32 = 10;
/// 部分一致の重み
pub const CONTAINS_WEIGHT: u32 = 5;

/// 一致の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Contains,
}

impl MatchKind {
    pub fn weight(self) -> u32 {
        match self {
            MatchKind::Exact => EXACT_WEIGHT,
            MatchKind::Contains => CONTAINS_WEIGHT,
        }
    }
}

/// トークンとキーワードの一致判定
///
/// 短いキーワード（1文字など）は無関係なトークンにも部分一致しうる。
pub fn match_kind(token: &str, keyword: &str) -> Option<MatchKind> {
    if token == keyword {
        return Some(MatchKind::Exact);
    }
    if token.contains(keyword) || keyword.contains(token) {
        return Some(MatchKind::Contains);
    }
    None
}

/// 1パレット分の照合結果
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub palette: &'a Palette,
    pub score: u32,
    /// 加点したキーワード（キーワード定義順、重複なし）
    pub matched_keywords: Vec<String>,
    pub confidence: f64,
}

impl<'a> Match<'a> {
    /// キーワード未一致時の既定候補
    pub fn fallback(palette: &'a Palette) -> Self {
        Self {
            palette,
            score: 0,
            matched_keywords: Vec::new(),
            confidence: 0.5,
        }
    }

    /// 表示用に射影
    pub fn to_display(&self) -> DisplayPalette {
        DisplayPalette {
            confidence: Some(self.confidence),
            matched_keywords: self.matched_keywords.clone(),
            ..self.palette.to_display()
        }
    }
}

/// スコアから信頼度を算出（完全一致1件で1.0）
pub fn confidence(score: u32) -> f64 {
    (score as f64 / EXACT_WEIGHT as f64).min(1.0)
}

/// パレットを採点（スコア0なら None）
pub fn score_palette<'a, S: AsRef<str>>(palette: &'a Palette, tokens: &[S]) -> Option<Match<'a>> {
    let mut score = 0;
    let mut matched_keywords = Vec::new();

    for keyword in &palette.keywords {
        let first_hit = tokens
            .iter()
            .find_map(|token| match_kind(token.as_ref(), keyword));

        if let Some(kind) = first_hit {
            score += kind.weight();
            matched_keywords.push(keyword.clone());
        }
    }

    if score == 0 {
        return None;
    }

    Some(Match {
        palette,
        score,
        matched_keywords,
        confidence: confidence(score),
    })
}
