//! パレットカタログモジュール
//!
//! パレットIDとキーワード集合・表示情報の対応を保持する。
//! 構築時に検証し、以降は読み取り専用。反復順はカタログの定義順で固定。

use crate::error::{Error, Result};
use crate::palette::Palette;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 不変のパレットカタログ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Palette>", into = "Vec<Palette>")]
pub struct Catalog {
    palettes: Vec<Palette>,
}

impl Catalog {
    /// パレット列からカタログを構築（検証・キーワード正規化あり）
    pub fn new(palettes: Vec<Palette>) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        let mut normalized = Vec::with_capacity(palettes.len());

        for mut palette in palettes {
            palette.id = palette.id.trim().to_string();
            if palette.id.is_empty() {
                return Err(Error::InvalidCatalog("空のIDを持つパレットがあります".into()));
            }
            if !seen_ids.insert(palette.id.clone()) {
                return Err(Error::InvalidCatalog(format!("IDが重複しています: {}", palette.id)));
            }

            palette.keywords = normalize_keywords(&palette.id, &palette.keywords)?;

            if palette.colors.is_empty() {
                return Err(Error::InvalidCatalog(format!("色が未定義です: {}", palette.id)));
            }
            if let Some(bad) = palette.colors.iter().find(|c| !is_hex_color(c)) {
                return Err(Error::InvalidCatalog(format!(
                    "不正な色指定です: {} ({})",
                    bad, palette.id
                )));
            }

            if palette.category.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!("カテゴリが未定義です: {}", palette.id)));
            }

            normalized.push(palette);
        }

        Ok(Self { palettes: normalized })
    }

    /// JSON文字列（パレットオブジェクトの配列）から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let palettes: Vec<Palette> = serde_json::from_str(json)?;
        Self::new(palettes)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 全パレット（定義順）
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// IDで検索
    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// カテゴリ一覧（初出順、重複なし）
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.palettes
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// カテゴリ完全一致で絞り込み
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Palette> + 'a {
        self.palettes.iter().filter(move |p| p.category == category)
    }

    /// 全キーワード（定義順、重複あり）
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.palettes
            .iter()
            .flat_map(|p| p.keywords.iter().map(|k| k.as_str()))
    }
}

impl TryFrom<Vec<Palette>> for Catalog {
    type Error = Error;

    fn try_from(palettes: Vec<Palette>) -> Result<Self> {
        Self::new(palettes)
    }
}

impl From<Catalog> for Vec<Palette> {
    fn from(catalog: Catalog) -> Self {
        catalog.palettes
    }
}

/// キーワードを正規化（前後空白除去・ASCII小文字化・重複除去）
fn normalize_keywords(id: &str, keywords: &[String]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(keywords.len());

    for keyword in keywords {
        let keyword = keyword.trim().to_ascii_lowercase();
        if keyword.is_empty() {
            return Err(Error::InvalidCatalog(format!("空のキーワードがあります: {}", id)));
        }
        if seen.insert(keyword.clone()) {
            result.push(keyword);
        }
    }

    if result.is_empty() {
        return Err(Error::InvalidCatalog(format!("キーワードが未定義です: {}", id)));
    }

    Ok(result)
}

/// `#RGB` / `#RRGGBB` / `#RRGGBBAA` 形式か
fn is_hex_color(value: &str) -> bool {
    lazy_static::lazy_static! {
        static ref HEX_RE: Regex =
            Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap();
    }
    HEX_RE.is_match(value)
}
