//! パレットの型定義
//!
//! - Palette: カタログに登録された配色（不変）
//! - DisplayPalette: 推薦結果・一覧表示用の射影

use serde::{Deserialize, Serialize};

/// 配色パレット
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// カタログ内で一意なID
    pub id: String,

    /// トリガーとなるキーワード（正規化済み）
    pub keywords: Vec<String>,

    /// 表示名
    pub name: String,

    /// 説明文
    #[serde(default)]
    pub description: String,

    /// 色（表示順）
    pub colors: Vec<String>,

    /// 分類タグ（nature/animal/emotion など）
    pub category: String,
}

impl Palette {
    /// スコアなしの表示用レコード
    pub fn to_display(&self) -> DisplayPalette {
        DisplayPalette {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            colors: self.colors.clone(),
            category: self.category.clone(),
            confidence: None,
            matched_keywords: Vec::new(),
        }
    }
}

/// 表示用パレット
///
/// スコアリングの内部値は `confidence` と `matched_keywords` 以外を含めない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPalette {
    pub id: String,
    pub name: String,
    pub description: String,
    pub colors: Vec<String>,
    pub category: String,

    /// 推薦時のみ設定（0.0〜1.0）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[serde(default)]
    pub matched_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette {
            id: "ocean".to_string(),
            keywords: vec!["海洋".to_string(), "大海".to_string()],
            name: "海洋蓝调".to_string(),
            description: "清新的海洋色彩".to_string(),
            colors: vec!["#0077BE".to_string(), "#87CEEB".to_string()],
            category: "nature".to_string(),
        }
    }

    #[test]
    fn test_to_display_is_unscored() {
        let display = sample().to_display();
        assert_eq!(display.id, "ocean");
        assert_eq!(display.colors.len(), 2);
        assert!(display.confidence.is_none());
        assert!(display.matched_keywords.is_empty());
    }

    #[test]
    fn test_display_serializes_camel_case() {
        let mut display = sample().to_display();
        display.confidence = Some(1.0);
        display.matched_keywords = vec!["大海".to_string()];

        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(json["matchedKeywords"][0], "大海");
        assert_eq!(json["confidence"], 1.0);
        // キーワード全体は漏らさない
        assert!(json.get("keywords").is_none());
    }

    #[test]
    fn test_listing_omits_confidence() {
        let json = serde_json::to_value(sample().to_display()).unwrap();
        assert!(json.get("confidence").is_none());
    }
}
