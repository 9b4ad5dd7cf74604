//! 推薦結果・カタログ一覧の端末出力

use crate::error::Result;
use palette_advisor_common::DisplayPalette;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// パレット列を指定形式で文字列化
pub fn render(palettes: &[DisplayPalette], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(palettes)?),
        OutputFormat::Text => Ok(render_text(palettes)),
    }
}

fn render_text(palettes: &[DisplayPalette]) -> String {
    if palettes.is_empty() {
        return "該当するパレットはありません\n".to_string();
    }

    let mut out = String::new();
    for (i, palette) in palettes.iter().enumerate() {
        let _ = write!(out, "{}. {} [{}] ({})", i + 1, palette.name, palette.id, palette.category);
        if let Some(confidence) = palette.confidence {
            let _ = write!(out, "  信頼度 {:.0}%", confidence * 100.0);
        }
        out.push('\n');

        if !palette.description.is_empty() {
            let _ = writeln!(out, "   {}", palette.description);
        }
        let _ = writeln!(out, "   色: {}", palette.colors.join(" "));
        if !palette.matched_keywords.is_empty() {
            let _ = writeln!(out, "   一致: {}", palette.matched_keywords.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(confidence: Option<f64>, matched: &[&str]) -> DisplayPalette {
        DisplayPalette {
            id: "ocean".to_string(),
            name: "海洋蓝调".to_string(),
            description: "清新的海洋色彩".to_string(),
            colors: vec!["#0077BE".to_string(), "#87CEEB".to_string()],
            category: "nature".to_string(),
            confidence,
            matched_keywords: matched.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("txt".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text_recommendation() {
        let text = render(&[display(Some(0.5), &["大海"])], OutputFormat::Text).unwrap();
        assert!(text.starts_with("1. 海洋蓝调 [ocean] (nature)  信頼度 50%"));
        assert!(text.contains("#0077BE #87CEEB"));
        assert!(text.contains("一致: 大海"));
    }

    #[test]
    fn test_render_text_listing() {
        let text = render(&[display(None, &[])], OutputFormat::Text).unwrap();
        assert!(!text.contains("信頼度"));
        assert!(!text.contains("一致"));
    }

    #[test]
    fn test_render_empty() {
        let text = render(&[], OutputFormat::Text).unwrap();
        assert_eq!(text, "該当するパレットはありません\n");
    }

    #[test]
    fn test_render_json() {
        let json = render(&[display(Some(1.0), &["大海"])], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "ocean");
        assert_eq!(value[0]["matchedKeywords"][0], "大海");
    }
}
