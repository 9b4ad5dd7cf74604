//! 説明文のトークン化
//!
//! 1. 漢字（U+4E00〜U+9FA5）・ASCII英字・数字以外を空白に置換
//! 2. 英字を小文字化し、空白で分割
//! 3. 漢字の連なりの中にあるストップワードで区切る（保護フレーズは分割しない）
//! 4. ストップワードそのもののトークンを除去
//!
//! トークンの順序と重複は保持する。

use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

/// 既定のストップワード（助詞・量詞・程度副詞）
pub const STOP_WORDS: [&str; 14] = [
    "的", "了", "在", "是", "有", "和", "与", "或", "一个", "一只", "一朵", "很", "非常", "特别",
];

lazy_static::lazy_static! {
    static ref NON_WORD_RE: Regex = Regex::new(r"[^\x{4E00}-\x{9FA5}A-Za-z0-9]+").unwrap();
    static ref DEFAULT_TOKENIZER: Tokenizer = Tokenizer::new();
}

/// 漢字判定（対象範囲はU+4E00〜U+9FA5）
fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// トークナイザ
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
    /// 漢字のみからなるストップワード（長い順）
    cjk_stop_words: Vec<Vec<char>>,
    /// 分割しないフレーズ（長い順）
    protected: Vec<Vec<char>>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// 既定のストップワードで作成
    pub fn new() -> Self {
        let tokenizer = Self {
            stop_words: HashSet::new(),
            cjk_stop_words: Vec::new(),
            protected: Vec::new(),
        };
        tokenizer.with_stop_words(STOP_WORDS)
    }

    /// ストップワードを追加
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_ascii_lowercase();
            if word.is_empty() || !self.stop_words.insert(word.clone()) {
                continue;
            }
            if word.chars().all(is_cjk) {
                self.cjk_stop_words.push(word.chars().collect());
            }
        }
        self.cjk_stop_words.sort_by(|a, b| b.len().cmp(&a.len()));
        self
    }

    /// ストップワードで分割しないフレーズを追加（通常はカタログのキーワード）
    pub fn with_protected_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<Vec<char>> = self.protected.iter().cloned().collect();
        for phrase in phrases {
            let chars: Vec<char> = phrase.as_ref().trim().to_ascii_lowercase().chars().collect();
            if !chars.is_empty() && seen.insert(chars.clone()) {
                self.protected.push(chars);
            }
        }
        self.protected.sort_by(|a, b| b.len().cmp(&a.len()));
        self
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// 説明文をトークン列に変換
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = NON_WORD_RE.replace_all(text, " ").to_ascii_lowercase();

        let mut tokens = Vec::new();
        for word in cleaned.split_whitespace() {
            self.segment(word, &mut tokens);
        }

        tokens.retain(|t| !t.is_empty() && !self.is_stop_word(t));
        tokens
    }

    /// JSON値をトークン化（文字列以外は空）
    pub fn tokenize_value(&self, value: &Value) -> Vec<String> {
        match value {
            Value::String(text) => self.tokenize(text),
            _ => Vec::new(),
        }
    }

    /// 漢字の連なりをストップワード位置で区切る
    fn segment(&self, word: &str, out: &mut Vec<String>) {
        if self.cjk_stop_words.is_empty() {
            out.push(word.to_string());
            return;
        }

        let chars: Vec<char> = word.chars().collect();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let rest = &chars[i..];

            if let Some(len) = longest_prefix(&self.protected, rest) {
                current.extend(&rest[..len]);
                i += len;
                continue;
            }

            if let Some(len) = longest_prefix(&self.cjk_stop_words, rest) {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                i += len;
                continue;
            }

            current.push(chars[i]);
            i += 1;
        }

        if !current.is_empty() {
            out.push(current);
        }
    }
}

/// `candidates` は長い順に並んでいること
fn longest_prefix(candidates: &[Vec<char>], text: &[char]) -> Option<usize> {
    candidates
        .iter()
        .find(|c| text.starts_with(c))
        .map(|c| c.len())
}

/// 既定設定でトークン化
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text)
}

/// 既定設定でJSON値をトークン化
pub fn tokenize_value(value: &Value) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize_value(value)
}

/// キャッシュ用の正規化キー
pub fn normalized_key(tokens: &[String]) -> String {
    tokens.join(" ")
}
