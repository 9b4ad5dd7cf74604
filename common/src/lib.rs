//! Palette Advisor Common Library
//!
//! 説明文から配色パレットを推薦するエンジン本体。
//! CLIから利用される純粋な計算部分のみを含む。

pub mod error;
pub mod palette;
pub mod catalog;
pub mod builtin;
pub mod tokenizer;
pub mod matcher;
pub mod engine;

pub use error::{Error, Result};
pub use palette::{DisplayPalette, Palette};
pub use catalog::Catalog;
pub use builtin::DEFAULT_FALLBACK_IDS;
pub use tokenizer::{normalized_key, tokenize, tokenize_value, Tokenizer, STOP_WORDS};
pub use matcher::{match_kind, score_palette, Match, MatchKind};
pub use engine::{Recommender, DEFAULT_LIMIT};
