//! Palette Advisor
//!
//! 説明文から配色パレットを推薦するCLIのライブラリ部分。
//! 推薦エンジン本体は palette_advisor_common にある。

pub mod batch;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use palette_advisor_common as common;
