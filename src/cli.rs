use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palette-advisor")]
#[command(about = "説明文から配色パレットを推薦するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（省略時は設定または組み込みカタログ）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 説明文から配色を推薦
    Recommend {
        /// 配色を推薦する説明文（複数語は空白で連結）
        #[arg(required = true)]
        description: Vec<String>,

        /// 最大件数（省略時は設定値）
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// カタログのパレット一覧
    List {
        /// カテゴリで絞り込み
        #[arg(short, long)]
        category: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// カテゴリ一覧
    Categories,

    /// ファイル内の説明文をまとめて推薦
    Batch {
        /// 入力ファイル（JSON配列または1行1説明文）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 既定の最大件数（省略時は設定値）
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// カタログファイルを検証
    Validate {
        /// カタログJSONファイル（省略時は使用中のカタログ）
        file: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// カタログファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// カタログ設定を解除（組み込みカタログに戻す）
        #[arg(long)]
        clear_catalog: bool,

        /// 既定の最大件数を設定
        #[arg(long)]
        set_limit: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::try_parse_from(["palette-advisor", "recommend", "蓝色的", "大海", "-n", "5", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Recommend { description, limit, format } => {
                assert_eq!(description, vec!["蓝色的", "大海"]);
                assert_eq!(limit, Some(5));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("recommend として解析されない"),
        }
    }

    #[test]
    fn test_global_catalog_flag() {
        let cli = Cli::try_parse_from(["palette-advisor", "list", "--catalog", "my.json", "-v"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("my.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_recommend_requires_description() {
        assert!(Cli::try_parse_from(["palette-advisor", "recommend"]).is_err());
    }
}
