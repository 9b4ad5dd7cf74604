use anyhow::Context;
use clap::Parser;
use palette_advisor::{batch, cache, cli, config, error, output};
use cli::{Cli, Commands};
use config::Config;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Recommend { description, limit, format } => {
            let catalog = config.load_catalog(cli.catalog.as_deref())?;
            let recommender = config.build_recommender(Arc::new(catalog));

            let description = description.join(" ");
            let limit = limit.unwrap_or(config.default_limit);
            let results = recommender.recommend(&description, limit);

            print!("{}", output::render(&results, format)?);
        }

        Commands::List { category, format } => {
            let catalog = config.load_catalog(cli.catalog.as_deref())?;
            let recommender = config.build_recommender(Arc::new(catalog));

            // 未知のカテゴリは空の一覧
            let palettes = match category {
                Some(category) => recommender.list_by_category(&category),
                None => recommender.list_all(),
            };

            print!("{}", output::render(&palettes, format)?);
        }

        Commands::Categories => {
            let catalog = config.load_catalog(cli.catalog.as_deref())?;
            for category in catalog.categories() {
                let count = catalog.by_category(category).count();
                println!("{} ({}件)", category, count);
            }
        }

        Commands::Batch { input, output, limit } => {
            if !input.exists() {
                return Err(error::AdvisorError::FileNotFound(input.display().to_string()).into());
            }

            let catalog = config.load_catalog(cli.catalog.as_deref())?;
            let recommender = config.build_recommender(Arc::new(catalog));
            let mut cache = cache::RecommendationCache::new(config.cache_capacity);

            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("入力ファイルを読み込めません: {}", input.display()))?;
            let requests = batch::parse_requests(&content)?;
            let results = batch::run_batch(
                &recommender,
                &mut cache,
                &requests,
                limit.unwrap_or(config.default_limit),
            );

            let json = serde_json::to_string_pretty(&results)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    eprintln!("✔ {}件の結果を保存: {}", results.len(), path.display());
                }
                None => println!("{}", json),
            }

            let stats = cache.stats();
            tracing::info!(hits = stats.hits, misses = stats.misses, "キャッシュ統計");
        }

        Commands::Validate { file } => {
            let catalog = config.load_catalog(file.as_deref().or(cli.catalog.as_deref()))?;

            println!("✔ カタログは有効です");
            println!("  パレット数: {}", catalog.len());
            println!("  キーワード数: {}", catalog.keywords().count());
            println!("  カテゴリ: {}", catalog.categories().join(", "));
            println!("  バージョン: {}", cache::catalog_version(&catalog));

            for id in &config.fallback_ids {
                if catalog.get(id).is_none() {
                    println!("⚠ 既定パレット '{}' がカタログにありません", id);
                }
            }
        }

        Commands::Config { set_catalog, clear_catalog, set_limit, show } => {
            let mut changed = false;

            if let Some(path) = set_catalog {
                config.catalog_path = Some(path);
                changed = true;
            }
            if clear_catalog {
                config.catalog_path = None;
                changed = true;
            }
            if let Some(limit) = set_limit {
                config.default_limit = limit;
                changed = true;
            }

            if changed {
                config.save().context("設定の保存に失敗しました")?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                match config.catalog_path() {
                    Some(path) => println!("  カタログ: {}", path.display()),
                    None => println!("  カタログ: 組み込み"),
                }
                println!("  既定件数: {}", config.default_limit);
                println!("  既定パレット: {}", config.fallback_ids.join(", "));
                println!("  追加ストップワード: {}", config.extra_stop_words.join(" "));
                println!("  キャッシュ容量: {}", config.cache_capacity);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
