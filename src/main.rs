use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use wordcloud::config::Config;
use wordcloud::extract::{ExtractedText, TextExtractor};
use wordcloud::fetch::{ArticleFetcher, HtmlFetcher};
use wordcloud::keywords::{KeywordRanker, StopwordSet};
use wordcloud::output::{keywords_json, terminal};
use wordcloud::pipeline::Analyzer;

/// wordcloud: topic keywords for news articles.
///
/// Fetches an article, isolates its prose from the surrounding page chrome,
/// and ranks its keywords with TF-IDF.
#[derive(Parser)]
#[command(name = "wordcloud", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an article and rank its keywords
    Analyze {
        /// The article URL (http:// or https://)
        url: String,

        /// Number of keywords to return (default: 50)
        #[arg(long)]
        top: Option<usize>,

        /// Print { "words": [...] } JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// Show the article text extracted from a URL or a local HTML file
    Extract {
        /// The article URL
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        url: Option<String>,

        /// Read HTML from this file instead of fetching
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the whole text instead of a preview
        #[arg(long)]
        full: bool,
    },

    /// Rank keywords of plain text from a file or stdin
    Rank {
        /// Read text from this file (default: stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Number of keywords to return (default: 50)
        #[arg(long)]
        top: Option<usize>,

        /// Print { "words": [...] } JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// List the active stopword set
    Stopwords {
        /// Only report whether this word is a stopword
        #[arg(long)]
        contains: Option<String>,
    },

    /// Serve the JSON API (GET /health, POST /analyze)
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: WORDCLOUD_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: WORDCLOUD_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordcloud=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Analyze { url, top, json } => {
            if let Some(top) = top {
                config.ranker.top_n = top;
            }
            let analyzer = build_analyzer(&config);
            let fetcher = ArticleFetcher::new(&config.fetch)?;

            let spinner = spinner(format!("Fetching {url}"));
            let result = analyzer.analyze_url(&fetcher, &url).await;
            spinner.finish_and_clear();
            let analysis = result?;

            if json {
                println!("{}", keywords_json(&analysis.keywords)?);
            } else {
                println!(
                    "Extracted {} characters of article text.",
                    analysis.text.char_count()
                );
                terminal::display_keywords(&analysis.keywords, &url);
            }
        }

        Commands::Extract { url, file, full } => {
            let extractor = TextExtractor::new(config.extractor);
            let html = match (file, url) {
                (Some(path), _) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, Some(url)) => {
                    let fetcher = ArticleFetcher::new(&config.fetch)?;
                    let spinner = spinner(format!("Fetching {url}"));
                    let html = fetcher.fetch_html(&url).await;
                    spinner.finish_and_clear();
                    html?
                }
                (None, None) => anyhow::bail!("Pass a URL or --file"),
            };

            let text = extractor.extract(&html)?;
            terminal::display_extracted(&text, (!full).then_some(600));
        }

        Commands::Rank { file, top, json } => {
            if let Some(top) = top {
                config.ranker.top_n = top;
            }
            let raw = match &file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read text from stdin")?;
                    buf
                }
            };

            let text = ExtractedText::new(raw.trim());
            let ranker = config.build_ranker();
            let keywords = ranker.rank(text.as_str())?;
            info!(
                keywords = keywords.len(),
                top_n = ranker.config().top_n,
                max_df = ranker.config().max_df,
                "Ranked text"
            );

            if json {
                println!("{}", keywords_json(&keywords)?);
            } else {
                let source = file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "stdin".to_string());
                terminal::display_keywords(&keywords, &source);
            }
        }

        Commands::Stopwords { contains } => {
            let ranker = config.build_ranker();
            let set: &StopwordSet = ranker.stopwords();
            match contains {
                Some(word) => {
                    let word = word.trim().to_lowercase();
                    if set.contains(&word) {
                        println!("{} is a stopword", word.bold());
                    } else {
                        println!("{} is {} a stopword", word.bold(), "not".yellow());
                    }
                }
                None => terminal::display_stopwords(set),
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            let fetcher: Arc<dyn HtmlFetcher> = Arc::new(ArticleFetcher::new(&config.fetch)?);
            let state = wordcloud::web::AppState {
                analyzer: build_analyzer(&config),
                fetcher,
            };
            wordcloud::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}

fn build_analyzer(config: &Config) -> Analyzer {
    let ranker: Arc<dyn KeywordRanker> = Arc::new(config.build_ranker());
    Analyzer::new(TextExtractor::new(config.extractor), ranker)
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
