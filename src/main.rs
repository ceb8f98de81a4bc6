use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use tagmint::config::ExtractorConfig;
use tagmint::extract::buffer::AnalysisInput;
use tagmint::extract::frequency::FrequencyExtractor;
use tagmint::extract::stopwords::StopWords;
use tagmint::extract::traits::TagExtractor;
use tagmint::tags::{merge_tags, MergePolicy};

/// Tagmint: frequency-based tag suggestion for written content.
///
/// Counts qualifying words across the title, body, and excerpt of a piece
/// of content and suggests the most frequent ones as tags.
#[derive(Parser)]
#[command(name = "tagmint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest tags for a piece of content
    Suggest {
        /// File containing the content body (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Content title (weighted 3x by default)
        #[arg(long)]
        title: Option<String>,

        /// Content excerpt (weighted 2x, disabled unless set)
        #[arg(long)]
        excerpt: Option<String>,

        /// Maximum number of tags to suggest (1-20)
        #[arg(long)]
        max_tags: Option<usize>,

        /// Minimum word length in characters (2-10)
        #[arg(long)]
        min_length: Option<usize>,

        /// Minimum occurrence count for a word to qualify (1-10)
        #[arg(long)]
        min_frequency: Option<usize>,

        /// Preserve case when counting words
        #[arg(long)]
        case_sensitive: bool,

        /// Stop word language (e.g. en, de, fr); defaults to the built-in
        /// English list
        #[arg(long)]
        language: Option<String>,

        /// Existing tag to merge the suggestions into (repeatable)
        #[arg(long = "merge-with")]
        merge_with: Vec<String>,

        /// Replace existing tags instead of appending to them
        #[arg(long)]
        replace: bool,

        /// Emit the ranked suggestions as JSON instead of a preview
        #[arg(long)]
        json: bool,
    },

    /// Print the active stop word list
    Stopwords {
        /// Stop word language (e.g. en, de, fr); defaults to the built-in
        /// English list
        #[arg(long)]
        language: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tagmint=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest {
            file,
            title,
            excerpt,
            max_tags,
            min_length,
            min_frequency,
            case_sensitive,
            language,
            merge_with,
            replace,
            json,
        } => {
            let mut config = ExtractorConfig::from_env();
            if let Some(n) = max_tags {
                config.max_tags = n;
            }
            if let Some(n) = min_length {
                config.min_word_length = n;
            }
            if let Some(n) = min_frequency {
                config.min_word_frequency = n;
            }
            if case_sensitive {
                config.case_sensitive = true;
            }
            if excerpt.is_some() {
                config.sources.excerpt.enabled = true;
            }
            // Flags may carry out-of-range values; clamp at the boundary
            let config = config.clamped();

            let content = match &file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    std::io::stdin()
                        .read_to_string(&mut text)
                        .context("Failed to read content from stdin")?;
                    text
                }
            };

            let input = AnalysisInput {
                title: title.unwrap_or_default(),
                content,
                excerpt: excerpt.unwrap_or_default(),
            };

            let stop_words = match &language {
                Some(code) => StopWords::for_language(code),
                None => StopWords::default(),
            };

            let extractor = FrequencyExtractor::new(config).with_stop_words(stop_words);
            let suggestions = extractor.suggest(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
                return Ok(());
            }

            suggestions.display();

            if !suggestions.is_empty() && (!merge_with.is_empty() || replace) {
                let policy = if replace {
                    MergePolicy::Replace
                } else {
                    MergePolicy::Append
                };
                let merged = merge_tags(&merge_with, &suggestions.words(), policy);
                println!("Merged tag list: {}", merged.join(", ").bold());
            }
        }

        Commands::Stopwords { language } => {
            let stop_words = match &language {
                Some(code) => StopWords::for_language(code),
                None => StopWords::default(),
            };
            info!(count = stop_words.len(), "Loaded stop word list");

            println!(
                "{}",
                format!("=== Stop words ({} entries) ===", stop_words.len()).bold()
            );
            for word in stop_words.sorted() {
                println!("  {word}");
            }
        }
    }

    Ok(())
}
