//! CLI tool for mood scoring
//!
//! Scores literal text, text files or standard input.
//!
//! Run with: cargo run --bin mood-score -- text "what a wonderful day"

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use mood_sentiment::config::{load_config, AppConfig};
use mood_sentiment::logging::init_from_settings;
use mood_sentiment::{ScoringStrategy, TextAnalysis, TextAnalyzer};

#[derive(Parser)]
#[command(name = "mood-score")]
#[command(about = "Lexicon-based mood scoring for text", long_about = None)]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Scoring strategy (overrides the configuration)
    #[arg(short, long, global = true, value_enum)]
    strategy: Option<StrategyArg>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Include the per-token breakdown (contextual strategy only)
    #[arg(long, global = true)]
    detail: bool,

    /// Log level (overrides the configuration)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Negation, intensifiers and ratio adjustment
    Contextual,
    /// Fixed step per exact word match
    Flat,
}

impl From<StrategyArg> for ScoringStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Contextual => ScoringStrategy::Contextual,
            StrategyArg::Flat => ScoringStrategy::Flat,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Score literal text; each argument is scored separately
    Text {
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Score text files (.txt and .md by default)
    File {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Score standard input
    Stdin,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    init_from_settings(&config.logging);

    let strategy = cli
        .strategy
        .map(ScoringStrategy::from)
        .unwrap_or(config.scoring.strategy);

    let analyzer = TextAnalyzer::new(strategy)
        .with_input(config.input.clone())
        .with_detail(cli.detail);

    let mut failures = 0usize;
    let results: Vec<TextAnalysis> = match cli.command {
        Commands::Text { texts } => texts
            .iter()
            .enumerate()
            .map(|(i, text)| analyzer.analyze_text(&format!("text #{}", i + 1), text))
            .collect::<mood_sentiment::Result<_>>()?,
        Commands::File { paths } => {
            let mut results = Vec::with_capacity(paths.len());
            for path in &paths {
                match analyzer.analyze_file(path) {
                    Ok(analysis) => results.push(analysis),
                    Err(err) if err.is_input_error() => {
                        eprintln!("Skipping {}: {}", path.display(), err);
                        failures += 1;
                    }
                    Err(err) => {
                        return Err(err)
                            .with_context(|| format!("failed to analyze {}", path.display()));
                    }
                }
            }
            results
        }
        Commands::Stdin => {
            vec![analyzer.analyze_reader("stdin", std::io::stdin().lock())?]
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results, strategy);
    }

    if failures > 0 {
        anyhow::bail!("{} input(s) could not be analyzed", failures);
    }

    Ok(())
}

fn print_table(results: &[TextAnalysis], strategy: ScoringStrategy) {
    println!("Strategy: {}\n", strategy);
    println!("{:<24} {:>6} {:>7}  {:<19} {}", "Source", "Words", "Score", "Mood", "Preview");
    println!("{}", "-".repeat(95));

    for analysis in results {
        let marker = if analysis.mood_category.is_positive() {
            "[+]"
        } else if analysis.mood_category.is_negative() {
            "[-]"
        } else {
            "[ ]"
        };

        println!(
            "{:<24} {:>6} {:>7.2}  {} {:<15} {}",
            truncate(&analysis.source, 24),
            analysis.word_count,
            analysis.mood_score,
            marker,
            analysis.mood_label,
            analysis.preview.replace('\n', " ")
        );

        if let Some(report) = &analysis.report {
            for c in &report.contributions {
                println!(
                    "    {:>3} {:<16} {:<9} x{:.1}{} {:+.2}",
                    c.position,
                    c.token,
                    c.polarity.as_str(),
                    c.multiplier,
                    if c.negated { " (negated)" } else { "" },
                    c.contribution
                );
            }
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
