//! CLI argument definitions for `cardgrid`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use cardgrid_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "cardgrid",
    version,
    about = "Cards Grid Preview - page through flashcards in a resizable grid",
    long_about = "Preview a deck of flashcards as a paginated grid.\n\n\
                  A collection is a folder of CSV decks. The rendered page flips\n\
                  cards on hover or click and typesets TeX math with MathJax."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the decks of a collection with their card counts.
    Decks(DecksArgs),

    /// Render one page of a deck's card grid to an HTML file.
    Render(RenderArgs),
}

#[derive(Parser)]
pub struct DecksArgs {
    /// Path to the collection folder.
    #[arg(value_name = "COLLECTION")]
    pub collection: PathBuf,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to the collection folder.
    #[arg(value_name = "COLLECTION")]
    pub collection: PathBuf,

    /// Deck to preview (default: the collection's `current_deck`).
    #[arg(long = "deck", value_name = "NAME")]
    pub deck: Option<String>,

    /// Cards per row (1-10).
    #[arg(long = "columns", value_name = "N")]
    pub columns: Option<i64>,

    /// Rows per page (1-20).
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<i64>,

    /// Card width in pixels (120-600).
    #[arg(long = "card-size", value_name = "PX")]
    pub card_size: Option<i64>,

    /// Card font size in pixels (10-28).
    #[arg(long = "font-size", value_name = "PX")]
    pub font_size: Option<i64>,

    /// Aspect slider position (50-200, ratio = value / 100).
    #[arg(long = "aspect", value_name = "50..200")]
    pub aspect: Option<i64>,

    /// Show the back of every card.
    #[arg(long = "flip-all")]
    pub flip_all: bool,

    /// Page to render (clamped to the available pages).
    #[arg(long = "page", value_name = "N")]
    pub page: Option<i64>,

    /// Maximum number of cards to load.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Output HTML file.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "FILE",
        default_value = "cards-grid-preview.html"
    )]
    pub output: PathBuf,

    /// Do not load MathJax even when cards contain TeX.
    #[arg(long = "no-math")]
    pub no_math: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
