//! CLI argument definitions for the lesson reconciler.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use lesson_ingest::Language;
use lesson_model::{MatchMode, Script};

#[derive(Parser)]
#[command(
    name = "lesson-reconcile",
    version,
    about = "Map curated lesson titles onto scraped chapter ids",
    long_about = "Map a hand-curated lesson hierarchy onto a scraped chapter catalog.\n\n\
                  Each curated title is resolved to at most one chapter id and no id is\n\
                  used twice. Unresolved titles are reported for review."
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
    /// Reconcile a curriculum against a chapter catalog and write the structure.
    Reconcile(ReconcileArgs),

    /// List the built-in language curricula.
    Curricula,

    /// Show what every matching strategy would pick for one title.
    Explain(ExplainArgs),
}

/// Inputs shared by every command that reads a catalog.
#[derive(Args)]
pub struct SourceArgs {
    /// Scraped chapter catalog (JSON array of {id, title, ...}).
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Built-in language supplying curriculum, overrides, script and mode.
    #[arg(long = "language", value_enum)]
    pub language: Option<LanguageArg>,

    /// Curriculum JSON replacing the language's built-in one.
    #[arg(long = "curriculum", value_name = "PATH")]
    pub curriculum: Option<PathBuf>,

    /// Override table (TOML) replacing the language's built-in one.
    #[arg(long = "overrides", value_name = "PATH", conflicts_with = "no_overrides")]
    pub overrides: Option<PathBuf>,

    /// Ignore every override table.
    #[arg(long = "no-overrides")]
    pub no_overrides: bool,

    /// Matching mode.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Native script used for keyword extraction.
    #[arg(long = "script", value_enum)]
    pub script: Option<ScriptArg>,

    /// Profile (TOML) with defaults for any of the above.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Where to write the lesson structure (default: lessons_structure.json).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a review report with unmatched titles and unused chapters.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Reconcile and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 1 when any title stays unmatched.
    #[arg(long = "fail-on-unmatched")]
    pub fail_on_unmatched: bool,

    /// Minimum similarity (0-1) for review hints.
    #[arg(
        long = "hint-threshold",
        value_name = "SCORE",
        default_value_t = lesson_output::DEFAULT_HINT_THRESHOLD
    )]
    pub hint_threshold: f32,
}

#[derive(Args)]
pub struct ExplainArgs {
    /// Curated title to explain.
    #[arg(value_name = "TITLE")]
    pub title: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    Marathi,
    Gujarati,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::Marathi => Language::Marathi,
            LanguageArg::Gujarati => Language::Gujarati,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Layered,
    Positional,
}

impl From<ModeArg> for MatchMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Layered => MatchMode::Layered,
            ModeArg::Positional => MatchMode::Positional,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScriptArg {
    Devanagari,
    Gujarati,
}

impl From<ScriptArg> for Script {
    fn from(value: ScriptArg) -> Self {
        match value {
            ScriptArg::Devanagari => Script::Devanagari,
            ScriptArg::Gujarati => Script::Gujarati,
        }
    }
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
