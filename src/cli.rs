use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root walked when neither the command line nor the config names one
pub const DEFAULT_ROOT: &str = "API";

/// Largest accepted `--indent`
pub const MAX_INDENT: usize = 16;
/// Largest accepted `--margin`
pub const MAX_MARGIN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Indented `- Title: path` lines for the `nav:` section of mkdocs.yml
    Mkdocs,
    /// Nested Markdown bullet list of links
    Markdown,
}

impl OutputMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "mkdocs" | "yaml" | "yml" => Some(OutputMode::Mkdocs),
            "markdown" | "md" => Some(OutputMode::Markdown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UseGitignoreMode {
    /// Respect .gitignore only when the root is inside a git repository
    Auto,
    /// Always respect .gitignore
    Always,
    /// Never respect .gitignore
    Never,
}

impl UseGitignoreMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Some(UseGitignoreMode::Auto),
            "always" => Some(UseGitignoreMode::Always),
            "never" => Some(UseGitignoreMode::Never),
            _ => None,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "docnav")]
#[command(version = VERSION)]
#[command(about = "Prints an MkDocs nav outline for a generated docs directory")]
#[command(
    long_about = "Walks a documentation directory in sorted, depth-first order and prints an indented\n\
navigation outline (titles paired with file paths) to paste into the nav section of mkdocs.yml.\n\n\
Settings are read from ./docnav.toml when present; command-line flags take precedence."
)]
pub struct Args {
    /// Documentation root to walk [default: API]
    pub root: Option<PathBuf>,

    /// Config file (defaults to ./docnav.toml when it exists)
    #[arg(short = 'c', long = "config", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore any config file
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// Suffix stripped from file names to form titles [default: .md]
    #[arg(short = 's', long = "strip-suffix")]
    pub strip_suffix: Option<String>,

    /// Spaces per nesting level [default: 4]
    #[arg(
        long = "indent",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_INDENT as u64)
    )]
    pub indent: Option<usize>,

    /// Leading spaces on every line [default: 2]
    #[arg(
        long = "margin",
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_MARGIN as u64)
    )]
    pub margin: Option<usize>,

    /// Exclude entries matching a glob, relative to the root (repeatable)
    #[arg(short = 'X', long = "exclude")]
    pub exclude: Vec<String>,

    /// Include hidden files and directories (the default)
    #[arg(short = 'a', long = "all", conflicts_with = "no_hidden")]
    pub all: bool,

    /// Skip hidden files and directories
    #[arg(long = "no-hidden")]
    pub no_hidden: bool,

    /// When to respect .gitignore files [default: never]
    #[arg(long = "use-gitignore", value_enum)]
    pub use_gitignore: Option<UseGitignoreMode>,

    /// Output format [default: mkdocs]
    #[arg(short = 'o', long = "output", value_enum)]
    pub output: Option<OutputMode>,

    /// Show file paths relative to this directory instead of the working directory
    #[arg(long = "display-root")]
    pub display_root: Option<PathBuf>,

    /// Suppress warnings on stderr
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// `Some(true)` / `Some(false)` when a hidden-entry flag was given
    pub fn hidden_override(&self) -> Option<bool> {
        if self.all {
            Some(true)
        } else if self.no_hidden {
            Some(false)
        } else {
            None
        }
    }
}
