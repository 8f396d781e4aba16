//! # Commands
//!
//! - `dct scan` - Scan files or staged changes for secrets
//! - `dct ignore` - Persistently suppress a finding
//! - `dct patterns` - List detection patterns
//! - `dct hook` - Manage git pre-commit hooks

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod commands;
mod files;
mod git;
mod scanning;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;
pub use dct_core::CONFIG_FILENAME;
use dct_core::prelude::*;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/dont-commit-that/dont-commit-that";

#[derive(Debug, Parser)]
#[command(
    name = "dct",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    #[command(visible_alias = "i")]
    Ignore(IgnoreArgs),

    #[command(visible_alias = "p")]
    Patterns(PatternsArgs),

    Hook {
        #[command(subcommand)]
        command: Option<HookCommand>,
    },
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Arguments for the `dct scan` command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Paths to scan for secrets.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to `.dct.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum severity level to report.
    #[arg(short, long)]
    pub severity: Option<Severity>,

    /// Show masked values alongside findings.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Always exit with code 0, even when secrets are found.
    #[arg(long)]
    pub exit_zero: bool,

    /// Glob patterns to exclude from scanning.
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Skip `.gitignore` rules when collecting files.
    #[arg(long)]
    pub skip_gitignore: bool,

    /// Skip files larger than this size in bytes.
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// Number of parallel scanning threads.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Scan only files staged in the git index.
    #[arg(long)]
    pub staged: bool,
}

/// Arguments for the `dct ignore` command.
#[derive(Debug, Parser)]
pub struct IgnoreArgs {
    /// File containing the finding to suppress.
    pub file: PathBuf,

    /// 1-based line of the finding. Omit to pick interactively.
    #[arg(short, long)]
    pub line: Option<u32>,

    /// Path to `.dct.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `dct patterns` command.
#[derive(Debug, Parser)]
pub struct PatternsArgs {
    /// Filter patterns by group name.
    #[arg(short, long)]
    pub group: Option<String>,

    /// Filter patterns by severity level.
    #[arg(short, long)]
    pub severity: Option<Severity>,

    /// Show pattern details including regex and keywords.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to `.dct.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Subcommands for `dct hook`.
#[derive(Debug, Subcommand)]
pub enum HookCommand {
    /// Install a git pre-commit hook.
    Install,
    /// Uninstall the git pre-commit hook.
    Uninstall,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Ignore(args) => commands::ignore::run(&args),
        Command::Patterns(args) => {
            commands::patterns::run(args.group.as_deref(), args.severity, args.verbose, args.config.as_deref())
        }
        Command::Hook { command } => commands::hook::run(command.as_ref()),
    }
}

fn build_about() -> String {
    format!(
        r"
  {} catches hard-coded secrets before they reach your repository.

  Detects API keys, tokens, private keys, and credentials in source
  text, and remembers suppressed false positives across scans.",
        colors::accent().apply_to("dct").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    dct scan .                     Scan current directory
    dct scan --staged              Gate staged changes (pre-commit)
    dct scan . --format json       Output as JSON
    dct ignore src/config.js -l 3  Suppress the finding on line 3 forever
    dct patterns                   List detection patterns
    dct hook install               Install the pre-commit hook

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
