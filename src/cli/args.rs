use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hintcheck")]
#[command(about = "Type annotation completeness checker for Python code", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check annotation completeness of Python files, grouped by directory
    Check {
        /// Directory whose groups are checked
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Restrict the run to these targets (directories or .py files under ROOT)
        #[arg(short = 'g', long = "group", value_name = "TARGET")]
        groups: Vec<String>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        /// -v: List issues of failing functions
        /// -vv: List every function, log progress
        /// -vvv: Debug logging
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Plain output: ASCII only, no colors
        #[arg(long, visible_alias = "no-color")]
        plain: bool,

        /// Score files one at a time
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = one per core)
        #[arg(short = 'j', long = "jobs", env = "HINTCHECK_JOBS")]
        jobs: Option<usize>,

        /// Configuration file (skips discovery of .hintcheck.toml)
        #[arg(short, long, env = "HINTCHECK_CONFIG")]
        config: Option<PathBuf>,

        /// Disable a rule (completeness, optionality, specificity, consistency)
        #[arg(long = "disable-rule", value_name = "RULE")]
        disable_rules: Vec<String>,
    },

    /// Write a default .hintcheck.toml into the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Check { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
