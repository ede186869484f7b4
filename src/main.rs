use anyhow::Result;
use hintcheck::cli::{self, Commands};
use hintcheck::commands::{self, CheckConfig};
use hintcheck::formatting::{ColorMode, EmojiMode, FormattingConfig};
use std::process::ExitCode;

/// Every file passed (or there was nothing to check).
const EXIT_OK: u8 = 0;
/// At least one file failed.
const EXIT_FAILING: u8 = 1;
/// Usage, configuration or output failure.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::parse_args();
    cli::init_logging(cli.command.verbosity());

    match run(cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> Result<u8> {
    match command {
        Commands::Check {
            root,
            groups,
            format,
            output,
            verbosity,
            plain,
            no_parallel,
            jobs,
            config,
            disable_rules,
        } => {
            let summary = commands::handle_check(CheckConfig {
                root,
                groups,
                format,
                output,
                verbosity,
                formatting_config: create_formatting_config(plain),
                no_parallel,
                jobs,
                config,
                disable_rules,
            })?;
            Ok(if summary.success() {
                EXIT_OK
            } else {
                EXIT_FAILING
            })
        }
        Commands::Init { force } => {
            let path = commands::init_config(std::path::Path::new("."), force)?;
            println!("Created {}", path.display());
            Ok(EXIT_OK)
        }
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
