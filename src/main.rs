//! latest-version - print the path of the newest installation of a command.
//!
//! # Usage
//!
//! ```bash
//! latest-version python3
//! ```
//!
//! Set `RUST_LOG=latest_version=debug` to see each candidate and probe.

use clap::Parser;
use latest_version::find_latest_command;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "latest-version")]
#[command(about = "Find the latest version of a command across all directories on PATH", long_about = None)]
#[command(version)]
struct Cli {
    /// Command to check for the latest version
    #[arg(value_name = "COMMAND")]
    command: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version land here too, on stdout with exit 0.
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", usage_error_message(&e));
            return ExitCode::FAILURE;
        }
    };
    init_logging();

    match find_latest_command(&cli.command).await {
        Ok(info) => {
            println!("{}", info.path().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// First line of a clap error without its `error: ` prefix.
fn usage_error_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_single_command() {
        let cli = Cli::try_parse_from(["latest-version", "python3"]).unwrap();
        assert_eq!(cli.command, "python3");
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["latest-version"]).is_err());
        assert!(Cli::try_parse_from(["latest-version", "a", "b"]).is_err());
    }

    #[test]
    fn test_usage_errors_are_reported_as_errors() {
        let e = Cli::try_parse_from(["latest-version"]).unwrap_err();
        assert!(e.use_stderr());
        let message = usage_error_message(&e);
        assert!(message.starts_with("the following required arguments were not provided"));

        let e = Cli::try_parse_from(["latest-version", "a", "b"]).unwrap_err();
        assert!(e.use_stderr());
        assert!(!usage_error_message(&e).starts_with("error:"));
    }

    #[test]
    fn test_help_and_version_are_not_errors() {
        let help = Cli::try_parse_from(["latest-version", "--help"]).unwrap_err();
        assert!(!help.use_stderr());
        let version = Cli::try_parse_from(["latest-version", "--version"]).unwrap_err();
        assert!(!version.use_stderr());
    }
}
