mod commands;

use clap::Parser;
use fbvis_core::domain::VisError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();
    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => commands::dispatch(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "fbvis", about = "Force-field optimization log visualizer")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Parse a run directory and render the parameter-deviation chart
    Plot(commands::PlotArgs),
    /// Parse a run directory and write a JSON session summary
    Report(commands::ReportArgs),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Tool(#[from] VisError),

    #[error("chart rendering failed: {0}")]
    Chart(#[from] anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Tool(error) => error.exit_code(),
            Self::Chart(_) => 3,
        }
    }

    fn diagnostic_line(&self) -> String {
        match self {
            Self::Tool(error) => error.diagnostic_line(),
            Self::Usage(message) => format!("fbvis [USAGE]: {message}"),
            Self::Chart(message) => format!("fbvis [IO_FATAL]: {message}"),
        }
    }
}
