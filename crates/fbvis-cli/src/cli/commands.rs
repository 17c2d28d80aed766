use super::{CliCommand, CliError};
use crate::chart::render_deviation_chart;
use fbvis_core::catalog::{self, PropertyCatalog};
use fbvis_core::domain::VisError;
use fbvis_core::session::{ParseSession, STEP_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(clap::Args)]
pub(super) struct PlotArgs {
    /// Run directory holding the .in file and .out fragments
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Property list file, one display name per line (default: full catalog)
    #[arg(long)]
    properties: Option<PathBuf>,

    /// Chart output path, relative to the run directory unless absolute
    #[arg(long, default_value = "parameter_deviations.png")]
    output: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 700)]
    height: u32,
}

#[derive(clap::Args)]
pub(super) struct ReportArgs {
    /// Run directory holding the .in file and .out fragments
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Property list file, one display name per line (default: full catalog)
    #[arg(long)]
    properties: Option<PathBuf>,

    /// JSON report output path, relative to the run directory unless absolute
    #[arg(long, default_value = "fbvis-report.json")]
    report: PathBuf,
}

pub(super) fn dispatch(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Plot(args) => run_plot(args),
        CliCommand::Report(args) => run_report(args),
    }
}

fn run_plot(args: PlotArgs) -> Result<i32, CliError> {
    let session = build_session(&args.dir, args.properties.as_deref())?;
    let output = resolve(&args.dir, &args.output);
    let rendered = render_deviation_chart(&session.deviations, &output, args.width, args.height)?;
    if rendered {
        info!(chart = %output.display(), "wrote parameter-deviation chart");
    } else {
        warn!("no parameter appears in any step snapshot; chart skipped");
    }
    Ok(0)
}

fn run_report(args: ReportArgs) -> Result<i32, CliError> {
    let session = build_session(&args.dir, args.properties.as_deref())?;
    let report = resolve(&args.dir, &args.report);
    let json = serde_json::to_string_pretty(&session).map_err(|error| {
        CliError::Tool(VisError::Internal {
            message: format!("session summary failed to serialize: {error}"),
        })
    })?;
    fs::write(&report, json).map_err(|source| VisError::io(&report, source))?;
    info!(report = %report.display(), "wrote session summary");
    Ok(0)
}

fn build_session(dir: &Path, properties: Option<&Path>) -> Result<ParseSession, CliError> {
    let catalog = PropertyCatalog::forcebalance_liquid();
    let names: Vec<String> = match properties {
        Some(path) => catalog::load_property_list(path)?,
        None => catalog.property_names().map(str::to_string).collect(),
    };

    let session = ParseSession::build(dir, &catalog, &names)?;
    session.write_step_file(&dir.join(STEP_FILE))?;
    info!(
        prefix = %session.prefix,
        parameters = session.parameters.len(),
        properties = session.properties.len(),
        "parsed optimization log"
    );
    Ok(session)
}

fn resolve(dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
