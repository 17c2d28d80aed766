//! One parse session: assembles the log once, runs every block parser over
//! the same immutable line sequence, and merges the results.

use crate::assemble::{self, COMPILED_LOG};
use crate::blocks::{deviation, experimental, parameters, simulated};
use crate::catalog::PropertyCatalog;
use crate::discovery;
use crate::domain::{
    DeviationSeries, ParameterRecord, PropertySeries, VisError, VisResult,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// File name of the snapshot audit artifact: every captured step line, one
/// per line, in scan order. Written for debugging, never re-parsed.
pub const STEP_FILE: &str = "param_steps.dat";

/// All structured results recovered from one optimization log. Owned by a
/// single invocation; nothing here is shared or mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseSession {
    pub prefix: String,
    pub parameters: Vec<ParameterRecord>,
    pub properties: Vec<PropertySeries>,
    pub deviations: Vec<DeviationSeries>,
    #[serde(skip)]
    pub step_lines: Vec<String>,
}

impl ParseSession {
    /// Discovers inputs in `dir`, writes the concatenated log artifact, and
    /// parses everything requested in `property_names` (resolved against
    /// `catalog`).
    pub fn build(
        dir: &Path,
        catalog: &PropertyCatalog,
        property_names: &[String],
    ) -> VisResult<Self> {
        let prefix = discovery::discover_run_prefix(dir)?;
        let fragments = discovery::discover_fragments(dir)?;
        let lines = assemble::concatenate(&fragments, &dir.join(COMPILED_LOG))?;
        Self::from_lines(prefix, &lines, catalog, property_names)
    }

    /// Parses an already-assembled line sequence. Separated from `build` so
    /// tests and embedders can parse without touching the filesystem.
    pub fn from_lines(
        prefix: String,
        lines: &[String],
        catalog: &PropertyCatalog,
        property_names: &[String],
    ) -> VisResult<Self> {
        let parameters = parameters::parse_parameters(lines)?;

        let mut properties = Vec::with_capacity(property_names.len());
        for name in property_names {
            let unit = catalog.unit_for(name)?;
            properties.push(PropertySeries {
                name: name.clone(),
                unit: unit.to_string(),
                experimental: experimental::parse_experimental(lines, name),
                iterations: simulated::parse_simulated(lines, name, unit)?,
            });
        }

        let step_lines = deviation::capture_step_lines(lines, parameters.len());
        let deviations = deviation::track_deviations(&step_lines, &parameters)?;

        Ok(Self {
            prefix,
            parameters,
            properties,
            deviations,
            step_lines,
        })
    }

    /// Persists the captured snapshot lines to `path`.
    pub fn write_step_file(&self, path: &Path) -> VisResult<()> {
        let mut content: String = self
            .step_lines
            .iter()
            .map(|line| format!("{line}\n"))
            .collect();
        if content.is_empty() {
            content.push('\n');
        }
        fs::write(path, content).map_err(|source| VisError::io(path, source))
    }
}
