//! Per-parameter convergence trace from the repeated step banners.

use crate::domain::{DeviationSeries, ParameterRecord, VisError, VisResult};
use crate::scan::{RowRule, collect_blocks, fields, parse_value};

pub const STEP_BANNER: &str = "Physical Parameters (Current + Step = Next)";

/// Captures the `parameter_count + 2` lines following every banner
/// occurrence, in scan order. The window covers the table rule and one line
/// per parameter; a banner too close to the end of input captures what
/// remains. These lines feed both the deviation computation and the
/// `param_steps.dat` audit artifact.
pub fn capture_step_lines(lines: &[String], parameter_count: usize) -> Vec<String> {
    collect_blocks(
        lines,
        |all, index| all[index].contains(STEP_BANNER),
        1,
        RowRule::Count(parameter_count + 2),
        false,
    )
    .into_iter()
    .flat_map(|block| block.rows)
    .map(|(_, line)| line.to_string())
    .collect()
}

/// Builds one deviation series per known parameter by scanning the captured
/// snapshot lines in occurrence order. The first line mentioning an
/// identifier fixes its baseline (third whitespace field) and contributes a
/// 0.0 entry; every later mention contributes
/// `(value - baseline) / baseline * 100`. A baseline of exactly 0.0 is
/// undefined and aborts instead of degrading to inf or nan.
pub fn track_deviations(
    step_lines: &[String],
    parameters: &[ParameterRecord],
) -> VisResult<Vec<DeviationSeries>> {
    let mut series = Vec::with_capacity(parameters.len());
    for parameter in parameters {
        let mut baseline: Option<f64> = None;
        let mut deviations = Vec::new();
        for (position, line) in step_lines.iter().enumerate() {
            if !line.contains(&parameter.identifier) {
                continue;
            }
            let row = fields(line);
            let value = row.get(2).and_then(|field| parse_value(field)).ok_or_else(
                || {
                    VisError::malformed_block(
                        STEP_BANNER,
                        position + 1,
                        format!(
                            "captured snapshot line for '{}' has no numeric third field: '{}'",
                            parameter.identifier,
                            line.trim()
                        ),
                    )
                },
            )?;
            match baseline {
                None => {
                    if value == 0.0 {
                        return Err(VisError::DivisionByZero {
                            identifier: parameter.identifier.clone(),
                        });
                    }
                    baseline = Some(value);
                    deviations.push(0.0);
                }
                Some(first) => deviations.push((value - first) / first * 100.0),
            }
        }
        series.push(DeviationSeries {
            identifier: parameter.identifier.clone(),
            initial_value: baseline.unwrap_or(parameter.initial_value),
            deviations,
        });
    }

    Ok(series)
}
