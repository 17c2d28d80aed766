//! Simulated property values: one marker occurrence per optimization
//! iteration that reports the property, one batch per occurrence.

use crate::domain::{IterationBatch, SimulatedPoint, VisError, VisResult};
use crate::scan::{RowRule, collect_blocks, fields, parse_value};

/// Number of whitespace fields a simulated data row must carry:
/// `temperature pressure unit reference value +- uncertainty`.
const SIMULATED_ROW_FIELDS: usize = 7;

/// The marker line printed above each simulated table. The unit label may be
/// empty, in which case the marker ends with the separating space.
pub fn simulated_marker(property: &str, unit: &str) -> String {
    format!("Liquid {property} {unit}")
}

/// Collects every occurrence of the property's marker, reading rows starting
/// three lines below it while the first field starts with a digit. Extracts
/// (temperature, pressure, value, uncertainty) = fields (0, 1, 4, 6). Batch
/// order is occurrence order; an absent marker yields no batches.
pub fn parse_simulated(
    lines: &[String],
    property: &str,
    unit: &str,
) -> VisResult<Vec<IterationBatch>> {
    let marker = simulated_marker(property, unit);
    let blocks = collect_blocks(
        lines,
        |all, index| all[index].contains(&marker),
        3,
        RowRule::FirstFieldDigit,
        false,
    );

    let mut batches = Vec::with_capacity(blocks.len());
    for block in blocks {
        let mut points = Vec::with_capacity(block.rows.len());
        for (line_index, line) in block.rows {
            let row = fields(line);
            if row.len() < SIMULATED_ROW_FIELDS {
                return Err(VisError::malformed_block(
                    &marker,
                    line_index + 1,
                    format!(
                        "simulated row has {} fields, expected at least {}",
                        row.len(),
                        SIMULATED_ROW_FIELDS
                    ),
                ));
            }
            let parsed = (
                parse_value(row[0]),
                parse_value(row[1]),
                parse_value(row[4]),
                parse_value(row[6]),
            );
            let (Some(temperature), Some(pressure), Some(value), Some(uncertainty)) = parsed
            else {
                return Err(VisError::malformed_block(
                    &marker,
                    line_index + 1,
                    "simulated row fields 0/1/4/6 must be numeric",
                ));
            };
            points.push(SimulatedPoint {
                temperature,
                pressure,
                value,
                uncertainty,
            });
        }
        batches.push(IterationBatch { points });
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::{parse_simulated, simulated_marker};
    use crate::domain::VisError;

    fn one_block(values: &[(f64, f64)]) -> Vec<String> {
        let mut lines = vec![
            "Liquid Density (kg m^-3)".to_string(),
            "Temperature  Pressure  Reference  Calculated +- Stdev".to_string(),
            "----------------------------------------------------".to_string(),
        ];
        for (temperature, value) in values {
            lines.push(format!(
                "{temperature:.2} 1.0 atm  991.10  {value:.2} +- 0.42"
            ));
        }
        lines.push("".to_string());
        lines
    }

    #[test]
    fn marker_joins_property_and_unit_with_single_spaces() {
        assert_eq!(
            simulated_marker("Density", "(kg m^-3)"),
            "Liquid Density (kg m^-3)"
        );
        assert_eq!(
            simulated_marker("Dielectric Constant", ""),
            "Liquid Dielectric Constant "
        );
    }

    #[test]
    fn each_occurrence_becomes_one_batch_in_log_order() {
        let mut lines = one_block(&[(249.15, 989.62), (298.15, 995.98)]);
        lines.push("prose between iterations".to_string());
        lines.extend(one_block(&[(249.15, 990.10), (298.15, 996.40)]));
        lines.extend(one_block(&[(249.15, 990.95), (298.15, 996.88)]));

        let batches =
            parse_simulated(&lines, "Density", "(kg m^-3)").expect("blocks should parse");
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].points.len(), 2);
        assert_eq!(batches[0].points[0].value, 989.62);
        assert_eq!(batches[1].points[0].value, 990.10);
        assert_eq!(batches[2].points[1].value, 996.88);
        assert_eq!(batches[2].points[1].uncertainty, 0.42);
        assert_eq!(batches[0].points[0].temperature, 249.15);
        assert_eq!(batches[0].points[0].pressure, 1.0);
    }

    #[test]
    fn absent_marker_yields_empty_batch_sequence() {
        let lines = one_block(&[(249.15, 989.62)]);
        let batches =
            parse_simulated(&lines, "Enthalpy of Vaporization", "(kJ mol^-1)")
                .expect("absent property is not an error");
        assert!(batches.is_empty());
    }

    #[test]
    fn short_data_row_is_a_malformed_block_error() {
        let lines = vec![
            "Liquid Density (kg m^-3)".to_string(),
            "Temperature  Pressure  Reference  Calculated +- Stdev".to_string(),
            "--------------------------------".to_string(),
            "249.15 1.0 atm".to_string(),
        ];
        let error = parse_simulated(&lines, "Density", "(kg m^-3)")
            .expect_err("three fields are too few");
        assert!(matches!(error, VisError::MalformedBlock { line: 4, .. }));
    }
}
