//! Reference/experimental data table per property.
//!
//! Reference data is optional: a property with no matching block, or a block
//! whose rows do not fit the schema, yields an empty sequence rather than an
//! error. Every other block kind aborts the run instead.

use crate::domain::ExperimentalPoint;
use crate::scan::{RowRule, collect_blocks, fields, parse_value};

pub const EXPERIMENT_HEADER: &str = "Temperature  Pressure  Reference  Calculated +- Stdev";

/// Finds the first line containing `property` whose next line carries the
/// fixed column header, then reads rows starting three lines below the
/// property line while the first field starts with a digit. Extracts
/// (temperature, pressure, reference value) per row.
pub fn parse_experimental(lines: &[String], property: &str) -> Vec<ExperimentalPoint> {
    let Some(block) = collect_blocks(
        lines,
        |all, index| {
            all[index].contains(property)
                && all
                    .get(index + 1)
                    .is_some_and(|next| next.contains(EXPERIMENT_HEADER))
        },
        3,
        RowRule::FirstFieldDigit,
        true,
    )
    .into_iter()
    .next() else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity(block.rows.len());
    for (_, line) in block.rows {
        let row = fields(line);
        if row.len() < 4 {
            return Vec::new();
        }
        let parsed = (
            parse_value(row[0]),
            parse_value(row[1]),
            parse_value(row[3]),
        );
        let (Some(temperature), Some(pressure), Some(reference_value)) = parsed else {
            return Vec::new();
        };
        points.push(ExperimentalPoint {
            temperature,
            pressure,
            reference_value,
        });
    }

    points
}
