//! Fitted-parameter table: printed once per run under a unique banner.

use crate::domain::{ParameterRecord, VisError, VisResult};
use crate::scan::{RowRule, collect_blocks, fields, parse_value};

pub const PARAMETER_MARKER: &str = "Starting parameter indices, physical values and IDs";

/// Extracts (index, initial physical value, identifier) rows. Data starts two
/// lines after the marker and runs while the first field is an integer. Only
/// the first marker occurrence counts; parameters are defined once per run.
pub fn parse_parameters(lines: &[String]) -> VisResult<Vec<ParameterRecord>> {
    let block = collect_blocks(
        lines,
        |all, index| all[index].contains(PARAMETER_MARKER),
        2,
        RowRule::FirstFieldInteger,
        true,
    )
    .into_iter()
    .next()
    .ok_or_else(|| VisError::BlockNotFound {
        marker: PARAMETER_MARKER.to_string(),
    })?;

    let mut records = Vec::with_capacity(block.rows.len());
    for (line_index, line) in block.rows {
        let row = fields(line);
        if row.len() < 3 {
            return Err(VisError::malformed_block(
                PARAMETER_MARKER,
                line_index + 1,
                format!("parameter row has {} fields, expected at least 3", row.len()),
            ));
        }
        let index = row[0].parse::<usize>().map_err(|_| {
            VisError::malformed_block(
                PARAMETER_MARKER,
                line_index + 1,
                format!("parameter index '{}' is not a valid integer", row[0]),
            )
        })?;
        let initial_value = parse_value(row[2]).ok_or_else(|| {
            VisError::malformed_block(
                PARAMETER_MARKER,
                line_index + 1,
                format!("physical value '{}' is not numeric", row[2]),
            )
        })?;
        records.push(ParameterRecord {
            index,
            initial_value,
            identifier: row[row.len() - 1].to_string(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{PARAMETER_MARKER, parse_parameters};
    use crate::domain::VisError;

    fn log(rows: &[&str]) -> Vec<String> {
        let mut lines = vec![
            "#========================================================#".to_string(),
            format!("#| {} |#", PARAMETER_MARKER),
            "#========================================================#".to_string(),
        ];
        lines.extend(rows.iter().map(|row| row.to_string()));
        lines.push("-------- end of table --------".to_string());
        lines
    }

    #[test]
    fn indices_follow_appearance_order_and_identifiers_are_unique() {
        let lines = log(&[
            "   0 [  3.15365e-01 ] : VDWSSIG:OW",
            "   1 [  6.48520e-01 ] : VDWSEPS:OW",
            "   2 [  4.23800e-01 ] : BONDSB:HWOW",
        ]);
        let records = parse_parameters(&lines).expect("parameter block should parse");
        let indices: Vec<usize> = records.iter().map(|record| record.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));

        let mut identifiers: Vec<&str> = records
            .iter()
            .map(|record| record.identifier.as_str())
            .collect();
        assert_eq!(records[0].initial_value, 3.15365e-01);
        identifiers.sort_unstable();
        identifiers.dedup();
        assert_eq!(identifiers.len(), records.len());
    }

    #[test]
    fn missing_marker_is_a_block_not_found_error() {
        let lines = vec!["no banner here".to_string()];
        let error = parse_parameters(&lines).expect_err("marker is required");
        assert!(matches!(error, VisError::BlockNotFound { .. }));
    }

    #[test]
    fn short_row_is_a_malformed_block_error() {
        let lines = log(&["   0 1"]);
        let error = parse_parameters(&lines).expect_err("two fields are too few");
        match error {
            VisError::MalformedBlock { line, .. } => assert_eq!(line, 4),
            other => panic!("expected MalformedBlock, got {other:?}"),
        }
    }

    #[test]
    fn only_the_first_marker_occurrence_is_honored() {
        let mut lines = log(&["   0 [ 1.0 ] : sigma1"]);
        lines.extend(log(&["   7 [ 9.0 ] : bogus"]));
        let records = parse_parameters(&lines).expect("first block should parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "sigma1");
    }
}
