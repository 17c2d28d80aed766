//! Shared block scanner for marker-delimited tables inside an unstructured
//! optimization log.
//!
//! Every block kind in the log follows the same shape: a marker line, a fixed
//! number of header lines, then data rows until the first row that fails the
//! block's row rule. One state machine handles all of them; the parsers only
//! differ in marker predicate, header offset, row rule, and field extraction.

/// Per-block-instance scanner state. `Terminated` is final; repeated markers
/// spawn independent instances in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    InBlock,
    Terminated,
}

/// Decides whether a line belongs to the current block's data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowRule {
    /// First whitespace field is an unsigned integer (parameter table rows).
    FirstFieldInteger,
    /// First character of the first whitespace field is a digit
    /// (temperature/pressure data rows).
    FirstFieldDigit,
    /// Exactly this many lines, regardless of content (step snapshots).
    Count(usize),
}

impl RowRule {
    fn matches(self, line: &str, taken: usize) -> bool {
        match self {
            Self::FirstFieldInteger => first_field(line)
                .is_some_and(|field| field.bytes().all(|byte| byte.is_ascii_digit())),
            Self::FirstFieldDigit => first_field(line)
                .and_then(|field| field.chars().next())
                .is_some_and(|character| character.is_ascii_digit()),
            Self::Count(limit) => taken < limit,
        }
    }
}

fn first_field(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// One matched block: the marker's line index plus the captured data rows,
/// each tagged with its 0-based index into the assembled line sequence.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawBlock<'a> {
    pub(crate) marker_index: usize,
    pub(crate) rows: Vec<(usize, &'a str)>,
}

/// Scans `lines` top to bottom for every marker match and captures one block
/// per occurrence. `header_offset` is the distance from the marker line to
/// the first candidate data row. Termination of each block is guaranteed at
/// end of input independent of the row rule; the first non-matching line is
/// left unconsumed. With `first_only`, scanning stops after one block.
pub(crate) fn collect_blocks<'a, M>(
    lines: &'a [String],
    matches_marker: M,
    header_offset: usize,
    row_rule: RowRule,
    first_only: bool,
) -> Vec<RawBlock<'a>>
where
    M: Fn(&[String], usize) -> bool,
{
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        if !matches_marker(lines, index) {
            index += 1;
            continue;
        }

        let mut rows: Vec<(usize, &str)> = Vec::new();
        let mut cursor = index + header_offset;
        let mut state = ScanState::InBlock;
        while state == ScanState::InBlock {
            match lines.get(cursor) {
                Some(line) if row_rule.matches(line, rows.len()) => {
                    rows.push((cursor, line.as_str()));
                    cursor += 1;
                }
                _ => state = ScanState::Terminated,
            }
        }

        blocks.push(RawBlock {
            marker_index: index,
            rows,
        });
        if first_only {
            break;
        }
        // Resume after the captured rows so a block's own lines can never
        // re-match as a marker.
        index = cursor.max(index + 1);
    }

    blocks
}

/// Whitespace tokenization shared by all field extractors.
pub(crate) fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Fortran-style exponents (1.5D-3) normalize to something `f64` accepts.
pub(crate) fn parse_value(token: &str) -> Option<f64> {
    let normalized = token.replace(['D', 'd'], "E");
    normalized.parse::<f64>().ok()
}
