use crate::core::models::matrix::DistanceMatrix;

/// Marker preceding the pairwise table in the precise rotation-table artifact.
const ROTATION_TABLE_MARKER: &str = "RMSD matrix";

/// Self-comparison placeholder used by both legacy table formats.
const SELF_PLACEHOLDER: &str = "---";

fn parse_cell(token: &str) -> f64 {
    if token.contains(SELF_PLACEHOLDER) {
        return 0.0;
    }
    token.parse().unwrap_or(0.0)
}

/// Parses the precise rotation-table artifact.
///
/// The table follows a literal `RMSD matrix` marker; data rows are
/// pipe-delimited, with whitespace-separated cells after the first pipe and
/// `---` standing in for the zero self-comparison. Rows and columns are
/// truncated or zero-padded to the label count. Returns `None` when the
/// artifact is not usable.
pub fn parse_rotation_table(content: &str, labels: &[String]) -> Option<DistanceMatrix> {
    let n = labels.len();
    if n == 0 || !content.contains(ROTATION_TABLE_MARKER) {
        return None;
    }

    let mut data_rows: Vec<Vec<f64>> = Vec::new();
    let mut in_table = false;
    for line in content.lines() {
        if !in_table {
            in_table = line.contains(ROTATION_TABLE_MARKER);
            continue;
        }
        if let Some((_, cells)) = line.split_once('|') {
            let row: Vec<f64> = cells.split_whitespace().map(parse_cell).collect();
            if !row.is_empty() {
                data_rows.push(row);
            }
        }
    }
    if data_rows.is_empty() {
        return None;
    }

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row: Vec<f64> = data_rows.get(i).cloned().unwrap_or_default();
        row.resize(n, 0.0);
        rows.push(row);
    }
    DistanceMatrix::from_rows(labels.to_vec(), rows).ok()
}

/// Scans aligner log text for the pairwise table.
///
/// Candidate rows start with an integer row index followed by numeric tokens
/// (`---` mapping to 0.0). If the trailing `n` candidates form an `n`×`n`
/// block, that block is the matrix; anything else is not usable.
pub fn parse_log_table(content: &str, labels: &[String]) -> Option<DistanceMatrix> {
    let n = labels.len();
    if n == 0 {
        return None;
    }

    let mut candidates: Vec<Vec<f64>> = Vec::new();
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else { continue };
        if first.parse::<i64>().is_err() {
            continue;
        }
        let mut row = Vec::new();
        for token in parts {
            if token.contains(SELF_PLACEHOLDER) {
                row.push(0.0);
            } else if let Ok(value) = token.parse() {
                row.push(value);
            } else {
                break;
            }
        }
        if !row.is_empty() {
            candidates.push(row);
        }
    }

    if candidates.len() < n {
        return None;
    }
    let block = &candidates[candidates.len() - n..];
    if block.iter().any(|row| row.len() != n) {
        return None;
    }
    DistanceMatrix::from_rows(labels.to_vec(), block.to_vec()).ok()
}
