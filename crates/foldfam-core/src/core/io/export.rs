use crate::core::models::matrix::DistanceMatrix;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    }
}

/// Writes the matrix as a delimited table: a header of labels, then one row
/// per structure with its label in the first column.
pub fn write_matrix_csv(matrix: &DistanceMatrix, path: &Path) -> Result<(), ExportError> {
    let csv_error = |e| ExportError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    let mut header = vec!["id".to_string()];
    header.extend(matrix.labels().iter().cloned());
    writer.write_record(&header).map_err(csv_error)?;

    for (i, label) in matrix.labels().iter().enumerate() {
        let mut record = vec![label.clone()];
        record.extend(matrix.row(i).iter().map(|v| format!("{:.4}", v)));
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| io_error(path, e))
}

/// Writes the matrix in Phylip distance-matrix format: the structure count on
/// the first line, then rows with 10-character left-justified names.
pub fn write_phylip(matrix: &DistanceMatrix, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    let write = |writer: &mut BufWriter<File>, text: String| {
        writer
            .write_all(text.as_bytes())
            .map_err(|e| io_error(path, e))
    };

    write(&mut writer, format!("    {}\n", matrix.len()))?;
    for (i, label) in matrix.labels().iter().enumerate() {
        let name: String = label.chars().take(10).collect();
        let values: Vec<String> = matrix.row(i).iter().map(|v| format!("{:.4}", v)).collect();
        write(&mut writer, format!("{:<10}  {}\n", name, values.join("  ")))?;
    }
    writer.flush().map_err(|e| io_error(path, e))
}

/// Writes a Newick tree string (with its trailing `;`) followed by a newline.
pub fn write_newick(newick: &str, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", newick).map_err(|e| io_error(path, e))?;
    writer.flush().map_err(|e| io_error(path, e))
}
