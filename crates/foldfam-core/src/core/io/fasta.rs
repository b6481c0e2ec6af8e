use crate::core::models::alignment::{AlignedSequence, Alignment, AlignmentError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Sequence data on line {line} appears before any '>' header")]
    MissingHeader { line: usize },
    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

/// Reads a gapped FASTA alignment: `>`-header lines, each followed by one or
/// more sequence lines. The identifier is the first whitespace-delimited token
/// of the header. Equal column counts are enforced by [`Alignment::new`].
pub fn read_from(reader: &mut impl BufRead) -> Result<Alignment, FastaError> {
    let mut sequences: Vec<AlignedSequence> = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            let id = header.split_whitespace().next().unwrap_or("").to_string();
            sequences.push(AlignedSequence::new(id, String::new()));
        } else {
            let current = sequences
                .last_mut()
                .ok_or(FastaError::MissingHeader { line: line_num + 1 })?;
            current.residues.push_str(line);
        }
    }

    Ok(Alignment::new(sequences)?)
}

pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Alignment, FastaError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_from(&mut reader)
}
