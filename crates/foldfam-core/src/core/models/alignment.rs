use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("Alignment contains no sequences")]
    Empty,
    #[error("Sequence '{id}' has length {actual}, expected {expected}")]
    UnequalLength {
        id: String,
        expected: usize,
        actual: usize,
    },
}

/// One gapped sequence from a multiple alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSequence {
    pub id: String,
    pub residues: String,
}

impl AlignedSequence {
    pub fn new(id: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }

    /// Number of alignment columns (gaps included).
    pub fn column_count(&self) -> usize {
        self.residues.chars().count()
    }

    /// Number of residues the structure actually contributes (gaps excluded).
    pub fn ungapped_len(&self, gap: char) -> usize {
        self.residues.chars().filter(|&c| c != gap).count()
    }
}

/// A gapped multiple sequence alignment.
///
/// All member sequences share an identical column count; this is validated at
/// construction and a violation is a caller error, never silently fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    sequences: Vec<AlignedSequence>,
    column_count: usize,
}

impl Alignment {
    pub fn new(sequences: Vec<AlignedSequence>) -> Result<Self, AlignmentError> {
        let first = sequences.first().ok_or(AlignmentError::Empty)?;
        let column_count = first.column_count();
        for seq in &sequences {
            let actual = seq.column_count();
            if actual != column_count {
                return Err(AlignmentError::UnequalLength {
                    id: seq.id.clone(),
                    expected: column_count,
                    actual,
                });
            }
        }
        Ok(Self {
            sequences,
            column_count,
        })
    }

    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn sequences(&self) -> &[AlignedSequence] {
        &self.sequences
    }

    /// Sequence identifiers in input order.
    pub fn ids(&self) -> Vec<String> {
        self.sequences.iter().map(|s| s.id.clone()).collect()
    }

    /// Builds one column-to-residue map per sequence, in input order.
    pub fn maps(&self, gap: char) -> Vec<AlignmentMap> {
        self.sequences
            .iter()
            .map(|s| AlignmentMap::from_gapped(&s.residues, gap))
            .collect()
    }
}

/// For one structure, the mapping from alignment column to that structure's own
/// gap-free residue index.
///
/// Built once per structure, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMap {
    columns: Vec<Option<usize>>,
}

impl AlignmentMap {
    /// Walks the gapped sequence left to right; each non-gap character consumes
    /// the next residue index, each gap records "no residue" for its column.
    pub fn from_gapped(sequence: &str, gap: char) -> Self {
        let mut columns = Vec::with_capacity(sequence.len());
        let mut next_residue = 0;
        for ch in sequence.chars() {
            if ch == gap {
                columns.push(None);
            } else {
                columns.push(Some(next_residue));
                next_residue += 1;
            }
        }
        Self { columns }
    }

    /// The residue index at `column`, or `None` for a gap or out-of-range column.
    pub fn residue_at(&self, column: usize) -> Option<usize> {
        self.columns.get(column).copied().flatten()
    }

    /// Number of alignment columns covered by this map.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of non-gap residues.
    pub fn residue_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }
}
