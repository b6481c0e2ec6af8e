use thiserror::Error;

use crate::core::io::fasta::FastaError;
use crate::core::io::pdb::PdbError;
use crate::core::models::alignment::AlignmentError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No distance data available: every parsing strategy failed")]
    NoDistanceData,

    #[error("Alignment contains no sequences")]
    EmptyAlignment,

    #[error("Failed to read coordinate artifact: {0}")]
    Coordinates(#[from] PdbError),

    #[error("Failed to read alignment artifact: {0}")]
    AlignmentArtifact(#[from] FastaError),

    #[error("Invalid alignment: {0}")]
    AlignmentShape(#[from] AlignmentError),
}
