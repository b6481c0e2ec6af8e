use crate::core::io::rmsd_table;
use crate::core::models::alignment::Alignment;
use crate::core::models::ensemble::StructureEnsemble;
use crate::core::models::matrix::DistanceMatrix;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::AnalysisError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::rmsd::recompute_matrix;
use tracing::{debug, info, warn};

/// The raw material a distance matrix can be obtained from, in descending
/// order of preference. Absent members simply skip their strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceSources<'a> {
    /// Text of the precise rotation-table artifact.
    pub rotation_table: Option<&'a str>,
    /// Text of the aligner's log output.
    pub log_text: Option<&'a str>,
    /// Superimposed coordinates, enabling authoritative recomputation.
    pub ensemble: Option<&'a StructureEnsemble>,
}

/// Obtains a distance matrix with minimum recomputation cost.
///
/// Strategies run in a fixed order (rotation table, then log table, then
/// recomputation), each returning a matrix or signalling "not usable". A matrix whose dimension
/// disagrees with the alignment's sequence count is a failure and control
/// passes on. When every strategy fails the result is
/// [`AnalysisError::NoDistanceData`]; a matrix is never fabricated.
pub fn resolve_distance_matrix(
    sources: &DistanceSources,
    alignment: &Alignment,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<DistanceMatrix, AnalysisError> {
    let expected = alignment.sequence_count();
    if expected == 0 {
        return Err(AnalysisError::EmptyAlignment);
    }
    let labels = alignment.ids();

    type Strategy<'s> = (&'static str, Box<dyn Fn() -> Option<DistanceMatrix> + 's>);
    let strategies: Vec<Strategy<'_>> = vec![
        (
            "rotation table",
            Box::new(|| {
                sources
                    .rotation_table
                    .and_then(|text| rmsd_table::parse_rotation_table(text, &labels))
            }),
        ),
        (
            "log table",
            Box::new(|| {
                sources
                    .log_text
                    .and_then(|text| rmsd_table::parse_log_table(text, &labels))
            }),
        ),
        (
            "recomputation",
            Box::new(|| {
                let ensemble = sources.ensemble?;
                match recompute_matrix(ensemble, alignment, config, reporter) {
                    Ok(matrix) => Some(matrix),
                    Err(error) => {
                        warn!(%error, "distance recomputation failed");
                        None
                    }
                }
            }),
        ),
    ];

    for (name, strategy) in &strategies {
        match strategy() {
            Some(matrix) if matrix.len() == expected => {
                info!(strategy = name, "distance matrix obtained");
                reporter.report(Progress::Message(format!(
                    "Distance matrix obtained via {}",
                    name
                )));
                return Ok(matrix);
            }
            Some(matrix) => {
                warn!(
                    strategy = name,
                    got = matrix.len(),
                    expected,
                    "strategy produced a matrix of the wrong dimension"
                );
                reporter.report(Progress::Warning(format!(
                    "{} produced a {}x{} matrix, expected {}x{}",
                    name,
                    matrix.len(),
                    matrix.len(),
                    expected,
                    expected,
                )));
            }
            None => {
                debug!(strategy = name, "strategy not usable");
            }
        }
    }

    reporter.report(Progress::Warning(
        "No distance data available: every parsing strategy failed".to_string(),
    ));
    Err(AnalysisError::NoDistanceData)
}
