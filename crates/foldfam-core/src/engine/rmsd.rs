use crate::core::models::alignment::Alignment;
use crate::core::models::ensemble::StructureEnsemble;
use crate::core::models::matrix::DistanceMatrix;
use crate::core::utils::geometry;
use crate::engine::config::AnalysisConfig;
use crate::engine::entities::resolve_entities;
use crate::engine::error::AnalysisError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{debug, warn};

/// Recomputes the pairwise RMSD matrix directly from superimposed backbone
/// coordinates, using the alignment maps to pair residues.
///
/// For each unordered pair, a column contributes only when both structures
/// have a non-gap residue there and both residue indices are within the bounds
/// of the extracted trace. A pair with no contributing columns keeps its zero
/// distance and is reported as degenerate.
pub fn recompute_matrix(
    ensemble: &StructureEnsemble,
    alignment: &Alignment,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<DistanceMatrix, AnalysisError> {
    let n = alignment.sequence_count();
    if n == 0 {
        return Err(AnalysisError::EmptyAlignment);
    }

    let maps = alignment.maps(config.gap_character);
    let (entities, _source) = resolve_entities(ensemble, n, reporter);
    let n_calc = entities.len().min(n);

    // Reconcile sequence and structure indexing: a trace shorter or longer
    // than the gap-free sequence still computes (out-of-bounds columns are
    // dropped), but the discrepancy is worth surfacing.
    for i in 0..n_calc {
        let expected_residues = maps[i].residue_count();
        if entities[i].len() != expected_residues {
            warn!(
                structure = %alignment.sequences()[i].id,
                trace = entities[i].len(),
                sequence = expected_residues,
                "backbone trace length disagrees with gap-free sequence length"
            );
        }
    }

    let mut matrix = DistanceMatrix::zeros(alignment.ids());
    for i in 0..n_calc {
        for j in (i + 1)..n_calc {
            let mut coords_i: Vec<Point3<f64>> = Vec::new();
            let mut coords_j: Vec<Point3<f64>> = Vec::new();
            for column in 0..alignment.column_count() {
                let (Some(res_i), Some(res_j)) =
                    (maps[i].residue_at(column), maps[j].residue_at(column))
                else {
                    continue;
                };
                let (Some(p_i), Some(p_j)) =
                    (entities[i].trace().get(res_i), entities[j].trace().get(res_j))
                else {
                    continue;
                };
                coords_i.push(*p_i);
                coords_j.push(*p_j);
            }

            if coords_i.is_empty() {
                warn!(
                    left = %alignment.sequences()[i].id,
                    right = %alignment.sequences()[j].id,
                    "no shared aligned columns; pair distance left at zero"
                );
                reporter.report(Progress::Warning(format!(
                    "No shared aligned columns between '{}' and '{}'; distance is undefined and reported as 0",
                    alignment.sequences()[i].id,
                    alignment.sequences()[j].id,
                )));
                continue;
            }

            let rmsd = geometry::paired_rmsd(&coords_i, &coords_j).unwrap_or(0.0);
            matrix.set_symmetric(i, j, rmsd);
        }
    }

    debug!(structures = n, computed = n_calc, "recomputed distance matrix");
    Ok(matrix)
}
