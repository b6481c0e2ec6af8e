use crate::core::models::alignment::Alignment;
use crate::core::models::ensemble::StructureEnsemble;
use crate::core::utils::geometry;
use crate::engine::config::AnalysisConfig;
use crate::engine::entities::resolve_entities;
use crate::engine::error::AnalysisError;
use crate::engine::progress::ProgressReporter;
use nalgebra::Point3;

/// Computes the per-column flexibility profile (RMSF).
///
/// For every alignment column, each structure with a non-gap residue there
/// contributes its backbone coordinate; the column's value is the root mean
/// square distance of the contributors from their centroid. Columns with
/// fewer than two contributors carry 0.0: insufficient data to define
/// fluctuation, not an error.
///
/// The output length always equals the alignment's column count, independent
/// of any single structure's residue count.
pub fn flexibility_profile(
    ensemble: &StructureEnsemble,
    alignment: &Alignment,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<f64>, AnalysisError> {
    let n = alignment.sequence_count();
    if n == 0 {
        return Err(AnalysisError::EmptyAlignment);
    }

    let maps = alignment.maps(config.gap_character);
    let (entities, _source) = resolve_entities(ensemble, n, reporter);
    let n_calc = entities.len().min(n);

    let mut profile = Vec::with_capacity(alignment.column_count());
    for column in 0..alignment.column_count() {
        let contributors: Vec<Point3<f64>> = (0..n_calc)
            .filter_map(|s| {
                let residue = maps[s].residue_at(column)?;
                entities[s].trace().get(residue).copied()
            })
            .collect();

        if contributors.len() < 2 {
            profile.push(0.0);
            continue;
        }
        match geometry::centroid(&contributors) {
            Some(center) => profile.push(geometry::rms_deviation_from(&contributors, &center)),
            None => profile.push(0.0),
        }
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::alignment::AlignedSequence;
    use crate::core::models::ensemble::{CoordinateChain, CoordinateModel, ResidueRecord};

    fn ensemble_from_traces(traces: &[&[[f64; 3]]]) -> StructureEnsemble {
        let mut ensemble = StructureEnsemble::new();
        for (i, trace) in traces.iter().enumerate() {
            let mut chain = CoordinateChain::new('A');
            for p in *trace {
                chain.push_residue(ResidueRecord {
                    name: "ALA".to_string(),
                    position: Point3::new(p[0], p[1], p[2]),
                });
            }
            let mut model = CoordinateModel::new(i + 1);
            model.push_chain(chain);
            ensemble.push_model(model);
        }
        ensemble
    }

    fn alignment(rows: &[(&str, &str)]) -> Alignment {
        Alignment::new(
            rows.iter()
                .map(|(id, seq)| AlignedSequence::new(*id, *seq))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn profile_length_equals_alignment_length() {
        let ensemble = ensemble_from_traces(&[&[[0.0, 0.0, 0.0]], &[[1.0, 0.0, 0.0]]]);
        let alignment = alignment(&[("a", "A----"), ("b", "A----")]);
        let profile = flexibility_profile(
            &ensemble,
            &alignment,
            &AnalysisConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(profile.len(), 5);
    }

    #[test]
    fn identical_coordinates_give_zero_fluctuation() {
        let trace: &[[f64; 3]] = &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let ensemble = ensemble_from_traces(&[trace, trace, trace]);
        let alignment = alignment(&[("a", "AC"), ("b", "AC"), ("c", "AC")]);
        let profile = flexibility_profile(
            &ensemble,
            &alignment,
            &AnalysisConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(profile, vec![0.0, 0.0]);
    }

    #[test]
    fn symmetric_pair_has_unit_fluctuation() {
        // Two contributors at x = -1 and x = 1: centroid at origin, RMSF 1.
        let ensemble =
            ensemble_from_traces(&[&[[-1.0, 0.0, 0.0]], &[[1.0, 0.0, 0.0]]]);
        let alignment = alignment(&[("a", "A"), ("b", "A")]);
        let profile = flexibility_profile(
            &ensemble,
            &alignment,
            &AnalysisConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert!((profile[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn columns_with_one_contributor_are_zero() {
        let ensemble = ensemble_from_traces(&[&[[0.0, 0.0, 0.0], [9.0, 9.0, 9.0]], &[[1.0, 0.0, 0.0]]]);
        let alignment = alignment(&[("a", "AC"), ("b", "A-")]);
        let profile = flexibility_profile(
            &ensemble,
            &alignment,
            &AnalysisConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert!(profile[0] > 0.0);
        assert_eq!(profile[1], 0.0);
    }

    #[test]
    fn gap_columns_do_not_consume_residues() {
        // Structure 'b' has a gap in the first column, so its only residue
        // pairs with the second column.
        let ensemble = ensemble_from_traces(&[&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]], &[[2.0, 0.0, 0.0]]]);
        let alignment = alignment(&[("a", "AC"), ("b", "-C")]);
        let profile = flexibility_profile(
            &ensemble,
            &alignment,
            &AnalysisConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(profile[0], 0.0);
        assert_eq!(profile[1], 0.0);
    }
}
