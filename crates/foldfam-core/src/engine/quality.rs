use crate::core::models::alignment::Alignment;
use crate::core::models::ensemble::StructureEnsemble;
use crate::engine::config::AnalysisConfig;
use crate::engine::entities::resolve_entities;
use crate::engine::error::AnalysisError;
use crate::engine::progress::ProgressReporter;
use nalgebra::Point3;
use serde::Serialize;
use std::collections::BTreeMap;

/// Superposition quality of one structure, averaged against all others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub tm_score: f64,
    pub gdt_ts: f64,
}

/// TM-score over position-paired coordinates, normalized by the target's
/// gap-free length: `(1/L) * Σ 1 / (1 + (d_i/d0)²)`.
pub fn tm_score(coords1: &[Point3<f64>], coords2: &[Point3<f64>], l_target: usize) -> f64 {
    if coords1.is_empty() || coords1.len() != coords2.len() || l_target == 0 {
        return 0.0;
    }
    let d0 = if l_target > 15 {
        1.24 * (l_target as f64 - 15.0).cbrt() - 1.8
    } else {
        0.5
    };
    let d0_sq = d0 * d0;
    let score: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| 1.0 / (1.0 + (p1 - p2).norm_squared() / d0_sq))
        .sum();
    score / l_target as f64
}

/// Global Distance Test, Total Score: the mean fraction of paired residues
/// within 1, 2, 4, and 8 Å, normalized by the target's gap-free length.
pub fn gdt_ts(coords1: &[Point3<f64>], coords2: &[Point3<f64>], l_target: usize) -> f64 {
    if coords1.is_empty() || coords1.len() != coords2.len() || l_target == 0 {
        return 0.0;
    }
    let mut counts = [0usize; 4];
    for (p1, p2) in coords1.iter().zip(coords2.iter()) {
        let distance = (p1 - p2).norm();
        for (slot, cutoff) in counts.iter_mut().zip([1.0, 2.0, 4.0, 8.0]) {
            if distance < cutoff {
                *slot += 1;
            }
        }
    }
    counts
        .iter()
        .map(|&c| c as f64 / l_target as f64)
        .sum::<f64>()
        / 4.0
}

/// Computes the mean TM-score and GDT-TS of every structure against all
/// others, pairing coordinates over shared non-gap columns. Structures with
/// no shared columns against anyone score zero.
pub fn quality_metrics(
    ensemble: &StructureEnsemble,
    alignment: &Alignment,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<BTreeMap<String, QualityMetrics>, AnalysisError> {
    let n = alignment.sequence_count();
    if n == 0 {
        return Err(AnalysisError::EmptyAlignment);
    }

    let maps = alignment.maps(config.gap_character);
    let (entities, _source) = resolve_entities(ensemble, n, reporter);
    let n_calc = entities.len().min(n);

    let mut results = BTreeMap::new();
    for i in 0..n_calc {
        let l_target = alignment.sequences()[i].ungapped_len(config.gap_character);
        let mut tm_scores = Vec::new();
        let mut gdt_scores = Vec::new();

        for j in 0..n_calc {
            if i == j {
                continue;
            }
            let mut coords_i = Vec::new();
            let mut coords_j = Vec::new();
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
            if !coords_i.is_empty() {
                tm_scores.push(tm_score(&coords_i, &coords_j, l_target));
                gdt_scores.push(gdt_ts(&coords_i, &coords_j, l_target));
            }
        }

        let metrics = if tm_scores.is_empty() {
            QualityMetrics {
                tm_score: 0.0,
                gdt_ts: 0.0,
            }
        } else {
            QualityMetrics {
                tm_score: tm_scores.iter().sum::<f64>() / tm_scores.len() as f64,
                gdt_ts: gdt_scores.iter().sum::<f64>() / gdt_scores.len() as f64,
            }
        };
        results.insert(alignment.sequences()[i].id.clone(), metrics);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::alignment::AlignedSequence;
    use crate::core::models::ensemble::{CoordinateChain, CoordinateModel, ResidueRecord};

    fn points(coords: &[[f64; 3]]) -> Vec<Point3<f64>> {
        coords
            .iter()
            .map(|p| Point3::new(p[0], p[1], p[2]))
            .collect()
    }

    #[test]
    fn identical_coordinates_score_perfectly() {
        let coords = points(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]);
        assert!((tm_score(&coords, &coords, 3) - 1.0).abs() < 1e-12);
        assert!((gdt_ts(&coords, &coords, 3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn distant_coordinates_score_low() {
        let a = points(&[[0.0, 0.0, 0.0]]);
        let b = points(&[[100.0, 0.0, 0.0]]);
        assert!(tm_score(&a, &b, 1) < 0.01);
        assert_eq!(gdt_ts(&a, &b, 1), 0.0);
    }

    #[test]
    fn gdt_counts_each_cutoff_band() {
        let a = points(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        // One residue at 1.5 Å (inside 2/4/8), one at 5.0 Å (inside 8 only).
        let b = points(&[[1.5, 0.0, 0.0], [5.0, 0.0, 0.0]]);
        let expected = (0.0 + 0.5 + 0.5 + 1.0) / 4.0;
        assert!((gdt_ts(&a, &b, 2) - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(tm_score(&[], &[], 10), 0.0);
        assert_eq!(gdt_ts(&[], &[], 10), 0.0);
    }

    #[test]
    fn per_structure_metrics_cover_every_identifier() {
        let trace: &[[f64; 3]] = &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let mut ensemble = StructureEnsemble::new();
        for serial in 1..=2 {
            let mut chain = CoordinateChain::new('A');
            for p in trace {
                chain.push_residue(ResidueRecord {
                    name: "ALA".to_string(),
                    position: Point3::new(p[0], p[1], p[2]),
                });
            }
            let mut model = CoordinateModel::new(serial);
            model.push_chain(chain);
            ensemble.push_model(model);
        }
        let alignment = Alignment::new(vec![
            AlignedSequence::new("first", "AC"),
            AlignedSequence::new("second", "AC"),
        ])
        .unwrap();

        let metrics = quality_metrics(
            &ensemble,
            &alignment,
            &AnalysisConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(metrics.len(), 2);
        assert!((metrics["first"].tm_score - 1.0).abs() < 1e-12);
        assert!((metrics["second"].gdt_ts - 1.0).abs() < 1e-12);
    }
}
