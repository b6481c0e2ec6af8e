use crate::core::io::{fasta, pdb};
use crate::core::models::alignment::Alignment;
use crate::core::models::ensemble::StructureEnsemble;
use crate::core::models::matrix::{DistanceMatrix, DistanceSummary};
use crate::core::models::tree::MergeTree;
use crate::engine::clustering;
use crate::engine::config::AnalysisConfig;
use crate::engine::dendrogram::{self, Dendrogram};
use crate::engine::error::AnalysisError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::quality::{self, QualityMetrics};
use crate::engine::rmsf;
use crate::engine::sources::{self, DistanceSources};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

/// File-based inputs for one analysis pass. Only the alignment is mandatory;
/// absent artifacts simply disable the strategies and profiles that need them.
#[derive(Debug, Clone, Default)]
pub struct AnalysisArtifacts {
    pub alignment: PathBuf,
    pub coordinates: Option<PathBuf>,
    pub rotation_table: Option<PathBuf>,
    pub log: Option<PathBuf>,
}

/// In-memory inputs for one analysis pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisInput<'a> {
    pub ensemble: Option<&'a StructureEnsemble>,
    pub rotation_table: Option<&'a str>,
    pub log_text: Option<&'a str>,
}

/// Everything one analysis pass derives from its inputs. The cluster
/// assignments are not stored: they are a pure, cheap function of the tree
/// and are recomputed per threshold via [`AnalysisReport::clusters`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub matrix: DistanceMatrix,
    pub tree: MergeTree,
    pub newick: String,
    pub dendrogram: Dendrogram,
    pub flexibility: Option<Vec<f64>>,
    pub summary: Option<DistanceSummary>,
    pub quality: Option<BTreeMap<String, QualityMetrics>>,
}

impl AnalysisReport {
    /// Flat cluster membership at the given distance threshold, keyed by
    /// cluster label.
    pub fn clusters(&self, threshold: f64) -> BTreeMap<usize, Vec<String>> {
        clustering::group_clusters(&self.tree, self.matrix.labels(), threshold)
    }
}

/// Runs a complete analysis over in-memory inputs.
pub fn run(
    input: &AnalysisInput,
    alignment: &Alignment,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisReport, AnalysisError> {
    // === Phase 1: Obtain the distance matrix ===
    reporter.report(Progress::PhaseStart {
        name: "Distance Matrix",
    });
    let distance_sources = DistanceSources {
        rotation_table: input.rotation_table,
        log_text: input.log_text,
        ensemble: input.ensemble,
    };
    let matrix = sources::resolve_distance_matrix(&distance_sources, alignment, config, reporter)?;
    let summary = matrix.summary();
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Cluster and serialize the family tree ===
    reporter.report(Progress::PhaseStart { name: "Clustering" });
    let tree = clustering::linkage(&matrix);
    let newick = dendrogram::to_newick(&tree, matrix.labels(), config.newick_precision);
    let dendrogram = dendrogram::describe(&tree, matrix.labels());
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Coordinate-derived profiles ===
    reporter.report(Progress::PhaseStart {
        name: "Flexibility",
    });
    let flexibility = match input.ensemble {
        Some(ensemble) => Some(rmsf::flexibility_profile(
            ensemble, alignment, config, reporter,
        )?),
        None => None,
    };
    let quality = match input.ensemble {
        Some(ensemble) => Some(quality::quality_metrics(
            ensemble, alignment, config, reporter,
        )?),
        None => None,
    };
    reporter.report(Progress::PhaseFinish);

    info!(
        structures = alignment.sequence_count(),
        columns = alignment.column_count(),
        "analysis complete"
    );
    Ok(AnalysisReport {
        matrix,
        tree,
        newick,
        dendrogram,
        flexibility,
        summary,
        quality,
    })
}

/// Runs a complete analysis from file paths.
///
/// The alignment must be readable; the optional artifacts are read
/// best-effort, and an unreadable or unparsable one merely disables its
/// waterfall strategy with a warning, matching the recovery policy of the
/// strategies themselves.
pub fn run_with_artifacts(
    artifacts: &AnalysisArtifacts,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisReport, AnalysisError> {
    let alignment = fasta::read_from_path(&artifacts.alignment)?;

    let ensemble = artifacts.coordinates.as_ref().and_then(|path| {
        match pdb::read_from_path(path, &config.backbone_atom) {
            Ok(ensemble) => Some(ensemble),
            Err(error) => {
                warn!(path = %path.display(), %error, "coordinate artifact unusable");
                reporter.report(Progress::Warning(format!(
                    "Coordinate artifact '{}' unusable: {}",
                    path.display(),
                    error
                )));
                None
            }
        }
    });
    let read_text = |path: &PathBuf, what: &str| match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(error) => {
            warn!(path = %path.display(), %error, what, "artifact unreadable");
            reporter.report(Progress::Warning(format!(
                "{} artifact '{}' unreadable: {}",
                what,
                path.display(),
                error
            )));
            None
        }
    };
    let rotation_table = artifacts
        .rotation_table
        .as_ref()
        .and_then(|p| read_text(p, "Rotation-table"));
    let log_text = artifacts.log.as_ref().and_then(|p| read_text(p, "Log"));

    let input = AnalysisInput {
        ensemble: ensemble.as_ref(),
        rotation_table: rotation_table.as_deref(),
        log_text: log_text.as_deref(),
    };
    run(&input, &alignment, config, reporter)
}
