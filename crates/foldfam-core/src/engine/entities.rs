use crate::core::models::ensemble::{Entity, StructureEnsemble};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::warn;

/// Which level of the coordinate artifact stood in for the aligned structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitySource {
    Models,
    Chains,
}

/// Resolves the coordinate artifact into one [`Entity`] per aligned structure
/// before any geometry runs, so downstream algorithms never branch on
/// model-vs-chain.
///
/// Policy: a model count equal to the expected structure count selects models;
/// otherwise, a first model holding at least that many chains selects its
/// first `expected` chains; otherwise the models are used as-is and a
/// dimension-mismatch warning is emitted.
pub fn resolve_entities(
    ensemble: &StructureEnsemble,
    expected: usize,
    reporter: &ProgressReporter,
) -> (Vec<Entity>, EntitySource) {
    if ensemble.model_count() == expected {
        let entities = ensemble.models().iter().map(Entity::from_model).collect();
        return (entities, EntitySource::Models);
    }

    if let Some(first) = ensemble.models().first() {
        if first.chains().len() >= expected {
            let entities = first.chains()[..expected]
                .iter()
                .map(Entity::from_chain)
                .collect();
            return (entities, EntitySource::Chains);
        }
    }

    let chain_count = ensemble.models().first().map_or(0, |m| m.chains().len());
    warn!(
        models = ensemble.model_count(),
        chains = chain_count,
        expected,
        "entity count does not match the aligned sequence count"
    );
    reporter.report(Progress::Warning(format!(
        "Structure count mismatch: alignment has {}, artifact has {} model(s) and {} chain(s)",
        expected,
        ensemble.model_count(),
        chain_count,
    )));
    let entities = ensemble.models().iter().map(Entity::from_model).collect();
    (entities, EntitySource::Models)
}
