use crate::core::utils::residues;
use nalgebra::Point3;

/// One backbone record from the coordinate artifact: the residue name and the
/// position of its backbone (Cα-equivalent) atom.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord {
    pub name: String,
    pub position: Point3<f64>,
}

/// One chain of a coordinate model, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateChain {
    pub id: char,
    residues: Vec<ResidueRecord>,
}

impl CoordinateChain {
    pub fn new(id: char) -> Self {
        Self {
            id,
            residues: Vec::new(),
        }
    }

    pub fn push_residue(&mut self, record: ResidueRecord) {
        self.residues.push(record);
    }

    pub fn residues(&self) -> &[ResidueRecord] {
        &self.residues
    }
}

/// One model of the coordinate artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateModel {
    pub serial: usize,
    chains: Vec<CoordinateChain>,
}

impl CoordinateModel {
    pub fn new(serial: usize) -> Self {
        Self {
            serial,
            chains: Vec::new(),
        }
    }

    pub fn push_chain(&mut self, chain: CoordinateChain) {
        self.chains.push(chain);
    }

    pub fn last_chain_mut(&mut self) -> Option<&mut CoordinateChain> {
        self.chains.last_mut()
    }

    pub fn chains(&self) -> &[CoordinateChain] {
        &self.chains
    }

    pub fn residue_count(&self) -> usize {
        self.chains.iter().map(|c| c.residues.len()).sum()
    }
}

/// The parsed coordinate artifact: several superimposed structures, demarcated
/// by model boundaries and/or chain-identifier changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureEnsemble {
    models: Vec<CoordinateModel>,
}

impl StructureEnsemble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_model(&mut self, model: CoordinateModel) {
        self.models.push(model);
    }

    pub fn models(&self) -> &[CoordinateModel] {
        &self.models
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.iter().all(|m| m.residue_count() == 0)
    }
}

/// A resolved structural unit (model or chain) standing in for one aligned
/// structure during coordinate extraction.
///
/// The residue order of `trace` matches the residue-index convention used by
/// [`super::alignment::AlignmentMap`] for that structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    label: String,
    residue_names: Vec<String>,
    trace: Vec<Point3<f64>>,
}

impl Entity {
    /// A whole model as one structure: chains concatenated in file order.
    pub fn from_model(model: &CoordinateModel) -> Self {
        let mut residue_names = Vec::with_capacity(model.residue_count());
        let mut trace = Vec::with_capacity(model.residue_count());
        for chain in model.chains() {
            for record in chain.residues() {
                residue_names.push(record.name.clone());
                trace.push(record.position);
            }
        }
        Self {
            label: format!("model {}", model.serial),
            residue_names,
            trace,
        }
    }

    /// A single chain as one structure.
    pub fn from_chain(chain: &CoordinateChain) -> Self {
        Self {
            label: format!("chain {}", chain.id),
            residue_names: chain.residues().iter().map(|r| r.name.clone()).collect(),
            trace: chain.residues().iter().map(|r| r.position).collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Ordered backbone coordinates, one per residue.
    pub fn trace(&self) -> &[Point3<f64>] {
        &self.trace
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// One-letter sequence derived from the residue names; unknown names map
    /// to `X`.
    pub fn sequence(&self) -> String {
        residues::one_letter_sequence(self.residue_names.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(id: char, names: &[&str]) -> CoordinateChain {
        let mut chain = CoordinateChain::new(id);
        for (i, name) in names.iter().enumerate() {
            chain.push_residue(ResidueRecord {
                name: name.to_string(),
                position: Point3::new(i as f64, 0.0, 0.0),
            });
        }
        chain
    }

    #[test]
    fn entity_from_model_concatenates_chains() {
        let mut model = CoordinateModel::new(1);
        model.push_chain(chain('A', &["ALA", "GLY"]));
        model.push_chain(chain('B', &["TRP"]));

        let entity = Entity::from_model(&model);
        assert_eq!(entity.len(), 3);
        assert_eq!(entity.label(), "model 1");
        assert_eq!(entity.sequence(), "AGW");
    }

    #[test]
    fn entity_from_chain_keeps_residue_order() {
        let entity = Entity::from_chain(&chain('B', &["MET", "SER", "HIS"]));
        assert_eq!(entity.label(), "chain B");
        assert_eq!(entity.sequence(), "MSH");
        assert_eq!(entity.trace()[2], Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_residue_names_become_x() {
        let entity = Entity::from_chain(&chain('A', &["ALA", "UNK"]));
        assert_eq!(entity.sequence(), "AX");
    }

    #[test]
    fn ensemble_with_only_empty_models_is_empty() {
        let mut ensemble = StructureEnsemble::new();
        ensemble.push_model(CoordinateModel::new(1));
        assert!(ensemble.is_empty());
        assert_eq!(ensemble.model_count(), 1);
    }
}
