use crate::core::models::ensemble::{
    CoordinateChain, CoordinateModel, ResidueRecord, StructureEnsemble,
};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("No '{atom_name}' coordinates found in the artifact")]
    NoCoordinates { atom_name: String },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Line is too short for an ATOM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_coordinate(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let raw = slice_and_trim(line, start, end);
    raw.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: raw.into(),
        },
    })
}

/// Reads the backbone trace of every entity in a fixed-column coordinate
/// artifact.
///
/// `MODEL`/`ENDMDL` records demarcate models; within a model, a change of the
/// chain-identifier column starts a new chain and `TER` closes the current
/// one. Only `ATOM` records whose atom-name field equals `backbone_atom` are
/// kept, one residue per record, in file order.
pub fn read_from(
    reader: &mut impl BufRead,
    backbone_atom: &str,
) -> Result<StructureEnsemble, PdbError> {
    let mut ensemble = StructureEnsemble::new();
    let mut current_model: Option<CoordinateModel> = None;
    let mut current_chain_id: Option<char> = None;

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;
        let record_type = slice_and_trim(&line, 0, 6);

        match record_type {
            "MODEL" => {
                if let Some(model) = current_model.take() {
                    ensemble.push_model(model);
                }
                let serial = slice_and_trim(&line, 10, 14)
                    .parse()
                    .unwrap_or(ensemble.model_count() + 1);
                current_model = Some(CoordinateModel::new(serial));
                current_chain_id = None;
            }
            "ENDMDL" => {
                if let Some(model) = current_model.take() {
                    ensemble.push_model(model);
                }
                current_chain_id = None;
            }
            "TER" => {
                current_chain_id = None;
            }
            "ATOM" => {
                if line.len() < 54 {
                    return Err(PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::LineTooShort,
                    });
                }
                let name = slice_and_trim(&line, 12, 16);
                if name != backbone_atom {
                    continue;
                }
                let residue_name = slice_and_trim(&line, 17, 20);
                let chain_id = line.chars().nth(21).unwrap_or('A');
                let x = parse_coordinate(&line, line_num, 30, 38)?;
                let y = parse_coordinate(&line, line_num, 38, 46)?;
                let z = parse_coordinate(&line, line_num, 46, 54)?;

                let model = current_model.get_or_insert_with(|| CoordinateModel::new(1));
                if current_chain_id != Some(chain_id) {
                    model.push_chain(CoordinateChain::new(chain_id));
                    current_chain_id = Some(chain_id);
                }
                if let Some(chain) = model.last_chain_mut() {
                    chain.push_residue(ResidueRecord {
                        name: residue_name.to_string(),
                        position: Point3::new(x, y, z),
                    });
                }
            }
            _ => {}
        }
    }

    if let Some(model) = current_model.take() {
        ensemble.push_model(model);
    }

    if ensemble.is_empty() {
        return Err(PdbError::NoCoordinates {
            atom_name: backbone_atom.to_string(),
        });
    }
    Ok(ensemble)
}

pub fn read_from_path<P: AsRef<Path>>(
    path: P,
    backbone_atom: &str,
) -> Result<StructureEnsemble, PdbError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_from(&mut reader, backbone_atom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom_line(name: &str, res: &str, chain: char, serial: usize, x: f64) -> String {
        format!(
            "ATOM  {serial:>5} {name:^4} {res:>3} {chain}{resseq:>4}    {x:8.3}{y:8.3}{z:8.3}",
            serial = serial,
            name = name,
            res = res,
            chain = chain,
            resseq = serial,
            x = x,
            y = 0.0,
            z = 0.0,
        )
    }

    #[test]
    fn reads_models_as_separate_entities() {
        let text = format!(
            "MODEL        1\n{}\n{}\nENDMDL\nMODEL        2\n{}\nENDMDL\n",
            atom_line("CA", "ALA", 'A', 1, 1.0),
            atom_line("CA", "GLY", 'A', 2, 2.0),
            atom_line("CA", "ALA", 'A', 1, 3.0),
        );
        let ensemble = read_from(&mut text.as_bytes(), "CA").unwrap();
        assert_eq!(ensemble.model_count(), 2);
        assert_eq!(ensemble.models()[0].residue_count(), 2);
        assert_eq!(ensemble.models()[1].residue_count(), 1);
        assert_eq!(ensemble.models()[0].serial, 1);
        assert_eq!(ensemble.models()[1].serial, 2);
    }

    #[test]
    fn chain_change_starts_a_new_chain() {
        let text = format!(
            "{}\n{}\n{}\n",
            atom_line("CA", "ALA", 'A', 1, 1.0),
            atom_line("CA", "GLY", 'B', 2, 2.0),
            atom_line("CA", "SER", 'B', 3, 3.0),
        );
        let ensemble = read_from(&mut text.as_bytes(), "CA").unwrap();
        assert_eq!(ensemble.model_count(), 1);
        let chains = ensemble.models()[0].chains();
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].id, 'A');
        assert_eq!(chains[1].id, 'B');
        assert_eq!(chains[1].residues().len(), 2);
    }

    #[test]
    fn ter_closes_the_current_chain() {
        let text = format!(
            "{}\nTER\n{}\n",
            atom_line("CA", "ALA", 'A', 1, 1.0),
            atom_line("CA", "GLY", 'A', 2, 2.0),
        );
        let ensemble = read_from(&mut text.as_bytes(), "CA").unwrap();
        assert_eq!(ensemble.models()[0].chains().len(), 2);
    }

    #[test]
    fn non_backbone_atoms_are_skipped() {
        let text = format!(
            "{}\n{}\n{}\n",
            atom_line("N", "ALA", 'A', 1, 0.5),
            atom_line("CA", "ALA", 'A', 2, 1.0),
            atom_line("CB", "ALA", 'A', 3, 1.5),
        );
        let ensemble = read_from(&mut text.as_bytes(), "CA").unwrap();
        assert_eq!(ensemble.models()[0].residue_count(), 1);
        let record = &ensemble.models()[0].chains()[0].residues()[0];
        assert_eq!(record.position, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn short_atom_line_is_a_parse_error() {
        let mut text = "ATOM      1  CA  ALA A   1".as_bytes();
        let result = read_from(&mut text, "CA");
        assert!(matches!(
            result,
            Err(PdbError::Parse {
                kind: PdbParseErrorKind::LineTooShort,
                ..
            })
        ));
    }

    #[test]
    fn malformed_coordinate_is_a_parse_error() {
        let line = atom_line("CA", "ALA", 'A', 1, 1.0).replace("   1.000", "   x.xxx");
        let result = read_from(&mut line.as_bytes(), "CA");
        assert!(matches!(
            result,
            Err(PdbError::Parse {
                kind: PdbParseErrorKind::InvalidFloat { .. },
                ..
            })
        ));
    }

    #[test]
    fn artifact_without_backbone_atoms_is_rejected() {
        let text = format!("{}\n", atom_line("N", "ALA", 'A', 1, 0.5));
        let result = read_from(&mut text.as_bytes(), "CA");
        assert!(matches!(result, Err(PdbError::NoCoordinates { .. })));
    }
}
