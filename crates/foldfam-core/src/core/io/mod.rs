//! Provides input/output functionality for the consumed and produced artifacts.
//!
//! This module contains the readers for the three artifact families a
//! superposition result is made of (fixed-column coordinates, gapped FASTA
//! alignments, legacy distance tables) and the exporters that serialize the
//! derived matrices and trees back to text files. Readers return typed,
//! line-addressed errors; the legacy-table parsers instead signal "not usable"
//! so the waterfall can fall through.

pub mod export;
pub mod fasta;
pub mod pdb;
pub mod rmsd_table;
