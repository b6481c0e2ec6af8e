//! # Core Module
//!
//! This module provides the fundamental building blocks for structural-divergence
//! analysis in foldfam, serving as the immutable data layer of the library.
//!
//! ## Overview
//!
//! The core module defines the entities every analysis is made of (gapped
//! alignments, coordinate ensembles, distance matrices, and merge trees) along
//! with the parsers that materialize them from on-disk artifacts and the pure
//! geometry routines the engine computes with.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Data Models** ([`models`]) - Alignments and column maps, coordinate
//!   ensembles and resolved entities, labeled distance matrices, merge trees
//! - **File I/O** ([`io`]) - Readers for the coordinate, alignment, and legacy
//!   distance-table artifacts, plus delimited/Phylip/Newick exporters
//! - **Utilities** ([`utils`]) - Pure geometry (RMSD, centroids) and residue
//!   code tables
//!
//! ## Key Capabilities
//!
//! - **Immutable value types** - every entity is created once from external
//!   inputs and never mutated afterwards
//! - **Fixed-column coordinate parsing** with typed, line-addressed errors
//! - **Tolerant legacy-table parsing** that signals "not usable" instead of
//!   fabricating data

pub mod io;
pub mod models;
pub mod utils;
