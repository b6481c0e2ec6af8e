//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent one
//! structural-divergence analysis, providing the foundation for all engine
//! operations.
//!
//! ## Overview
//!
//! The models are designed around a single invariant lifecycle: every entity is
//! built from the two external inputs (a coordinate artifact and a gapped
//! multiple alignment) at analysis time, lives for one result-processing pass,
//! and is never mutated in place.
//!
//! ## Key Components
//!
//! - [`alignment`] - Gapped sequences and the column-to-residue maps derived
//!   from them
//! - [`ensemble`] - The parsed coordinate artifact (models, chains, backbone
//!   records) and the resolved [`ensemble::Entity`] abstraction
//! - [`matrix`] - Labeled, symmetric pairwise distance matrices with summary
//!   statistics
//! - [`tree`] - Agglomerative merge records produced by the clusterer

pub mod alignment;
pub mod ensemble;
pub mod matrix;
pub mod tree;
