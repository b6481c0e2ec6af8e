//! # Foldfam Core Library
//!
//! A library for quantifying structural divergence across a set of superimposed
//! protein structures, turning geometric similarity into analyzable shapes: a
//! pairwise RMSD matrix, a hierarchical family tree, flat cluster assignments,
//! and a per-position flexibility profile.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains immutable data models (alignments,
//!   coordinate ensembles, distance matrices, merge trees), parsers for the
//!   consumed artifacts, and pure geometry utilities.
//!
//! - **[`engine`]: The Logic Core.** Implements the analysis algorithms: the
//!   ordered fallback dispatch that obtains a distance matrix with minimum
//!   recomputation cost, pairwise RMSD recomputation over gapped alignments,
//!   UPGMA clustering, tree serialization, and flexibility profiling.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties the `engine` and `core` together to execute a complete analysis pass
//!   over a superposition result, returning every derived artifact at once.

pub mod core;
pub mod engine;
pub mod workflows;
