//! # Engine Module
//!
//! This module implements the analysis logic of foldfam: everything between
//! the parsed artifacts and the derived results.
//!
//! ## Overview
//!
//! The engine turns a coordinate ensemble and a gapped alignment into the four
//! outputs of a divergence analysis (distance matrix, family tree, cluster
//! assignments, and flexibility profile) plus the supplementary statistics
//! and quality metrics. All operations are synchronous, deterministic pure
//! functions over immutable inputs; there is no shared mutable state.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Typed, TOML-loadable analysis settings
//! - **Progress Monitoring** ([`progress`]) - Injected reporting collaborator
//! - **Error Handling** ([`error`]) - The engine boundary error type
//! - **Entity Resolution** ([`entities`]) - Models vs. chains standing in for
//!   aligned structures
//! - **Distance Acquisition** ([`sources`], [`rmsd`]) - Ordered fallback
//!   dispatch over legacy artifacts, backed by authoritative recomputation
//! - **Clustering & Trees** ([`clustering`], [`dendrogram`]) - UPGMA linkage,
//!   flat clusters, Newick serialization
//! - **Profiles & Metrics** ([`rmsf`], [`quality`]) - Per-column flexibility
//!   and per-structure quality scores

pub mod clustering;
pub mod config;
pub mod dendrogram;
pub mod entities;
pub mod error;
pub mod progress;
pub mod quality;
pub mod rmsd;
pub mod rmsf;
pub mod sources;
