//! Topsis Ranker - Multi-criteria ranking of alternatives
//!
//! This crate implements the TOPSIS method (Technique for Order Preference by
//! Similarity to Ideal Solution) for ranking alternatives against weighted,
//! directional criteria.

pub mod config;
pub mod domain;
pub mod telemetry;
