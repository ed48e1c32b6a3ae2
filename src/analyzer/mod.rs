//! # Analyzer Module
//!
//! Diagnostic analyzers for Fluid resources.

pub mod dataset_health;
