//! scorecard-core — Audit model, criteria loading, scoring, and persistence.
//!
//! This crate defines the data model and the audit logic that the scorecard
//! front-end builds on: loading criteria from CSV, scoring answers, and
//! appending completed audits to the log.

pub mod audit_log;
pub mod criteria;
pub mod csv;
pub mod error;
pub mod model;
pub mod scoring;
pub mod session;
