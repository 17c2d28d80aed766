//! Parsing engine for force-field optimization logs.
//!
//! The log is whitespace-delimited tabular text interleaved with prose
//! banners, repeated once per optimization iteration. This crate assembles
//! the log fragments into one line sequence, locates each block kind by its
//! marker, extracts fixed-schema numeric records, and derives per-parameter
//! percent-deviation traces for visualization.

pub mod assemble;
pub mod blocks;
pub mod catalog;
pub mod discovery;
pub mod domain;
pub mod session;

mod scan;
