//! Testing utilities for flowbind pipelines.
//!
//! This module provides:
//! - [`Probe`], a counting stub to assert how often a step ran

mod probe;

pub use probe::Probe;
