//! Error types for the moor workspace.

use crate::types::{ConstraintId, ViewId};
use thiserror::Error;

/// Top-level error type for moor.
///
/// Only tree lookup and mutation APIs fail; constraint construction itself
/// raises nothing. Geometric consistency (conflicting or unsatisfiable
/// constraints) is out of scope and surfaces through the diagnostics
/// channel, not as an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoorError {
    #[error("Unknown view id: {id:?}")]
    UnknownView { id: ViewId },

    #[error("Unknown constraint id: {id:?}")]
    UnknownConstraint { id: ConstraintId },
}
