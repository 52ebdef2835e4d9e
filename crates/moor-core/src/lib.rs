//! Core types for the moor layout helpers.
//!
//! This crate provides the foundational types used by the rest of the
//! workspace:
//! - Geometry value types (points, sizes, edge insets, rectangles)
//! - Id newtypes for views and constraints
//! - Error types

pub mod errors;
pub mod geometry;
pub mod types;

pub use errors::*;
pub use geometry::*;
pub use types::*;
