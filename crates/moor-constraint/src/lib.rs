//! Anchor-based constraint construction for moor view trees.
//!
//! This crate turns sparse, declarative anchor specs into installed,
//! active layout constraints on a view, and hands the new constraints back
//! keyed by role so callers can adjust individual ones later (e.g. to
//! animate a constant change).
//!
//! Four operations cover the supported shapes:
//! - [`ViewTree::constrain`] — full anchor-to-anchor binding with padding,
//!   position offsets, and an optional fixed-size override
//! - [`ViewTree::center`] — centering with literal width/height constants
//! - [`ViewTree::center_matching`] — centering with size matched to other
//!   dimensions plus an offset
//! - [`ViewTree::center_scaled`] — centering with size scaled from other
//!   dimensions
//!
//! # Example
//!
//! ```
//! use moor_constraint::{AnchorSpec, ConstraintRole, ViewTree, XAnchor, YAnchor};
//! use moor_core::{EdgeInsets, Rect};
//!
//! let mut tree = ViewTree::new();
//! let root = tree.add_view(Rect::new(0.0, 0.0, 320.0, 480.0));
//! let badge = tree.add_child(root, Rect::default()).unwrap();
//!
//! let set = tree
//!     .constrain(
//!         badge,
//!         &AnchorSpec::new()
//!             .with_top(YAnchor::top(root))
//!             .with_leading(XAnchor::leading(root))
//!             .with_padding(EdgeInsets::uniform(16.0)),
//!     )
//!     .unwrap();
//!
//! // Adjust the top constraint later, e.g. from an animation tick.
//! let top = set.get(ConstraintRole::Top).unwrap();
//! tree.set_constant(top, 32.0).unwrap();
//! ```

pub mod anchor;
pub mod builder;
pub mod constraint;
pub mod tree;

pub use anchor::{Anchor, Dim, DimAnchor, XAnchor, XLine, YAnchor, YLine};
pub use builder::{AnchorSpec, CenterSpec, MatchSpec, ScaleSpec};
pub use constraint::{Attribute, Constraint, ConstraintRole, ConstraintSet, ConstraintSource};
pub use tree::{View, ViewTree};

pub use moor_core::{ConstraintId, EdgeInsets, MoorError, Point, Rect, Size, ViewId};
