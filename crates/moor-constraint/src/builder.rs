//! Builder operations that turn sparse anchor specs into active constraints.
//!
//! Each operation takes the target view plus a spec struct with named
//! optional fields, builds one constraint per supplied anchor, activates
//! the batch, and returns the new constraints keyed by [`ConstraintRole`].
//! Absent fields produce no constraint and no entry. Every invocation
//! builds fresh constraints; nothing is cached or deduplicated.

use smallvec::SmallVec;

use moor_core::{ConstraintId, EdgeInsets, MoorError, Point, Size, ViewId};

use crate::anchor::{DimAnchor, XAnchor, YAnchor};
use crate::constraint::{Attribute, Constraint, ConstraintRole, ConstraintSet};
use crate::tree::ViewTree;

/// Full anchor-to-anchor binding.
///
/// `padding` applies to the edge anchors with the bottom/right components
/// negated, so positive padding insets the view within its reference on
/// all four sides. `size` is a fixed-size override: each non-zero
/// component pins that dimension to a literal value with a constraint that
/// is activated immediately but left out of the returned set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorSpec {
    pub center_x: Option<XAnchor>,
    pub center_y: Option<YAnchor>,
    pub top: Option<YAnchor>,
    pub leading: Option<XAnchor>,
    pub bottom: Option<YAnchor>,
    pub trailing: Option<XAnchor>,
    pub width: Option<DimAnchor>,
    pub height: Option<DimAnchor>,
    pub position: Point,
    pub padding: EdgeInsets,
    pub size_offsets: Size,
    pub size: Option<Size>,
}

impl AnchorSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the view's horizontal center.
    pub fn with_center_x(mut self, anchor: XAnchor) -> Self {
        self.center_x = Some(anchor);
        self
    }

    /// Bind the view's vertical center.
    pub fn with_center_y(mut self, anchor: YAnchor) -> Self {
        self.center_y = Some(anchor);
        self
    }

    /// Bind the view's top edge.
    pub fn with_top(mut self, anchor: YAnchor) -> Self {
        self.top = Some(anchor);
        self
    }

    /// Bind the view's leading edge.
    pub fn with_leading(mut self, anchor: XAnchor) -> Self {
        self.leading = Some(anchor);
        self
    }

    /// Bind the view's bottom edge.
    pub fn with_bottom(mut self, anchor: YAnchor) -> Self {
        self.bottom = Some(anchor);
        self
    }

    /// Bind the view's trailing edge.
    pub fn with_trailing(mut self, anchor: XAnchor) -> Self {
        self.trailing = Some(anchor);
        self
    }

    /// Bind the view's width to another dimension.
    pub fn with_width(mut self, anchor: DimAnchor) -> Self {
        self.width = Some(anchor);
        self
    }

    /// Bind the view's height to another dimension.
    pub fn with_height(mut self, anchor: DimAnchor) -> Self {
        self.height = Some(anchor);
        self
    }

    /// Set the offsets applied to the center constraints.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Set the per-edge padding applied to the edge constraints.
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the constants added to the width/height anchor constraints.
    pub fn with_size_offsets(mut self, offsets: Size) -> Self {
        self.size_offsets = offsets;
        self
    }

    /// Set the fixed-size override.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

/// Centering with literal size constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterSpec {
    pub center_x: Option<XAnchor>,
    pub center_y: Option<YAnchor>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub position: Point,
}

impl CenterSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the view's horizontal center.
    pub fn with_center_x(mut self, anchor: XAnchor) -> Self {
        self.center_x = Some(anchor);
        self
    }

    /// Bind the view's vertical center.
    pub fn with_center_y(mut self, anchor: YAnchor) -> Self {
        self.center_y = Some(anchor);
        self
    }

    /// Pin the view's width to a literal value.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Pin the view's height to a literal value.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the offsets applied to the center constraints.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }
}

/// Centering with size matched to other dimensions plus an offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchSpec {
    pub center_x: Option<XAnchor>,
    pub center_y: Option<YAnchor>,
    pub width: Option<DimAnchor>,
    pub height: Option<DimAnchor>,
    pub position: Point,
    pub size_offsets: Size,
}

impl MatchSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the view's horizontal center.
    pub fn with_center_x(mut self, anchor: XAnchor) -> Self {
        self.center_x = Some(anchor);
        self
    }

    /// Bind the view's vertical center.
    pub fn with_center_y(mut self, anchor: YAnchor) -> Self {
        self.center_y = Some(anchor);
        self
    }

    /// Match the view's width to another dimension.
    pub fn with_width(mut self, anchor: DimAnchor) -> Self {
        self.width = Some(anchor);
        self
    }

    /// Match the view's height to another dimension.
    pub fn with_height(mut self, anchor: DimAnchor) -> Self {
        self.height = Some(anchor);
        self
    }

    /// Set the offsets applied to the center constraints.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Set the constants added to the matched dimensions.
    pub fn with_size_offsets(mut self, offsets: Size) -> Self {
        self.size_offsets = offsets;
        self
    }
}

/// Centering with size scaled from other dimensions.
///
/// `multipliers` defaults to (0, 0) and is not an absence sentinel: a
/// supplied dimension anchor with the default multiplier installs a
/// degenerate constraint pinning that dimension to zero. Callers must set
/// real multipliers for every dimension anchor they supply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleSpec {
    pub center_x: Option<XAnchor>,
    pub center_y: Option<YAnchor>,
    pub width: Option<DimAnchor>,
    pub height: Option<DimAnchor>,
    pub position: Point,
    pub multipliers: Size,
}

impl ScaleSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the view's horizontal center.
    pub fn with_center_x(mut self, anchor: XAnchor) -> Self {
        self.center_x = Some(anchor);
        self
    }

    /// Bind the view's vertical center.
    pub fn with_center_y(mut self, anchor: YAnchor) -> Self {
        self.center_y = Some(anchor);
        self
    }

    /// Scale the view's width from another dimension.
    pub fn with_width(mut self, anchor: DimAnchor) -> Self {
        self.width = Some(anchor);
        self
    }

    /// Scale the view's height from another dimension.
    pub fn with_height(mut self, anchor: DimAnchor) -> Self {
        self.height = Some(anchor);
        self
    }

    /// Set the offsets applied to the center constraints.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Set the width/height multipliers.
    pub fn with_multipliers(mut self, multipliers: Size) -> Self {
        self.multipliers = multipliers;
        self
    }
}

type Pending = SmallVec<[(ConstraintRole, ConstraintId); 8]>;

impl ViewTree {
    /// Bind `view` to the anchors in `spec` (full anchor-to-anchor form).
    ///
    /// Returns the new constraints keyed by role, all active. Fixed-size
    /// override constraints are activated but not returned; hold on to the
    /// set if any constant needs adjusting later.
    pub fn constrain(
        &mut self,
        view: ViewId,
        spec: &AnchorSpec,
    ) -> Result<ConstraintSet, MoorError> {
        self.view_mut(view)?.explicitly_constrained = true;

        let mut pending = Pending::new();
        if let Some(anchor) = spec.center_x {
            let c = Constraint::to_anchor(view, Attribute::CenterX, anchor, spec.position.x);
            pending.push((ConstraintRole::CenterX, self.install(c)));
        }
        if let Some(anchor) = spec.center_y {
            let c = Constraint::to_anchor(view, Attribute::CenterY, anchor, spec.position.y);
            pending.push((ConstraintRole::CenterY, self.install(c)));
        }
        if let Some(anchor) = spec.top {
            let c = Constraint::to_anchor(view, Attribute::Top, anchor, spec.padding.top);
            pending.push((ConstraintRole::Top, self.install(c)));
        }
        if let Some(anchor) = spec.leading {
            let c = Constraint::to_anchor(view, Attribute::Leading, anchor, spec.padding.left);
            pending.push((ConstraintRole::Leading, self.install(c)));
        }
        if let Some(anchor) = spec.bottom {
            // Negated so positive padding insets the view.
            let c = Constraint::to_anchor(view, Attribute::Bottom, anchor, -spec.padding.bottom);
            pending.push((ConstraintRole::Bottom, self.install(c)));
        }
        if let Some(anchor) = spec.trailing {
            let c = Constraint::to_anchor(view, Attribute::Trailing, anchor, -spec.padding.right);
            pending.push((ConstraintRole::Trailing, self.install(c)));
        }
        if let Some(anchor) = spec.width {
            let c = Constraint::to_anchor(view, Attribute::Width, anchor, spec.size_offsets.width);
            pending.push((ConstraintRole::Width, self.install(c)));
        }
        if let Some(anchor) = spec.height {
            let c =
                Constraint::to_anchor(view, Attribute::Height, anchor, spec.size_offsets.height);
            pending.push((ConstraintRole::Height, self.install(c)));
        }

        if let Some(size) = spec.size {
            // Zero components mean "no override" here; non-zero components
            // are activated on the spot and deliberately left out of the
            // returned set.
            if size.height != 0.0 {
                let id = self.install(Constraint::constant(view, Attribute::Height, size.height));
                self.activate(id)?;
            }
            if size.width != 0.0 {
                let id = self.install(Constraint::constant(view, Attribute::Width, size.width));
                self.activate(id)?;
            }
        }

        self.activate_batch(pending)
    }

    /// Center `view` on the supplied anchors with optional literal sizing.
    pub fn center(&mut self, view: ViewId, spec: &CenterSpec) -> Result<ConstraintSet, MoorError> {
        self.view_mut(view)?.explicitly_constrained = true;

        let mut pending = Pending::new();
        if let Some(anchor) = spec.center_x {
            let c = Constraint::to_anchor(view, Attribute::CenterX, anchor, spec.position.x);
            pending.push((ConstraintRole::CenterX, self.install(c)));
        }
        if let Some(anchor) = spec.center_y {
            let c = Constraint::to_anchor(view, Attribute::CenterY, anchor, spec.position.y);
            pending.push((ConstraintRole::CenterY, self.install(c)));
        }
        if let Some(width) = spec.width {
            let c = Constraint::constant(view, Attribute::Width, width);
            pending.push((ConstraintRole::Width, self.install(c)));
        }
        if let Some(height) = spec.height {
            let c = Constraint::constant(view, Attribute::Height, height);
            pending.push((ConstraintRole::Height, self.install(c)));
        }

        self.activate_batch(pending)
    }

    /// Center `view` and match its size to other dimensions plus an offset.
    pub fn center_matching(
        &mut self,
        view: ViewId,
        spec: &MatchSpec,
    ) -> Result<ConstraintSet, MoorError> {
        self.view_mut(view)?.explicitly_constrained = true;

        let mut pending = Pending::new();
        if let Some(anchor) = spec.center_x {
            let c = Constraint::to_anchor(view, Attribute::CenterX, anchor, spec.position.x);
            pending.push((ConstraintRole::CenterX, self.install(c)));
        }
        if let Some(anchor) = spec.center_y {
            let c = Constraint::to_anchor(view, Attribute::CenterY, anchor, spec.position.y);
            pending.push((ConstraintRole::CenterY, self.install(c)));
        }
        if let Some(anchor) = spec.width {
            let c = Constraint::to_anchor(view, Attribute::Width, anchor, spec.size_offsets.width);
            pending.push((ConstraintRole::Width, self.install(c)));
        }
        if let Some(anchor) = spec.height {
            let c =
                Constraint::to_anchor(view, Attribute::Height, anchor, spec.size_offsets.height);
            pending.push((ConstraintRole::Height, self.install(c)));
        }

        self.activate_batch(pending)
    }

    /// Center `view` and scale its size from other dimensions.
    ///
    /// A dimension anchor supplied with the default multiplier of zero
    /// still installs a constraint, pinning that dimension to zero.
    pub fn center_scaled(
        &mut self,
        view: ViewId,
        spec: &ScaleSpec,
    ) -> Result<ConstraintSet, MoorError> {
        self.view_mut(view)?.explicitly_constrained = true;

        let mut pending = Pending::new();
        if let Some(anchor) = spec.center_x {
            let c = Constraint::to_anchor(view, Attribute::CenterX, anchor, spec.position.x);
            pending.push((ConstraintRole::CenterX, self.install(c)));
        }
        if let Some(anchor) = spec.center_y {
            let c = Constraint::to_anchor(view, Attribute::CenterY, anchor, spec.position.y);
            pending.push((ConstraintRole::CenterY, self.install(c)));
        }
        if let Some(anchor) = spec.width {
            let c = Constraint::scaled(view, Attribute::Width, anchor, spec.multipliers.width);
            pending.push((ConstraintRole::Width, self.install(c)));
        }
        if let Some(anchor) = spec.height {
            let c = Constraint::scaled(view, Attribute::Height, anchor, spec.multipliers.height);
            pending.push((ConstraintRole::Height, self.install(c)));
        }

        self.activate_batch(pending)
    }

    fn activate_batch(&mut self, pending: Pending) -> Result<ConstraintSet, MoorError> {
        let mut set = ConstraintSet::new();
        for (role, id) in pending {
            self.activate(id)?;
            set.insert(role, id);
        }
        Ok(set)
    }
}
