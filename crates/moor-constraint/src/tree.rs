//! The view tree and installed-constraint store.
//!
//! The tree owns plain view records and every constraint installed on
//! them, and exposes the activation/mutation surface that builder callers
//! use afterwards. There is no solving here: activating a constraint only
//! marks it as participating in layout, mirroring how a host layout engine
//! defers all geometric resolution to its own pass.

use indexmap::IndexMap;
use moor_core::{ConstraintId, MoorError, Rect, ViewId};

use crate::constraint::Constraint;

/// A view's layout record.
#[derive(Debug, Clone)]
pub struct View {
    pub id: ViewId,
    pub parent: Option<ViewId>,
    /// Frame-based geometry; ignored as layout input once
    /// `explicitly_constrained` is set.
    pub frame: Rect,
    /// When set, installed constraints fully determine this view's
    /// geometry. Every builder operation sets this before attaching
    /// anything.
    pub explicitly_constrained: bool,
}

/// Arena of views plus the store of installed constraints.
#[derive(Debug, Default)]
pub struct ViewTree {
    views: IndexMap<ViewId, View>,
    constraints: IndexMap<ConstraintId, Constraint>,
    next_view: u64,
    next_constraint: u64,
}

impl ViewTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root-level view with the given frame.
    pub fn add_view(&mut self, frame: Rect) -> ViewId {
        self.insert_view(None, frame)
    }

    /// Add a view as a child of `parent`.
    pub fn add_child(&mut self, parent: ViewId, frame: Rect) -> Result<ViewId, MoorError> {
        if !self.views.contains_key(&parent) {
            return Err(MoorError::UnknownView { id: parent });
        }
        Ok(self.insert_view(Some(parent), frame))
    }

    fn insert_view(&mut self, parent: Option<ViewId>, frame: Rect) -> ViewId {
        self.next_view += 1;
        let id = ViewId(self.next_view);
        self.views.insert(
            id,
            View {
                id,
                parent,
                frame,
                explicitly_constrained: false,
            },
        );
        id
    }

    /// Look up a view.
    pub fn view(&self, id: ViewId) -> Result<&View, MoorError> {
        self.views.get(&id).ok_or(MoorError::UnknownView { id })
    }

    /// Look up a view for mutation.
    pub fn view_mut(&mut self, id: ViewId) -> Result<&mut View, MoorError> {
        self.views.get_mut(&id).ok_or(MoorError::UnknownView { id })
    }

    /// Number of views in the tree.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// True when the tree holds no views.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Iterate over all views in insertion order.
    pub fn views(&self) -> impl Iterator<Item = &View> {
        self.views.values()
    }

    /// Install a constraint record. The constraint starts out inactive.
    pub fn install(&mut self, constraint: Constraint) -> ConstraintId {
        self.next_constraint += 1;
        let id = ConstraintId(self.next_constraint);
        self.constraints.insert(id, constraint);
        id
    }

    /// Mark a constraint as participating in layout.
    ///
    /// Binding to an anchor whose view is not in the tree is not an error;
    /// it is reported through the diagnostics channel and the constraint is
    /// activated anyway, the way a host layout engine surfaces
    /// unsatisfiable constraints as non-fatal runtime warnings.
    pub fn activate(&mut self, id: ConstraintId) -> Result<(), MoorError> {
        let constraint = self
            .constraints
            .get_mut(&id)
            .ok_or(MoorError::UnknownConstraint { id })?;
        constraint.active = true;

        if let Some(anchor) = constraint.anchor() {
            if !self.views.contains_key(&anchor.view()) {
                tracing::warn!(
                    constraint = ?id,
                    anchor_view = ?anchor.view(),
                    "Activated constraint binds to a view outside the tree"
                );
            }
        }
        Ok(())
    }

    /// Withdraw a constraint from layout without removing its record.
    pub fn deactivate(&mut self, id: ConstraintId) -> Result<(), MoorError> {
        self.constraints
            .get_mut(&id)
            .ok_or(MoorError::UnknownConstraint { id })?
            .active = false;
        Ok(())
    }

    /// True when the constraint exists and is active.
    pub fn is_active(&self, id: ConstraintId) -> bool {
        self.constraints.get(&id).is_some_and(|c| c.active)
    }

    /// Look up a constraint record.
    pub fn constraint(&self, id: ConstraintId) -> Result<&Constraint, MoorError> {
        self.constraints
            .get(&id)
            .ok_or(MoorError::UnknownConstraint { id })
    }

    /// Change a constraint's additive constant.
    pub fn set_constant(&mut self, id: ConstraintId, value: f64) -> Result<(), MoorError> {
        self.constraints
            .get_mut(&id)
            .ok_or(MoorError::UnknownConstraint { id })?
            .constant = value;
        Ok(())
    }

    /// Change a constraint's multiplier.
    pub fn set_multiplier(&mut self, id: ConstraintId, value: f64) -> Result<(), MoorError> {
        self.constraints
            .get_mut(&id)
            .ok_or(MoorError::UnknownConstraint { id })?
            .multiplier = value;
        Ok(())
    }

    /// Iterate over the constraints owned by `view`, in installation order.
    pub fn constraints_on(
        &self,
        view: ViewId,
    ) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints
            .iter()
            .filter(move |(_, c)| c.owner == view)
            .map(|(id, c)| (*id, c))
    }

    /// Total number of installed constraints, active or not.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::XAnchor;
    use crate::constraint::Attribute;

    #[test]
    fn test_add_and_look_up_views() {
        let mut tree = ViewTree::new();
        assert!(tree.is_empty());

        let root = tree.add_view(Rect::new(0.0, 0.0, 320.0, 480.0));
        let child = tree.add_child(root, Rect::default()).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.view(child).unwrap().parent, Some(root));
        assert!(!tree.view(root).unwrap().explicitly_constrained);
    }

    #[test]
    fn test_unknown_parent_is_an_error() {
        let mut tree = ViewTree::new();
        let err = tree.add_child(ViewId(99), Rect::default()).unwrap_err();
        assert_eq!(err, MoorError::UnknownView { id: ViewId(99) });
    }

    #[test]
    fn test_constraint_lifecycle() {
        let mut tree = ViewTree::new();
        let root = tree.add_view(Rect::default());
        let child = tree.add_child(root, Rect::default()).unwrap();

        let id = tree.install(Constraint::to_anchor(
            child,
            Attribute::Leading,
            XAnchor::leading(root),
            8.0,
        ));
        assert!(!tree.is_active(id));

        tree.activate(id).unwrap();
        assert!(tree.is_active(id));

        tree.set_constant(id, 24.0).unwrap();
        assert!((tree.constraint(id).unwrap().constant - 24.0).abs() < 1e-9);

        tree.deactivate(id).unwrap();
        assert!(!tree.is_active(id));
    }

    #[test]
    fn test_unknown_constraint_id_is_an_error() {
        let mut tree = ViewTree::new();
        let missing = ConstraintId(42);
        assert_eq!(
            tree.activate(missing).unwrap_err(),
            MoorError::UnknownConstraint { id: missing }
        );
        assert_eq!(
            tree.set_constant(missing, 1.0).unwrap_err(),
            MoorError::UnknownConstraint { id: missing }
        );
        assert!(!tree.is_active(missing));
    }

    #[test]
    fn test_activation_outside_tree_is_non_fatal() {
        let mut tree = ViewTree::new();
        let view = tree.add_view(Rect::default());

        // Anchor view was never added; activation still succeeds.
        let id = tree.install(Constraint::to_anchor(
            view,
            Attribute::Leading,
            XAnchor::leading(ViewId(777)),
            0.0,
        ));
        tree.activate(id).unwrap();
        assert!(tree.is_active(id));
    }

    #[test]
    fn test_constraints_on_filters_by_owner() {
        let mut tree = ViewTree::new();
        let a = tree.add_view(Rect::default());
        let b = tree.add_view(Rect::default());

        tree.install(Constraint::constant(a, Attribute::Width, 10.0));
        tree.install(Constraint::constant(b, Attribute::Width, 20.0));
        tree.install(Constraint::constant(a, Attribute::Height, 30.0));

        assert_eq!(tree.constraints_on(a).count(), 2);
        assert_eq!(tree.constraints_on(b).count(), 1);
        assert_eq!(tree.constraint_count(), 3);
    }
}
