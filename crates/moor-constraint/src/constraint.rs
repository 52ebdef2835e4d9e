//! Constraint records and the role-keyed result set.

use std::collections::HashMap;

use moor_core::{ConstraintId, ViewId};

use crate::anchor::Anchor;

/// The geometric attribute of the owning view that a constraint pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Leading,
    Trailing,
    Top,
    Bottom,
    CenterX,
    CenterY,
    Width,
    Height,
}

/// Semantic purpose of a constraint within a returned [`ConstraintSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintRole {
    CenterX,
    CenterY,
    Top,
    Leading,
    Bottom,
    Trailing,
    Width,
    Height,
}

impl ConstraintRole {
    /// All roles, in declaration order.
    pub const ALL: [ConstraintRole; 8] = [
        ConstraintRole::CenterX,
        ConstraintRole::CenterY,
        ConstraintRole::Top,
        ConstraintRole::Leading,
        ConstraintRole::Bottom,
        ConstraintRole::Trailing,
        ConstraintRole::Width,
        ConstraintRole::Height,
    ];
}

/// Right-hand side of a constraint equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintSource {
    /// Another view's anchor.
    Anchor(Anchor),
    /// A literal value; the equation reduces to `attribute == constant`.
    Constant,
}

/// A single installed layout constraint.
///
/// Equation: `owner.attribute == source * multiplier + constant`, where a
/// [`ConstraintSource::Constant`] source contributes nothing and the
/// equation reduces to `owner.attribute == constant`.
///
/// Records are plain data. Activation state and later mutation go through
/// the tree that installed the record; holders of a [`ConstraintId`] may
/// change the constant or multiplier at any time, e.g. to drive an
/// animation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    pub owner: ViewId,
    pub attribute: Attribute,
    pub source: ConstraintSource,
    pub multiplier: f64,
    pub constant: f64,
    pub active: bool,
}

impl Constraint {
    /// An anchor-equality constraint with an additive constant.
    pub fn to_anchor(
        owner: ViewId,
        attribute: Attribute,
        anchor: impl Into<Anchor>,
        constant: f64,
    ) -> Self {
        Self {
            owner,
            attribute,
            source: ConstraintSource::Anchor(anchor.into()),
            multiplier: 1.0,
            constant,
            active: false,
        }
    }

    /// An anchor-equality constraint scaled by a multiplier.
    pub fn scaled(
        owner: ViewId,
        attribute: Attribute,
        anchor: impl Into<Anchor>,
        multiplier: f64,
    ) -> Self {
        Self {
            owner,
            attribute,
            source: ConstraintSource::Anchor(anchor.into()),
            multiplier,
            constant: 0.0,
            active: false,
        }
    }

    /// A literal-equality constraint with no anchor dependency.
    pub fn constant(owner: ViewId, attribute: Attribute, value: f64) -> Self {
        Self {
            owner,
            attribute,
            source: ConstraintSource::Constant,
            multiplier: 1.0,
            constant: value,
            active: false,
        }
    }

    /// True when the constraint pins the attribute to a literal value.
    pub fn is_constant(&self) -> bool {
        matches!(self.source, ConstraintSource::Constant)
    }

    /// The anchor this constraint binds to, if any.
    pub fn anchor(&self) -> Option<Anchor> {
        match self.source {
            ConstraintSource::Anchor(anchor) => Some(anchor),
            ConstraintSource::Constant => None,
        }
    }
}

/// The constraints created by one builder invocation, keyed by role.
///
/// Contains only the roles whose corresponding input was supplied; absent
/// roles are absent keys, never null values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintSet {
    entries: HashMap<ConstraintRole, ConstraintId>,
}

impl ConstraintSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the constraint created for a role.
    pub fn get(&self, role: ConstraintRole) -> Option<ConstraintId> {
        self.entries.get(&role).copied()
    }

    /// True when a constraint was created for `role`.
    pub fn contains(&self, role: ConstraintRole) -> bool {
        self.entries.contains_key(&role)
    }

    /// Record the constraint created for a role.
    pub fn insert(&mut self, role: ConstraintRole, id: ConstraintId) {
        self.entries.insert(role, id);
    }

    /// Iterate over the roles present in the set.
    pub fn roles(&self) -> impl Iterator<Item = ConstraintRole> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over role/id pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintRole, ConstraintId)> + '_ {
        self.entries.iter().map(|(role, id)| (*role, *id))
    }

    /// Number of constraints in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no constraints were created.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::XAnchor;

    #[test]
    fn test_constraint_constructors() {
        let owner = ViewId(1);
        let reference = ViewId(2);

        let c = Constraint::to_anchor(
            owner,
            Attribute::Leading,
            XAnchor::leading(reference),
            12.0,
        );
        assert!((c.multiplier - 1.0).abs() < 1e-9);
        assert!((c.constant - 12.0).abs() < 1e-9);
        assert!(!c.active);
        assert_eq!(c.anchor().unwrap().view(), reference);

        let c = Constraint::constant(owner, Attribute::Width, 80.0);
        assert!(c.is_constant());
        assert!(c.anchor().is_none());
        assert!((c.constant - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_tracks_only_inserted_roles() {
        let mut set = ConstraintSet::new();
        assert!(set.is_empty());

        set.insert(ConstraintRole::Top, ConstraintId(4));
        set.insert(ConstraintRole::Width, ConstraintId(9));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(ConstraintRole::Top), Some(ConstraintId(4)));
        assert!(set.contains(ConstraintRole::Width));
        assert!(!set.contains(ConstraintRole::Bottom));
        assert_eq!(set.get(ConstraintRole::CenterX), None);

        let roles: Vec<_> = set.roles().collect();
        assert_eq!(roles.len(), 2);
        assert!(roles.contains(&ConstraintRole::Top));
        assert!(roles.contains(&ConstraintRole::Width));
    }

    #[test]
    fn test_all_lists_every_role_once() {
        assert_eq!(ConstraintRole::ALL.len(), 8);
        for (i, role) in ConstraintRole::ALL.iter().enumerate() {
            assert_eq!(
                ConstraintRole::ALL.iter().position(|r| r == role),
                Some(i)
            );
        }
    }
}
