//! Anchor handles naming alignment lines and dimensions of views.
//!
//! An anchor is a lightweight `Copy` handle pairing a view id with one of
//! its alignment lines or size dimensions. Anchors are only ever consumed
//! as the right-hand side of a constraint equation; nothing here owns the
//! view they refer to.

use moor_core::ViewId;

/// Horizontal alignment lines of a view (vertical lines at some x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XLine {
    Leading,
    Trailing,
    CenterX,
}

/// Vertical alignment lines of a view (horizontal lines at some y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YLine {
    Top,
    Bottom,
    CenterY,
}

/// Size dimensions of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dim {
    Width,
    Height,
}

/// A horizontal-axis anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XAnchor {
    pub view: ViewId,
    pub line: XLine,
}

impl XAnchor {
    /// The leading edge of `view`.
    pub fn leading(view: ViewId) -> Self {
        Self {
            view,
            line: XLine::Leading,
        }
    }

    /// The trailing edge of `view`.
    pub fn trailing(view: ViewId) -> Self {
        Self {
            view,
            line: XLine::Trailing,
        }
    }

    /// The horizontal center of `view`.
    pub fn center(view: ViewId) -> Self {
        Self {
            view,
            line: XLine::CenterX,
        }
    }
}

/// A vertical-axis anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YAnchor {
    pub view: ViewId,
    pub line: YLine,
}

impl YAnchor {
    /// The top edge of `view`.
    pub fn top(view: ViewId) -> Self {
        Self {
            view,
            line: YLine::Top,
        }
    }

    /// The bottom edge of `view`.
    pub fn bottom(view: ViewId) -> Self {
        Self {
            view,
            line: YLine::Bottom,
        }
    }

    /// The vertical center of `view`.
    pub fn center(view: ViewId) -> Self {
        Self {
            view,
            line: YLine::CenterY,
        }
    }
}

/// A dimension anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimAnchor {
    pub view: ViewId,
    pub dim: Dim,
}

impl DimAnchor {
    /// The width of `view`.
    pub fn width(view: ViewId) -> Self {
        Self {
            view,
            dim: Dim::Width,
        }
    }

    /// The height of `view`.
    pub fn height(view: ViewId) -> Self {
        Self {
            view,
            dim: Dim::Height,
        }
    }
}

/// Tagged union over the three anchor kinds.
///
/// Constraint records store anchors in this form so they can be inspected
/// generically, without caring which axis the anchor lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    Horizontal(XAnchor),
    Vertical(YAnchor),
    Dimension(DimAnchor),
}

impl Anchor {
    /// The view this anchor belongs to.
    pub fn view(&self) -> ViewId {
        match self {
            Anchor::Horizontal(a) => a.view,
            Anchor::Vertical(a) => a.view,
            Anchor::Dimension(a) => a.view,
        }
    }
}

impl From<XAnchor> for Anchor {
    fn from(anchor: XAnchor) -> Self {
        Anchor::Horizontal(anchor)
    }
}

impl From<YAnchor> for Anchor {
    fn from(anchor: YAnchor) -> Self {
        Anchor::Vertical(anchor)
    }
}

impl From<DimAnchor> for Anchor {
    fn from(anchor: DimAnchor) -> Self {
        Anchor::Dimension(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_constructors() {
        let view = ViewId(7);
        assert_eq!(XAnchor::leading(view).line, XLine::Leading);
        assert_eq!(XAnchor::trailing(view).line, XLine::Trailing);
        assert_eq!(XAnchor::center(view).line, XLine::CenterX);
        assert_eq!(YAnchor::top(view).line, YLine::Top);
        assert_eq!(YAnchor::bottom(view).line, YLine::Bottom);
        assert_eq!(YAnchor::center(view).line, YLine::CenterY);
        assert_eq!(DimAnchor::width(view).dim, Dim::Width);
        assert_eq!(DimAnchor::height(view).dim, Dim::Height);
    }

    #[test]
    fn test_anchor_view() {
        let view = ViewId(3);
        assert_eq!(Anchor::from(XAnchor::leading(view)).view(), view);
        assert_eq!(Anchor::from(YAnchor::bottom(view)).view(), view);
        assert_eq!(Anchor::from(DimAnchor::height(view)).view(), view);
    }
}
