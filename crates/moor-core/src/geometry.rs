//! Geometry value types.

use glam::Vec2;

/// A 2D offset applied to position constraints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point from components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get as Vec2.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Create from a Vec2.
    pub fn from_vec2(v: Vec2) -> Self {
        Self {
            x: v.x as f64,
            y: v.y as f64,
        }
    }
}

/// A width/height pair used for size constants, offsets, and multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size from components.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a square size.
    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// True when both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Get as Vec2.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Per-edge constants applied when binding to edge anchors.
///
/// Positive values inset the view within its reference on every edge; the
/// builder negates the bottom and right components when it writes the
/// corresponding constraint constants.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create insets with all four edges given explicitly.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create uniform insets.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    /// Create symmetric insets.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            bottom: vertical,
            right: horizontal,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Axis-aligned rectangle: a view's frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rect with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self {
            x: position.x as f64,
            y: position.y as f64,
            width: size.x as f64,
            height: size.y as f64,
        }
    }

    /// Get position as Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Get size as Vec2.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Check if a point is inside the rect.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Shrink the rect by the given insets.
    pub fn inset_by(&self, insets: EdgeInsets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_insets_helpers() {
        let insets = EdgeInsets::uniform(8.0);
        assert!((insets.horizontal() - 16.0).abs() < 1e-9);
        assert!((insets.vertical() - 16.0).abs() < 1e-9);

        let insets = EdgeInsets::symmetric(4.0, 12.0);
        assert!((insets.left - 4.0).abs() < 1e-9);
        assert!((insets.right - 4.0).abs() < 1e-9);
        assert!((insets.top - 12.0).abs() < 1e-9);
        assert!((insets.bottom - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_rect_accessors() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!((rect.right() - 110.0).abs() < 1e-9);
        assert!((rect.bottom() - 70.0).abs() < 1e-9);
        assert!((rect.center_x() - 60.0).abs() < 1e-9);
        assert!((rect.center_y() - 45.0).abs() < 1e-9);
        assert!(rect.contains(60.0, 45.0));
        assert!(!rect.contains(0.0, 0.0));
    }

    #[test]
    fn test_rect_inset_by() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = rect.inset_by(EdgeInsets::new(10.0, 20.0, 30.0, 40.0));
        assert!((inner.x - 20.0).abs() < 1e-9);
        assert!((inner.y - 10.0).abs() < 1e-9);
        assert!((inner.width - 40.0).abs() < 1e-9);
        assert!((inner.height - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_is_zero() {
        assert!(Size::ZERO.is_zero());
        assert!(!Size::new(0.0, 1.0).is_zero());
        assert!(!Size::square(5.0).is_zero());
    }

    #[test]
    fn test_vec2_round_trip() {
        let p = Point::new(3.5, -2.0);
        let back = Point::from_vec2(p.to_vec2());
        assert!((back.x - 3.5).abs() < 1e-6);
        assert!((back.y + 2.0).abs() < 1e-6);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rect_serializes() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&rect).unwrap();
        assert!(json.contains("\"width\":3.0"));
    }
}
