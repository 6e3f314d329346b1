//! Geometry primitives shared by measurement and placement.

/// The dimensions of a widget, a cell, or a container.
///
/// Signed so that intermediate layout arithmetic can go negative before it
/// is clamped; values handed to children are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new Size with the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The empty size.
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Component-wise maximum of two sizes.
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// A signed rectangular region for layout and hit testing.
///
/// Coordinates are signed (i32) so that overflowing cells can still be
/// described. Width and height are invariant-checked to be non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Create a new region, clamping width and height to be non-negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Create a region from its top-left and bottom-right corners.
    pub fn from_corners(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// A region at the origin covering `size`.
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the intersection of this region with another.
    /// If there is no overlap, returns an empty region.
    /// Uses saturating arithmetic to prevent overflow with large coordinates.
    pub fn intersection(&self, other: &Region) -> Region {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Region {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            }
        } else {
            Region::default()
        }
    }

    /// Checks if a point is contained within the region.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if the region has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<Size> for Region {
    fn from(size: Size) -> Self {
        Region::from_size(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_new_clamps_negative_dimensions() {
        let region = Region::new(5, 5, -3, 10);
        assert_eq!(region.width, 0);
        assert_eq!(region.height, 10);
        assert!(region.is_empty());
    }

    #[test]
    fn test_from_corners() {
        let region = Region::from_corners(10, 20, 110, 70);
        assert_eq!(region, Region::new(10, 20, 100, 50));
        assert_eq!(region.right(), 110);
        assert_eq!(region.bottom(), 70);
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let a = Region::new(0, 0, 10, 10);
        let b = Region::new(10, 0, 10, 10);
        assert!(a.intersection(&b).is_empty());
        let c = Region::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&c), Region::new(5, 5, 5, 5));
    }

    #[test]
    fn test_contains_point_is_half_open() {
        let region = Region::new(0, 0, 10, 10);
        assert!(region.contains_point(0, 0));
        assert!(region.contains_point(9, 9));
        assert!(!region.contains_point(10, 5));
    }

    #[test]
    fn test_region_from_size_sits_at_origin() {
        let region = Region::from(Size::new(80, 24));
        assert_eq!(region, Region::new(0, 0, 80, 24));
        assert_eq!(region.size(), Size::new(80, 24));
        assert!(Region::from_size(Size::new(-1, 5)).is_empty());
    }

    #[test]
    fn test_size_max_is_component_wise() {
        let size = Size::new(10, 2).max(Size::new(4, 7));
        assert_eq!(size, Size::new(10, 7));
    }
}
