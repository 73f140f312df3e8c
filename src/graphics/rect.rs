//! Integer geometry used by the scaling pipeline
//!
//! Rectangles are stored as a pair of corners exactly as the caller gave
//! them. A rectangle whose lower-right corner lies above or left of its
//! upper-left corner describes a mirrored mapping; call [`Rect::normalized`]
//! before iterating over it.

/// A point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Unsigned width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Axis-aligned integer rectangle
///
/// `upper_left` is inclusive and `lower_right` exclusive once the rect has
/// been normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub upper_left: Point,
    pub lower_right: Point,
}

impl Rect {
    pub fn new(upper_left: Point, lower_right: Point) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// Build a rect from an origin and a (possibly negative) size
    ///
    /// The far corner saturates at the `i32` range.
    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            upper_left: Point::new(x, y),
            lower_right: Point::new(x.saturating_add(width), y.saturating_add(height)),
        }
    }

    /// Rect anchored at the origin covering `extent`, clamped to `i32::MAX`
    pub fn from_extent(extent: Extent) -> Self {
        Self::from_xywh(0, 0, clamp_to_i32(extent.width), clamp_to_i32(extent.height))
    }

    /// Signed width; negative for a horizontally mirrored rect
    ///
    /// Computed in `i64` so corners spanning the whole `i32` range do not
    /// overflow.
    pub fn width(&self) -> i64 {
        i64::from(self.lower_right.x) - i64::from(self.upper_left.x)
    }

    /// Signed height; negative for a vertically mirrored rect
    pub fn height(&self) -> i64 {
        i64::from(self.lower_right.y) - i64::from(self.upper_left.y)
    }

    /// Swap coordinates per axis so that min <= max
    pub fn normalized(&self) -> Rect {
        Rect {
            upper_left: Point::new(
                self.upper_left.x.min(self.lower_right.x),
                self.upper_left.y.min(self.lower_right.y),
            ),
            lower_right: Point::new(
                self.upper_left.x.max(self.lower_right.x),
                self.upper_left.y.max(self.lower_right.y),
            ),
        }
    }

    /// Absolute size of the rect regardless of orientation
    pub fn extent(&self) -> Extent {
        // |lower - upper| of two i32 values is at most u32::MAX
        Extent::new(
            self.width().unsigned_abs() as u32,
            self.height().unsigned_abs() as u32,
        )
    }

    /// Check if the rect covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check if either axis is mirrored
    pub fn is_mirrored(&self) -> bool {
        self.width() < 0 || self.height() < 0
    }
}

/// Convert an unsigned size to `i32`, saturating at `i32::MAX`
pub fn clamp_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
