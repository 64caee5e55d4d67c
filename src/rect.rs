//! Axis-aligned rectangles.
//!
//! Used for face bounding boxes reported by the detector and for overlay placement.

use std::fmt;

use nalgebra::{Point2, Vector2};

/// An axis-aligned rectangle.
///
/// Rectangles are allowed to have zero height and/or width. Negative dimensions are not allowed.
#[derive(Clone, Copy, PartialEq)]
pub struct Rect {
    center: Point2<f32>,
    size: Vector2<f32>,
}

impl Rect {
    /// Creates a rectangle extending outwards from a center point.
    #[inline]
    pub fn from_center(x_center: f32, y_center: f32, width: f32, height: f32) -> Self {
        Self {
            center: Point2::new(x_center, y_center),
            size: Vector2::new(width, height),
        }
    }

    /// Creates a rectangle extending downwards and right from a point.
    #[inline]
    pub fn from_top_left(top_left_x: f32, top_left_y: f32, width: f32, height: f32) -> Self {
        Self::from_center(
            top_left_x + width * 0.5,
            top_left_y + height * 0.5,
            width,
            height,
        )
    }

    /// Computes the (axis-aligned) bounding rectangle that encompasses `points`.
    ///
    /// Returns [`None`] if `points` is an empty iterator.
    pub fn bounding<I: IntoIterator<Item = Point2<f32>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();

        let first = iter.next()?;
        let (mut min, mut max) = (first, first);

        for pt in iter {
            min = min.inf(&pt);
            max = max.sup(&pt);
        }

        Some(Self::span_inner(min, max))
    }

    fn span_inner(min: Point2<f32>, max: Point2<f32>) -> Self {
        assert!(min.x <= max.x, "x_min={}, x_max={}", min.x, max.x);
        assert!(min.y <= max.y, "y_min={}, y_max={}", min.y, max.y);
        Self::from_top_left(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Grows this rectangle by adding a margin relative to width and height.
    ///
    /// `amount` is the relative amount of the rectangle's width and height to add to each side.
    #[must_use]
    pub fn grow_rel(&self, amount: f32) -> Self {
        Self {
            size: self.size + self.size * amount * 2.0,
            ..*self
        }
    }

    #[inline]
    pub fn top_left(&self) -> Point2<f32> {
        self.center - self.size * 0.5
    }

    /// Returns the X coordinate of the left side of the rectangle.
    #[inline]
    pub fn x(&self) -> f32 {
        self.top_left().x
    }

    /// Returns the Y coordinate of the top side of the rectangle.
    #[inline]
    pub fn y(&self) -> f32 {
        self.top_left().y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    #[inline]
    pub fn center(&self) -> Point2<f32> {
        self.center
    }

    #[inline]
    pub fn size(&self) -> Vector2<f32> {
        self.size
    }

    #[must_use]
    pub fn move_by(&self, offset: Vector2<f32>) -> Rect {
        Rect {
            center: self.center + offset,
            ..*self
        }
    }

    /// Computes the intersection of `self` and `other`.
    ///
    /// Returns [`None`] when the intersection is empty (ie. the rectangles do not overlap).
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.top_left().sup(&other.top_left());
        let max = (self.top_left() + self.size()).inf(&(other.top_left() + other.size()));
        if min.x > max.x || min.y > max.y {
            return None;
        }

        Some(Self::span_inner(min, max))
    }

    pub fn contains_point(&self, point: Point2<f32>) -> bool {
        self.x() <= point.x
            && self.y() <= point.y
            && self.x() + self.width() >= point.x
            && self.y() + self.height() >= point.y
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect @ ({},{})/{}x{}",
            self.center.x, self.center.y, self.size.x, self.size.y
        )
    }
}
