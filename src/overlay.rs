//! Overlay placement geometry.
//!
//! This module computes *where* an emoji glyph goes and *how big* it is drawn, per detected face
//! and frame. The actual text rendering happens on an external surface; an [`EmojiGraphic`] is the
//! complete set of parameters such a surface needs for one draw call.

use nalgebra::{Point2, Vector2};

use crate::emoji::Emoji;
use crate::face::Face;
use crate::rect::Rect;

/// Ratio of the glyph size to the sum of the face bounding box's width and height.
///
/// Oversizing the glyph relative to the bounding box makes it cover the whole head instead of
/// just the detected facial area.
const GLYPH_SIZE_FACTOR: f32 = 1.7;

/// Divisors for placing the glyph's text origin relative to the face center. Emoji glyphs are not
/// centered within their em square, so centering the draw position requires these empirically
/// determined offsets.
const ORIGIN_X_DIVISOR: f32 = 1.7;
const BASELINE_Y_DIVISOR: f32 = 2.8;

/// Returns the glyph size (in detector image units) for a face with the given bounding rectangle.
pub fn glyph_size(bounding_rect: &Rect) -> f32 {
    (bounding_rect.width() + bounding_rect.height()) * GLYPH_SIZE_FACTOR
}

/// Maps detector image coordinates onto the rendering surface.
///
/// The surface usually displays a scaled and cropped version of the camera image, so detector
/// coordinates have to be scaled and translated before drawing. Front-facing cameras are shown
/// mirrored, which additionally flips the X axis across the surface width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: f32,
    offset: Vector2<f32>,
    mirror_width: Option<f32>,
}

impl Transform {
    /// A transform that leaves coordinates unchanged.
    ///
    /// Useful when drawing directly into the camera image, and in tests.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vector2::new(0.0, 0.0),
            mirror_width: None,
        }
    }

    /// Creates a transform that scales coordinates by `scale` and then subtracts `offset`.
    ///
    /// `offset` is in surface coordinates and compensates for the part of the scaled camera image
    /// that is cropped away by the surface.
    pub fn new(scale: f32, offset: Vector2<f32>) -> Self {
        Self {
            scale,
            offset,
            mirror_width: None,
        }
    }

    /// Mirrors the X axis across a surface of the given width.
    ///
    /// This matches surfaces that display a front-facing camera as a mirror image.
    #[must_use]
    pub fn mirrored(self, surface_width: f32) -> Self {
        Self {
            mirror_width: Some(surface_width),
            ..self
        }
    }

    /// Maps an X coordinate from detector image space to surface space.
    pub fn apply_x(&self, x: f32) -> f32 {
        let x = x * self.scale - self.offset.x;
        match self.mirror_width {
            Some(width) => width - x,
            None => x,
        }
    }

    /// Maps a Y coordinate from detector image space to surface space.
    pub fn apply_y(&self, y: f32) -> f32 {
        y * self.scale - self.offset.y
    }

    /// Maps a point from detector image space to surface space.
    pub fn apply(&self, point: Point2<f32>) -> Point2<f32> {
        Point2::new(self.apply_x(point.x), self.apply_y(point.y))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// One emoji draw call: glyph, size, and text origin on the rendering surface.
///
/// Created once per detected face per frame. The origin is the *text origin* expected by canvas
/// APIs, ie. the left end of the glyph's baseline, not its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmojiGraphic {
    emoji: Emoji,
    size: f32,
    origin: Point2<f32>,
}

impl EmojiGraphic {
    /// Classifies `face`'s expression and computes the glyph placement.
    ///
    /// The glyph size is computed in detector image units (so that the lip gap normalization does
    /// not depend on the surface), while the origin is in surface coordinates.
    pub fn new(face: &Face, transform: &Transform) -> Self {
        let rect = face.bounding_rect();
        let size = glyph_size(&rect);
        let emoji = face.expression_sample(size).classify();

        let center = transform.apply(rect.center());
        let origin = Point2::new(
            center.x - size / ORIGIN_X_DIVISOR,
            center.y + size / BASELINE_Y_DIVISOR,
        );

        log::trace!(
            "face {:?}: {emoji:?} ({}) at {origin:?}, size {size}",
            face.tracking_id(),
            emoji.glyph(),
        );

        Self { emoji, size, origin }
    }

    /// Returns the selected emoji.
    #[inline]
    pub fn emoji(&self) -> Emoji {
        self.emoji
    }

    /// Returns the Unicode glyph to draw.
    #[inline]
    pub fn glyph(&self) -> &'static str {
        self.emoji.glyph()
    }

    /// Returns the glyph size (the text size to configure on the draw call).
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the text origin of the glyph, in surface coordinates.
    #[inline]
    pub fn origin(&self) -> Point2<f32> {
        self.origin
    }
}
