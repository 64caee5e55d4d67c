//! Per-frame face observations handed over by the external face detector.
//!
//! A [`Face`] is an immutable snapshot of everything the detector reported about one face in one
//! frame: the bounding box, the optional expression probabilities, and whatever facial contours
//! were computed. It only exists for the duration of a single rendering frame.

use nalgebra::Point2;

use crate::expression::ExpressionSample;
use crate::rect::Rect;

/// Identifies a facial contour polyline.
///
/// The discriminants match the contour type constants used by the upstream detector, so a
/// detector adapter can cast them straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContourKind {
    UpperLipTop = 8,
    UpperLipBottom = 9,
    LowerLipTop = 10,
    LowerLipBottom = 11,
}

/// Number of points in each lip contour reported by the upstream detector.
pub const LIP_CONTOUR_POINTS: usize = 9;

/// Index of the point at the horizontal center of a lip contour.
const LIP_MIDPOINT: usize = 4;

/// A contour polyline attached to a [`Face`].
#[derive(Debug, Clone)]
pub struct Contour {
    kind: ContourKind,
    points: Vec<Point2<f32>>,
}

impl Contour {
    pub fn new(kind: ContourKind, points: Vec<Point2<f32>>) -> Self {
        Self { kind, points }
    }

    #[inline]
    pub fn kind(&self) -> ContourKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }
}

/// A face detected in a single camera frame.
///
/// Everything except the bounding rectangle is optional; detectors only report the
/// classifications and contours they were configured to compute.
#[derive(Debug, Clone)]
pub struct Face {
    bounding_rect: Rect,
    tracking_id: Option<u32>,
    left_eye_open: Option<f32>,
    right_eye_open: Option<f32>,
    smiling: Option<f32>,
    contours: Vec<Contour>,
}

impl Face {
    /// Creates a face with the given bounding rectangle and no other data.
    pub fn new(bounding_rect: Rect) -> Self {
        Self {
            bounding_rect,
            tracking_id: None,
            left_eye_open: None,
            right_eye_open: None,
            smiling: None,
            contours: Vec::new(),
        }
    }

    /// Sets the id under which the detector tracks this face across frames.
    pub fn with_tracking_id(self, id: u32) -> Self {
        Self {
            tracking_id: Some(id),
            ..self
        }
    }

    /// Sets the probability that the left eye is open.
    pub fn with_left_eye_open(self, probability: f32) -> Self {
        Self {
            left_eye_open: Some(probability),
            ..self
        }
    }

    /// Sets the probability that the right eye is open.
    pub fn with_right_eye_open(self, probability: f32) -> Self {
        Self {
            right_eye_open: Some(probability),
            ..self
        }
    }

    /// Sets the probability that the face is smiling.
    pub fn with_smiling(self, probability: f32) -> Self {
        Self {
            smiling: Some(probability),
            ..self
        }
    }

    /// Attaches a contour polyline. Replaces any previously attached contour of the same kind.
    pub fn with_contour(mut self, kind: ContourKind, points: Vec<Point2<f32>>) -> Self {
        self.contours.retain(|c| c.kind != kind);
        self.contours.push(Contour::new(kind, points));
        self
    }

    /// Returns the axis-aligned bounding rectangle of the face, in detector image coordinates.
    #[inline]
    pub fn bounding_rect(&self) -> Rect {
        self.bounding_rect
    }

    #[inline]
    pub fn tracking_id(&self) -> Option<u32> {
        self.tracking_id
    }

    #[inline]
    pub fn left_eye_open(&self) -> Option<f32> {
        self.left_eye_open
    }

    #[inline]
    pub fn right_eye_open(&self) -> Option<f32> {
        self.right_eye_open
    }

    #[inline]
    pub fn smiling(&self) -> Option<f32> {
        self.smiling
    }

    /// Returns the contour of the given kind, if the detector reported it.
    pub fn contour(&self, kind: ContourKind) -> Option<&Contour> {
        self.contours.iter().find(|c| c.kind == kind)
    }

    /// Computes the vertical distance between the lower and upper lip, in detector image
    /// coordinates.
    ///
    /// This compares the midpoints of the upper-lip-bottom and lower-lip-bottom contours. Returns
    /// [`None`] when either contour is missing or has no midpoint.
    pub fn lip_separation(&self) -> Option<f32> {
        let upper = self.contour(ContourKind::UpperLipBottom)?;
        let lower = self.contour(ContourKind::LowerLipBottom)?;

        let upper = upper.points().get(LIP_MIDPOINT)?;
        let lower = lower.points().get(LIP_MIDPOINT)?;
        Some(lower.y - upper.y)
    }

    /// Assembles the expression feature vector for this face.
    ///
    /// `scale` normalizes the lip separation; callers pass the emoji glyph size so that the lip
    /// gap thresholds are independent of how close the face is to the camera.
    pub fn expression_sample(&self, scale: f32) -> ExpressionSample {
        let mut sample = ExpressionSample::new();
        if let Some(p) = self.left_eye_open {
            sample = sample.with_left_eye_open(p);
        }
        if let Some(p) = self.right_eye_open {
            sample = sample.with_right_eye_open(p);
        }
        if let Some(p) = self.smiling {
            sample = sample.with_smiling(p);
        }
        if let Some(gap) = self.lip_separation() {
            sample = sample.with_lip_gap(gap / scale);
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lip_contour(y: f32) -> Vec<Point2<f32>> {
        (0..LIP_CONTOUR_POINTS)
            .map(|i| Point2::new(i as f32 * 4.0, y))
            .collect()
    }

    fn face() -> Face {
        Face::new(Rect::from_top_left(0.0, 0.0, 100.0, 100.0))
    }

    #[test]
    fn lip_separation_from_contours() {
        let face = face()
            .with_contour(ContourKind::UpperLipBottom, lip_contour(50.0))
            .with_contour(ContourKind::LowerLipBottom, lip_contour(66.0));
        assert_eq!(face.lip_separation(), Some(16.0));
    }

    #[test]
    fn lip_separation_requires_both_contours() {
        assert_eq!(face().lip_separation(), None);

        let face = face().with_contour(ContourKind::UpperLipBottom, lip_contour(50.0));
        assert_eq!(face.lip_separation(), None);
    }

    #[test]
    fn lip_separation_requires_midpoints() {
        let face = face()
            .with_contour(ContourKind::UpperLipBottom, lip_contour(50.0))
            .with_contour(ContourKind::LowerLipBottom, vec![Point2::new(0.0, 66.0)]);
        assert_eq!(face.lip_separation(), None);
    }

    #[test]
    fn with_contour_replaces_existing() {
        let face = face()
            .with_contour(ContourKind::UpperLipBottom, lip_contour(50.0))
            .with_contour(ContourKind::UpperLipBottom, lip_contour(52.0))
            .with_contour(ContourKind::LowerLipBottom, lip_contour(68.0));
        assert_eq!(face.lip_separation(), Some(16.0));
    }

    #[test]
    fn expression_sample_normalizes_lip_gap() {
        let face = face()
            .with_left_eye_open(0.9)
            .with_right_eye_open(0.8)
            .with_smiling(0.995)
            .with_contour(ContourKind::UpperLipBottom, lip_contour(50.0))
            .with_contour(ContourKind::LowerLipBottom, lip_contour(66.0));

        let sample = face.expression_sample(256.0);
        assert_eq!(sample.left_eye_open(), Some(0.9));
        assert_eq!(sample.right_eye_open(), Some(0.8));
        assert_eq!(sample.smiling(), Some(0.995));
        assert_eq!(sample.lip_gap(), Some(0.0625));
    }

    #[test]
    fn expression_sample_with_missing_data() {
        let sample = face().expression_sample(256.0);
        assert_eq!(sample, ExpressionSample::new());
    }
}
