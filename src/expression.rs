//! Expression classification from per-frame face features.
//!
//! The classifier is a pure function over a small feature vector: two eye-open probabilities, a
//! smiling probability, and a normalized lip gap. Every input is optional, since detectors only
//! report the classifications they were configured to compute. A missing value never causes an
//! error; it simply fails the threshold checks that depend on it.

use crate::emoji::Emoji;

/// Probability above which an eye counts as open, and below which it counts as closed.
///
/// A probability of exactly 0.5 is neither, which means the eye state branches are skipped and the
/// face classifies as [`Emoji::Neutral`].
pub const EYE_OPEN_THRESHOLD: f32 = 0.5;

/// Smiling probability required for [`Emoji::Joy`].
pub const JOY_SMILING_THRESHOLD: f32 = 0.99;

/// Normalized lip gap required for [`Emoji::Joy`] (the mouth has to be visibly open).
pub const JOY_LIP_GAP_THRESHOLD: f32 = 0.05;

/// Smiling probability required for [`Emoji::Grin`].
pub const GRIN_SMILING_THRESHOLD: f32 = 0.75;

/// Normalized lip gap required for [`Emoji::Grin`].
pub const GRIN_LIP_GAP_THRESHOLD: f32 = 0.03;

/// Minimum smiling probability for [`Emoji::Smile`]. Unlike the other thresholds, this one is
/// inclusive.
pub const SMILE_SMILING_THRESHOLD: f32 = 0.5;

/// The expression features of one face in one frame.
///
/// Each field is optional; [`ExpressionSample::classify`] treats a missing value as "condition not
/// met" rather than as an error. Values are built up with the `with_*` methods:
///
/// ```
/// use emojify::expression::ExpressionSample;
///
/// let sample = ExpressionSample::new()
///     .with_left_eye_open(0.97)
///     .with_right_eye_open(0.95)
///     .with_smiling(0.8);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ExpressionSample {
    left_eye_open: Option<f32>,
    right_eye_open: Option<f32>,
    smiling: Option<f32>,
    lip_gap: Option<f32>,
}

impl ExpressionSample {
    /// Creates a sample with every feature missing. Such a sample classifies as
    /// [`Emoji::Neutral`].
    pub fn new() -> Self {
        Self::default()
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

    /// Sets the normalized lip gap (lip separation divided by the emoji size).
    pub fn with_lip_gap(self, ratio: f32) -> Self {
        Self {
            lip_gap: Some(ratio),
            ..self
        }
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

    #[inline]
    pub fn lip_gap(&self) -> Option<f32> {
        self.lip_gap
    }

    /// Selects the emoji for this sample.
    ///
    /// The smiling branches are only considered when both eye probabilities are present and both
    /// eyes are open. With eye data present but at least one eye not open, the eye state alone
    /// decides ([`Emoji::Sleep`] when both are closed, [`Emoji::Wink`] when exactly one is).
    /// Everything else is [`Emoji::Neutral`].
    ///
    /// This is total and deterministic: it always returns exactly one emoji, and the same sample
    /// always yields the same emoji.
    pub fn classify(&self) -> Emoji {
        let (Some(left), Some(right)) = (self.left_eye_open, self.right_eye_open) else {
            return Emoji::Neutral;
        };

        if left > EYE_OPEN_THRESHOLD && right > EYE_OPEN_THRESHOLD {
            let smiling = |thresh| self.smiling.is_some_and(|p| p > thresh);
            let lip_gap = |thresh| self.lip_gap.is_some_and(|r| r > thresh);

            if smiling(JOY_SMILING_THRESHOLD) && lip_gap(JOY_LIP_GAP_THRESHOLD) {
                Emoji::Joy
            } else if smiling(GRIN_SMILING_THRESHOLD) && lip_gap(GRIN_LIP_GAP_THRESHOLD) {
                Emoji::Grin
            } else if self.smiling.is_some_and(|p| p >= SMILE_SMILING_THRESHOLD) {
                Emoji::Smile
            } else {
                Emoji::Neutral
            }
        } else if left < EYE_OPEN_THRESHOLD && right < EYE_OPEN_THRESHOLD {
            Emoji::Sleep
        } else if left < EYE_OPEN_THRESHOLD || right < EYE_OPEN_THRESHOLD {
            Emoji::Wink
        } else {
            Emoji::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eyes_open() -> ExpressionSample {
        ExpressionSample::new()
            .with_left_eye_open(0.95)
            .with_right_eye_open(0.95)
    }

    #[test]
    fn laughing_face_is_joy() {
        let sample = eyes_open().with_smiling(0.995).with_lip_gap(0.06);
        assert_eq!(sample.classify(), Emoji::Joy);
    }

    #[test]
    fn broad_smile_is_grin() {
        let sample = eyes_open().with_smiling(0.8).with_lip_gap(0.035);
        assert_eq!(sample.classify(), Emoji::Grin);
    }

    #[test]
    fn closed_mouth_smile_is_smile() {
        // High smiling probability, but the mouth is barely open, so neither the joy nor the grin
        // thresholds are met.
        let sample = eyes_open().with_smiling(0.995).with_lip_gap(0.01);
        assert_eq!(sample.classify(), Emoji::Smile);

        let sample = eyes_open().with_smiling(0.6);
        assert_eq!(sample.classify(), Emoji::Smile);
    }

    #[test]
    fn open_eyes_without_smile_is_neutral() {
        assert_eq!(eyes_open().classify(), Emoji::Neutral);
        assert_eq!(eyes_open().with_smiling(0.2).classify(), Emoji::Neutral);
    }

    #[test]
    fn one_closed_eye_is_wink() {
        let sample = ExpressionSample::new()
            .with_left_eye_open(0.3)
            .with_right_eye_open(0.7);
        assert_eq!(sample.classify(), Emoji::Wink);

        let sample = ExpressionSample::new()
            .with_left_eye_open(0.7)
            .with_right_eye_open(0.3);
        assert_eq!(sample.classify(), Emoji::Wink);
    }

    #[test]
    fn both_eyes_closed_is_sleep() {
        let sample = ExpressionSample::new()
            .with_left_eye_open(0.1)
            .with_right_eye_open(0.05)
            .with_smiling(0.995)
            .with_lip_gap(0.06);
        // Smiling data is ignored while the eyes are closed.
        assert_eq!(sample.classify(), Emoji::Sleep);
    }

    #[test]
    fn missing_eye_data_is_neutral() {
        assert_eq!(ExpressionSample::new().classify(), Emoji::Neutral);

        let sample = ExpressionSample::new()
            .with_left_eye_open(0.9)
            .with_smiling(0.995)
            .with_lip_gap(0.06);
        assert_eq!(sample.classify(), Emoji::Neutral);

        let sample = ExpressionSample::new().with_right_eye_open(0.1);
        assert_eq!(sample.classify(), Emoji::Neutral);
    }

    #[test]
    fn eye_probability_on_the_threshold_is_neutral() {
        // 0.5 is neither open (> 0.5) nor closed (< 0.5).
        let sample = ExpressionSample::new()
            .with_left_eye_open(0.5)
            .with_right_eye_open(0.5);
        assert_eq!(sample.classify(), Emoji::Neutral);

        let sample = ExpressionSample::new()
            .with_left_eye_open(0.5)
            .with_right_eye_open(0.9);
        assert_eq!(sample.classify(), Emoji::Neutral);
    }

    #[test]
    fn smiling_probability_on_the_threshold_is_smile() {
        let sample = eyes_open().with_smiling(0.5);
        assert_eq!(sample.classify(), Emoji::Smile);
    }

    #[test]
    fn total_and_deterministic_over_sparse_inputs() {
        let values = [None, Some(0.0), Some(0.5), Some(1.0)];
        for left in values {
            for right in values {
                for smiling in values {
                    for lip_gap in values {
                        let sample = ExpressionSample {
                            left_eye_open: left,
                            right_eye_open: right,
                            smiling,
                            lip_gap,
                        };
                        let emoji = sample.classify();
                        assert!(Emoji::ALL.contains(&emoji));
                        assert_eq!(emoji, sample.classify());
                    }
                }
            }
        }
    }
}
