//! Expression-driven emoji overlays for face filter applications.
//!
//! This crate contains the render-side logic of an emoji camera filter: it takes the per-face data
//! reported by an external face detector (eye-open and smiling probabilities, facial contours, a
//! bounding box) and decides *which* emoji to show and *where* to show it. Camera capture, the
//! detector itself, and the actual glyph drawing all live outside of this crate.
//!
//! The per-frame flow is: build a [`Face`] from the detector's output, then create an
//! [`EmojiGraphic`] for it. The graphic carries the selected glyph along with its size and text
//! origin on the rendering surface.
//!
//! ```
//! use emojify::face::Face;
//! use emojify::overlay::{EmojiGraphic, Transform};
//! use emojify::rect::Rect;
//!
//! // Data received from the face detector for one frame:
//! let face = Face::new(Rect::from_top_left(80.0, 60.0, 240.0, 260.0))
//!     .with_left_eye_open(0.9)
//!     .with_right_eye_open(0.2);
//!
//! let graphic = EmojiGraphic::new(&face, &Transform::identity());
//! assert_eq!(graphic.glyph(), "😉");
//! ```
//!
//! [`Face`]: face::Face
//! [`EmojiGraphic`]: overlay::EmojiGraphic

use log::LevelFilter;

pub mod emoji;
pub mod expression;
pub mod face;
pub mod overlay;
pub mod rect;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level; `RUST_LOG` can override the
/// configuration as usual.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
