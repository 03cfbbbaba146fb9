//! Sticker color classifier and 3×3 face detector built on `cube-scan-core`.
//!
//! ## Quickstart
//!
//! ```
//! use cube_scan_classify::{ColorClassifier, ClassifierParams};
//! use cube_scan_core::Rgb;
//!
//! let classifier = ColorClassifier::new(ClassifierParams::default());
//! let color = classifier.classify_rgb(Rgb::new(255, 0, 0));
//! println!("classified: {color}");
//! ```
//!
//! Classification is two-stage, because single-stage hue ranges are
//! unreliable under webcam lighting:
//! 1. Score each known color by band membership (+100 hue, +50 saturation,
//!    +50 value); accept the best color at score ≥ 150.
//! 2. Otherwise fall back to a weighted nearest-neighbor search against
//!    canonical HSV references with circular hue distance. White weights
//!    saturation over hue (white is "low saturation", not a hue); chromatic
//!    colors weight hue over value (value shifts most with lighting).

mod classifier;
mod detect;
mod params;

pub use classifier::{ColorClassifier, RangeScore};
pub use detect::{FaceDetection, FaceDetector, StickerSample};
pub use params::{
    default_profiles, ClassifierParams, ColorBands, ColorProfile, ColorReference,
    FaceDetectorParams, HueBand,
};
