//! High-level facade crate for the `cube-scan-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the underlying capture crates
//! - the face-by-face [`CaptureSession`] workflow with undo
//! - (feature-gated) helpers that run the face detector directly on
//!   `image::RgbImage` frames.
//!
//! ## Quickstart
//!
//! ```
//! use cube_scan::classify::{FaceDetector, FaceDetectorParams};
//! use cube_scan::core::{Rgb, RgbImage};
//!
//! let detector = FaceDetector::new(FaceDetectorParams::default());
//! let frame = RgbImage::filled(320, 240, Rgb::new(250, 250, 250));
//!
//! let detection = detector.detect(&frame.view());
//! println!("detected: {}", detection.is_some());
//! ```
//!
//! ## API map
//! - `cube_scan::core`: colors, faces, cube state, pixel views, notation.
//! - `cube_scan::classify`: HSV classification and 3×3 face detection.
//! - `cube_scan::validate`: per-face and whole-cube validation reports.
//! - `cube_scan::detect` (feature `image`): helpers over `image::RgbImage`.

pub use cube_scan_classify as classify;
pub use cube_scan_core as core;
pub use cube_scan_validate as validate;

pub use cube_scan_classify::{ClassifierParams, ColorClassifier, FaceDetector, FaceDetectorParams};
pub use cube_scan_core::{CubeState, Face, FaceCapture, Hsv, Rgb, StickerColor};
pub use cube_scan_validate::{validate, ValidationReport};

mod session;
pub use session::{CaptureSession, SessionError};

#[cfg(feature = "image")]
pub mod detect;
