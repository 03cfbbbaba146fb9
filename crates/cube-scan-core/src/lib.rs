//! Core types and utilities for cube face capture.
//!
//! This crate is intentionally small and purely value-based. It does *not*
//! depend on any concrete camera backend or image container type.

mod color;
mod cube;
mod image;
mod logger;
mod notation;

pub use color::{Hsv, Rgb, StickerColor};
pub use cube::{CubeState, Face, FaceCapture, FaceCaptureError, CENTER_INDEX, STICKERS_PER_FACE};
pub use image::{sample_mean_rgb, Rect, RgbImage, RgbImageView};
pub use notation::{notation_string, NotationError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
