//! End-to-end helpers over `image` crate frames.

use cube_scan_classify::{FaceDetection, FaceDetector, FaceDetectorParams};
use cube_scan_core::RgbImageView;

/// Errors produced by the facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid RGB image buffer length (expected {expected} bytes, got {got})")]
    InvalidRgbBuffer { expected: usize, got: usize },

    #[error("invalid RGB image dimensions (width={width}, height={height})")]
    InvalidRgbDimensions { width: u32, height: u32 },
}

/// Convert an `image::RgbImage` into the lightweight `cube-scan-core` view.
pub fn rgb_view(img: &::image::RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Run face detection on an `image::RgbImage` frame.
pub fn detect_face(img: &::image::RgbImage, params: FaceDetectorParams) -> Option<FaceDetection> {
    let detector = FaceDetector::new(params);
    detector.detect(&rgb_view(img))
}

/// Convenience overload using default parameters.
pub fn detect_face_default(img: &::image::RgbImage) -> Option<FaceDetection> {
    detect_face(img, FaceDetectorParams::default())
}

/// Build an `image::RgbImage` from a raw interleaved RGB buffer.
pub fn rgb_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<::image::RgbImage, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidRgbDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h).and_then(|n| n.checked_mul(3)) else {
        return Err(DetectError::InvalidRgbDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(DetectError::InvalidRgbBuffer {
            expected,
            got: pixels.len(),
        });
    }
    ::image::RgbImage::from_raw(width, height, pixels.to_vec())
        .ok_or(DetectError::InvalidRgbDimensions { width, height })
}

/// Run face detection on a raw RGB buffer.
pub fn detect_face_from_rgb_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    params: FaceDetectorParams,
) -> Result<Option<FaceDetection>, DetectError> {
    let img = rgb_image_from_slice(width, height, pixels)?;
    Ok(detect_face(&img, params))
}
