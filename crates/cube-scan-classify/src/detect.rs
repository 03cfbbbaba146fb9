//! 3×3 face detection over a camera frame.

use cube_scan_core::{
    sample_mean_rgb, FaceCapture, Hsv, Rect, Rgb, RgbImageView, StickerColor,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::ColorClassifier;
use crate::params::FaceDetectorParams;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// One classified sticker cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerSample {
    pub row: usize,
    pub col: usize,
    /// Sub-region actually averaged for the classification.
    pub rect: Rect,
    pub rgb: Rgb,
    pub hsv: Hsv,
    pub color: StickerColor,
}

/// Result of one detection pass over a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    /// Square region of the frame the grid was laid over.
    pub region: Rect,
    /// The 9 cells, row-major.
    pub stickers: Vec<StickerSample>,
}

impl FaceDetection {
    /// Collapse the detection to the capture handed to cube assembly.
    pub fn capture(&self) -> FaceCapture {
        let mut colors = [StickerColor::Unknown; 9];
        for s in &self.stickers {
            if s.row < 3 && s.col < 3 {
                colors[s.row * 3 + s.col] = s.color;
            }
        }
        FaceCapture::new(colors)
    }
}

/// Samples a centered 3×3 grid from a frame and classifies each cell.
pub struct FaceDetector {
    params: FaceDetectorParams,
    classifier: ColorClassifier,
}

impl FaceDetector {
    pub fn new(params: FaceDetectorParams) -> Self {
        let classifier = ColorClassifier::new(params.classifier.clone());
        Self { params, classifier }
    }

    pub fn params(&self) -> &FaceDetectorParams {
        &self.params
    }

    pub fn classifier(&self) -> &ColorClassifier {
        &self.classifier
    }

    /// Detect one face in the frame.
    ///
    /// The sampled square covers `frame_coverage` of the shorter frame
    /// dimension, centered; each of its 9 cells is averaged over the center
    /// `cell_coverage` sub-region and classified. Returns `None` for an
    /// empty frame (camera not started yet).
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    pub fn detect(&self, frame: &RgbImageView<'_>) -> Option<FaceDetection> {
        if frame.width == 0 || frame.height == 0 {
            return None;
        }

        let region = self.grid_region(frame.width, frame.height);
        let cell_w = region.w / 3;
        let cell_h = region.h / 3;
        if cell_w == 0 || cell_h == 0 {
            return None;
        }

        let mut stickers = Vec::with_capacity(9);
        for row in 0..3 {
            for col in 0..3 {
                let cell = Rect::new(
                    region.x + col * cell_w,
                    region.y + row * cell_h,
                    cell_w,
                    cell_h,
                );
                let rect = cell.shrink_centered(self.params.cell_coverage);
                // A cell falling entirely outside the frame aborts the pass.
                let rgb = sample_mean_rgb(frame, rect)?;
                let hsv = rgb.to_hsv();
                let color = self.classifier.classify(hsv);
                stickers.push(StickerSample {
                    row,
                    col,
                    rect,
                    rgb,
                    hsv,
                    color,
                });
            }
        }

        debug!(
            "face detected over {}x{} frame: {}",
            frame.width,
            frame.height,
            stickers
                .iter()
                .map(|s| s.color.name())
                .collect::<Vec<_>>()
                .join(" ")
        );

        Some(FaceDetection { region, stickers })
    }

    /// Centered square covering `frame_coverage` of the shorter dimension.
    fn grid_region(&self, width: usize, height: usize) -> Rect {
        let short = width.min(height);
        let side = ((short as f32 * self.params.frame_coverage) as usize).max(3);
        Rect::new((width - side.min(width)) / 2, (height - side.min(height)) / 2, side, side)
    }
}
