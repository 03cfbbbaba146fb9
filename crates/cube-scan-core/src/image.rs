//! Lightweight pixel-view types.
//!
//! The classifier only needs "given a region, hand me RGB samples", so the
//! camera backend is kept behind these plain buffer views. Tests feed
//! synthetic arrays through the same types.

use crate::color::Rgb;

/// Borrowed view over an interleaved 8-bit RGB frame.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    /// Row-major RGB, len = width * height * 3.
    pub data: &'a [u8],
}

/// Owned interleaved 8-bit RGB frame.
#[derive(Clone, Debug)]
pub struct RgbImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbImage {
    /// A solid-color frame, handy for tests and examples.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn view(&self) -> RgbImageView<'_> {
        RgbImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// Overwrite a rectangle with a solid color. Out-of-frame parts are
    /// clipped.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let Some(clipped) = rect.clip(self.width, self.height) else {
            return;
        };
        for y in clipped.y..clipped.y + clipped.h {
            for x in clipped.x..clipped.x + clipped.w {
                let i = (y * self.width + x) * 3;
                self.data[i] = color.r;
                self.data[i + 1] = color.g;
                self.data[i + 2] = color.b;
            }
        }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    /// Intersect with a `width` × `height` frame; `None` if empty.
    pub fn clip(self, width: usize, height: usize) -> Option<Rect> {
        if self.w == 0 || self.h == 0 || self.x >= width || self.y >= height {
            return None;
        }
        Some(Rect {
            x: self.x,
            y: self.y,
            w: self.w.min(width - self.x),
            h: self.h.min(height - self.y),
        })
    }

    /// Centered sub-rectangle covering `frac` of each side.
    ///
    /// An empty rectangle is returned unchanged.
    pub fn shrink_centered(self, frac: f32) -> Rect {
        if self.w == 0 || self.h == 0 {
            return self;
        }
        let frac = frac.clamp(0.0, 1.0);
        let w = ((self.w as f32 * frac).round() as usize).max(1);
        let h = ((self.h as f32 * frac).round() as usize).max(1);
        Rect {
            x: self.x + (self.w - w) / 2,
            y: self.y + (self.h - h) / 2,
            w,
            h,
        }
    }
}

/// Arithmetic per-channel mean over a region.
///
/// The region is clipped to the frame; returns `None` when the intersection
/// is empty. Plain averaging, no outlier rejection.
pub fn sample_mean_rgb(src: &RgbImageView<'_>, rect: Rect) -> Option<Rgb> {
    let clipped = rect.clip(src.width, src.height)?;

    let mut sum = [0u64; 3];
    for y in clipped.y..clipped.y + clipped.h {
        let row = y * src.width;
        for x in clipped.x..clipped.x + clipped.w {
            let i = (row + x) * 3;
            sum[0] += src.data[i] as u64;
            sum[1] += src.data[i + 1] as u64;
            sum[2] += src.data[i + 2] as u64;
        }
    }

    let n = (clipped.w * clipped.h) as u64;
    Some(Rgb::new(
        (sum[0] / n) as u8,
        (sum[1] / n) as u8,
        (sum[2] / n) as u8,
    ))
}
