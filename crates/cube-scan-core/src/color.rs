//! Color values exchanged between the sampler, the classifier and the UI.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB sample averaged over a sticker region.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsv(self) -> Hsv {
        Hsv::from_rgb(self)
    }
}

/// Hue in degrees [0, 360), saturation and value in percent [0, 100].
///
/// HSV is used for sticker classification because hue is far more stable
/// under webcam lighting changes than raw RGB channel values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert an 8-bit RGB triple to HSV.
    ///
    /// The gray axis (r = g = b) maps to hue 0 and saturation 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
        let v = max * 100.0;

        Self { h, s, v }
    }

    /// Circular hue distance in degrees, wrap minimized: `min(|Δh|, 360 - |Δh|)`.
    pub fn hue_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }
}

/// One of the six cube sticker colors, or `Unknown` when no confident match
/// was found.
///
/// `Unknown` is a normal classification outcome, not an error: downstream
/// validation decides whether it blocks (it does, via the unknown-count
/// check).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerColor {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
    Unknown,
}

impl StickerColor {
    /// The six physical sticker colors, `Unknown` excluded.
    pub const KNOWN: [StickerColor; 6] = [
        StickerColor::White,
        StickerColor::Yellow,
        StickerColor::Red,
        StickerColor::Orange,
        StickerColor::Green,
        StickerColor::Blue,
    ];

    pub const fn is_known(self) -> bool {
        !matches!(self, StickerColor::Unknown)
    }

    /// Lowercase display name, matching the serde rendering.
    pub const fn name(self) -> &'static str {
        match self {
            StickerColor::White => "white",
            StickerColor::Yellow => "yellow",
            StickerColor::Red => "red",
            StickerColor::Orange => "orange",
            StickerColor::Green => "green",
            StickerColor::Blue => "blue",
            StickerColor::Unknown => "unknown",
        }
    }

    /// Fixed facelet letter used in the 54-character notation handoff.
    ///
    /// `None` for `Unknown`, which has no notation representation.
    pub const fn facelet_letter(self) -> Option<char> {
        match self {
            StickerColor::White => Some('U'),
            StickerColor::Yellow => Some('D'),
            StickerColor::Red => Some('R'),
            StickerColor::Orange => Some('L'),
            StickerColor::Green => Some('F'),
            StickerColor::Blue => Some('B'),
            StickerColor::Unknown => None,
        }
    }
}

impl std::fmt::Display for StickerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gray_axis_has_zero_hue_and_saturation() {
        for c in [0u8, 1, 64, 127, 200, 255] {
            let hsv = Hsv::from_rgb(Rgb::new(c, c, c));
            assert_eq!(hsv.h, 0.0, "gray {c} should map to hue 0");
            assert_eq!(hsv.s, 0.0, "gray {c} should map to saturation 0");
        }
    }

    #[test]
    fn primaries_convert_to_expected_hsv() {
        let red = Hsv::from_rgb(Rgb::new(255, 0, 0));
        assert_relative_eq!(red.h, 0.0);
        assert_relative_eq!(red.s, 100.0);
        assert_relative_eq!(red.v, 100.0);

        let green = Hsv::from_rgb(Rgb::new(0, 255, 0));
        assert_relative_eq!(green.h, 120.0);

        let blue = Hsv::from_rgb(Rgb::new(0, 0, 255));
        assert_relative_eq!(blue.h, 240.0);
    }

    #[test]
    fn white_is_full_value_zero_saturation() {
        let hsv = Hsv::from_rgb(Rgb::new(255, 255, 255));
        assert_eq!(hsv.s, 0.0);
        assert_relative_eq!(hsv.v, 100.0);
    }

    #[test]
    fn hue_stays_in_range_for_all_channel_extremes() {
        for r in [0u8, 128, 255] {
            for g in [0u8, 128, 255] {
                for b in [0u8, 128, 255] {
                    let hsv = Hsv::from_rgb(Rgb::new(r, g, b));
                    assert!((0.0..360.0).contains(&hsv.h), "hue {} for ({r},{g},{b})", hsv.h);
                    assert!((0.0..=100.0).contains(&hsv.s));
                    assert!((0.0..=100.0).contains(&hsv.v));
                }
            }
        }
    }

    #[test]
    fn hue_distance_wraps_around_zero() {
        assert_relative_eq!(Hsv::hue_distance(350.0, 10.0), 20.0);
        assert_relative_eq!(Hsv::hue_distance(10.0, 350.0), 20.0);
        assert_relative_eq!(Hsv::hue_distance(180.0, 180.0), 0.0);
    }

    #[test]
    fn sticker_color_serde_uses_snake_case() {
        let json = serde_json::to_string(&StickerColor::White).unwrap();
        assert_eq!(json, "\"white\"");
        let back: StickerColor = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(back, StickerColor::Unknown);
    }
}
