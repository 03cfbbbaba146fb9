//! Classifier and detector configuration.

use cube_scan_core::{Hsv, StickerColor};
use serde::{Deserialize, Serialize};

/// Inclusive hue interval in degrees.
///
/// Red's accepted hue region wraps the 0/360 boundary and is therefore
/// expressed as two bands, `[0, 15]` and `[330, 360]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HueBand {
    pub lo: f32,
    pub hi: f32,
}

impl HueBand {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, hue: f32) -> bool {
        hue >= self.lo && hue <= self.hi
    }
}

/// Accepted HSV bands for one sticker color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorBands {
    pub hue: Vec<HueBand>,
    pub sat_lo: f32,
    pub sat_hi: f32,
    pub val_lo: f32,
    pub val_hi: f32,
}

impl ColorBands {
    pub fn hue_in_band(&self, hue: f32) -> bool {
        self.hue.iter().any(|b| b.contains(hue))
    }

    pub fn sat_in_band(&self, sat: f32) -> bool {
        sat >= self.sat_lo && sat <= self.sat_hi
    }

    pub fn val_in_band(&self, val: f32) -> bool {
        val >= self.val_lo && val <= self.val_hi
    }
}

/// Canonical reference point plus nearest-neighbor weights for one color.
///
/// Weights are per-axis multipliers on squared distance. White downweights
/// hue and upweights saturation: white is characterised by low saturation,
/// not by any hue. Chromatic colors upweight hue and downweight value, since
/// value varies most with lighting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorReference {
    pub hsv: Hsv,
    pub hue_weight: f32,
    pub sat_weight: f32,
    pub val_weight: f32,
}

/// Bands and reference for one of the six known sticker colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    pub color: StickerColor,
    pub bands: ColorBands,
    pub reference: ColorReference,
}

/// Configuration for [`crate::ColorClassifier`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierParams {
    /// Score awarded when hue falls inside a color's hue band.
    pub hue_score: u32,
    /// Score awarded when saturation falls inside the saturation band.
    pub sat_score: u32,
    /// Score awarded when value falls inside the value band.
    pub val_score: u32,
    /// Minimum range score to accept a color without the fallback stage.
    ///
    /// The default 150 means "hue matched plus at least one of
    /// saturation/value".
    pub accept_threshold: u32,
    /// Optional cutoff for the nearest-neighbor fallback.
    ///
    /// `None` (the default) reproduces the capture pipeline's historical
    /// behavior: the fallback always names some color, so `Unknown` is only
    /// reachable when no profile exists. With `Some(d)`, samples farther
    /// than `d` from every reference classify as `Unknown`.
    pub max_fallback_distance: Option<f32>,
    /// One profile per known color.
    pub profiles: Vec<ColorProfile>,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            hue_score: 100,
            sat_score: 50,
            val_score: 50,
            accept_threshold: 150,
            max_fallback_distance: None,
            profiles: default_profiles(),
        }
    }
}

const CHROMATIC_HUE_WEIGHT: f32 = 1.0;
const CHROMATIC_SAT_WEIGHT: f32 = 0.5;
const CHROMATIC_VAL_WEIGHT: f32 = 0.2;

fn chromatic_reference(hue: f32) -> ColorReference {
    ColorReference {
        hsv: Hsv::new(hue, 100.0, 100.0),
        hue_weight: CHROMATIC_HUE_WEIGHT,
        sat_weight: CHROMATIC_SAT_WEIGHT,
        val_weight: CHROMATIC_VAL_WEIGHT,
    }
}

/// Band and reference table tuned for consumer webcams under indoor light.
pub fn default_profiles() -> Vec<ColorProfile> {
    vec![
        ColorProfile {
            color: StickerColor::White,
            bands: ColorBands {
                hue: vec![HueBand::new(0.0, 360.0)],
                sat_lo: 0.0,
                sat_hi: 25.0,
                val_lo: 70.0,
                val_hi: 100.0,
            },
            reference: ColorReference {
                hsv: Hsv::new(0.0, 0.0, 100.0),
                hue_weight: 0.1,
                sat_weight: 1.0,
                val_weight: 0.5,
            },
        },
        ColorProfile {
            color: StickerColor::Yellow,
            bands: ColorBands {
                hue: vec![HueBand::new(40.0, 75.0)],
                sat_lo: 30.0,
                sat_hi: 100.0,
                val_lo: 50.0,
                val_hi: 100.0,
            },
            reference: chromatic_reference(60.0),
        },
        ColorProfile {
            color: StickerColor::Red,
            bands: ColorBands {
                hue: vec![HueBand::new(0.0, 15.0), HueBand::new(330.0, 360.0)],
                sat_lo: 50.0,
                sat_hi: 100.0,
                val_lo: 40.0,
                val_hi: 100.0,
            },
            reference: chromatic_reference(0.0),
        },
        ColorProfile {
            color: StickerColor::Orange,
            bands: ColorBands {
                hue: vec![HueBand::new(15.0, 40.0)],
                sat_lo: 50.0,
                sat_hi: 100.0,
                val_lo: 50.0,
                val_hi: 100.0,
            },
            reference: chromatic_reference(30.0),
        },
        ColorProfile {
            color: StickerColor::Green,
            bands: ColorBands {
                hue: vec![HueBand::new(75.0, 170.0)],
                sat_lo: 30.0,
                sat_hi: 100.0,
                val_lo: 30.0,
                val_hi: 100.0,
            },
            reference: chromatic_reference(120.0),
        },
        ColorProfile {
            color: StickerColor::Blue,
            bands: ColorBands {
                hue: vec![HueBand::new(170.0, 270.0)],
                sat_lo: 30.0,
                sat_hi: 100.0,
                val_lo: 30.0,
                val_hi: 100.0,
            },
            reference: chromatic_reference(240.0),
        },
    ]
}

/// Configuration for [`crate::FaceDetector`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceDetectorParams {
    /// Fraction of the frame's shorter dimension covered by the sampled
    /// square.
    pub frame_coverage: f32,
    /// Fraction of each grid cell sampled around its center.
    pub cell_coverage: f32,
    /// Classifier applied to each cell's mean color.
    pub classifier: ClassifierParams,
}

impl Default for FaceDetectorParams {
    fn default() -> Self {
        Self {
            frame_coverage: 0.6,
            cell_coverage: 0.5,
            classifier: ClassifierParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profiles_cover_all_known_colors_once() {
        let profiles = default_profiles();
        let mut colors: Vec<StickerColor> = profiles.iter().map(|p| p.color).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
        assert!(colors.iter().all(|c| c.is_known()));
    }

    #[test]
    fn red_hue_band_wraps_the_zero_boundary() {
        let profiles = default_profiles();
        let red = profiles
            .iter()
            .find(|p| p.color == StickerColor::Red)
            .unwrap();
        assert!(red.bands.hue_in_band(3.0));
        assert!(red.bands.hue_in_band(350.0));
        assert!(!red.bands.hue_in_band(180.0));
    }

    #[test]
    fn params_round_trip_through_json() {
        let params = ClassifierParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: ClassifierParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
