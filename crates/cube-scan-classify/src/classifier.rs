use cube_scan_core::{Hsv, Rgb, StickerColor};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::params::{ClassifierParams, ColorProfile};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Range-scoring breakdown for one color, exposed for diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RangeScore {
    pub color: StickerColor,
    pub score: u32,
    pub hue_in_band: bool,
    pub sat_in_band: bool,
    pub val_in_band: bool,
}

/// Maps a sampled color to the best-matching sticker color.
///
/// Owned by the caller; construct one per pipeline (or per test) instead of
/// sharing a global instance.
#[derive(Clone, Debug)]
pub struct ColorClassifier {
    params: ClassifierParams,
}

impl ColorClassifier {
    pub fn new(params: ClassifierParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    /// Classify an HSV sample.
    ///
    /// Total over the whole HSV domain: always returns one of the seven
    /// enumeration values and never panics.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn classify(&self, hsv: Hsv) -> StickerColor {
        let best = self
            .range_scores(hsv)
            .into_iter()
            .max_by_key(|s| s.score);

        if let Some(best) = best {
            if best.score >= self.params.accept_threshold {
                trace!(
                    "range match: {} (score {}) for h={:.1} s={:.1} v={:.1}",
                    best.color,
                    best.score,
                    hsv.h,
                    hsv.s,
                    hsv.v
                );
                return best.color;
            }
        }

        self.nearest_reference(hsv)
    }

    /// Convert and classify an RGB sample.
    pub fn classify_rgb(&self, rgb: Rgb) -> StickerColor {
        self.classify(rgb.to_hsv())
    }

    /// Stage 1: band-membership scores for every known color.
    pub fn range_scores(&self, hsv: Hsv) -> Vec<RangeScore> {
        self.params
            .profiles
            .iter()
            .map(|p| self.score_profile(p, hsv))
            .collect()
    }

    fn score_profile(&self, profile: &ColorProfile, hsv: Hsv) -> RangeScore {
        let hue_in_band = profile.bands.hue_in_band(hsv.h);
        let sat_in_band = profile.bands.sat_in_band(hsv.s);
        let val_in_band = profile.bands.val_in_band(hsv.v);

        let mut score = 0;
        if hue_in_band {
            score += self.params.hue_score;
        }
        if sat_in_band {
            score += self.params.sat_score;
        }
        if val_in_band {
            score += self.params.val_score;
        }

        RangeScore {
            color: profile.color,
            score,
            hue_in_band,
            sat_in_band,
            val_in_band,
        }
    }

    /// Stage 2: weighted nearest-neighbor over the canonical references.
    ///
    /// Hue distance is circular. Without a `max_fallback_distance` this
    /// always names a color, so `Unknown` stays unreachable from here.
    fn nearest_reference(&self, hsv: Hsv) -> StickerColor {
        let mut best: Option<(StickerColor, f32)> = None;
        for profile in &self.params.profiles {
            let d = weighted_distance(hsv, &profile.reference);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((profile.color, d));
            }
        }

        match best {
            Some((color, d)) => {
                if let Some(cutoff) = self.params.max_fallback_distance {
                    if d > cutoff {
                        debug!(
                            "fallback distance {d:.1} beyond cutoff {cutoff:.1}, marking unknown"
                        );
                        return StickerColor::Unknown;
                    }
                }
                trace!("fallback match: {color} at distance {d:.1}");
                color
            }
            // No profiles configured; nothing to match against.
            None => StickerColor::Unknown,
        }
    }
}

fn weighted_distance(hsv: Hsv, reference: &crate::params::ColorReference) -> f32 {
    let dh = Hsv::hue_distance(hsv.h, reference.hsv.h);
    let ds = hsv.s - reference.hsv.s;
    let dv = hsv.v - reference.hsv.v;
    (reference.hue_weight * dh * dh
        + reference.sat_weight * ds * ds
        + reference.val_weight * dv * dv)
        .sqrt()
}
