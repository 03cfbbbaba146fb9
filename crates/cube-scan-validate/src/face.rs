//! Per-face checks run right after a capture.

use cube_scan_core::{StickerColor, STICKERS_PER_FACE};
use serde::{Deserialize, Serialize};

/// One issue found in a single face capture.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceIssue {
    /// Structural: the capture does not hold exactly 9 stickers.
    #[error("face must contain exactly {STICKERS_PER_FACE} stickers, got {got}")]
    WrongStickerCount { got: usize },

    /// One or more cells classified as unknown; the face needs a recapture.
    #[error("{count} sticker(s) on this face could not be identified")]
    UndetectedStickers { count: usize },

    /// Plausible but suspicious: a real scramble rarely shows a solid face.
    #[error("all 9 stickers are {color}; check the lighting if this face is not solid")]
    UniformFace { color: StickerColor },
}

impl FaceIssue {
    /// Warnings do not invalidate the face.
    pub fn is_warning(&self) -> bool {
        matches!(self, FaceIssue::UniformFace { .. })
    }
}

/// Result of [`validate_face`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FaceReport {
    pub valid: bool,
    pub issues: Vec<FaceIssue>,
}

/// Check one face capture in isolation.
///
/// A wrong sticker count is structural and stops further checks. Unknown
/// stickers invalidate the face (the count is reported); a uniform face is
/// only warned about.
pub fn validate_face(stickers: &[StickerColor]) -> FaceReport {
    if stickers.len() != STICKERS_PER_FACE {
        return FaceReport {
            valid: false,
            issues: vec![FaceIssue::WrongStickerCount {
                got: stickers.len(),
            }],
        };
    }

    let mut issues = Vec::new();
    let mut valid = true;

    let unknown = stickers
        .iter()
        .filter(|&&c| c == StickerColor::Unknown)
        .count();
    if unknown > 0 {
        issues.push(FaceIssue::UndetectedStickers { count: unknown });
        valid = false;
    }

    let first = stickers[0];
    if first.is_known() && stickers.iter().all(|&c| c == first) {
        issues.push(FaceIssue::UniformFace { color: first });
    }

    FaceReport { valid, issues }
}
