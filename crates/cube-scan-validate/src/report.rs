use cube_scan_core::{Face, StickerColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One cube-level violation.
///
/// Every variant renders to a self-contained message via `Display`, so the
/// UI can show the list verbatim as bulleted diagnostics.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeViolation {
    #[error("cube is incomplete: missing faces {missing:?}, capture them before validating")]
    IncompleteCube { missing: Vec<Face> },

    #[error("expected 54 stickers in total, found {got}")]
    WrongTotalStickerCount { got: usize },

    #[error("expected exactly 9 {color} stickers, found {got}")]
    WrongColorCount { color: StickerColor, got: usize },

    #[error("{count} sticker(s) could not be identified, recapture the affected faces")]
    UndetectedStickers { count: usize },

    #[error("center color {color} appears on multiple faces: {faces:?}")]
    DuplicateCenter {
        color: StickerColor,
        faces: Vec<Face>,
    },

    #[error("no face has a {color} center")]
    MissingCenter { color: StickerColor },
}

/// Outcome of validating a cube-state snapshot.
///
/// `color_counts` is always populated over whatever faces are captured,
/// failures included, for diagnostic display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub violations: Vec<CubeViolation>,
    pub color_counts: BTreeMap<StickerColor, usize>,
}

impl ValidationReport {
    /// Violations rendered as display strings, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }
}
