//! Faces, face captures and the assembled cube state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::StickerColor;

/// Stickers per face (3×3 grid, row-major).
pub const STICKERS_PER_FACE: usize = 9;

/// Grid index of the fixed center sticker.
pub const CENTER_INDEX: usize = 4;

/// One of the six cube faces.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    /// All faces in capture order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    const fn index(self) -> usize {
        match self {
            Face::Up => 0,
            Face::Down => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Front => 4,
            Face::Back => 5,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Up => "up",
            Face::Down => "down",
            Face::Left => "left",
            Face::Right => "right",
            Face::Front => "front",
            Face::Back => "back",
        };
        f.write_str(name)
    }
}

/// Error building a [`FaceCapture`] from a slice.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum FaceCaptureError {
    #[error("face capture must contain exactly {STICKERS_PER_FACE} stickers, got {got}")]
    WrongStickerCount { got: usize },
}

/// An ordered capture of the 9 stickers of one face.
///
/// Stickers are row-major over the 3×3 grid; index [`CENTER_INDEX`] is the
/// fixed center sticker that identifies the face on a physical cube.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FaceCapture {
    stickers: [StickerColor; STICKERS_PER_FACE],
}

impl FaceCapture {
    pub const fn new(stickers: [StickerColor; STICKERS_PER_FACE]) -> Self {
        Self { stickers }
    }

    /// Fallible construction from a slice; wrong length is a structural error.
    pub fn from_slice(stickers: &[StickerColor]) -> Result<Self, FaceCaptureError> {
        let stickers: [StickerColor; STICKERS_PER_FACE] = stickers
            .try_into()
            .map_err(|_| FaceCaptureError::WrongStickerCount {
                got: stickers.len(),
            })?;
        Ok(Self { stickers })
    }

    /// A face filled with a single color.
    pub const fn uniform(color: StickerColor) -> Self {
        Self {
            stickers: [color; STICKERS_PER_FACE],
        }
    }

    pub fn stickers(&self) -> &[StickerColor; STICKERS_PER_FACE] {
        &self.stickers
    }

    pub fn center(&self) -> StickerColor {
        self.stickers[CENTER_INDEX]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<StickerColor> {
        if row < 3 && col < 3 {
            Some(self.stickers[row * 3 + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, index: usize, color: StickerColor) {
        self.stickers[index] = color;
    }

    pub fn count_of(&self, color: StickerColor) -> usize {
        self.stickers.iter().filter(|&&c| c == color).count()
    }
}

/// The cube assembled face by face during capture.
///
/// The capture pipeline owns and mutates this exclusively; validation only
/// reads a completed snapshot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CubeState {
    faces: [Option<FaceCapture>; 6],
}

impl CubeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, face: Face, capture: FaceCapture) {
        self.faces[face.index()] = Some(capture);
    }

    pub fn get(&self, face: Face) -> Option<&FaceCapture> {
        self.faces[face.index()].as_ref()
    }

    /// Drop a face so it can be recaptured.
    pub fn clear(&mut self, face: Face) -> Option<FaceCapture> {
        self.faces[face.index()].take()
    }

    pub fn is_complete(&self) -> bool {
        self.faces.iter().all(Option::is_some)
    }

    /// Faces that have a capture, in [`Face::ALL`] order.
    pub fn filled_faces(&self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|f| self.faces[f.index()].is_some())
            .collect()
    }

    pub fn missing_faces(&self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|f| self.faces[f.index()].is_none())
            .collect()
    }

    /// Sticker totals per color over all captured faces.
    ///
    /// Every enumeration variant appears in the map, zero counts included,
    /// so diagnostic output is stable.
    pub fn color_counts(&self) -> BTreeMap<StickerColor, usize> {
        let mut counts: BTreeMap<StickerColor, usize> = StickerColor::KNOWN
            .into_iter()
            .chain([StickerColor::Unknown])
            .map(|c| (c, 0))
            .collect();
        for capture in self.faces.iter().flatten() {
            for &sticker in capture.stickers() {
                *counts.entry(sticker).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Total stickers across captured faces.
    pub fn sticker_count(&self) -> usize {
        self.faces.iter().flatten().count() * STICKERS_PER_FACE
    }

    /// Center color of each captured face.
    pub fn centers(&self) -> Vec<(Face, StickerColor)> {
        Face::ALL
            .into_iter()
            .filter_map(|f| self.get(f).map(|cap| (f, cap.center())))
            .collect()
    }
}
