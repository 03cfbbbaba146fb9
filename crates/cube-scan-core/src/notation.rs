//! 54-character facelet-notation handoff.
//!
//! Solvers expect the cube as one letter per sticker, faces concatenated in
//! U, R, F, D, L, B order. The color→letter table is fixed (white up, green
//! front), so the conversion is mechanical once the cube is complete.

use crate::cube::{CubeState, Face};

/// Face emission order expected by the solver handoff.
const NOTATION_ORDER: [Face; 6] = [
    Face::Up,
    Face::Right,
    Face::Front,
    Face::Down,
    Face::Left,
    Face::Back,
];

/// Errors converting a cube state to facelet notation.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum NotationError {
    #[error("cube is incomplete, missing faces: {missing:?}")]
    Incomplete { missing: Vec<Face> },

    #[error("undetected sticker at {face} face, cell {index}")]
    UnknownSticker { face: Face, index: usize },
}

/// Render a completed cube as the 54-character facelet string.
pub fn notation_string(cube: &CubeState) -> Result<String, NotationError> {
    if !cube.is_complete() {
        return Err(NotationError::Incomplete {
            missing: cube.missing_faces(),
        });
    }

    let mut out = String::with_capacity(54);
    for face in NOTATION_ORDER {
        let capture = cube
            .get(face)
            .ok_or_else(|| NotationError::Incomplete {
                missing: cube.missing_faces(),
            })?;
        for (index, sticker) in capture.stickers().iter().enumerate() {
            let letter = sticker
                .facelet_letter()
                .ok_or(NotationError::UnknownSticker { face, index })?;
            out.push(letter);
        }
    }
    Ok(out)
}
