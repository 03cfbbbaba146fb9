//! Validation of captured cube states.
//!
//! Two layers:
//! - [`validate_face`] checks one 9-sticker capture in isolation, so the UI
//!   can flag a bad face right after capture.
//! - [`validate`] checks a completed [`cube_scan_core::CubeState`] against
//!   the combinatorial invariants of a physical cube (54 stickers, 9 of
//!   each color, 6 distinct centers).
//!
//! Both are pure reads; a report is a value, and validating the same state
//! twice yields the identical report. Combinatorial checks all run even
//! after one fails, so the caller sees the complete violation list in one
//! pass. An incomplete cube is the one structural short-circuit.

mod face;
mod report;
mod validator;

pub use face::{validate_face, FaceIssue, FaceReport};
pub use report::{CubeViolation, ValidationReport};
pub use validator::validate;
