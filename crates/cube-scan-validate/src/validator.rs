//! Whole-cube validation.

use cube_scan_core::{CubeState, Face, StickerColor};
use log::{debug, info};
use std::collections::BTreeMap;

use crate::report::{CubeViolation, ValidationReport};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Validate a cube-state snapshot against the invariants of a physical cube.
///
/// An incomplete cube short-circuits with a single structural violation; a
/// complete cube runs every combinatorial check so the report carries the
/// full violation list. The color-count map is filled either way. The sticker
/// color enum is closed, so "color outside the known set" is unrepresentable
/// and surfaces only through the per-color counts.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(cube)))]
pub fn validate(cube: &CubeState) -> ValidationReport {
    let color_counts = cube.color_counts();

    if !cube.is_complete() {
        let missing = cube.missing_faces();
        debug!("validation aborted, missing faces: {missing:?}");
        return ValidationReport {
            valid: false,
            violations: vec![CubeViolation::IncompleteCube { missing }],
            color_counts,
        };
    }

    let mut violations = Vec::new();

    let total = cube.sticker_count();
    if total != 54 {
        violations.push(CubeViolation::WrongTotalStickerCount { got: total });
    }

    for color in StickerColor::KNOWN {
        let got = color_counts.get(&color).copied().unwrap_or(0);
        if got != 9 {
            violations.push(CubeViolation::WrongColorCount { color, got });
        }
    }

    let unknown = color_counts
        .get(&StickerColor::Unknown)
        .copied()
        .unwrap_or(0);
    if unknown > 0 {
        violations.push(CubeViolation::UndetectedStickers { count: unknown });
    }

    check_centers(cube, &mut violations);

    let valid = violations.is_empty();
    if valid {
        info!("cube state valid: {}", summarize(&color_counts));
    } else {
        debug!("cube state invalid with {} violation(s)", violations.len());
    }

    ValidationReport {
        valid,
        violations,
        color_counts,
    }
}

/// Centers must be 6 distinct colors covering all 6 known colors.
///
/// Coverage is implied by distinctness plus the per-color counts, but it is
/// checked independently so a miscaptured cube produces the clearest
/// possible diagnostic.
fn check_centers(cube: &CubeState, violations: &mut Vec<CubeViolation>) {
    let mut by_color: BTreeMap<StickerColor, Vec<Face>> = BTreeMap::new();
    for (face, color) in cube.centers() {
        by_color.entry(color).or_default().push(face);
    }

    for (&color, faces) in &by_color {
        if faces.len() > 1 {
            violations.push(CubeViolation::DuplicateCenter {
                color,
                faces: faces.clone(),
            });
        }
    }

    for color in StickerColor::KNOWN {
        if !by_color.contains_key(&color) {
            violations.push(CubeViolation::MissingCenter { color });
        }
    }
}

fn summarize(counts: &BTreeMap<StickerColor, usize>) -> String {
    counts
        .iter()
        .map(|(c, n)| format!("{c}={n}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_scan_core::{FaceCapture, CENTER_INDEX};

    /// A cube with the correct composition: each face solid in one color.
    fn balanced_cube() -> CubeState {
        let mut cube = CubeState::new();
        for (face, color) in Face::ALL.into_iter().zip(StickerColor::KNOWN) {
            cube.set(face, FaceCapture::uniform(color));
        }
        cube
    }

    #[test]
    fn balanced_cube_validates_clean() {
        let report = validate(&balanced_cube());
        assert!(report.valid);
        assert!(report.violations.is_empty());
        for color in StickerColor::KNOWN {
            assert_eq!(report.color_counts[&color], 9);
        }
        assert_eq!(report.color_counts[&StickerColor::Unknown], 0);
    }

    #[test]
    fn incomplete_cube_short_circuits() {
        let mut cube = balanced_cube();
        cube.clear(Face::Back);
        let report = validate(&cube);
        assert!(!report.valid);
        assert_eq!(
            report.violations,
            vec![CubeViolation::IncompleteCube {
                missing: vec![Face::Back]
            }]
        );
        // Counts still reflect the five captured faces.
        assert_eq!(report.color_counts[&StickerColor::White], 9);
        assert_eq!(report.color_counts[&StickerColor::Blue], 0);
    }

    #[test]
    fn one_unknown_sticker_breaks_green_count_and_reports_it() {
        let mut cube = balanced_cube();
        let mut front = *cube.get(Face::Front).unwrap();
        assert_eq!(front.center(), StickerColor::Green);
        front.set(0, StickerColor::Unknown);
        cube.set(Face::Front, front);

        let report = validate(&cube);
        assert!(!report.valid);
        assert!(report.violations.contains(&CubeViolation::WrongColorCount {
            color: StickerColor::Green,
            got: 8
        }));
        assert!(report
            .violations
            .contains(&CubeViolation::UndetectedStickers { count: 1 }));
        assert_eq!(report.color_counts[&StickerColor::Green], 8);
        assert_eq!(report.color_counts.values().sum::<usize>(), 54);
    }

    #[test]
    fn duplicate_centers_are_flagged_even_with_balanced_counts() {
        let mut cube = balanced_cube();
        // Swap the Up and Down centers' colors between two faces so counts
        // stay 9/9 but both centers read white.
        let mut up = *cube.get(Face::Up).unwrap();
        let mut down = *cube.get(Face::Down).unwrap();
        up.set(0, StickerColor::Yellow);
        down.set(CENTER_INDEX, StickerColor::White);
        down.set(0, StickerColor::Yellow);
        up.set(CENTER_INDEX, StickerColor::White);
        // Rebalance: up lost one white to yellow, down lost one yellow to
        // white; totals remain 9 each.
        cube.set(Face::Up, up);
        cube.set(Face::Down, down);

        let report = validate(&cube);
        assert!(!report.valid);
        assert!(report.violations.contains(&CubeViolation::DuplicateCenter {
            color: StickerColor::White,
            faces: vec![Face::Up, Face::Down]
        }));
        assert!(report
            .violations
            .contains(&CubeViolation::MissingCenter {
                color: StickerColor::Yellow
            }));
        assert_eq!(report.color_counts[&StickerColor::White], 9);
        assert_eq!(report.color_counts[&StickerColor::Yellow], 9);
    }

    #[test]
    fn all_checks_run_without_short_circuit() {
        let mut cube = CubeState::new();
        // Six faces, but all white: wrong counts, duplicate centers and
        // missing centers must all appear together.
        for face in Face::ALL {
            cube.set(face, FaceCapture::uniform(StickerColor::White));
        }
        let report = validate(&cube);
        assert!(!report.valid);
        assert!(report.violations.contains(&CubeViolation::WrongColorCount {
            color: StickerColor::White,
            got: 54
        }));
        assert!(report.violations.contains(&CubeViolation::WrongColorCount {
            color: StickerColor::Blue,
            got: 0
        }));
        assert!(report.violations.iter().any(|v| matches!(
            v,
            CubeViolation::DuplicateCenter {
                color: StickerColor::White,
                ..
            }
        )));
        assert!(report
            .violations
            .contains(&CubeViolation::MissingCenter {
                color: StickerColor::Green
            }));
    }

    #[test]
    fn validation_is_idempotent() {
        let cube = balanced_cube();
        let a = validate(&cube);
        let b = validate(&cube);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
