//! End-to-end capture pipeline over synthetic frames.

use cube_scan::classify::{FaceDetector, FaceDetectorParams};
use cube_scan::core::{notation_string, Rect, Rgb, RgbImage};
use cube_scan::validate::{validate_face, CubeViolation};
use cube_scan::{CaptureSession, Face, StickerColor};

const FRAME_SIDE: usize = 240;

fn rgb_for(color: StickerColor) -> Rgb {
    match color {
        StickerColor::White => Rgb::new(245, 245, 245),
        StickerColor::Yellow => Rgb::new(230, 225, 30),
        StickerColor::Red => Rgb::new(210, 25, 30),
        StickerColor::Orange => Rgb::new(240, 130, 25),
        StickerColor::Green => Rgb::new(25, 190, 60),
        StickerColor::Blue => Rgb::new(25, 60, 210),
        StickerColor::Unknown => Rgb::new(40, 40, 40),
    }
}

/// Render a synthetic webcam frame showing a solid face of `color`.
fn solid_face_frame(color: StickerColor) -> RgbImage {
    let mut img = RgbImage::filled(FRAME_SIDE, FRAME_SIDE, Rgb::new(15, 15, 15));
    // Cover the detector's whole sampling region generously.
    img.fill_rect(
        Rect::new(FRAME_SIDE / 8, FRAME_SIDE / 8, FRAME_SIDE * 3 / 4, FRAME_SIDE * 3 / 4),
        rgb_for(color),
    );
    img
}

#[test]
fn six_synthetic_frames_assemble_a_valid_cube() {
    let detector = FaceDetector::new(FaceDetectorParams::default());
    let mut session = CaptureSession::new();

    for (face, color) in Face::ALL.into_iter().zip(StickerColor::KNOWN) {
        let frame = solid_face_frame(color);
        let detection = detector.detect(&frame.view()).expect("face detected");
        let capture = detection.capture();

        let face_report = validate_face(capture.stickers());
        assert!(face_report.valid, "face {face}: {:?}", face_report.issues);

        session.record(face, capture).unwrap();
    }

    assert!(session.is_complete());
    let report = session.validate();
    assert!(report.valid, "violations: {:?}", report.messages());
    for color in StickerColor::KNOWN {
        assert_eq!(report.color_counts[&color], 9);
    }

    let state = session.into_state();
    let notation = notation_string(&state).expect("complete cube");
    assert_eq!(notation.len(), 54);
    assert_eq!(&notation[..9], "UUUUUUUUU");
}

#[test]
fn recapture_after_undo_replaces_the_last_face() {
    let detector = FaceDetector::new(FaceDetectorParams::default());
    let mut session = CaptureSession::new();

    let white = detector
        .detect(&solid_face_frame(StickerColor::White).view())
        .unwrap()
        .capture();
    let green = detector
        .detect(&solid_face_frame(StickerColor::Green).view())
        .unwrap()
        .capture();

    session.record(Face::Up, white).unwrap();
    assert_eq!(session.undo(), Ok(Face::Up));
    session.record(Face::Up, green).unwrap();
    assert_eq!(
        session.state().get(Face::Up).unwrap().center(),
        StickerColor::Green
    );
}

#[test]
fn shared_center_color_across_frames_is_caught_at_validation() {
    let detector = FaceDetector::new(FaceDetectorParams::default());
    let mut session = CaptureSession::new();

    // Two white faces, then the remaining four known colors: counts end up
    // unbalanced and the white center is duplicated.
    let colors = [
        StickerColor::White,
        StickerColor::White,
        StickerColor::Red,
        StickerColor::Orange,
        StickerColor::Green,
        StickerColor::Blue,
    ];
    for (face, color) in Face::ALL.into_iter().zip(colors) {
        let capture = detector
            .detect(&solid_face_frame(color).view())
            .unwrap()
            .capture();
        session.record(face, capture).unwrap();
    }

    let report = session.validate();
    assert!(!report.valid);
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
            color: StickerColor::Yellow
        }));
    assert_eq!(report.color_counts[&StickerColor::White], 18);
}
