use cube_scan::core::{notation_string, FaceCapture};
use cube_scan::{validate, CubeState, Face, StickerColor};

fn main() {
    env_logger::init();

    let mut cube = CubeState::new();
    for (face, color) in Face::ALL.into_iter().zip(StickerColor::KNOWN) {
        cube.set(face, FaceCapture::uniform(color));
    }

    // Break one sticker so the report has something to say.
    let mut front = *cube.get(Face::Front).unwrap();
    front.set(0, StickerColor::Unknown);
    cube.set(Face::Front, front);

    let report = validate(&cube);
    println!("valid: {}", report.valid);
    for message in report.messages() {
        println!("- {message}");
    }
    for (color, count) in &report.color_counts {
        println!("{color}: {count}");
    }

    match notation_string(&cube) {
        Ok(s) => println!("notation: {s}"),
        Err(e) => println!("no notation: {e}"),
    }
}
