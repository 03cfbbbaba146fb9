use cube_scan::classify::FaceDetectorParams;
use cube_scan::detect;

#[cfg(feature = "tracing")]
use cube_scan::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(false);
    #[cfg(not(feature = "tracing"))]
    cube_scan::core::init_with_level(log::LevelFilter::Debug)?;

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: detect_face <image_path>");
        return Ok(());
    };

    let img = image::ImageReader::open(path)?.decode()?.to_rgb8();
    let params = FaceDetectorParams::default();

    match detect::detect_face(&img, params) {
        Some(detection) => {
            for s in &detection.stickers {
                println!(
                    "({},{}) rgb=({},{},{}) h={:.1} s={:.1} v={:.1} -> {}",
                    s.row, s.col, s.rgb.r, s.rgb.g, s.rgb.b, s.hsv.h, s.hsv.s, s.hsv.v, s.color
                );
            }
            println!("{}", serde_json::to_string_pretty(&detection)?);
        }
        None => println!("no face detected (empty frame?)"),
    }

    Ok(())
}
