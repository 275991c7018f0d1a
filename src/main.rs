//! Minimal command-line host for the annotation engine: loads a background
//! image, runs a scripted set of annotations and writes the composed PNG.
//! Stands in for the interactive host UI, which supplies the image source
//! and frame size the same way.

use std::path::PathBuf;
use std::process::ExitCode;

use egui::Color32;
use log::warn;

use caption_canvas::{Command, EXPORT_FILE_NAME, ImageSource, Session, ShapeKind, util};

const FRAME_WIDTH: u32 = 800;
const FRAME_HEIGHT: u32 = 600;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!("usage: caption_canvas <image> [output.png] [#fill-color]");
        return ExitCode::FAILURE;
    };
    let output = args.next().unwrap_or_else(|| EXPORT_FILE_NAME.to_owned());
    let fill = args
        .next()
        .and_then(|s| util::color::parse_hex(&s))
        .unwrap_or(Color32::RED);

    match run(PathBuf::from(image_path), PathBuf::from(output), fill) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(image: PathBuf, output: PathBuf, fill: Color32) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(FRAME_WIDTH, FRAME_HEIGHT)?;

    // A failed load is a diagnostic, not a fatal error: the session stays
    // usable against an empty frame.
    if let Err(err) = session.load_background(&ImageSource::Path(image)) {
        warn!("background load failed: {err}");
    }

    let script = [
        Command::AddText,
        Command::AddShape(ShapeKind::Circle),
        Command::ApplyFill(fill),
    ];
    for command in script {
        command.apply(&mut session)?;
    }

    let png = session.export()?;
    std::fs::write(&output, &png)?;
    println!("wrote {} ({} bytes)", output.display(), png.len());

    println!(
        "{}",
        serde_json::to_string_pretty(&session.log().snapshot())?
    );

    session.dispose();
    Ok(())
}
