//! Replay a recorded hand-tracking session through the gesture controls
//! and log the resulting pose.
//!
//! Usage: `handcam <recording.jsonl> [camera|object] [options.toml]`

use std::path::Path;
use std::process::ExitCode;

use glam::Vec3;
use handcam::camera::{Camera, CameraControls};
use handcam::frame::FrameRecording;
use handcam::object::{ObjectControls, SceneObject};
use handcam::options::Options;
use handcam::HandcamError;

/// Which controller the recording drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Camera,
    Object,
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(recording) = args.next() else {
        log::error!("Usage: handcam <recording.jsonl> [camera|object] [options.toml]");
        return ExitCode::FAILURE;
    };
    let mode = match args.next().as_deref() {
        None | Some("camera") => Mode::Camera,
        Some("object") => Mode::Object,
        Some(other) => {
            log::error!("Unknown mode '{other}' (expected camera or object)");
            return ExitCode::FAILURE;
        }
    };
    let options_path = args.next();

    match run(Path::new(&recording), mode, options_path.as_deref().map(Path::new)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    recording: &Path,
    mode: Mode,
    options_path: Option<&Path>,
) -> Result<(), HandcamError> {
    let options = match options_path {
        Some(path) => {
            let options = Options::load(path)?;
            log::info!("Loaded options from {}", path.display());
            options
        }
        None => Options::default(),
    };
    let recording = FrameRecording::load(recording)?;
    log::info!("Replaying {} frames in {mode:?} mode", recording.len());

    let mut camera = Camera {
        znear: 1.0,
        zfar: 5000.0,
        ..Camera::looking_at(Vec3::new(0.0, 0.0, 300.0), Vec3::ZERO)
    };

    match mode {
        Mode::Camera => {
            let mut controls = CameraControls::with_options(&camera, options.camera);
            for frame in recording.frames() {
                controls.update(frame, &mut camera);
            }
            log::info!(
                "Camera at {} looking at {}",
                camera.position,
                controls.target
            );
        }
        Mode::Object => {
            let mut object = SceneObject::default();
            let mut controls =
                ObjectControls::with_options(&camera, &object, options.object);
            for frame in recording.frames() {
                controls.update(frame, &camera, &mut object);
            }
            log::info!(
                "Object at {}, rotation {}, scale {}",
                object.position,
                object.rotation,
                object.scale
            );
        }
    }
    Ok(())
}
