use argh::FromArgs;
use std::path::PathBuf;

use k4a_calibration::{model::NATIVE_TYPE_NAME, CalibrationModelType, CalibrationType};

#[derive(FromArgs)]
/// Inspect lens distortion models and calibration blobs
struct Args {
    /// native model code to decode
    #[argh(option, short = 'c')]
    code: Option<i32>,

    /// path to a calibration blob in JSON format
    #[argh(option, short = 'f')]
    calibration: Option<PathBuf>,

    /// print the table of known models
    #[argh(switch, short = 'l')]
    list: bool,
}

fn print_model(model: CalibrationModelType) {
    println!("{:>2}  {:<14} {}", model.code(), model.name(), model.native_name());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.list {
        println!("{NATIVE_TYPE_NAME}");
        CalibrationModelType::ALL.into_iter().for_each(print_model);
    }

    if let Some(code) = args.code {
        let model = CalibrationModelType::try_from(code)?;
        print_model(model);
    }

    if let Some(path) = args.calibration {
        log::info!("reading calibration from {}", path.display());
        let calibration = k4a_calibration::read_calibration_json(&path)?;

        println!(
            "depth mode: {:?}, color resolution: {:?}",
            calibration.depth_mode, calibration.color_resolution
        );

        for camera in [CalibrationType::Depth, CalibrationType::Color] {
            let Some(cam) = calibration.camera(camera) else {
                continue;
            };
            println!(
                "{camera:?}: {}x{} model {} ({}), {} parameters",
                cam.resolution_width,
                cam.resolution_height,
                cam.model_type(),
                cam.model_type().native_name(),
                cam.intrinsics.parameter_count
            );
            if cam.model_type() == CalibrationModelType::Unknown {
                log::warn!("{camera:?} camera has no distortion model");
            }
        }
    }

    Ok(())
}
