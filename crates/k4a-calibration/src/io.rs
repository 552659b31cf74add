//! Lens distortion models are stored as their native integer codes; a blob
//! carrying an unrecognized code fails to decode.
use std::fs;
use std::path::Path;

use crate::calibration::Calibration;
use crate::error::CalibrationError;

impl Calibration {
    /// Decode a calibration from a JSON string.
    ///
    /// The decoded intrinsics are validated, so a blob declaring more
    /// parameters than the record holds is rejected.
    pub fn from_json_str(s: &str) -> Result<Self, CalibrationError> {
        let calibration: Self = serde_json::from_str(s)?;
        calibration.validate()?;
        Ok(calibration)
    }

    /// Encode the calibration as pretty printed JSON.
    pub fn to_json_string(&self) -> Result<String, CalibrationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads a calibration blob from a JSON file.
///
/// # Arguments
///
/// * `file_path` - The path to the JSON file.
///
/// # Returns
///
/// The decoded calibration.
pub fn read_calibration_json(file_path: impl AsRef<Path>) -> Result<Calibration, CalibrationError> {
    let file_path = file_path.as_ref().to_owned();

    if !file_path.exists() {
        return Err(CalibrationError::FileDoesNotExist(file_path));
    }

    let contents = fs::read_to_string(&file_path)?;
    let calibration = Calibration::from_json_str(&contents)?;

    log::debug!(
        "read calibration from {}: depth {}, color {}",
        file_path.display(),
        calibration.depth_camera_calibration.model_type(),
        calibration.color_camera_calibration.model_type()
    );

    Ok(calibration)
}

/// Writes a calibration blob to a JSON file.
///
/// # Arguments
///
/// * `file_path` - The path to the JSON file.
/// * `calibration` - The calibration to write.
pub fn write_calibration_json(
    file_path: impl AsRef<Path>,
    calibration: &Calibration,
) -> Result<(), CalibrationError> {
    fs::write(file_path, calibration.to_json_string()?)?;
    Ok(())
}
