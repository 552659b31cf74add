use crate::modes::{ColorResolution, DepthMode};

/// An error type for the calibration module.
#[derive(thiserror::Error, Debug)]
pub enum CalibrationError {
    /// The integer code does not name a lens distortion model.
    #[error("Unrecognized calibration model code: {0}")]
    UnrecognizedModelCode(i64),

    /// The name does not match any lens distortion model.
    #[error("Unrecognized calibration model name: {0}")]
    UnrecognizedModelName(String),

    /// The integer code does not name a depth mode.
    #[error("Unrecognized depth mode code: {0}")]
    UnrecognizedDepthMode(i64),

    /// The integer code does not name a color resolution.
    #[error("Unrecognized color resolution code: {0}")]
    UnrecognizedColorResolution(i64),

    /// The depth mode has no depth camera calibration.
    #[error("Unsupported depth mode for calibration: {0:?}")]
    UnsupportedDepthMode(DepthMode),

    /// The integer code does not name a calibration type.
    #[error("Unrecognized calibration type code: {0}")]
    UnrecognizedCalibrationType(i64),

    /// The intrinsics declare more parameters than the record can hold.
    #[error("Invalid intrinsic parameter count: {0} (max {max})", max = crate::intrinsics::INTRINSIC_PARAMETER_COUNT)]
    InvalidParameterCount(u32),

    /// Too many values were supplied to build the intrinsic parameters.
    #[error("Too many intrinsic parameter values: {0} (max {max})", max = crate::intrinsics::INTRINSIC_PARAMETER_COUNT)]
    TooManyParameters(usize),

    /// No vendor camera parameter matches the requested modes.
    #[error("No camera parameter matches depth mode {depth_mode:?} and color resolution {color_resolution:?}")]
    NoMatchingCameraParam {
        /// The requested depth mode.
        depth_mode: DepthMode,
        /// The requested color resolution.
        color_resolution: ColorResolution,
    },

    /// The vendor intrinsics report a zero width or height.
    #[error("Invalid vendor camera resolution: {0}x{1}")]
    InvalidVendorResolution(u32, u32),

    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    Io(#[from] std::io::Error),

    /// Error to encode or decode the calibration blob.
    #[error("Failed to (de)serialize the calibration. {0}")]
    Json(#[from] serde_json::Error),
}
