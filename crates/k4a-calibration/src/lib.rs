#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Example: decoding a native model code
//!
//! ```rust
//! use k4a_calibration::CalibrationModelType;
//!
//! let model = CalibrationModelType::try_from(4i32).unwrap();
//! assert_eq!(model, CalibrationModelType::BrownConrady);
//! assert_eq!(model.native_name(), "K4A_CALIBRATION_LENS_DISTORTION_MODEL_BROWN_CONRADY");
//! assert!(CalibrationModelType::try_from(99i32).is_err());
//! ```

/// Calibration records for the depth and color cameras.
pub mod calibration;

/// Error types for the calibration module.
pub mod error;

/// Camera extrinsic parameters.
pub mod extrinsics;

/// Camera intrinsic parameters.
pub mod intrinsics;

/// Reading and writing calibration blobs as JSON.
pub mod io;

/// Lens distortion model identifiers.
pub mod model;

/// Sensor modes and calibration types.
pub mod modes;

/// Conversion of vendor camera parameters into a calibration.
pub mod vendor;

pub use crate::calibration::{Calibration, CameraCalibration};
pub use crate::error::CalibrationError;
pub use crate::extrinsics::CalibrationExtrinsics;
pub use crate::intrinsics::{CalibrationIntrinsics, IntrinsicParameters};
pub use crate::io::{read_calibration_json, write_calibration_json};
pub use crate::model::CalibrationModelType;
pub use crate::modes::{CalibrationType, ColorResolution, DepthMode};
pub use crate::vendor::{calibration_from_vendor, VendorCameraParam};
