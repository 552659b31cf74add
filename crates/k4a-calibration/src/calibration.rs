//! Extrinsics between sensors are indexed by [`CalibrationType`].
use serde::{Deserialize, Serialize};

use crate::error::CalibrationError;
use crate::extrinsics::CalibrationExtrinsics;
use crate::intrinsics::CalibrationIntrinsics;
use crate::model::CalibrationModelType;
use crate::modes::{CalibrationType, ColorResolution, DepthMode, CALIBRATION_TYPE_NUM};

/// Calibration of a single camera.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraCalibration {
    /// Extrinsic calibration data.
    pub extrinsics: CalibrationExtrinsics,
    /// Intrinsic calibration data.
    pub intrinsics: CalibrationIntrinsics,
    /// Resolution width of the calibration sensor.
    pub resolution_width: i32,
    /// Resolution height of the calibration sensor.
    pub resolution_height: i32,
    /// Max FOV of the camera.
    pub metric_radius: f32,
}

impl CameraCalibration {
    /// Returns the lens distortion model of the camera.
    pub fn model_type(&self) -> CalibrationModelType {
        self.intrinsics.model_type
    }
}

/// Calibration of the depth and color cameras of a device, for a given pair
/// of sensor modes.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Depth camera calibration.
    pub depth_camera_calibration: CameraCalibration,
    /// Color camera calibration.
    pub color_camera_calibration: CameraCalibration,
    /// Extrinsic transforms indexed `[source][target]` by [`CalibrationType`].
    pub extrinsics: [[CalibrationExtrinsics; CALIBRATION_TYPE_NUM]; CALIBRATION_TYPE_NUM],
    /// Depth mode the calibration was obtained for.
    pub depth_mode: DepthMode,
    /// Color resolution the calibration was obtained for.
    pub color_resolution: ColorResolution,
}

impl Calibration {
    /// Returns the calibration of a camera, `None` for the IMU sensors.
    pub fn camera(&self, camera: CalibrationType) -> Option<&CameraCalibration> {
        match camera {
            CalibrationType::Depth => Some(&self.depth_camera_calibration),
            CalibrationType::Color => Some(&self.color_camera_calibration),
            CalibrationType::Gyro | CalibrationType::Accel => None,
        }
    }

    /// Returns the lens distortion model of a camera, `None` for the IMU sensors.
    pub fn model_type(&self, camera: CalibrationType) -> Option<CalibrationModelType> {
        self.camera(camera).map(CameraCalibration::model_type)
    }

    /// Check the intrinsics of both cameras.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        self.depth_camera_calibration.intrinsics.validate()?;
        self.color_camera_calibration.intrinsics.validate()
    }

    /// Returns the transform from `source` to `target`.
    pub fn extrinsics(&self, source: CalibrationType, target: CalibrationType) -> &CalibrationExtrinsics {
        &self.extrinsics[source.index()][target.index()]
    }
}
