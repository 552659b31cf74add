//! Parameters are stored in the order of the native record, up to
//! [`INTRINSIC_PARAMETER_COUNT`] values.
use serde::{Deserialize, Serialize};

use crate::error::CalibrationError;
use crate::model::CalibrationModelType;

/// Number of slots in the intrinsic parameter record.
pub const INTRINSIC_PARAMETER_COUNT: usize = 15;

/// Parameter count reported for Brown-Conrady intrinsics populated from the
/// vendor camera parameters.
pub const BROWN_CONRADY_PARAMETER_COUNT: u32 = 14;

/// Represents the intrinsic parameters of a camera.
///
/// The field order matches the native record, so [`IntrinsicParameters::to_array`]
/// yields the values in the order the native library stores them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicParameters {
    /// Principal point in image, x
    pub cx: f32,
    /// Principal point in image, y
    pub cy: f32,
    /// Focal length x
    pub fx: f32,
    /// Focal length y
    pub fy: f32,
    /// k1 radial distortion coefficient
    pub k1: f32,
    /// k2 radial distortion coefficient
    pub k2: f32,
    /// k3 radial distortion coefficient
    pub k3: f32,
    /// k4 radial distortion coefficient
    pub k4: f32,
    /// k5 radial distortion coefficient
    pub k5: f32,
    /// k6 radial distortion coefficient
    pub k6: f32,
    /// Center of distortion in Z=1 plane, x (only used for Rational6KT)
    pub codx: f32,
    /// Center of distortion in Z=1 plane, y (only used for Rational6KT)
    pub cody: f32,
    /// Tangential distortion coefficient 2
    pub p2: f32,
    /// Tangential distortion coefficient 1
    pub p1: f32,
    /// Metric radius
    pub metric_radius: f32,
}

impl IntrinsicParameters {
    /// Returns the parameters in native order.
    pub fn to_array(&self) -> [f32; INTRINSIC_PARAMETER_COUNT] {
        [
            self.cx,
            self.cy,
            self.fx,
            self.fy,
            self.k1,
            self.k2,
            self.k3,
            self.k4,
            self.k5,
            self.k6,
            self.codx,
            self.cody,
            self.p2,
            self.p1,
            self.metric_radius,
        ]
    }

    /// Builds the parameters from values in native order.
    pub fn from_array(v: [f32; INTRINSIC_PARAMETER_COUNT]) -> Self {
        let [cx, cy, fx, fy, k1, k2, k3, k4, k5, k6, codx, cody, p2, p1, metric_radius] = v;
        Self {
            cx,
            cy,
            fx,
            fy,
            k1,
            k2,
            k3,
            k4,
            k5,
            k6,
            codx,
            cody,
            p2,
            p1,
            metric_radius,
        }
    }

    /// Builds the parameters from a prefix of the native order.
    ///
    /// Missing trailing values are zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::TooManyParameters`] if `values` holds more
    /// than [`INTRINSIC_PARAMETER_COUNT`] entries.
    pub fn from_slice(values: &[f32]) -> Result<Self, CalibrationError> {
        if values.len() > INTRINSIC_PARAMETER_COUNT {
            return Err(CalibrationError::TooManyParameters(values.len()));
        }
        let mut v = [0.0; INTRINSIC_PARAMETER_COUNT];
        v[..values.len()].copy_from_slice(values);
        Ok(Self::from_array(v))
    }
}

/// Camera intrinsic calibration data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationIntrinsics {
    /// Type of calibration model used.
    #[serde(rename = "type")]
    pub model_type: CalibrationModelType,
    /// Number of valid entries in `parameters`.
    pub parameter_count: u32,
    /// Calibration parameters.
    pub parameters: IntrinsicParameters,
}

impl CalibrationIntrinsics {
    /// Create intrinsics for a model, using the parameter count the model is
    /// populated with.
    pub fn new(model_type: CalibrationModelType, parameters: IntrinsicParameters) -> Self {
        let parameter_count = match model_type {
            CalibrationModelType::BrownConrady => BROWN_CONRADY_PARAMETER_COUNT,
            _ => INTRINSIC_PARAMETER_COUNT as u32,
        };
        Self {
            model_type,
            parameter_count,
            parameters,
        }
    }

    /// Create intrinsics from raw values as they come across the native boundary.
    ///
    /// # Arguments
    ///
    /// * `model_code` - The native lens distortion model code.
    /// * `parameter_count` - Number of valid parameters.
    /// * `values` - The parameters in native order.
    pub fn from_raw(
        model_code: i32,
        parameter_count: u32,
        values: &[f32],
    ) -> Result<Self, CalibrationError> {
        let intrinsics = Self {
            model_type: CalibrationModelType::try_from(model_code)?,
            parameter_count,
            parameters: IntrinsicParameters::from_slice(values)?,
        };
        intrinsics.validate()?;
        Ok(intrinsics)
    }

    /// Check the parameter count fits in the parameter record.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if self.parameter_count as usize > INTRINSIC_PARAMETER_COUNT {
            return Err(CalibrationError::InvalidParameterCount(self.parameter_count));
        }
        Ok(())
    }

    /// Returns the valid prefix of the parameters in native order.
    pub fn valid_parameters(&self) -> Vec<f32> {
        let count = (self.parameter_count as usize).min(INTRINSIC_PARAMETER_COUNT);
        self.parameters.to_array()[..count].to_vec()
    }
}
