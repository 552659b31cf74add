//! Each model carries a stable native integer code and the name of the native
//! constant it is matched against.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalibrationError;

/// Name of the native enumeration the model codes are matched against.
pub const NATIVE_TYPE_NAME: &str = "k4a_calibration_model_type_t";

/// The model used to interpret the calibration parameters.
///
/// The discriminants are the native integer codes and must not change: the
/// value crosses the native boundary as a raw integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum CalibrationModelType {
    /// Calibration model is unknown.
    #[default]
    Unknown = 0,
    /// Calibration model is Theta (arctan).
    Theta = 1,
    /// Calibration model is Polynomial 3K.
    Polynomial3K = 2,
    /// Calibration model is Rational 6KT.
    Rational6KT = 3,
    /// Calibration model is Brown Conrady.
    BrownConrady = 4,
}

struct ModelEntry {
    model: CalibrationModelType,
    name: &'static str,
    native_name: &'static str,
}

// indexed by native code
const MODEL_TABLE: [ModelEntry; CalibrationModelType::COUNT] = [
    ModelEntry {
        model: CalibrationModelType::Unknown,
        name: "unknown",
        native_name: "K4A_CALIBRATION_LENS_DISTORTION_MODEL_UNKNOWN",
    },
    ModelEntry {
        model: CalibrationModelType::Theta,
        name: "theta",
        native_name: "K4A_CALIBRATION_LENS_DISTORTION_MODEL_THETA",
    },
    ModelEntry {
        model: CalibrationModelType::Polynomial3K,
        name: "polynomial_3k",
        native_name: "K4A_CALIBRATION_LENS_DISTORTION_MODEL_POLYNOMIAL_3K",
    },
    ModelEntry {
        model: CalibrationModelType::Rational6KT,
        name: "rational_6kt",
        native_name: "K4A_CALIBRATION_LENS_DISTORTION_MODEL_RATIONAL_6KT",
    },
    ModelEntry {
        model: CalibrationModelType::BrownConrady,
        name: "brown_conrady",
        native_name: "K4A_CALIBRATION_LENS_DISTORTION_MODEL_BROWN_CONRADY",
    },
];

impl CalibrationModelType {
    /// The number of recognized models.
    pub const COUNT: usize = 5;

    /// All models, ordered by native code.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Unknown,
        Self::Theta,
        Self::Polynomial3K,
        Self::Rational6KT,
        Self::BrownConrady,
    ];

    /// Returns the native integer code of the model.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Decodes a native integer code.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::UnrecognizedModelCode`] for any value
    /// outside `0..=4`.
    pub fn from_code(code: i32) -> Result<Self, CalibrationError> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| MODEL_TABLE.get(idx))
            .map(|entry| entry.model)
            .ok_or(CalibrationError::UnrecognizedModelCode(code as i64))
    }

    /// Returns the short snake case name of the model, e.g. `brown_conrady`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Returns the native constant name, e.g.
    /// `K4A_CALIBRATION_LENS_DISTORTION_MODEL_BROWN_CONRADY`.
    pub fn native_name(self) -> &'static str {
        self.entry().native_name
    }

    /// Looks up a model by its native constant name.
    pub fn from_native_name(name: &str) -> Result<Self, CalibrationError> {
        MODEL_TABLE
            .iter()
            .find(|entry| entry.native_name == name)
            .map(|entry| entry.model)
            .ok_or_else(|| CalibrationError::UnrecognizedModelName(name.to_string()))
    }

    fn entry(self) -> &'static ModelEntry {
        &MODEL_TABLE[self as usize]
    }
}

impl fmt::Display for CalibrationModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalibrationModelType {
    type Err = CalibrationError;

    /// Accepts the short name (case insensitive) or the native constant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODEL_TABLE
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(s) || entry.native_name == s)
            .map(|entry| entry.model)
            .ok_or_else(|| CalibrationError::UnrecognizedModelName(s.to_string()))
    }
}

impl From<CalibrationModelType> for i32 {
    fn from(value: CalibrationModelType) -> Self {
        value.code()
    }
}

impl From<CalibrationModelType> for u32 {
    fn from(value: CalibrationModelType) -> Self {
        value.code() as u32
    }
}

impl TryFrom<i32> for CalibrationModelType {
    type Error = CalibrationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl TryFrom<u32> for CalibrationModelType {
    type Error = CalibrationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map_err(|_| CalibrationError::UnrecognizedModelCode(value as i64))
            .and_then(Self::from_code)
    }
}

impl TryFrom<i64> for CalibrationModelType {
    type Error = CalibrationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map_err(|_| CalibrationError::UnrecognizedModelCode(value))
            .and_then(Self::from_code)
    }
}
