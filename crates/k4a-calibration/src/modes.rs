//! The calibration record is keyed on these; each decodes from its native
//! integer code and rejects unknown codes.
use serde::{Deserialize, Serialize};

use crate::error::CalibrationError;

/// Depth sensor capture modes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum DepthMode {
    /// Depth sensor is turned off.
    #[default]
    Off = 0,
    /// Narrow field of view, 2x2 binned.
    Nfov2x2Binned = 1,
    /// Narrow field of view, unbinned.
    NfovUnbinned = 2,
    /// Wide field of view, 2x2 binned.
    Wfov2x2Binned = 3,
    /// Wide field of view, unbinned.
    WfovUnbinned = 4,
    /// Passive infrared only.
    PassiveIr = 5,
}

impl DepthMode {
    /// All depth modes, ordered by native code.
    pub const ALL: [Self; 6] = [
        Self::Off,
        Self::Nfov2x2Binned,
        Self::NfovUnbinned,
        Self::Wfov2x2Binned,
        Self::WfovUnbinned,
        Self::PassiveIr,
    ];

    /// Returns the native integer code.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns whether the depth sensor is disabled.
    pub fn is_off(self) -> bool {
        self == Self::Off
    }

    /// Returns the nominal `(width, height)` of the depth image, `None` when off.
    pub fn resolution(self) -> Option<(u32, u32)> {
        match self {
            Self::Off => None,
            Self::Nfov2x2Binned => Some((320, 288)),
            Self::NfovUnbinned => Some((640, 576)),
            Self::Wfov2x2Binned => Some((512, 512)),
            Self::WfovUnbinned | Self::PassiveIr => Some((1024, 1024)),
        }
    }
}

impl From<DepthMode> for i32 {
    fn from(value: DepthMode) -> Self {
        value.code()
    }
}

impl TryFrom<i32> for DepthMode {
    type Error = CalibrationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(CalibrationError::UnrecognizedDepthMode(value as i64))
    }
}

/// Color sensor resolutions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum ColorResolution {
    /// Color camera is turned off.
    #[default]
    Off = 0,
    /// 1280x720, 16:9.
    R720p = 1,
    /// 1920x1080, 16:9.
    R1080p = 2,
    /// 2560x1440, 16:9.
    R1440p = 3,
    /// 2048x1536, 4:3.
    R1536p = 4,
    /// 3840x2160, 16:9.
    R2160p = 5,
    /// 4096x3072, 4:3.
    R3072p = 6,
}

impl ColorResolution {
    /// All color resolutions, ordered by native code.
    pub const ALL: [Self; 7] = [
        Self::Off,
        Self::R720p,
        Self::R1080p,
        Self::R1440p,
        Self::R1536p,
        Self::R2160p,
        Self::R3072p,
    ];

    /// Returns the native integer code.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns whether the color camera is disabled.
    pub fn is_off(self) -> bool {
        self == Self::Off
    }

    /// Returns the nominal `(width, height)` of the color image, `None` when off.
    pub fn resolution(self) -> Option<(u32, u32)> {
        match self {
            Self::Off => None,
            Self::R720p => Some((1280, 720)),
            Self::R1080p => Some((1920, 1080)),
            Self::R1440p => Some((2560, 1440)),
            Self::R1536p => Some((2048, 1536)),
            Self::R2160p => Some((3840, 2160)),
            Self::R3072p => Some((4096, 3072)),
        }
    }
}

impl From<ColorResolution> for i32 {
    fn from(value: ColorResolution) -> Self {
        value.code()
    }
}

impl TryFrom<i32> for ColorResolution {
    type Error = CalibrationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(CalibrationError::UnrecognizedColorResolution(value as i64))
    }
}

/// Number of calibration types, i.e. the side of the extrinsics table.
pub const CALIBRATION_TYPE_NUM: usize = 4;

/// Sensors a calibration can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum CalibrationType {
    /// Depth sensor.
    Depth = 0,
    /// Color sensor.
    Color = 1,
    /// Gyroscope sensor.
    Gyro = 2,
    /// Accelerometer sensor.
    Accel = 3,
}

impl CalibrationType {
    /// All calibration types, ordered by native code.
    pub const ALL: [Self; CALIBRATION_TYPE_NUM] =
        [Self::Depth, Self::Color, Self::Gyro, Self::Accel];

    /// Returns the native integer code.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns the index of this type into the extrinsics table.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<CalibrationType> for i32 {
    fn from(value: CalibrationType) -> Self {
        value.code()
    }
}

impl TryFrom<i32> for CalibrationType {
    type Error = CalibrationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(CalibrationError::UnrecognizedCalibrationType(value as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_mode_codes() -> Result<(), CalibrationError> {
        for (idx, mode) in DepthMode::ALL.iter().enumerate() {
            assert_eq!(mode.code() as usize, idx);
            assert_eq!(DepthMode::try_from(mode.code())?, *mode);
        }
        assert!(DepthMode::try_from(6).is_err());
        assert!(DepthMode::try_from(-1).is_err());
        Ok(())
    }

    #[test]
    fn test_color_resolution_codes() -> Result<(), CalibrationError> {
        for (idx, res) in ColorResolution::ALL.iter().enumerate() {
            assert_eq!(res.code() as usize, idx);
            assert_eq!(ColorResolution::try_from(res.code())?, *res);
        }
        assert!(matches!(
            ColorResolution::try_from(7),
            Err(CalibrationError::UnrecognizedColorResolution(7))
        ));
        Ok(())
    }

    #[test]
    fn test_resolutions() {
        assert_eq!(DepthMode::Off.resolution(), None);
        assert_eq!(DepthMode::NfovUnbinned.resolution(), Some((640, 576)));
        assert_eq!(DepthMode::PassiveIr.resolution(), Some((1024, 1024)));
        assert_eq!(ColorResolution::Off.resolution(), None);
        assert_eq!(ColorResolution::R1536p.resolution(), Some((2048, 1536)));
        assert!(DepthMode::Off.is_off());
        assert!(!ColorResolution::R720p.is_off());
    }

    #[test]
    fn test_calibration_type() -> Result<(), CalibrationError> {
        assert_eq!(CalibrationType::ALL.len(), CALIBRATION_TYPE_NUM);
        assert_eq!(CalibrationType::Accel.index(), 3);
        assert_eq!(CalibrationType::try_from(1)?, CalibrationType::Color);
        assert!(CalibrationType::try_from(4).is_err());
        Ok(())
    }
}
