//! Rotation is row major and translation is in millimeters.
use serde::{Deserialize, Serialize};

/// Represents the extrinsic parameters of a camera.
///
/// # Fields
///
/// * `rotation` - The rotation matrix 3x3, row major
/// * `translation` - The translation vector 3x1, in millimeters
///
/// The default value is all zeros, as the native record is before it is populated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationExtrinsics {
    /// The rotation matrix 3x3, row major
    pub rotation: [f32; 9],
    /// The translation vector 3x1, in millimeters
    pub translation: [f32; 3],
}

impl CalibrationExtrinsics {
    /// Create extrinsics from a rotation and a translation.
    pub fn new(rotation: [f32; 9], translation: [f32; 3]) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            rotation: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            translation: [0.0; 3],
        }
    }

    /// Check whether this is exactly the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns the rotation as a 3x3 matrix.
    pub fn rotation_matrix(&self) -> [[f32; 3]; 3] {
        let r = &self.rotation;
        [[r[0], r[1], r[2]], [r[3], r[4], r[5]], [r[6], r[7], r[8]]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let ext = CalibrationExtrinsics::identity();
        assert!(ext.is_identity());
        assert_eq!(
            ext.rotation_matrix(),
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert!(!CalibrationExtrinsics::default().is_identity());
    }
}
