//! The vendor SDK reports one parameter set per supported resolution pair.
//! A set is selected by matching the aspect ratio of the requested sensor
//! modes, then rescaled to the nominal resolution of those modes.
//!
//! Only the four depth field-of-view modes carry a depth calibration, so a
//! depth mode of [`DepthMode::Off`] or [`DepthMode::PassiveIr`] is rejected.
use serde::{Deserialize, Serialize};

use crate::calibration::{Calibration, CameraCalibration};
use crate::error::CalibrationError;
use crate::extrinsics::CalibrationExtrinsics;
use crate::intrinsics::{CalibrationIntrinsics, IntrinsicParameters};
use crate::model::CalibrationModelType;
use crate::modes::{ColorResolution, DepthMode, CALIBRATION_TYPE_NUM};

/// Pinhole intrinsics as reported by the vendor SDK.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VendorIntrinsic {
    /// Focal length in the x direction
    pub fx: f32,
    /// Focal length in the y direction
    pub fy: f32,
    /// The x coordinate of the principal point
    pub cx: f32,
    /// The y coordinate of the principal point
    pub cy: f32,
    /// Image width the intrinsics were measured at
    pub width: u32,
    /// Image height the intrinsics were measured at
    pub height: u32,
}

/// Distortion coefficients as reported by the vendor SDK.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VendorDistortion {
    /// The first radial distortion coefficient
    pub k1: f32,
    /// The second radial distortion coefficient
    pub k2: f32,
    /// The third radial distortion coefficient
    pub k3: f32,
    /// The fourth radial distortion coefficient
    pub k4: f32,
    /// The fifth radial distortion coefficient
    pub k5: f32,
    /// The sixth radial distortion coefficient
    pub k6: f32,
    /// The first tangential distortion coefficient
    pub p1: f32,
    /// The second tangential distortion coefficient
    pub p2: f32,
}

/// Depth to color transform as reported by the vendor SDK.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VendorTransform {
    /// Rotation matrix 3x3, row major
    pub rot: [f32; 9],
    /// Translation vector, in millimeters
    pub trans: [f32; 3],
}

impl From<VendorTransform> for CalibrationExtrinsics {
    fn from(value: VendorTransform) -> Self {
        CalibrationExtrinsics::new(value.rot, value.trans)
    }
}

/// One vendor parameter set for a depth/color resolution pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VendorCameraParam {
    /// Depth camera intrinsics
    pub depth_intrinsic: VendorIntrinsic,
    /// Color camera intrinsics
    pub rgb_intrinsic: VendorIntrinsic,
    /// Depth camera distortion
    pub depth_distortion: VendorDistortion,
    /// Color camera distortion
    pub rgb_distortion: VendorDistortion,
    /// Depth to color transform
    pub transform: VendorTransform,
}

fn same_aspect(intrinsic: &VendorIntrinsic, (width, height): (u32, u32)) -> bool {
    intrinsic.width as u64 * height as u64 == width as u64 * intrinsic.height as u64
}

/// Returns the depth resolution a vendor calibration is produced for.
///
/// # Errors
///
/// Returns [`CalibrationError::UnsupportedDepthMode`] for [`DepthMode::Off`] and
/// [`DepthMode::PassiveIr`].
fn depth_calibration_resolution(depth_mode: DepthMode) -> Result<(u32, u32), CalibrationError> {
    match depth_mode {
        DepthMode::Off | DepthMode::PassiveIr => {
            log::warn!("no depth calibration for {depth_mode:?}");
            Err(CalibrationError::UnsupportedDepthMode(depth_mode))
        }
        _ => depth_mode
            .resolution()
            .ok_or(CalibrationError::UnsupportedDepthMode(depth_mode)),
    }
}

impl VendorCameraParam {
    fn matches(&self, depth: (u32, u32), color: Option<(u32, u32)>) -> bool {
        same_aspect(&self.depth_intrinsic, depth)
            && color.map_or(true, |color| same_aspect(&self.rgb_intrinsic, color))
    }
}

/// Select the first parameter set whose aspect ratios match the requested modes.
///
/// The depth aspect ratio must always match; the color aspect ratio is checked
/// too when the color camera is enabled.
///
/// # Errors
///
/// Returns [`CalibrationError::UnsupportedDepthMode`] if the depth mode has no
/// calibration and [`CalibrationError::NoMatchingCameraParam`] if no set matches.
pub fn select_camera_param(
    params: &[VendorCameraParam],
    depth_mode: DepthMode,
    color_resolution: ColorResolution,
) -> Result<&VendorCameraParam, CalibrationError> {
    let depth = depth_calibration_resolution(depth_mode)?;
    let color = color_resolution.resolution();

    let found = params.iter().position(|param| param.matches(depth, color));

    match found {
        Some(idx) => {
            log::debug!(
                "selected camera param {idx}/{} for {depth_mode:?}, {color_resolution:?}",
                params.len()
            );
            Ok(&params[idx])
        }
        None => {
            log::warn!(
                "no camera param matches {depth_mode:?}, {color_resolution:?} among {} candidates",
                params.len()
            );
            Err(CalibrationError::NoMatchingCameraParam {
                depth_mode,
                color_resolution,
            })
        }
    }
}

fn scaled_camera(
    intrinsic: &VendorIntrinsic,
    distortion: &VendorDistortion,
    (width, height): (u32, u32),
    extrinsics: CalibrationExtrinsics,
) -> Result<CameraCalibration, CalibrationError> {
    if intrinsic.width == 0 || intrinsic.height == 0 {
        return Err(CalibrationError::InvalidVendorResolution(
            intrinsic.width,
            intrinsic.height,
        ));
    }

    let factor = width as f32 / intrinsic.width as f32;

    // the vendor model only carries k1..k3, so the rational terms stay zero
    let parameters = IntrinsicParameters {
        fx: intrinsic.fx * factor,
        fy: intrinsic.fy * factor,
        cx: intrinsic.cx * factor,
        cy: intrinsic.cy * factor,
        k1: distortion.k1,
        k2: distortion.k2,
        k3: distortion.k3,
        p1: distortion.p1,
        p2: distortion.p2,
        ..Default::default()
    };

    Ok(CameraCalibration {
        extrinsics,
        intrinsics: CalibrationIntrinsics::new(CalibrationModelType::BrownConrady, parameters),
        resolution_width: width as i32,
        resolution_height: height as i32,
        metric_radius: 0.0,
    })
}

/// Build a calibration from one vendor parameter set.
///
/// Enabled cameras get Brown-Conrady intrinsics rescaled to the nominal
/// resolution of their mode. A disabled color camera stays zeroed. The depth camera
/// extrinsics are the identity, the color camera extrinsics and every entry
/// of the extrinsics table are the vendor depth to color transform.
pub fn build_calibration(
    param: &VendorCameraParam,
    depth_mode: DepthMode,
    color_resolution: ColorResolution,
) -> Result<Calibration, CalibrationError> {
    let depth_resolution = depth_calibration_resolution(depth_mode)?;
    let transform = CalibrationExtrinsics::from(param.transform);

    let mut calibration = Calibration {
        depth_mode,
        color_resolution,
        extrinsics: [[transform; CALIBRATION_TYPE_NUM]; CALIBRATION_TYPE_NUM],
        ..Default::default()
    };

    calibration.depth_camera_calibration = scaled_camera(
        &param.depth_intrinsic,
        &param.depth_distortion,
        depth_resolution,
        CalibrationExtrinsics::identity(),
    )?;

    if let Some(resolution) = color_resolution.resolution() {
        calibration.color_camera_calibration = scaled_camera(
            &param.rgb_intrinsic,
            &param.rgb_distortion,
            resolution,
            transform,
        )?;
    }

    log::debug!("built calibration for {depth_mode:?}, {color_resolution:?}");

    Ok(calibration)
}

/// Select the matching parameter set and build the calibration from it.
pub fn calibration_from_vendor(
    params: &[VendorCameraParam],
    depth_mode: DepthMode,
    color_resolution: ColorResolution,
) -> Result<Calibration, CalibrationError> {
    let param = select_camera_param(params, depth_mode, color_resolution)?;
    build_calibration(param, depth_mode, color_resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::CalibrationType;
    use approx::assert_relative_eq;

    fn vendor_param(depth: (u32, u32), color: (u32, u32)) -> VendorCameraParam {
        VendorCameraParam {
            depth_intrinsic: VendorIntrinsic {
                fx: 252.0,
                fy: 252.5,
                cx: 160.0,
                cy: 144.0,
                width: depth.0,
                height: depth.1,
            },
            rgb_intrinsic: VendorIntrinsic {
                fx: 600.0,
                fy: 601.0,
                cx: 640.0,
                cy: 360.0,
                width: color.0,
                height: color.1,
            },
            depth_distortion: VendorDistortion {
                k1: 0.1,
                k2: -0.02,
                k3: 0.003,
                k4: 0.5,
                k5: 0.6,
                k6: 0.7,
                p1: 0.0001,
                p2: -0.0002,
            },
            rgb_distortion: VendorDistortion {
                k1: 0.05,
                ..Default::default()
            },
            transform: VendorTransform {
                rot: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
                trans: [-32.0, -1.5, 4.0],
            },
        }
    }

    #[test]
    fn test_select_by_aspect() -> Result<(), CalibrationError> {
        let params = [
            vendor_param((512, 512), (1280, 720)),
            vendor_param((320, 288), (1280, 720)),
            vendor_param((320, 288), (1024, 768)),
        ];

        let selected = select_camera_param(&params, DepthMode::NfovUnbinned, ColorResolution::R720p)?;
        assert_eq!(selected, &params[1]);

        let selected = select_camera_param(&params, DepthMode::NfovUnbinned, ColorResolution::R1536p)?;
        assert_eq!(selected, &params[2]);

        let selected = select_camera_param(&params, DepthMode::Nfov2x2Binned, ColorResolution::R3072p)?;
        assert_eq!(selected, &params[2]);

        let selected = select_camera_param(&params, DepthMode::WfovUnbinned, ColorResolution::Off)?;
        assert_eq!(selected, &params[0]);
        Ok(())
    }

    #[test]
    fn test_select_no_match() {
        let params = [vendor_param((320, 288), (1280, 720))];
        assert!(matches!(
            select_camera_param(&params, DepthMode::Wfov2x2Binned, ColorResolution::R720p),
            Err(CalibrationError::NoMatchingCameraParam {
                depth_mode: DepthMode::Wfov2x2Binned,
                color_resolution: ColorResolution::R720p,
            })
        ));
        assert!(select_camera_param(&[], DepthMode::NfovUnbinned, ColorResolution::Off).is_err());
    }

    #[test]
    fn test_build_scales_intrinsics() -> Result<(), CalibrationError> {
        let param = vendor_param((320, 288), (1280, 720));
        let calibration = build_calibration(&param, DepthMode::NfovUnbinned, ColorResolution::R1080p)?;

        let depth = &calibration.depth_camera_calibration;
        assert_eq!(depth.model_type(), CalibrationModelType::BrownConrady);
        assert_eq!(depth.intrinsics.parameter_count, 14);
        assert_eq!((depth.resolution_width, depth.resolution_height), (640, 576));
        assert_relative_eq!(depth.intrinsics.parameters.fx, 504.0);
        assert_relative_eq!(depth.intrinsics.parameters.fy, 505.0);
        assert_relative_eq!(depth.intrinsics.parameters.cx, 320.0);
        assert_relative_eq!(depth.intrinsics.parameters.cy, 288.0);
        assert_relative_eq!(depth.intrinsics.parameters.k1, 0.1);
        assert_relative_eq!(depth.intrinsics.parameters.p2, -0.0002);
        assert_eq!(depth.intrinsics.parameters.k4, 0.0);
        assert_eq!(depth.intrinsics.parameters.k6, 0.0);
        assert_eq!(depth.intrinsics.parameters.codx, 0.0);
        assert!(depth.extrinsics.is_identity());

        let color = &calibration.color_camera_calibration;
        assert_eq!((color.resolution_width, color.resolution_height), (1920, 1080));
        assert_relative_eq!(color.intrinsics.parameters.fx, 900.0);
        assert_relative_eq!(color.intrinsics.parameters.cy, 540.0);
        assert_eq!(color.extrinsics.translation, [-32.0, -1.5, 4.0]);

        for source in CalibrationType::ALL {
            for target in CalibrationType::ALL {
                assert_eq!(
                    calibration.extrinsics(source, target),
                    &CalibrationExtrinsics::from(param.transform)
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_build_disabled_color_stays_zeroed() -> Result<(), CalibrationError> {
        let param = vendor_param((320, 288), (1280, 720));
        let calibration = calibration_from_vendor(&[param], DepthMode::NfovUnbinned, ColorResolution::Off)?;
        assert_eq!(calibration.color_camera_calibration, CameraCalibration::default());
        assert_eq!(
            calibration.color_camera_calibration.model_type(),
            CalibrationModelType::Unknown
        );
        assert_eq!(
            calibration.model_type(CalibrationType::Depth),
            Some(CalibrationModelType::BrownConrady)
        );
        Ok(())
    }

    #[test]
    fn test_depth_modes_without_calibration_are_rejected() {
        let params = [vendor_param((512, 512), (1280, 720))];
        for depth_mode in [DepthMode::PassiveIr, DepthMode::Off] {
            for color_resolution in [ColorResolution::R720p, ColorResolution::Off] {
                assert!(matches!(
                    select_camera_param(&params, depth_mode, color_resolution),
                    Err(CalibrationError::UnsupportedDepthMode(mode)) if mode == depth_mode
                ));
                assert!(matches!(
                    build_calibration(&params[0], depth_mode, color_resolution),
                    Err(CalibrationError::UnsupportedDepthMode(mode)) if mode == depth_mode
                ));
                assert!(matches!(
                    calibration_from_vendor(&params, depth_mode, color_resolution),
                    Err(CalibrationError::UnsupportedDepthMode(_))
                ));
            }
        }
    }

    #[test]
    fn test_build_rejects_zero_resolution() {
        let param = vendor_param((0, 0), (1280, 720));
        assert!(matches!(
            build_calibration(&param, DepthMode::NfovUnbinned, ColorResolution::Off),
            Err(CalibrationError::InvalidVendorResolution(0, 0))
        ));
    }
}
