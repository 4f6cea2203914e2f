//! Camera presets: fixed orthographic views and the chase perspective view.

use crate::error::{CoreError, CoreResult};
use crate::{Mat4, Vec3};

/// Half-height of the orthographic view volume and base distance of the
/// fixed eyes, in world units.
pub const VP_DISTANCE: f32 = 60.0;
/// Vertical field of view of the chase camera, in degrees.
pub const CHASE_FOV_DEG: f32 = 60.0;
pub const CHASE_NEAR: f32 = 0.1;
pub const CHASE_FAR: f32 = VP_DISTANCE * 6.0;

pub const DEFAULT_THETA: f32 = 45.0;
pub const DEFAULT_GAMMA: f32 = 35.0;
pub const THETA_RANGE: (f32, f32) = (-180.0, 180.0);
pub const GAMMA_RANGE: (f32, f32) = (-90.0, 90.0);

/// Axis a fixed axis-aligned view looks along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAxis {
    /// Looking down -Z.
    Front,
    /// Looking down -Y.
    Top,
    /// Looking down -X.
    Side,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraMode {
    /// Orthographic view rotated by `gamma` about X, then `theta` about Y (degrees).
    Axonometric { theta: f32, gamma: f32 },
    AxisAligned(ViewAxis),
    /// Perspective view following the helicopter.
    Chase,
}

impl CameraMode {
    #[inline]
    pub fn is_perspective(&self) -> bool {
        matches!(self, CameraMode::Chase)
    }
}

/// Number keys `1`..=`5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraPreset {
    Axonometric = 1,
    Front = 2,
    Top = 3,
    Side = 4,
    Chase = 5,
}

impl TryFrom<u8> for CameraPreset {
    type Error = CoreError;

    fn try_from(n: u8) -> CoreResult<Self> {
        match n {
            1 => Ok(CameraPreset::Axonometric),
            2 => Ok(CameraPreset::Front),
            3 => Ok(CameraPreset::Top),
            4 => Ok(CameraPreset::Side),
            5 => Ok(CameraPreset::Chase),
            other => Err(CoreError::UnknownCameraPreset(other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraState {
    mode: CameraMode,
    /// Slider values, kept while other presets are active.
    theta: f32,
    gamma: f32,
    aspect: f32,
    view: Mat4,
    view_inverse: Mat4,
    projection: Mat4,
}

impl CameraState {
    pub fn new(aspect: f32) -> Self {
        let mut cam = Self {
            mode: CameraMode::Axonometric {
                theta: DEFAULT_THETA,
                gamma: DEFAULT_GAMMA,
            },
            theta: DEFAULT_THETA,
            gamma: DEFAULT_GAMMA,
            aspect: aspect.max(1e-6),
            view: Mat4::IDENTITY,
            view_inverse: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        cam.refresh_fixed_view();
        cam.refresh_projection();
        cam
    }

    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    #[inline]
    pub fn view_inverse(&self) -> Mat4 {
        self.view_inverse
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn angles(&self) -> (f32, f32) {
        (self.theta, self.gamma)
    }

    pub fn select(&mut self, preset: CameraPreset) {
        let mode = match preset {
            CameraPreset::Axonometric => CameraMode::Axonometric {
                theta: self.theta,
                gamma: self.gamma,
            },
            CameraPreset::Front => CameraMode::AxisAligned(ViewAxis::Front),
            CameraPreset::Top => CameraMode::AxisAligned(ViewAxis::Top),
            CameraPreset::Side => CameraMode::AxisAligned(ViewAxis::Side),
            CameraPreset::Chase => CameraMode::Chase,
        };
        log::info!("Camera preset {:?} -> {:?}", preset, mode);
        let family_changed = mode.is_perspective() != self.mode.is_perspective();
        self.mode = mode;
        if !mode.is_perspective() {
            self.refresh_fixed_view();
        }
        if family_changed {
            self.refresh_projection();
        }
    }

    /// Set the axonometric angles (degrees), clamped to the slider ranges.
    pub fn set_angles(&mut self, theta: f32, gamma: f32) {
        self.theta = theta.clamp(THETA_RANGE.0, THETA_RANGE.1);
        self.gamma = gamma.clamp(GAMMA_RANGE.0, GAMMA_RANGE.1);
        if let CameraMode::Axonometric { .. } = self.mode {
            self.mode = CameraMode::Axonometric {
                theta: self.theta,
                gamma: self.gamma,
            };
            self.refresh_fixed_view();
        }
    }

    pub fn adjust_theta(&mut self, delta: f32) {
        self.set_angles(self.theta + delta, self.gamma);
    }

    pub fn adjust_gamma(&mut self, delta: f32) {
        self.set_angles(self.theta, self.gamma + delta);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(1e-6);
        self.refresh_projection();
    }

    /// Aim the chase camera. Ignored by the fixed presets.
    pub fn track(&mut self, eye: Vec3, target: Vec3) {
        if self.mode.is_perspective() {
            self.set_view(Mat4::look_at_rh(eye, target, Vec3::Y));
        }
    }

    fn set_view(&mut self, view: Mat4) {
        self.view = view;
        self.view_inverse = view.inverse();
    }

    fn refresh_fixed_view(&mut self) {
        let view = match self.mode {
            CameraMode::Axonometric { theta, gamma } => {
                Mat4::look_at_rh(Vec3::new(0.0, 0.0, VP_DISTANCE), Vec3::ZERO, Vec3::Y)
                    * Mat4::from_rotation_x(gamma.to_radians())
                    * Mat4::from_rotation_y(theta.to_radians())
            }
            CameraMode::AxisAligned(ViewAxis::Front) => {
                Mat4::look_at_rh(Vec3::new(0.0, 0.0, VP_DISTANCE), Vec3::ZERO, Vec3::Y)
            }
            CameraMode::AxisAligned(ViewAxis::Top) => {
                Mat4::look_at_rh(Vec3::new(0.0, VP_DISTANCE, 0.0), Vec3::ZERO, Vec3::NEG_Z)
            }
            CameraMode::AxisAligned(ViewAxis::Side) => {
                Mat4::look_at_rh(Vec3::new(VP_DISTANCE, 0.0, 0.0), Vec3::ZERO, Vec3::Y)
            }
            CameraMode::Chase => return,
        };
        self.set_view(view);
    }

    fn refresh_projection(&mut self) {
        self.projection = if self.mode.is_perspective() {
            Mat4::perspective_rh(CHASE_FOV_DEG.to_radians(), self.aspect, CHASE_NEAR, CHASE_FAR)
        } else {
            let d = VP_DISTANCE;
            Mat4::orthographic_rh(-d * self.aspect, d * self.aspect, -d, d, -3.0 * d, 3.0 * d)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    fn assert_identity(m: Mat4) {
        let diff = (m - Mat4::IDENTITY).to_cols_array();
        assert!(diff.iter().all(|d| d.abs() < 1e-4), "not identity: {m:?}");
    }

    #[test]
    fn preset_numbers() {
        assert_eq!(CameraPreset::try_from(1), Ok(CameraPreset::Axonometric));
        assert_eq!(CameraPreset::try_from(5), Ok(CameraPreset::Chase));
        assert_eq!(
            CameraPreset::try_from(6),
            Err(CoreError::UnknownCameraPreset(6))
        );
        assert!(CameraPreset::try_from(0).is_err());
    }

    #[test]
    fn inverse_follows_every_view_change() {
        let mut cam = CameraState::new(16.0 / 9.0);
        assert_identity(cam.view() * cam.view_inverse());

        cam.adjust_theta(-20.0);
        assert_identity(cam.view() * cam.view_inverse());

        for preset in [CameraPreset::Front, CameraPreset::Top, CameraPreset::Side] {
            cam.select(preset);
            assert_identity(cam.view() * cam.view_inverse());
        }

        cam.select(CameraPreset::Chase);
        cam.track(vec3(10.0, 5.0, 3.0), vec3(20.0, 4.0, 3.0));
        assert_identity(cam.view() * cam.view_inverse());
    }

    #[test]
    fn chase_switch_changes_projection_family() {
        let mut cam = CameraState::new(1.0);
        let ortho = cam.projection();
        // orthographic: w stays 1
        assert_eq!(ortho.w_axis.w, 1.0);

        cam.select(CameraPreset::Chase);
        let persp = cam.projection();
        assert_eq!(persp.w_axis.w, 0.0);
        assert_ne!(ortho, persp);

        cam.select(CameraPreset::Top);
        assert_eq!(cam.projection(), ortho);
    }

    #[test]
    fn resize_rederives_projection_only() {
        let mut cam = CameraState::new(1.0);
        cam.select(CameraPreset::Side);
        let view = cam.view();
        let before = cam.projection();

        cam.set_aspect(2.0);

        assert_eq!(cam.view(), view);
        assert_eq!(cam.mode(), CameraMode::AxisAligned(ViewAxis::Side));
        assert!((cam.projection().x_axis.x * 2.0 - before.x_axis.x).abs() < 1e-6);
    }

    #[test]
    fn angles_clamp_to_slider_range() {
        let mut cam = CameraState::new(1.0);
        cam.set_angles(500.0, -120.0);
        assert_eq!(cam.angles(), (180.0, -90.0));
        assert_eq!(
            cam.mode(),
            CameraMode::Axonometric {
                theta: 180.0,
                gamma: -90.0
            }
        );
    }

    #[test]
    fn angles_survive_preset_switches() {
        let mut cam = CameraState::new(1.0);
        cam.set_angles(10.0, 20.0);
        cam.select(CameraPreset::Front);
        cam.adjust_gamma(5.0);
        // fixed axis view unaffected
        assert_eq!(cam.mode(), CameraMode::AxisAligned(ViewAxis::Front));
        cam.select(CameraPreset::Axonometric);
        assert_eq!(
            cam.mode(),
            CameraMode::Axonometric {
                theta: 10.0,
                gamma: 25.0
            }
        );
    }

    #[test]
    fn track_is_ignored_by_fixed_views() {
        let mut cam = CameraState::new(1.0);
        let view = cam.view();
        cam.track(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0));
        assert_eq!(cam.view(), view);
    }

    #[test]
    fn chase_eye_maps_to_origin() {
        let mut cam = CameraState::new(1.0);
        cam.select(CameraPreset::Chase);
        let eye = vec3(30.0, 8.0, -2.0);
        cam.track(eye, vec3(30.0, 6.0, -20.0));
        let p = cam.view().transform_point3(eye);
        assert!(p.length() < 1e-4);
        assert!((cam.view_inverse().transform_point3(Vec3::ZERO) - eye).length() < 1e-4);
    }
}
