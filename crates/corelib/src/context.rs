//! Explicit per-scene state, threaded through the frame driver.

use crate::camera::{CameraPreset, CameraState};
use crate::draw::{DrawList, Frame, RenderMode};
use crate::error::{CoreError, CoreResult};
use crate::flight::{FlightParams, FlightState};
use crate::input::Command;
use crate::scene::{self, environment, helicopter};
use crate::stack::TransformStack;
use crate::{Vec3, vec3};

pub struct SceneContext {
    stack: TransformStack,
    pub flight: FlightState,
    pub camera: CameraState,
    pub mode: RenderMode,
    /// World-space direction towards the light.
    pub light_dir: Vec3,
    /// Total simulated time, in milliseconds.
    elapsed_ms: f64,
    draws: DrawList,
}

impl SceneContext {
    pub fn new(aspect: f32) -> Self {
        Self::with_params(aspect, FlightParams::default())
    }

    pub fn with_params(aspect: f32, params: FlightParams) -> Self {
        let mut flight = FlightState::new(params);
        flight.land_at(helicopter::rest_height());

        let mut ctx = Self {
            stack: TransformStack::new(),
            flight,
            camera: CameraState::new(aspect),
            mode: RenderMode::default(),
            light_dir: vec3(0.4, 1.0, 0.6).normalize(),
            elapsed_ms: 0.0,
            draws: DrawList::new(),
        };
        ctx.refresh_chase_points();
        ctx
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn apply(&mut self, command: Command) {
        log::debug!("Command: {:?}", command);
        match command {
            Command::SetRenderMode(mode) => self.mode = mode,
            Command::SelectCamera(preset) => self.select_camera(preset),
            Command::Vertical(throttle) => self.flight.set_vertical(throttle),
            Command::Horizontal(throttle) => self.flight.set_horizontal(throttle),
            Command::Theta(delta) => self.camera.adjust_theta(delta),
            Command::Gamma(delta) => self.camera.adjust_gamma(delta),
        }
    }

    /// Switch presets. The chase view is aimed right away so the next frame
    /// never starts from a stale view.
    pub fn select_camera(&mut self, preset: CameraPreset) {
        self.camera.select(preset);
        self.camera.track(self.flight.coords, self.flight.forward);
    }

    /// Viewport changed: only the projection is re-derived.
    pub fn resize(&mut self, width: u32, height: u32) -> CoreResult<()> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidViewport { width, height });
        }
        self.camera.set_aspect(width as f32 / height as f32);
        Ok(())
    }

    /// Advance by `dt` milliseconds and record the frame's draws.
    pub fn frame(&mut self, dt: f32) -> Frame<'_> {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed_ms += f64::from(dt);
        }

        self.flight.step(dt);
        self.refresh_chase_points();
        self.camera.track(self.flight.coords, self.flight.forward);

        self.draws.clear();
        self.stack.load(self.camera.view());
        let traffic_ms = (self.elapsed_ms % environment::TRAFFIC_PERIOD_MS) as f32;
        scene::draw(
            &mut self.stack,
            &mut self.draws,
            &mut self.flight,
            self.camera.view_inverse(),
            traffic_ms,
        );
        debug_assert_eq!(self.stack.depth(), 1, "unbalanced scene traversal");

        Frame {
            projection: self.camera.projection(),
            view: self.camera.view(),
            light_dir: self.light_dir,
            mode: self.mode,
            draws: self.draws.commands(),
        }
    }

    fn refresh_chase_points(&mut self) {
        let pose = helicopter::pose(&self.flight);
        self.flight.coords = pose.transform_point3(helicopter::CHASE_EYE);
        self.flight.forward = pose.transform_point3(helicopter::CHASE_AIM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMode;
    use crate::draw::MeshKind;
    use crate::flight::{FlightPhase, Throttle};

    const DT: f32 = 16.0;

    #[test]
    fn starts_resting_on_the_ground() {
        let mut ctx = SceneContext::new(1.0);
        let rest = helicopter::rest_height();
        assert_eq!(ctx.flight.vertical.pos, rest);

        for _ in 0..10 {
            ctx.frame(DT);
        }
        assert!((ctx.flight.vertical.pos - rest).abs() < 1e-3);
        assert_eq!(ctx.flight.phase, FlightPhase::Grounded);
        assert_eq!(ctx.flight.rotor.speed, 0.0);
    }

    #[test]
    fn camera_changes_never_lift_a_resting_helicopter() {
        let mut ctx = SceneContext::new(1.5);
        let presets = [
            CameraPreset::Axonometric,
            CameraPreset::Front,
            CameraPreset::Top,
            CameraPreset::Side,
            CameraPreset::Chase,
        ];
        for preset in presets.into_iter().cycle().take(20) {
            ctx.select_camera(preset);
            ctx.frame(DT);
            assert_eq!(ctx.flight.phase, FlightPhase::Grounded, "{preset:?}");
            assert_eq!(ctx.flight.vertical.pos, ctx.flight.ground_level());
        }
        assert_eq!(ctx.flight.rotor.pos, 0.0);
    }

    #[test]
    fn camera_switch_leaves_flight_untouched() {
        let mut ctx = SceneContext::new(1.5);
        ctx.apply(Command::Vertical(Throttle::Forward));
        ctx.apply(Command::Horizontal(Throttle::Forward));
        for _ in 0..5 {
            ctx.frame(DT);
        }
        let before = ctx.flight.clone();

        for n in [5, 3, 1, 2, 4] {
            let preset = CameraPreset::try_from(n).unwrap();
            ctx.apply(Command::SelectCamera(preset));
        }
        assert_eq!(ctx.flight, before);
    }

    #[test]
    fn chase_view_centres_on_the_current_pose() {
        let mut ctx = SceneContext::new(1.0);
        ctx.apply(Command::SelectCamera(CameraPreset::Chase));
        ctx.apply(Command::Vertical(Throttle::Forward));
        ctx.apply(Command::Horizontal(Throttle::Forward));

        for _ in 0..20 {
            let frame = ctx.frame(DT);
            let eye = frame.view.inverse().transform_point3(Vec3::ZERO);
            assert!((eye - ctx.flight.coords).length() < 1e-2);
        }
        assert_eq!(ctx.flight.phase, FlightPhase::Airborne);
        assert!(ctx.flight.horizontal.pos > 0.0);
    }

    #[test]
    fn frame_reports_camera_and_mode() {
        let mut ctx = SceneContext::new(1.0);
        ctx.apply(Command::SetRenderMode(RenderMode::Wireframe));
        let projection = ctx.camera.projection();
        let frame = ctx.frame(DT);
        assert_eq!(frame.mode, RenderMode::Wireframe);
        assert_eq!(frame.projection, projection);
        assert!(frame.draws.iter().any(|d| d.mesh == MeshKind::Pyramid));
    }

    #[test]
    fn resize_rejects_empty_viewport() {
        let mut ctx = SceneContext::new(1.0);
        assert_eq!(
            ctx.resize(0, 600),
            Err(CoreError::InvalidViewport {
                width: 0,
                height: 600
            })
        );
        ctx.resize(1200, 600).unwrap();
        assert_eq!(ctx.camera.aspect(), 2.0);
        assert!(matches!(ctx.camera.mode(), CameraMode::Axonometric { .. }));
    }

    #[test]
    fn zero_dt_freezes_the_scene() {
        let mut ctx = SceneContext::new(1.0);
        ctx.apply(Command::Vertical(Throttle::Forward));
        let first: Vec<_> = ctx.frame(0.0).draws.to_vec();
        let second: Vec<_> = ctx.frame(0.0).draws.to_vec();
        assert_eq!(first, second);
        assert_eq!(ctx.elapsed_ms(), 0.0);
    }

    #[test]
    fn long_sessions_animate_like_fresh_ones() {
        let mut fresh = SceneContext::new(1.0);
        let mut day_old = SceneContext::new(1.0);
        day_old.elapsed_ms = 86_400_000.0;

        let expected: Vec<_> = fresh.frame(DT).draws.to_vec();
        let actual: Vec<_> = day_old.frame(DT).draws.to_vec();

        assert_eq!(day_old.elapsed_ms(), 86_400_016.0);
        assert_eq!(actual, expected);
    }

    #[test]
    fn slider_keys_move_the_axonometric_view() {
        let mut ctx = SceneContext::new(1.0);
        let view = ctx.camera.view();
        ctx.apply(Command::Theta(5.0));
        ctx.apply(Command::Gamma(-5.0));
        assert_ne!(ctx.camera.view(), view);
        assert_eq!(ctx.camera.angles(), (50.0, 30.0));
    }
}
