//! Helicopter flight model.
//!
//! Three independent second-order axes integrated with a damped forward-Euler
//! step once per frame:
//! - `horizontal`: orbital angle around the scene centre, in degrees;
//! - `vertical`: altitude of the helicopter origin, in world units;
//! - `rotor`: main rotor spin angle, in degrees.
//!
//! The step divides by the frame delta instead of multiplying by it, so the
//! motion depends on the frame rate. This is the observed behaviour of the
//! flight controls and is kept as is; the tuning constants in
//! [`FlightParams`] assume `dt` in milliseconds.

use crate::Vec3;

/// Speed damping factor applied every step (`decay = speed * DAMPING`).
pub const DAMPING: f32 = 0.3;
/// Base rotor acceleration while airborne.
pub const ROTOR_BASE_ACCEL: f32 = 80.0;
/// Extra rotor acceleration per unit of horizontal speed.
pub const ROTOR_SPEED_GAIN: f32 = 2.0;

/// One integrated degree of freedom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Axis {
    pub pos: f32,
    pub speed: f32,
    pub accel: f32,
}

impl Axis {
    pub const fn at(pos: f32) -> Self {
        Self {
            pos,
            speed: 0.0,
            accel: 0.0,
        }
    }

    /// Next `(speed, pos)` without committing them.
    #[inline]
    pub fn predict(&self, dt: f32, damping: f32) -> (f32, f32) {
        let decay = self.speed * damping;
        let speed = self.speed + (self.accel - decay) / dt;
        (speed, self.pos + speed / dt)
    }

    #[inline]
    pub fn step(&mut self, dt: f32, damping: f32) {
        let (speed, pos) = self.predict(dt, damping);
        self.speed = speed;
        self.pos = pos;
    }
}

/// Coarse flight state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlightPhase {
    #[default]
    Grounded,
    Airborne,
}

/// Control input on one axis: key held in either direction or released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Throttle {
    Forward,
    Reverse,
    Idle,
}

impl Throttle {
    fn sign(self) -> f32 {
        match self {
            Throttle::Forward => 1.0,
            Throttle::Reverse => -1.0,
            Throttle::Idle => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightParams {
    pub damping: f32,
    /// Height of the ground surface the skids rest on.
    pub ground_offset: f32,
    /// Vertical acceleration while climb/descend is held.
    pub lift_accel: f32,
    /// Horizontal acceleration while forward/reverse is held.
    pub thrust_accel: f32,
    pub rotor_base_accel: f32,
    pub rotor_speed_gain: f32,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            ground_offset: 0.0,
            lift_accel: 0.5,
            thrust_accel: 2.5,
            rotor_base_accel: ROTOR_BASE_ACCEL,
            rotor_speed_gain: ROTOR_SPEED_GAIN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlightState {
    pub horizontal: Axis,
    pub vertical: Axis,
    pub rotor: Axis,
    /// Vertical position at which the skids touch the ground (ground clearance
    /// of the skids below the helicopter origin), refreshed from the rendered
    /// skid geometry every frame.
    pub height: f32,
    /// World-space chase eye point, refreshed by the scene every frame.
    pub coords: Vec3,
    /// World-space point ahead of the helicopter, refreshed with `coords`.
    pub forward: Vec3,
    pub phase: FlightPhase,
    pub params: FlightParams,
}

impl FlightState {
    pub fn new(params: FlightParams) -> Self {
        Self {
            horizontal: Axis::default(),
            vertical: Axis::at(params.ground_offset),
            rotor: Axis::default(),
            height: 0.0,
            coords: Vec3::ZERO,
            forward: Vec3::ZERO,
            phase: FlightPhase::Grounded,
            params,
        }
    }

    /// Vertical position of the helicopter when resting on the ground.
    #[inline]
    pub fn ground_level(&self) -> f32 {
        self.height + self.params.ground_offset
    }

    /// Climb input is held.
    #[inline]
    pub fn is_lifting(&self) -> bool {
        self.vertical.accel > 0.0
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.phase == FlightPhase::Grounded
    }

    pub fn set_vertical(&mut self, throttle: Throttle) {
        self.vertical.accel = throttle.sign() * self.params.lift_accel;
    }

    pub fn set_horizontal(&mut self, throttle: Throttle) {
        self.horizontal.accel = throttle.sign() * self.params.thrust_accel;
    }

    /// Rest the helicopter on the ground with the skid clearance `height`.
    pub fn land_at(&mut self, height: f32) {
        self.height = height;
        self.vertical = Axis::at(self.ground_level());
        self.phase = FlightPhase::Grounded;
    }

    /// Store the skid clearance measured from the drawn skids.
    ///
    /// While grounded the helicopter is re-seated on the new ground level, so
    /// the next idle step predicts exactly that level and stays in contact.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        if self.is_grounded() {
            self.vertical.pos = self.ground_level();
        }
    }

    /// Advance all axes by one frame of `dt` milliseconds.
    ///
    /// A non-positive or non-finite `dt` leaves the state untouched.
    pub fn step(&mut self, dt: f32) -> FlightPhase {
        if !(dt.is_finite() && dt > 0.0) {
            log::trace!("Skipping flight step for dt={dt}");
            return self.phase;
        }
        let damping = self.params.damping;

        let (speed, pos) = self.vertical.predict(dt, damping);
        let grounded = pos <= self.ground_level() && !self.is_lifting();
        if grounded {
            self.vertical.speed = 0.0;
            self.vertical.pos = self.ground_level();
            self.horizontal.accel = 0.0;
        } else {
            self.vertical.speed = speed;
            self.vertical.pos = pos;
        }

        self.horizontal.step(dt, damping);
        self.horizontal.pos = wrap_degrees(self.horizontal.pos);

        self.rotor.accel = rotor_accel(grounded, self.horizontal.speed, &self.params);
        self.rotor.step(dt, damping);
        self.rotor.pos = wrap_degrees(self.rotor.pos);

        let phase = if grounded {
            FlightPhase::Grounded
        } else {
            FlightPhase::Airborne
        };
        if phase != self.phase {
            log::debug!(
                "Flight phase {:?} -> {:?} at altitude {:.3}",
                self.phase,
                phase,
                self.vertical.pos
            );
            self.phase = phase;
        }
        phase
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new(FlightParams::default())
    }
}

/// Rotor spin-up is coupled to lift-off: no drive on the ground.
#[inline]
pub fn rotor_accel(grounded: bool, horizontal_speed: f32, params: &FlightParams) -> f32 {
    if grounded {
        0.0
    } else {
        params.rotor_base_accel + params.rotor_speed_gain * horizontal_speed
    }
}

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to 360 itself
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
