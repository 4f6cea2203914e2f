//! Helicopter node tree: body, tail, rotors and landing skids.
//!
//! Local frame: nose towards +X, up +Y, origin at the body centre.

use crate::draw::{Color, DrawList, MeshKind};
use crate::flight::FlightState;
use crate::stack::TransformStack;
use crate::{Mat4, Vec3, vec3};

pub const HELI_LENGTH: f32 = 10.0;
pub const HELI_HEIGHT: f32 = 5.0;
pub const HELI_WIDTH: f32 = HELI_HEIGHT;

/// Radius of the orbit flown around the scene centre.
pub const ORBIT_RADIUS: f32 = 25.0;
/// Body pitch per unit of horizontal speed, in degrees.
pub const TILT_PER_SPEED: f32 = 2.0;
pub const MAX_TILT: f32 = 30.0;
/// Tail rotor turns this many times per main rotor turn.
pub const TAIL_ROTOR_RATIO: f32 = 3.0;

const SKID_DROP: f32 = HELI_HEIGHT * 0.5;
const SKID_DIAMETER: f32 = HELI_HEIGHT * 0.05;
const SKID_OFFSET_Z: f32 = HELI_WIDTH * 0.32;

/// Chase camera eye, behind and above the tail.
pub const CHASE_EYE: Vec3 = vec3(-HELI_LENGTH * 2.5, HELI_HEIGHT * 1.2, 0.0);
/// Chase camera target, ahead of the nose.
pub const CHASE_AIM: Vec3 = vec3(HELI_LENGTH * 2.0, -HELI_HEIGHT * 0.2, 0.0);

const BODY: Color = [0.78, 0.12, 0.1];
const GLASS: Color = [0.55, 0.75, 0.9];
const TAIL: Color = [0.65, 0.1, 0.08];
const METAL: Color = [0.35, 0.35, 0.38];
const BLADE: Color = [0.12, 0.12, 0.12];
const SKID: Color = [0.25, 0.25, 0.28];

/// Pitch of the body: nose down while advancing, nose up while backing.
pub fn tilt(flight: &FlightState) -> f32 {
    (flight.horizontal.speed * TILT_PER_SPEED).clamp(-MAX_TILT, MAX_TILT)
}

/// Move the stack origin to the helicopter body, facing the direction of travel.
pub fn place(stack: &mut TransformStack, flight: &FlightState) {
    stack.rotate_y(flight.horizontal.pos);
    stack.translate(vec3(ORBIT_RADIUS, flight.vertical.pos, 0.0));
    stack.rotate_y(90.0);
    stack.rotate_z(-tilt(flight));
}

/// World-space model transform of the helicopter body.
pub fn pose(flight: &FlightState) -> Mat4 {
    let mut stack = TransformStack::new();
    place(&mut stack, flight);
    stack.current()
}

/// Distance from the body origin down to the bottom of the skids, level flight.
pub fn rest_height() -> f32 {
    SKID_DROP + SKID_DIAMETER * 0.5
}

/// Draw the helicopter under the current stack top.
///
/// The skids are mapped back to world space through `view_inverse` to refresh
/// `flight.height`. A grounded helicopter is re-seated on the new level.
pub fn draw(
    stack: &mut TransformStack,
    list: &mut DrawList,
    flight: &mut FlightState,
    view_inverse: Mat4,
) {
    let rotor = flight.rotor.pos;
    let mut lowest_skid = f32::INFINITY;

    stack.scoped(|s| {
        place(s, flight);

        s.scoped(|s| body(s, list));
        s.scoped(|s| tail(s, list, rotor));
        s.scoped(|s| main_rotor(s, list, rotor));
        for side in [-1.0, 1.0] {
            s.scoped(|s| {
                let y = landing_gear(s, list, side, view_inverse);
                lowest_skid = lowest_skid.min(y);
            });
        }
    });

    flight.set_height(flight.vertical.pos - lowest_skid);
}

fn body(stack: &mut TransformStack, list: &mut DrawList) {
    stack.scoped(|s| {
        s.scale(vec3(HELI_LENGTH * 0.5, HELI_HEIGHT * 0.45, HELI_WIDTH * 0.45));
        list.draw(s, MeshKind::Sphere, BODY);
    });
    stack.scoped(|s| {
        s.translate(vec3(HELI_LENGTH * 0.12, HELI_HEIGHT * 0.06, 0.0));
        s.scale(vec3(HELI_LENGTH * 0.22, HELI_HEIGHT * 0.3, HELI_WIDTH * 0.36));
        list.draw(s, MeshKind::Sphere, GLASS);
    });
}

fn tail(stack: &mut TransformStack, list: &mut DrawList, rotor: f32) {
    stack.scoped(|s| {
        s.translate(vec3(-HELI_LENGTH * 0.45, HELI_HEIGHT * 0.08, 0.0));
        s.rotate_z(90.0);
        s.scale(vec3(HELI_WIDTH * 0.1, HELI_LENGTH * 0.5, HELI_WIDTH * 0.1));
        list.draw(s, MeshKind::Cylinder, TAIL);
    });
    stack.scoped(|s| {
        s.translate(vec3(-HELI_LENGTH * 0.68, HELI_HEIGHT * 0.22, 0.0));
        s.rotate_z(-20.0);
        s.scale(vec3(HELI_LENGTH * 0.08, HELI_HEIGHT * 0.35, HELI_WIDTH * 0.03));
        list.draw(s, MeshKind::Cube, TAIL);
    });
    stack.scoped(|s| {
        s.translate(vec3(-HELI_LENGTH * 0.7, HELI_HEIGHT * 0.2, HELI_WIDTH * 0.06));
        s.rotate_z(rotor * TAIL_ROTOR_RATIO);
        tail_rotor(s, list);
    });
}

fn tail_rotor(stack: &mut TransformStack, list: &mut DrawList) {
    stack.scoped(|s| {
        s.rotate_x(90.0);
        s.scale(vec3(HELI_LENGTH * 0.02, HELI_HEIGHT * 0.1, HELI_WIDTH * 0.047));
        list.draw(s, MeshKind::Cylinder, METAL);
    });
    for blade in 0..2 {
        stack.scoped(|s| {
            s.rotate_z(180.0 * blade as f32);
            s.translate(vec3(HELI_LENGTH * 0.05, 0.0, 0.0));
            s.scale(vec3(HELI_LENGTH * 0.1, HELI_HEIGHT * 0.03, HELI_WIDTH * 0.06));
            list.draw(s, MeshKind::Sphere, BLADE);
        });
    }
}

fn main_rotor(stack: &mut TransformStack, list: &mut DrawList, rotor: f32) {
    stack.translate(vec3(0.0, HELI_HEIGHT * 0.45, 0.0));
    stack.scoped(|s| {
        s.scale(vec3(HELI_LENGTH * 0.03, HELI_HEIGHT * 0.2, HELI_WIDTH * 0.07));
        list.draw(s, MeshKind::Cylinder, METAL);
    });
    stack.translate(vec3(0.0, HELI_HEIGHT * 0.1, 0.0));
    stack.rotate_y(rotor);
    for blade in 0..3 {
        stack.scoped(|s| {
            s.rotate_y(120.0 * blade as f32);
            s.translate(vec3(HELI_LENGTH * 0.25, 0.0, 0.0));
            s.scale(vec3(HELI_LENGTH * 0.5, HELI_HEIGHT * 0.03, HELI_WIDTH * 0.15));
            list.draw(s, MeshKind::Sphere, BLADE);
        });
    }
}

/// Struts and skid on one side; returns the world height of the skid bottom.
fn landing_gear(
    stack: &mut TransformStack,
    list: &mut DrawList,
    side: f32,
    view_inverse: Mat4,
) -> f32 {
    for x in [-0.18, 0.18] {
        stack.scoped(|s| {
            s.translate(vec3(HELI_LENGTH * x, -HELI_HEIGHT * 0.36, side * HELI_WIDTH * 0.3));
            s.scale(vec3(0.2, HELI_HEIGHT * 0.28, 0.2));
            list.draw(s, MeshKind::Cube, METAL);
        });
    }

    stack.translate(vec3(0.0, -SKID_DROP, side * SKID_OFFSET_Z));
    let contact = (view_inverse * stack.current())
        .transform_point3(vec3(0.0, -SKID_DIAMETER * 0.5, 0.0));

    stack.rotate_z(90.0);
    stack.scale(vec3(SKID_DIAMETER, HELI_LENGTH * 0.5, SKID_DIAMETER));
    list.draw(stack, MeshKind::Cylinder, SKID);

    contact.y
}
