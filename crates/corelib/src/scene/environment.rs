//! Static surroundings: ground, ring road, buildings, a house and the cars
//! driving around the ring.

use crate::draw::{Color, DrawList, MeshKind};
use crate::stack::TransformStack;
use crate::vec3;

pub const GROUND_SIZE: f32 = 200.0;
pub const ROAD_RADIUS: f32 = 48.0;
pub const ROAD_WIDTH: f32 = 8.0;
const ROAD_SEGMENTS: usize = 48;
/// Angular speed of the traffic, in degrees per second.
pub const CAR_SPEED: f32 = 12.0;
/// Time for the traffic to complete one lap, in milliseconds.
pub const TRAFFIC_PERIOD_MS: f64 = 360_000.0 / CAR_SPEED as f64;

const GRASS: Color = [0.3, 0.55, 0.25];
const ASPHALT: Color = [0.22, 0.22, 0.24];
const MARKING: Color = [0.92, 0.92, 0.85];

struct Building {
    angle: f32,
    distance: f32,
    size: [f32; 3],
    color: Color,
}

// Radial roads run at 45 + 90k degrees; buildings stay clear of them.
const BUILDINGS: &[Building] = &[
    Building { angle: 10.0, distance: 78.0, size: [12.0, 22.0, 10.0], color: [0.7, 0.68, 0.62] },
    Building { angle: 28.0, distance: 70.0, size: [8.0, 14.0, 8.0], color: [0.55, 0.6, 0.7] },
    Building { angle: 70.0, distance: 75.0, size: [10.0, 30.0, 10.0], color: [0.62, 0.62, 0.66] },
    Building { angle: 105.0, distance: 68.0, size: [14.0, 10.0, 9.0], color: [0.76, 0.66, 0.5] },
    Building { angle: 160.0, distance: 80.0, size: [9.0, 26.0, 9.0], color: [0.5, 0.52, 0.6] },
    Building { angle: 195.0, distance: 72.0, size: [12.0, 18.0, 12.0], color: [0.72, 0.55, 0.45] },
    Building { angle: 250.0, distance: 76.0, size: [10.0, 34.0, 10.0], color: [0.6, 0.64, 0.7] },
    Building { angle: 285.0, distance: 66.0, size: [8.0, 12.0, 14.0], color: [0.68, 0.7, 0.58] },
    Building { angle: 340.0, distance: 82.0, size: [11.0, 20.0, 11.0], color: [0.58, 0.56, 0.54] },
];

const HOUSE_ANGLE: f32 = 0.0;
const HOUSE_DISTANCE: f32 = 70.0;

struct Car {
    lane: f32,
    start: f32,
    /// `1.0` for counter-clockwise seen from above, `-1.0` otherwise.
    direction: f32,
    color: Color,
}

const CARS: &[Car] = &[
    Car { lane: ROAD_RADIUS - 2.0, start: 0.0, direction: 1.0, color: [0.85, 0.2, 0.15] },
    Car { lane: ROAD_RADIUS - 2.0, start: 120.0, direction: 1.0, color: [0.15, 0.3, 0.8] },
    Car { lane: ROAD_RADIUS - 2.0, start: 240.0, direction: 1.0, color: [0.95, 0.8, 0.2] },
    Car { lane: ROAD_RADIUS + 2.0, start: 60.0, direction: -1.0, color: [0.9, 0.9, 0.9] },
    Car { lane: ROAD_RADIUS + 2.0, start: 180.0, direction: -1.0, color: [0.2, 0.6, 0.3] },
    Car { lane: ROAD_RADIUS + 2.0, start: 300.0, direction: -1.0, color: [0.4, 0.2, 0.5] },
];

pub fn draw(stack: &mut TransformStack, list: &mut DrawList, elapsed_ms: f32) {
    stack.scoped(|s| {
        s.translate(vec3(0.0, -0.5, 0.0));
        s.scale(vec3(GROUND_SIZE, 1.0, GROUND_SIZE));
        list.draw(s, MeshKind::Cube, GRASS);
    });

    stack.scoped(|s| roads(s, list));
    for building in BUILDINGS {
        stack.scoped(|s| draw_building(s, list, building));
    }
    stack.scoped(|s| {
        s.rotate_y(HOUSE_ANGLE);
        s.translate(vec3(HOUSE_DISTANCE, 0.0, 0.0));
        house(s, list);
    });

    let elapsed_s = elapsed_ms / 1000.0;
    for car in CARS {
        stack.scoped(|s| {
            let angle = car.start + car.direction * CAR_SPEED * elapsed_s;
            s.rotate_y(angle.rem_euclid(360.0));
            s.translate(vec3(car.lane, 0.0, 0.0));
            s.rotate_y(90.0 * car.direction);
            draw_car(s, list, car.color);
        });
    }
}

fn roads(stack: &mut TransformStack, list: &mut DrawList) {
    let step = 360.0 / ROAD_SEGMENTS as f32;
    let segment = std::f32::consts::TAU * ROAD_RADIUS / ROAD_SEGMENTS as f32 * 1.05;

    for i in 0..ROAD_SEGMENTS {
        stack.scoped(|s| {
            s.rotate_y(step * i as f32);
            s.translate(vec3(ROAD_RADIUS, 0.02, 0.0));
            s.scoped(|s| {
                s.scale(vec3(ROAD_WIDTH, 0.04, segment));
                list.draw(s, MeshKind::Cube, ASPHALT);
            });
            if i % 2 == 0 {
                s.translate(vec3(0.0, 0.03, 0.0));
                s.scale(vec3(0.3, 0.02, segment * 0.5));
                list.draw(s, MeshKind::Cube, MARKING);
            }
        });
    }

    let inner = ROAD_RADIUS + ROAD_WIDTH * 0.5;
    let length = GROUND_SIZE * 0.5 - inner;
    for k in 0..4 {
        stack.scoped(|s| {
            s.rotate_y(45.0 + 90.0 * k as f32);
            s.translate(vec3(inner + length * 0.5, 0.02, 0.0));
            s.scale(vec3(length, 0.04, ROAD_WIDTH));
            list.draw(s, MeshKind::Cube, ASPHALT);
        });
    }
}

fn draw_building(stack: &mut TransformStack, list: &mut DrawList, b: &Building) {
    let [w, h, d] = b.size;
    stack.rotate_y(b.angle);
    stack.translate(vec3(b.distance, h * 0.5, 0.0));
    stack.scoped(|s| {
        s.scale(vec3(w, h, d));
        list.draw(s, MeshKind::Cube, b.color);
    });
    stack.translate(vec3(0.0, h * 0.5 + 0.25, 0.0));
    stack.scale(vec3(w * 0.9, 0.5, d * 0.9));
    list.draw(stack, MeshKind::Cube, darker(b.color));
}

/// House facing the scene centre (-X), ground floor at the local origin.
fn house(stack: &mut TransformStack, list: &mut DrawList) {
    const WALLS: Color = [0.9, 0.85, 0.7];
    const ROOF: Color = [0.6, 0.2, 0.15];
    const DOOR: Color = [0.4, 0.25, 0.12];
    const WINDOW: Color = [0.55, 0.75, 0.9];

    stack.scoped(|s| {
        s.translate(vec3(0.0, 3.0, 0.0));
        s.scale(vec3(10.0, 6.0, 8.0));
        list.draw(s, MeshKind::Cube, WALLS);
    });
    stack.scoped(|s| {
        s.translate(vec3(0.0, 8.0, 0.0));
        s.scale(vec3(12.0, 4.0, 10.0));
        list.draw(s, MeshKind::Pyramid, ROOF);
    });
    stack.scoped(|s| {
        s.translate(vec3(2.0, 8.5, 2.0));
        s.scale(vec3(1.0, 3.0, 1.0));
        list.draw(s, MeshKind::Cube, ROOF);
    });
    stack.scoped(|s| {
        s.translate(vec3(-5.05, 1.5, 0.0));
        s.scale(vec3(0.1, 3.0, 1.8));
        list.draw(s, MeshKind::Cube, DOOR);
    });
    for z in [-2.6, 2.6] {
        stack.scoped(|s| {
            s.translate(vec3(-5.05, 3.5, z));
            s.scale(vec3(0.1, 1.6, 1.6));
            list.draw(s, MeshKind::Cube, WINDOW);
        });
    }
}

/// Car with its nose along local +X, wheels on the ground.
fn draw_car(stack: &mut TransformStack, list: &mut DrawList, color: Color) {
    const TYRE: Color = [0.08, 0.08, 0.08];

    stack.scoped(|s| {
        s.translate(vec3(0.0, 0.9, 0.0));
        s.scale(vec3(4.0, 1.0, 2.0));
        list.draw(s, MeshKind::Cube, color);
    });
    stack.scoped(|s| {
        s.translate(vec3(-0.3, 1.8, 0.0));
        s.scale(vec3(2.2, 0.9, 1.8));
        list.draw(s, MeshKind::Cube, darker(color));
    });
    for x in [-1.3, 1.3] {
        for z in [-1.0, 1.0] {
            stack.scoped(|s| {
                s.translate(vec3(x, 0.45, z));
                s.rotate_x(90.0);
                s.scale(vec3(0.9, 0.4, 0.9));
                list.draw(s, MeshKind::Cylinder, TYRE);
            });
        }
    }
}

fn darker(c: Color) -> Color {
    c.map(|v| v * 0.7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mat4, Vec3};

    fn car_position(elapsed_ms: f32) -> Vec3 {
        let car = &CARS[0];
        let mut stack = TransformStack::new();
        let angle = car.start + car.direction * CAR_SPEED * elapsed_ms / 1000.0;
        stack.rotate_y(angle);
        stack.translate(vec3(car.lane, 0.0, 0.0));
        stack.current().transform_point3(Vec3::ZERO)
    }

    #[test]
    fn leaves_stack_balanced() {
        let mut stack = TransformStack::with_base(Mat4::from_translation(vec3(1.0, 2.0, 3.0)));
        let base = stack.current();
        let mut list = DrawList::new();
        draw(&mut stack, &mut list, 1234.0);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), base);
        assert!(!list.is_empty());
    }

    #[test]
    fn traffic_repeats_every_lap() {
        assert_eq!(TRAFFIC_PERIOD_MS, 30_000.0);
        let start = car_position(250.0);
        let lap = car_position(250.0 + TRAFFIC_PERIOD_MS as f32);
        assert!((start - lap).length() < 1e-3);
    }

    #[test]
    fn same_time_same_frame() {
        let mut a = DrawList::new();
        let mut b = DrawList::new();
        draw(&mut TransformStack::new(), &mut a, 500.0);
        draw(&mut TransformStack::new(), &mut b, 500.0);
        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn cars_move_with_time() {
        let mut early = DrawList::new();
        let mut late = DrawList::new();
        draw(&mut TransformStack::new(), &mut early, 0.0);
        draw(&mut TransformStack::new(), &mut late, 2000.0);
        assert_eq!(early.len(), late.len());
        assert_ne!(early.commands(), late.commands());

        let p0 = car_position(0.0);
        let p1 = car_position(2000.0);
        assert!((p0.length() - p1.length()).abs() < 1e-3);
        assert!(p0.distance(p1) > 1.0);
    }

    #[test]
    fn only_the_ground_reaches_below_zero() {
        let mut list = DrawList::new();
        draw(&mut TransformStack::new(), &mut list, 0.0);
        let below: Vec<_> = list
            .commands()
            .iter()
            .filter(|c| c.model_view.transform_point3(Vec3::ZERO).y < 0.0)
            .collect();
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].color, GRASS);
    }
}
