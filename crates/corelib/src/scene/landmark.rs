//! Eiffel-style tower standing at the scene centre.

use crate::draw::{Color, DrawList, MeshKind};
use crate::stack::TransformStack;
use crate::vec3;

const IRON: Color = [0.55, 0.4, 0.25];
const DECK: Color = [0.45, 0.32, 0.2];

/// Leg foot distance from the centre axis.
const LEG_FOOT: f32 = 7.0;
/// Leg top distance from the centre axis.
const LEG_TOP: f32 = 2.5;
const FIRST_DECK: f32 = 16.0;
const SECOND_DECK: f32 = 28.0;
const SPIRE_BASE: f32 = 16.5;
const SPIRE_HEIGHT: f32 = 22.0;

pub const TOWER_HEIGHT: f32 = SPIRE_BASE + SPIRE_HEIGHT + 5.0;

pub fn draw(stack: &mut TransformStack, list: &mut DrawList) {
    let run = LEG_FOOT - LEG_TOP;
    let leg_length = (run * run + FIRST_DECK * FIRST_DECK).sqrt();
    let lean = run.atan2(FIRST_DECK).to_degrees();

    for k in 0..4 {
        stack.scoped(|s| {
            s.rotate_y(45.0 + 90.0 * k as f32);
            s.translate(vec3((LEG_FOOT + LEG_TOP) * 0.5, FIRST_DECK * 0.5, 0.0));
            s.rotate_z(lean);
            s.scale(vec3(1.4, leg_length, 1.4));
            list.draw(s, MeshKind::Cube, IRON);
        });
    }

    stack.scoped(|s| {
        s.translate(vec3(0.0, FIRST_DECK, 0.0));
        s.scale(vec3(9.0, 1.0, 9.0));
        list.draw(s, MeshKind::Cube, DECK);
    });
    stack.scoped(|s| {
        s.translate(vec3(0.0, SPIRE_BASE + SPIRE_HEIGHT * 0.5, 0.0));
        s.scale(vec3(6.0, SPIRE_HEIGHT, 6.0));
        list.draw(s, MeshKind::Pyramid, IRON);
    });
    stack.scoped(|s| {
        s.translate(vec3(0.0, SECOND_DECK, 0.0));
        s.scale(vec3(4.5, 0.8, 4.5));
        list.draw(s, MeshKind::Cube, DECK);
    });
    stack.scoped(|s| {
        s.translate(vec3(0.0, SPIRE_BASE + SPIRE_HEIGHT + 2.5, 0.0));
        s.scale(vec3(0.4, 5.0, 0.4));
        list.draw(s, MeshKind::Cylinder, IRON);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn legs_meet_the_first_deck() {
        let mut stack = TransformStack::new();
        let mut list = DrawList::new();
        draw(&mut stack, &mut list);
        assert_eq!(stack.depth(), 1);

        let legs = &list.commands()[..4];
        for leg in legs {
            let foot = leg.model_view.transform_point3(vec3(0.0, -0.5, 0.0));
            let top = leg.model_view.transform_point3(vec3(0.0, 0.5, 0.0));
            assert!(foot.y.abs() < 1e-3);
            assert!((top.y - FIRST_DECK).abs() < 1e-3);
            let r = |p: Vec3| (p.x * p.x + p.z * p.z).sqrt();
            assert!((r(foot) - LEG_FOOT).abs() < 1e-3);
            assert!((r(top) - LEG_TOP).abs() < 1e-3);
        }
    }

    #[test]
    fn spire_tip_is_the_highest_point() {
        let mut list = DrawList::new();
        draw(&mut TransformStack::new(), &mut list);
        let tip = list
            .commands()
            .iter()
            .map(|c| c.model_view.transform_point3(vec3(0.0, 0.5, 0.0)).y)
            .fold(f32::MIN, f32::max);
        assert!((tip - TOWER_HEIGHT).abs() < 1e-3);
    }
}
