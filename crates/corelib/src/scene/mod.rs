//! Scene graph expressed as nested stack scopes.
//!
//! Every node draws under the current stack top and leaves the stack exactly
//! as it found it.

pub mod environment;
pub mod helicopter;
pub mod landmark;

use crate::Mat4;
use crate::draw::DrawList;
use crate::flight::FlightState;
use crate::stack::TransformStack;

/// Draw the whole scene. The stack top must hold the view matrix, and
/// `view_inverse` must be its inverse.
pub fn draw(
    stack: &mut TransformStack,
    list: &mut DrawList,
    flight: &mut FlightState,
    view_inverse: Mat4,
    elapsed_ms: f32,
) {
    stack.scoped(|s| environment::draw(s, list, elapsed_ms));
    stack.scoped(|s| landmark::draw(s, list));
    helicopter::draw(stack, list, flight, view_inverse);
}
