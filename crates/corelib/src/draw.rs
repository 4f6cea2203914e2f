//! Per-frame draw list recorded by the scene traversal and replayed by the renderer.

use crate::{Mat4, Vec3};
use crate::stack::TransformStack;

/// Unit primitives provided by the geometry providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cube,
    Sphere,
    Cylinder,
    Pyramid,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Cube,
        MeshKind::Sphere,
        MeshKind::Cylinder,
        MeshKind::Pyramid,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Filled triangles or wireframe lines for every draw of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Filled,
    Wireframe,
}

/// Flat RGB colour in `[0, 1]`.
pub type Color = [f32; 3];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub mesh: MeshKind,
    pub model_view: Mat4,
    /// Inverse-transpose of `model_view`, used for normals.
    pub normals: Mat4,
    pub color: Color,
}

/// Draws of one frame, in submission order.
#[derive(Default, Debug)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame, keep the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Record `mesh` under the current top of `stack`.
    pub fn draw(&mut self, stack: &TransformStack, mesh: MeshKind, color: Color) {
        let model_view = stack.current();
        self.commands.push(DrawCommand {
            mesh,
            model_view,
            normals: model_view.inverse().transpose(),
            color,
        });
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn count(&self, mesh: MeshKind) -> usize {
        self.commands.iter().filter(|c| c.mesh == mesh).count()
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub projection: Mat4,
    pub view: Mat4,
    /// World-space direction towards the light.
    pub light_dir: Vec3,
    pub mode: RenderMode,
    pub draws: &'a [DrawCommand],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn draw_captures_current_transform() {
        let mut stack = TransformStack::new();
        let mut list = DrawList::new();
        stack.translate(vec3(1.0, 2.0, 3.0));
        stack.scoped(|s| {
            s.scale(vec3(2.0, 4.0, 8.0));
            list.draw(s, MeshKind::Cube, [1.0, 0.0, 0.0]);
        });
        list.draw(&stack, MeshKind::Sphere, [0.0, 1.0, 0.0]);

        assert_eq!(list.len(), 2);
        let cmds = list.commands();
        assert_eq!(
            cmds[0].model_view,
            Mat4::from_translation(vec3(1.0, 2.0, 3.0)) * Mat4::from_scale(vec3(2.0, 4.0, 8.0))
        );
        assert_eq!(cmds[1].model_view, Mat4::from_translation(vec3(1.0, 2.0, 3.0)));
        assert_eq!(list.count(MeshKind::Cube), 1);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let mut stack = TransformStack::new();
        let mut list = DrawList::new();
        stack.scale(vec3(4.0, 1.0, 1.0));
        list.draw(&stack, MeshKind::Sphere, [1.0; 3]);
        let n = list.commands()[0].normals;
        // A 45 degree normal leans towards the squashed axis after scaling.
        let dir = n.transform_vector3(vec3(1.0, 1.0, 0.0)).normalize();
        assert!(dir.y > dir.x);
    }

    #[test]
    fn clear_keeps_nothing() {
        let stack = TransformStack::new();
        let mut list = DrawList::new();
        list.draw(&stack, MeshKind::Pyramid, [0.5; 3]);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn mesh_indices_are_dense() {
        for (i, kind) in MeshKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
