//! Matrix transform stack used to place hierarchical scene nodes.

use std::ops::{Deref, DerefMut};

use crate::{Mat4, Vec3};

/// LIFO stack of accumulated model transforms.
///
/// The stack always holds at least one matrix (the base entry). Compose
/// operations right-multiply the top in place, so the last call is the first
/// transform applied to the geometry.
#[derive(Clone, Debug)]
pub struct TransformStack {
    stack: Vec<Mat4>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::with_base(Mat4::IDENTITY)
    }

    pub fn with_base(base: Mat4) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(base);
        Self { stack }
    }

    /// Drop every entry and restart from `base` (usually the view matrix).
    pub fn load(&mut self, base: Mat4) {
        self.stack.clear();
        self.stack.push(base);
    }

    /// Duplicate the top entry.
    pub fn push(&mut self) {
        let top = self.current();
        self.stack.push(top);
    }

    /// Discard the top entry.
    ///
    /// # Panics
    /// Popping the base entry is a stack underflow.
    pub fn pop(&mut self) {
        assert!(
            self.stack.len() > 1,
            "transform stack underflow: pop() without matching push()"
        );
        self.stack.pop();
    }

    #[inline]
    pub fn current(&self) -> Mat4 {
        // The base entry is never removed, see `pop`.
        self.stack[self.stack.len() - 1]
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn compose(&mut self, m: Mat4) {
        let last = self.stack.len() - 1;
        self.stack[last] *= m;
    }

    pub fn translate(&mut self, t: Vec3) {
        self.compose(Mat4::from_translation(t));
    }

    pub fn scale(&mut self, s: Vec3) {
        self.compose(Mat4::from_scale(s));
    }

    /// Rotation about X, in degrees.
    pub fn rotate_x(&mut self, deg: f32) {
        self.compose(Mat4::from_rotation_x(deg.to_radians()));
    }

    /// Rotation about Y, in degrees.
    pub fn rotate_y(&mut self, deg: f32) {
        self.compose(Mat4::from_rotation_y(deg.to_radians()));
    }

    /// Rotation about Z, in degrees.
    pub fn rotate_z(&mut self, deg: f32) {
        self.compose(Mat4::from_rotation_z(deg.to_radians()));
    }

    /// Push and return a guard that pops when dropped.
    pub fn push_scope(&mut self) -> StackScope<'_> {
        self.push();
        StackScope { stack: self }
    }

    /// Run `f` between a push and its matching pop.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut TransformStack) -> R) -> R {
        let mut scope = self.push_scope();
        f(&mut *scope)
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushed stack level; popped on drop, including early returns.
pub struct StackScope<'a> {
    stack: &'a mut TransformStack,
}

impl Deref for StackScope<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &TransformStack {
        self.stack
    }
}

impl DerefMut for StackScope<'_> {
    fn deref_mut(&mut self) -> &mut TransformStack {
        self.stack
    }
}

impl Drop for StackScope<'_> {
    fn drop(&mut self) {
        self.stack.pop();
    }
}
