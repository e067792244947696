//! The scene contract a projection picker is bound to.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{DMat4, DVec3};

use super::frustum::Frustum;

/// Read/write access to the parts of a host scene the picker needs.
///
/// The picker never mutates a frustum in place: it reads the current one to
/// classify it and installs a whole new value through
/// [`set_frustum`](SceneHost::set_frustum).
pub trait SceneHost {
    /// The frustum currently installed on the camera.
    fn frustum(&self) -> Frustum;

    /// Replace the camera frustum.
    fn set_frustum(&mut self, frustum: Frustum);

    /// Render target width in pixels.
    fn drawing_buffer_width(&self) -> u32;

    /// Render target height in pixels.
    fn drawing_buffer_height(&self) -> u32;

    /// Camera position in the camera's reference frame.
    fn camera_position(&self) -> DVec3;

    /// Camera height above the reference surface.
    fn camera_cartographic_height(&self) -> f64;

    /// Camera local-to-world transform.
    fn camera_transform(&self) -> DMat4;

    /// `drawing_buffer_width / drawing_buffer_height`, unguarded.
    fn drawing_buffer_aspect(&self) -> f64 {
        f64::from(self.drawing_buffer_width())
            / f64::from(self.drawing_buffer_height())
    }
}

impl<S: SceneHost> SceneHost for Rc<RefCell<S>> {
    fn frustum(&self) -> Frustum {
        self.borrow().frustum()
    }

    fn set_frustum(&mut self, frustum: Frustum) {
        self.borrow_mut().set_frustum(frustum);
    }

    fn drawing_buffer_width(&self) -> u32 {
        self.borrow().drawing_buffer_width()
    }

    fn drawing_buffer_height(&self) -> u32 {
        self.borrow().drawing_buffer_height()
    }

    fn camera_position(&self) -> DVec3 {
        self.borrow().camera_position()
    }

    fn camera_cartographic_height(&self) -> f64 {
        self.borrow().camera_cartographic_height()
    }

    fn camera_transform(&self) -> DMat4 {
        self.borrow().camera_transform()
    }
}

impl<S: SceneHost + ?Sized> SceneHost for &mut S {
    fn frustum(&self) -> Frustum {
        (**self).frustum()
    }

    fn set_frustum(&mut self, frustum: Frustum) {
        (**self).set_frustum(frustum);
    }

    fn drawing_buffer_width(&self) -> u32 {
        (**self).drawing_buffer_width()
    }

    fn drawing_buffer_height(&self) -> u32 {
        (**self).drawing_buffer_height()
    }

    fn camera_position(&self) -> DVec3 {
        (**self).camera_position()
    }

    fn camera_cartographic_height(&self) -> f64 {
        (**self).camera_cartographic_height()
    }

    fn camera_transform(&self) -> DMat4 {
        (**self).camera_transform()
    }
}
