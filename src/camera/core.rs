use glam::{DMat4, DVec3};

use super::frustum::Frustum;
use super::host::SceneHost;

/// Camera state as seen by a projection picker.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Position in the frame given by `transform`.
    pub position: DVec3,
    /// Local-to-world transform; identity when `position` is already in
    /// world coordinates.
    pub transform: DMat4,
    /// Height above the reference surface.
    pub cartographic_height: f64,
    /// Installed frustum.
    pub frustum: Frustum,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            transform: DMat4::IDENTITY,
            cartographic_height: 0.0,
            frustum: Frustum::default(),
        }
    }
}

impl Camera {
    /// Camera at `position` in world coordinates with the given height above
    /// the surface.
    #[must_use]
    pub fn at(position: DVec3, cartographic_height: f64) -> Self {
        Self {
            position,
            cartographic_height,
            ..Self::default()
        }
    }
}

/// Minimal in-memory scene: one camera and a drawing buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// The scene camera.
    pub camera: Camera,
    /// Render target width in pixels.
    pub drawing_buffer_width: u32,
    /// Render target height in pixels.
    pub drawing_buffer_height: u32,
}

impl Scene {
    /// Scene with a default camera and the given drawing buffer size.
    #[must_use]
    pub fn new(drawing_buffer_width: u32, drawing_buffer_height: u32) -> Self {
        Self {
            camera: Camera::default(),
            drawing_buffer_width,
            drawing_buffer_height,
        }
    }

    /// Replace the camera.
    #[must_use]
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Update the drawing buffer size (e.g. after a window resize).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.drawing_buffer_width = width;
        self.drawing_buffer_height = height;
    }
}

impl SceneHost for Scene {
    fn frustum(&self) -> Frustum {
        self.camera.frustum
    }

    fn set_frustum(&mut self, frustum: Frustum) {
        self.camera.frustum = frustum;
    }

    fn drawing_buffer_width(&self) -> u32 {
        self.drawing_buffer_width
    }

    fn drawing_buffer_height(&self) -> u32 {
        self.drawing_buffer_height
    }

    fn camera_position(&self) -> DVec3 {
        self.camera.position
    }

    fn camera_cartographic_height(&self) -> f64 {
        self.camera.cartographic_height
    }

    fn camera_transform(&self) -> DMat4 {
        self.camera.transform
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::camera::frustum::OrthographicFrustum;

    #[test]
    fn drawing_buffer_aspect_is_unguarded() {
        let scene = Scene::new(800, 0);
        assert!(scene.drawing_buffer_aspect().is_infinite());
        let scene = Scene::new(800, 600);
        assert!((scene.drawing_buffer_aspect() - 800.0 / 600.0).abs() < 1e-12);
    }

    #[test]
    fn shared_scene_forwards_writes() {
        let scene = Rc::new(RefCell::new(Scene::new(4, 3)));
        let mut handle = Rc::clone(&scene);
        handle.set_frustum(OrthographicFrustum::default().into());
        assert!(scene.borrow().camera.frustum.is_orthographic());
        assert_eq!(handle.drawing_buffer_width(), 4);
    }

    #[test]
    fn resize_updates_buffer() {
        let mut scene = Scene::new(1, 1);
        scene.resize(1920, 1080);
        assert_eq!(scene.drawing_buffer_width(), 1920);
        assert_eq!(scene.drawing_buffer_height(), 1080);
    }
}
