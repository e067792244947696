//! Camera frustum variants.
//!
//! A host camera holds exactly one [`Frustum`] at a time. Each variant is
//! built fresh and then has its parameters assigned; the parameters stay
//! `NaN` until they are.

use std::fmt;

use glam::DMat4;

/// Default near clipping plane distance.
pub const DEFAULT_NEAR: f64 = 1.0;
/// Default far clipping plane distance.
pub const DEFAULT_FAR: f64 = 500_000_000.0;

/// Which projection a frustum produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// Tapered viewing volume.
    Perspective,
    /// Parallel-sided viewing volume.
    Orthographic,
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perspective => f.write_str("perspective"),
            Self::Orthographic => f.write_str("orthographic"),
        }
    }
}

/// Perspective viewing volume defined by field of view and aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveFrustum {
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Field of view in radians, applied to the larger viewport dimension.
    pub fov: f64,
    /// Near clipping plane distance.
    pub near: f64,
    /// Far clipping plane distance.
    pub far: f64,
}

impl Default for PerspectiveFrustum {
    fn default() -> Self {
        Self {
            aspect_ratio: f64::NAN,
            fov: f64::NAN,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl PerspectiveFrustum {
    /// Vertical field of view in radians.
    ///
    /// On portrait viewports `fov` is already vertical; on landscape ones it
    /// is horizontal and gets narrowed by the aspect ratio.
    #[must_use]
    pub fn fovy(&self) -> f64 {
        if self.aspect_ratio <= 1.0 {
            self.fov
        } else {
            ((self.fov * 0.5).tan() / self.aspect_ratio).atan() * 2.0
        }
    }

    /// Right-handed projection matrix with a [0,1] depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.fovy(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }
}

/// Orthographic viewing volume defined by width and aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicFrustum {
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Width of the viewing volume in world units.
    pub width: f64,
    /// Near clipping plane distance.
    pub near: f64,
    /// Far clipping plane distance.
    pub far: f64,
}

impl Default for OrthographicFrustum {
    fn default() -> Self {
        Self {
            aspect_ratio: f64::NAN,
            width: f64::NAN,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl OrthographicFrustum {
    /// Height of the viewing volume in world units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.width / self.aspect_ratio
    }

    /// Right-handed projection matrix centered on the view axis.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        let half_w = self.width * 0.5;
        let half_h = self.height() * 0.5;
        DMat4::orthographic_rh(
            -half_w, half_w, -half_h, half_h, self.near, self.far,
        )
    }
}

/// The frustum currently installed on a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frustum {
    /// Perspective projection.
    Perspective(PerspectiveFrustum),
    /// Orthographic projection.
    Orthographic(OrthographicFrustum),
}

impl Default for Frustum {
    fn default() -> Self {
        Self::Perspective(PerspectiveFrustum::default())
    }
}

impl From<PerspectiveFrustum> for Frustum {
    fn from(f: PerspectiveFrustum) -> Self {
        Self::Perspective(f)
    }
}

impl From<OrthographicFrustum> for Frustum {
    fn from(f: OrthographicFrustum) -> Self {
        Self::Orthographic(f)
    }
}

impl Frustum {
    /// Projection produced by this frustum.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::Perspective(_) => ProjectionKind::Perspective,
            Self::Orthographic(_) => ProjectionKind::Orthographic,
        }
    }

    /// Whether this is the orthographic variant.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        matches!(self, Self::Orthographic(_))
    }

    /// Aspect ratio of either variant.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        match self {
            Self::Perspective(p) => p.aspect_ratio,
            Self::Orthographic(o) => o.aspect_ratio,
        }
    }

    /// Projection matrix of either variant.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        match self {
            Self::Perspective(p) => p.projection_matrix(),
            Self::Orthographic(o) => o.projection_matrix(),
        }
    }

    /// The perspective parameters, if this is a perspective frustum.
    #[must_use]
    pub fn as_perspective(&self) -> Option<&PerspectiveFrustum> {
        match self {
            Self::Perspective(p) => Some(p),
            Self::Orthographic(_) => None,
        }
    }

    /// The orthographic parameters, if this is an orthographic frustum.
    #[must_use]
    pub fn as_orthographic(&self) -> Option<&OrthographicFrustum> {
        match self {
            Self::Orthographic(o) => Some(o),
            Self::Perspective(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec4;

    use super::*;

    #[test]
    fn default_frustum_is_unassigned_perspective() {
        let f = Frustum::default();
        assert_eq!(f.kind(), ProjectionKind::Perspective);
        assert!(!f.is_orthographic());
        let p = f.as_perspective().unwrap();
        assert!(p.fov.is_nan());
        assert!(p.aspect_ratio.is_nan());
        assert_eq!(p.near, DEFAULT_NEAR);
        assert_eq!(p.far, DEFAULT_FAR);
    }

    #[test]
    fn fovy_uses_fov_on_portrait_viewports() {
        let p = PerspectiveFrustum {
            aspect_ratio: 0.5,
            fov: 1.0,
            ..PerspectiveFrustum::default()
        };
        assert_eq!(p.fovy(), 1.0);
    }

    #[test]
    fn fovy_narrows_on_landscape_viewports() {
        let p = PerspectiveFrustum {
            aspect_ratio: 2.0,
            fov: 60f64.to_radians(),
            ..PerspectiveFrustum::default()
        };
        let expected = ((30f64.to_radians()).tan() / 2.0).atan() * 2.0;
        assert!((p.fovy() - expected).abs() < 1e-12);
        assert!(p.fovy() < p.fov);
    }

    #[test]
    fn orthographic_height_follows_aspect() {
        let o = OrthographicFrustum {
            aspect_ratio: 2.0,
            width: 100.0,
            ..OrthographicFrustum::default()
        };
        assert_eq!(o.height(), 50.0);
    }

    #[test]
    fn orthographic_projection_maps_half_width_to_ndc_edge() {
        let o = OrthographicFrustum {
            aspect_ratio: 1.0,
            width: 20.0,
            near: 1.0,
            far: 100.0,
        };
        let clip = o.projection_matrix() * DVec4::new(10.0, 0.0, -1.0, 1.0);
        assert!((clip.x - 1.0).abs() < 1e-12);
        assert!(clip.z.abs() < 1e-12);
    }

    #[test]
    fn variant_accessors() {
        let f: Frustum = OrthographicFrustum::default().into();
        assert!(f.is_orthographic());
        assert!(f.as_orthographic().is_some());
        assert!(f.as_perspective().is_none());
        assert_eq!(f.kind().to_string(), "orthographic");
    }
}
