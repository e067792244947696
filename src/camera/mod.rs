//! Camera-side collaborators of the projection picker.
//!
//! Provides the frustum variants, the host scene contract, and a small
//! in-memory scene implementing it.

/// In-memory camera and scene implementing [`host::SceneHost`].
pub mod core;
/// Perspective and orthographic frustum variants.
pub mod frustum;
/// Host scene contract consumed by the picker.
pub mod host;
