//! Projection picker view model.
//!
//! Holds the observable state behind a toolbar button that switches the host
//! camera between perspective and orthographic projection, and performs the
//! switches by installing freshly built frusta on the host.

pub mod command;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::DMat4;

use self::command::PickerCommand;
use crate::camera::frustum::{Frustum, OrthographicFrustum, PerspectiveFrustum};
use crate::camera::host::SceneHost;
use crate::error::PickerError;
use crate::observable::{Observable, Signal, SubscriptionId};
use crate::options::PickerOptions;

/// Field of view installed by [`ProjectionPicker::switch_to_perspective`].
pub const PERSPECTIVE_FOV_DEGREES: f64 = 60.0;
/// Factor applied to the drawing-buffer aspect ratio for orthographic views.
pub const ORTHOGRAPHIC_ASPECT_SCALE: f64 = 0.3;

/// Observable fields of a [`ProjectionPicker`], used to address a
/// subscription when unsubscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerField {
    /// [`ProjectionPicker::drop_down_visible`].
    DropDownVisible,
    /// [`ProjectionPicker::is_orthographic`].
    Orthographic,
    /// [`ProjectionPicker::tooltip_perspective`].
    TooltipPerspective,
    /// [`ProjectionPicker::tooltip_orthographic`].
    TooltipOrthographic,
    /// [`ProjectionPicker::selected_tooltip`].
    SelectedTooltip,
}

/// View model for the projection picker button.
///
/// `orthographic` is a cache of the last switch this picker performed. It is
/// not re-read from the host, so it goes stale if other code replaces the
/// camera frustum. [`selected_tooltip`](Self::selected_tooltip) always
/// inspects the live host frustum instead.
#[derive(Debug)]
pub struct ProjectionPicker<H> {
    scene: H,
    orthographic: Observable<bool>,
    drop_down_visible: Observable<bool>,
    tooltip_perspective: Observable<String>,
    tooltip_orthographic: Observable<String>,
    selected_tooltip_changed: Signal<String>,
    destroyed: bool,
}

// ── Construction ─────────────────────────────────────────────────────────

impl<H: SceneHost> ProjectionPicker<H> {
    /// Bind a picker to `scene` with default tooltips.
    #[must_use]
    pub fn new(scene: H) -> Self {
        Self::with_options(scene, &PickerOptions::default())
    }

    /// Bind a picker to `scene`, taking tooltips from `options`.
    #[must_use]
    pub fn with_options(scene: H, options: &PickerOptions) -> Self {
        let orthographic = scene.frustum().is_orthographic();
        log::debug!(
            "projection picker bound (orthographic: {orthographic})"
        );
        Self {
            scene,
            orthographic: Observable::new(orthographic),
            drop_down_visible: Observable::new(false),
            tooltip_perspective: Observable::new(
                options.tooltips.perspective.clone(),
            ),
            tooltip_orthographic: Observable::new(
                options.tooltips.orthographic.clone(),
            ),
            selected_tooltip_changed: Signal::new(),
            destroyed: false,
        }
    }
}

impl<S: SceneHost> ProjectionPicker<Rc<RefCell<S>>> {
    /// Bind a picker to a scene shared with other code.
    ///
    /// Fails with [`PickerError::InvalidArgument`] if the scene is gone.
    pub fn from_shared(scene: &Weak<RefCell<S>>) -> Result<Self, PickerError> {
        let scene = scene.upgrade().ok_or_else(|| {
            PickerError::InvalidArgument("scene is required.".to_owned())
        })?;
        Ok(Self::new(scene))
    }
}

// ── Accessors ────────────────────────────────────────────────────────────

impl<H: SceneHost> ProjectionPicker<H> {
    /// The bound scene.
    #[must_use]
    pub fn scene(&self) -> &H {
        &self.scene
    }

    /// Mutable access to the bound scene.
    pub fn scene_mut(&mut self) -> &mut H {
        &mut self.scene
    }

    /// Whether the last switch performed by this picker was orthographic.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        self.orthographic.value()
    }

    /// Whether the drop-down is currently shown.
    #[must_use]
    pub fn drop_down_visible(&self) -> bool {
        self.drop_down_visible.value()
    }

    /// Perspective button tooltip.
    #[must_use]
    pub fn tooltip_perspective(&self) -> &str {
        self.tooltip_perspective.get()
    }

    /// Orthographic button tooltip.
    #[must_use]
    pub fn tooltip_orthographic(&self) -> &str {
        self.tooltip_orthographic.get()
    }

    /// Tooltip matching the projection currently installed on the host.
    #[must_use]
    pub fn selected_tooltip(&self) -> &str {
        if self.scene.frustum().is_orthographic() {
            self.tooltip_orthographic()
        } else {
            self.tooltip_perspective()
        }
    }

    /// Replace the perspective tooltip.
    pub fn set_tooltip_perspective(&mut self, tooltip: impl Into<String>) {
        if self.tooltip_perspective.set(tooltip.into()) {
            self.publish_selected_tooltip();
        }
    }

    /// Replace the orthographic tooltip.
    pub fn set_tooltip_orthographic(&mut self, tooltip: impl Into<String>) {
        if self.tooltip_orthographic.set(tooltip.into()) {
            self.publish_selected_tooltip();
        }
    }
}

// ── Actions ──────────────────────────────────────────────────────────────

impl<H: SceneHost> ProjectionPicker<H> {
    /// Run a command against this picker.
    pub fn execute(&mut self, command: PickerCommand) {
        command.execute(self);
    }

    /// Show the drop-down if hidden, hide it if shown.
    pub fn toggle_drop_down(&mut self) {
        if self.ignore_after_destroy(PickerCommand::ToggleDropDown) {
            return;
        }
        let visible = !self.drop_down_visible.value();
        let _ = self.drop_down_visible.set(visible);
    }

    /// Install a new perspective frustum sized to the drawing buffer.
    pub fn switch_to_perspective(&mut self) {
        if self.ignore_after_destroy(PickerCommand::SwitchToPerspective) {
            return;
        }
        let frustum = PerspectiveFrustum {
            aspect_ratio: self.scene.drawing_buffer_aspect(),
            fov: PERSPECTIVE_FOV_DEGREES.to_radians(),
            ..PerspectiveFrustum::default()
        };
        log::debug!(
            "switching to perspective (aspect {:.4}, fov {:.4} rad)",
            frustum.aspect_ratio,
            frustum.fov
        );
        self.scene.set_frustum(Frustum::Perspective(frustum));
        let _ = self.orthographic.set(false);
        self.publish_selected_tooltip();
    }

    /// Install a new orthographic frustum.
    ///
    /// The width is the camera's height above the surface when the camera
    /// transform is exactly the identity, and the distance of the camera
    /// from the origin of its reference frame otherwise.
    pub fn switch_to_orthographic(&mut self) {
        if self.ignore_after_destroy(PickerCommand::SwitchToOrthographic) {
            return;
        }
        let width = if self.scene.camera_transform() == DMat4::IDENTITY {
            self.scene.camera_cartographic_height()
        } else {
            self.scene.camera_position().length()
        };
        let frustum = OrthographicFrustum {
            aspect_ratio: self.scene.drawing_buffer_aspect()
                * ORTHOGRAPHIC_ASPECT_SCALE,
            width,
            ..OrthographicFrustum::default()
        };
        log::debug!(
            "switching to orthographic (aspect {:.4}, width {:.4})",
            frustum.aspect_ratio,
            frustum.width
        );
        self.scene.set_frustum(Frustum::Orthographic(frustum));
        let _ = self.orthographic.set(true);
        self.publish_selected_tooltip();
    }

    fn publish_selected_tooltip(&mut self) {
        let tooltip = self.selected_tooltip().to_owned();
        self.selected_tooltip_changed.emit(&tooltip);
    }

    fn ignore_after_destroy(&self, command: PickerCommand) -> bool {
        if self.destroyed {
            log::warn!("ignoring {command} on a destroyed projection picker");
        }
        self.destroyed
    }
}

// ── Subscriptions ────────────────────────────────────────────────────────

impl<H> ProjectionPicker<H> {
    /// Subscribe to drop-down visibility changes.
    pub fn on_drop_down_visible_changed(
        &mut self,
        listener: impl FnMut(&bool) + 'static,
    ) -> SubscriptionId {
        self.drop_down_visible.subscribe(listener)
    }

    /// Subscribe to changes of the cached orthographic flag.
    pub fn on_orthographic_changed(
        &mut self,
        listener: impl FnMut(&bool) + 'static,
    ) -> SubscriptionId {
        self.orthographic.subscribe(listener)
    }

    /// Subscribe to perspective tooltip changes.
    pub fn on_tooltip_perspective_changed(
        &mut self,
        listener: impl FnMut(&String) + 'static,
    ) -> SubscriptionId {
        self.tooltip_perspective.subscribe(listener)
    }

    /// Subscribe to orthographic tooltip changes.
    pub fn on_tooltip_orthographic_changed(
        &mut self,
        listener: impl FnMut(&String) + 'static,
    ) -> SubscriptionId {
        self.tooltip_orthographic.subscribe(listener)
    }

    /// Subscribe to the selected tooltip. The listener receives the
    /// recomputed tooltip after every projection switch and after any
    /// tooltip text change.
    pub fn on_selected_tooltip_changed(
        &mut self,
        listener: impl FnMut(&String) + 'static,
    ) -> SubscriptionId {
        self.selected_tooltip_changed.subscribe(listener)
    }

    /// Remove a subscription made through one of the `on_*` methods.
    pub fn unsubscribe(
        &mut self,
        field: PickerField,
        id: SubscriptionId,
    ) -> bool {
        match field {
            PickerField::DropDownVisible => {
                self.drop_down_visible.unsubscribe(id)
            }
            PickerField::Orthographic => self.orthographic.unsubscribe(id),
            PickerField::TooltipPerspective => {
                self.tooltip_perspective.unsubscribe(id)
            }
            PickerField::TooltipOrthographic => {
                self.tooltip_orthographic.unsubscribe(id)
            }
            PickerField::SelectedTooltip => {
                self.selected_tooltip_changed.unsubscribe(id)
            }
        }
    }

    /// Total number of live subscriptions across all fields.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.drop_down_visible.listener_count()
            + self.orthographic.listener_count()
            + self.tooltip_perspective.listener_count()
            + self.tooltip_orthographic.listener_count()
            + self.selected_tooltip_changed.listener_count()
    }
}

// ── Teardown ─────────────────────────────────────────────────────────────

impl<H> ProjectionPicker<H> {
    /// Whether [`destroy`](Self::destroy) has been called.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Release every subscription and mark the picker destroyed. Actions
    /// invoked afterwards are ignored.
    pub fn destroy(&mut self) {
        self.drop_down_visible.clear_listeners();
        self.orthographic.clear_listeners();
        self.tooltip_perspective.clear_listeners();
        self.tooltip_orthographic.clear_listeners();
        self.selected_tooltip_changed.clear();
        self.destroyed = true;
    }
}
