//! The picker's complete interactive vocabulary.
//!
//! Every user-facing operation (a button click, a keyboard shortcut, or a
//! programmatic call) is a `PickerCommand`. Consumers construct commands and
//! pass them to
//! [`ProjectionPicker::execute`](super::ProjectionPicker::execute).

use std::fmt;

use super::ProjectionPicker;
use crate::camera::host::SceneHost;

/// A discrete operation the projection picker can perform.
///
/// ```ignore
/// picker.execute(PickerCommand::ToggleDropDown);
/// picker.execute(PickerCommand::SwitchToOrthographic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerCommand {
    /// Show or hide the projection drop-down.
    ToggleDropDown,
    /// Install a fresh perspective frustum on the host camera.
    SwitchToPerspective,
    /// Install a fresh orthographic frustum on the host camera.
    SwitchToOrthographic,
}

impl PickerCommand {
    /// Every command, in toolbar order.
    pub const ALL: [Self; 3] = [
        Self::ToggleDropDown,
        Self::SwitchToPerspective,
        Self::SwitchToOrthographic,
    ];

    /// Whether a UI should allow invoking this command. The picker has no
    /// preconditions, so this is always true.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        true
    }

    /// Execute this command on the given picker.
    pub fn execute<H: SceneHost>(self, picker: &mut ProjectionPicker<H>) {
        match self {
            Self::ToggleDropDown => picker.toggle_drop_down(),
            Self::SwitchToPerspective => picker.switch_to_perspective(),
            Self::SwitchToOrthographic => picker.switch_to_orthographic(),
        }
    }
}

impl fmt::Display for PickerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ToggleDropDown => "toggle_drop_down",
            Self::SwitchToPerspective => "switch_to_perspective",
            Self::SwitchToOrthographic => "switch_to_orthographic",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_is_enabled() {
        assert!(PickerCommand::ALL.iter().all(|c| c.is_enabled()));
    }

    #[test]
    fn display_names() {
        assert_eq!(
            PickerCommand::SwitchToOrthographic.to_string(),
            "switch_to_orthographic"
        );
        assert_eq!(
            PickerCommand::ToggleDropDown.to_string(),
            "toggle_drop_down"
        );
    }
}
