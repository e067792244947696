use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default label for the perspective button.
pub const DEFAULT_TOOLTIP_PERSPECTIVE: &str = "Perspective Projection";
/// Default label for the orthographic button.
pub const DEFAULT_TOOLTIP_ORTHOGRAPHIC: &str = "Orthographic Projection";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tooltips", inline)]
#[serde(default)]
/// Labels shown on the projection picker buttons.
pub struct TooltipOptions {
    /// Tooltip for the perspective projection button.
    #[schemars(title = "Perspective")]
    pub perspective: String,
    /// Tooltip for the orthographic projection button.
    #[schemars(title = "Orthographic")]
    pub orthographic: String,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            perspective: DEFAULT_TOOLTIP_PERSPECTIVE.to_owned(),
            orthographic: DEFAULT_TOOLTIP_ORTHOGRAPHIC.to_owned(),
        }
    }
}
