//! Caller-configurable picker settings.
//!
//! The tooltip labels are the only user-facing configuration. They are held
//! in memory and handed to the picker at construction; a host application
//! that embeds localized labels as TOML text can parse them with
//! [`PickerOptions::from_toml`].

mod tooltips;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tooltips::{
    TooltipOptions, DEFAULT_TOOLTIP_ORTHOGRAPHIC, DEFAULT_TOOLTIP_PERSPECTIVE,
};

use crate::error::PickerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML text (e.g. only overriding one tooltip) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct PickerOptions {
    /// Button tooltips.
    pub tooltips: TooltipOptions,
}

impl PickerOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(PickerOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, PickerError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tooltips() {
        let opts = PickerOptions::default();
        assert_eq!(opts.tooltips.perspective, "Perspective Projection");
        assert_eq!(opts.tooltips.orthographic, "Orthographic Projection");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[tooltips]
orthographic = "Orthografische Projektion"
"#;
        let opts = PickerOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.tooltips.orthographic, "Orthografische Projektion");
        assert_eq!(opts.tooltips.perspective, DEFAULT_TOOLTIP_PERSPECTIVE);
    }

    #[test]
    fn malformed_toml_is_options_parse_error() {
        let err = PickerOptions::from_toml("[tooltips\n").unwrap_err();
        assert!(matches!(err, PickerError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(PickerOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("tooltips"));

        let tooltips = &props["tooltips"]["properties"];
        assert!(tooltips.get("perspective").is_some());
        assert!(tooltips.get("orthographic").is_some());
    }
}
