//! Crate-level error types.

use std::fmt;

/// Errors produced by the projection picker crate.
#[derive(Debug)]
pub enum PickerError {
    /// A required argument was missing or unusable at construction time.
    InvalidArgument(String),
    /// TOML options parsing failure.
    OptionsParse(String),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => {
                write!(f, "invalid argument: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PickerError {}

impl From<toml::de::Error> for PickerError {
    fn from(e: toml::de::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = PickerError::InvalidArgument("scene is required.".to_owned());
        assert_eq!(err.to_string(), "invalid argument: scene is required.");
        assert!(err.source().is_none());
    }

    #[test]
    fn toml_error_becomes_options_parse() {
        let toml_err = toml::from_str::<toml::Value>("= 1").unwrap_err();
        let err = PickerError::from(toml_err);
        assert!(matches!(err, PickerError::OptionsParse(_)));
        assert!(err.to_string().starts_with("options parse error: "));
    }
}
