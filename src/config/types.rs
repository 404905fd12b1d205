use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "wrapperKey")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// One `- field: message` line per error.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// How key paths are split and which wrapper key is unwrapped before lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupSettings {
    pub key_separator: String,

    /// Top-level key whose value replaces the document as lookup root.
    ///
    /// - `Some("translation")`: default
    /// - `None` (`null` in JSON): lookups always start at the document root
    pub wrapper_key: Option<String>,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self { key_separator: ".".to_string(), wrapper_key: Some("translation".to_string()) }
    }
}

impl LookupSettings {
    /// # Errors
    /// - Empty key separator
    /// - Empty wrapper key
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if let Some(key) = &self.wrapper_key
            && key.is_empty()
        {
            errors.push(ValidationError::new(
                "wrapperKey",
                "The wrapper key cannot be empty. Please specify a key (e.g., \"translation\"), or set it to null",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_settings_are_valid() {
        let settings = LookupSettings::default();

        assert_eq!(settings.key_separator, ".");
        assert_eq!(settings.wrapper_key.as_deref(), Some("translation"));
        assert!(settings.validate().is_ok());
    }

    #[rstest]
    #[case("{}", ".", Some("translation"))]
    #[case(r#"{"keySeparator": ":"}"#, ":", Some("translation"))]
    #[case(r#"{"wrapperKey": "messages"}"#, ".", Some("messages"))]
    #[case(r#"{"wrapperKey": null}"#, ".", None)]
    fn test_deserialize_with_defaults(
        #[case] json: &str,
        #[case] separator: &str,
        #[case] wrapper: Option<&str>,
    ) {
        let settings: LookupSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.key_separator, separator);
        assert_eq!(settings.wrapper_key.as_deref(), wrapper);
    }

    #[googletest::test]
    fn test_validate_collects_every_error() {
        let settings =
            LookupSettings { key_separator: String::new(), wrapper_key: Some(String::new()) };

        let errors = settings.validate().unwrap_err();

        expect_that!(errors.len(), eq(2));
        expect_that!(errors[0].field_path.as_str(), eq("keySeparator"));
        expect_that!(errors[1].field_path.as_str(), eq("wrapperKey"));
    }

    #[googletest::test]
    fn test_validation_errors_display() {
        let error = ConfigError::ValidationErrors(vec![ValidationError::new(
            "keySeparator",
            "cannot be empty",
        )]);

        let message = error.to_string();

        expect_that!(
            message.as_str(),
            eq("Configuration validation failed:\n  1. keySeparator - cannot be empty")
        );
    }
}
