//! Argument validation for the website tool.
//!
//! Errors are collected rather than returned on first failure so the caller
//! sees every missing field at once.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn empty_field(field: &str) -> Self {
        Self::new(field, format!("{field} is required and must not be empty"))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn to_message(&self) -> String {
        let details: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        format!(
            "Both businessName and description are required ({})",
            details.join("; ")
        )
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

pub fn validate_required(value: Option<&str>, field: &str, errors: &mut ValidationErrors) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        errors.add(ValidationError::empty_field(field));
    }
}

/// Arguments of the `build_website` tool as sent by the client.
///
/// Both fields are optional at the serde level so a missing field surfaces as
/// a validation error instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildWebsiteArgs {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Arguments that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBuildArgs {
    pub business_name: String,
    pub description: String,
}

impl BuildWebsiteArgs {
    pub fn new(business_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            business_name: Some(business_name.into()),
            description: Some(description.into()),
        }
    }

    pub fn validate(self) -> Result<ValidBuildArgs, String> {
        let mut errors = ValidationErrors::new();
        validate_required(self.business_name.as_deref(), "businessName", &mut errors);
        validate_required(self.description.as_deref(), "description", &mut errors);
        errors.into_result()?;

        Ok(ValidBuildArgs {
            business_name: self.business_name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_arguments() {
        let args = BuildWebsiteArgs::new("Joe's Pizza", "family pizzeria").validate();
        assert_eq!(
            args,
            Ok(ValidBuildArgs {
                business_name: "Joe's Pizza".to_string(),
                description: "family pizzeria".to_string(),
            })
        );
    }

    #[test]
    fn test_blank_description_rejected() {
        let err = BuildWebsiteArgs::new("Joe's Pizza", "   ").validate().unwrap_err();
        assert!(err.contains("[description]"));
        assert!(!err.contains("[businessName]"));
    }

    #[test]
    fn test_all_missing_fields_reported() {
        let err = BuildWebsiteArgs::default().validate().unwrap_err();
        assert!(err.starts_with("Both businessName and description are required"));
        assert!(err.contains("[businessName]"));
        assert!(err.contains("[description]"));
    }

    #[test]
    fn test_validation_errors_collect() {
        let mut errors = ValidationErrors::new();
        validate_required(Some("x"), "a", &mut errors);
        validate_required(None, "b", &mut errors);
        validate_required(Some(""), "c", &mut errors);
        assert_eq!(errors.len(), 2);
    }
}
