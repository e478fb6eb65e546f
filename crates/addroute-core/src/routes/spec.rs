//! Route specification and resource-name validation

use thiserror::Error;

/// Why a resource name was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("resource name must not be empty")]
    Empty,

    #[error("resource name must not start with a digit: '{0}'")]
    LeadingDigit(String),

    #[error("resource name may only contain letters, digits, and underscores: '{0}'")]
    InvalidChar(String),
}

/// The resolved (name, protection-flag) pair driving one scaffold operation
///
/// Immutable after creation; lives for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    name: String,
    protected: bool,
}

impl RouteSpec {
    /// Validate the resource name and build a spec.
    ///
    /// The name ends up both as a JS identifier fragment and as a file-path
    /// segment, so anything outside `[A-Za-z0-9_]` is rejected rather than
    /// sanitized.
    pub fn new(name: impl Into<String>, protected: bool) -> Result<Self, NameError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, protected })
    }

    /// The resource name, e.g. `widget`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the handlers are gated behind the token-verification middleware
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// File stem of the generated router, e.g. `widgetRouter`
    pub fn router_stem(&self) -> String {
        format!("{}Router", self.name)
    }
}

/// Check that a name is usable as both an identifier token and a path segment
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(NameError::LeadingDigit(name.to_string()));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(NameError::InvalidChar(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(validate_name("widget").is_ok());
        assert!(validate_name("Widget").is_ok());
        assert!(validate_name("user_profile").is_ok());
        assert!(validate_name("v2widget").is_ok());
        assert!(validate_name("_internal").is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert_eq!(
            validate_name("2widget"),
            Err(NameError::LeadingDigit("2widget".to_string()))
        );
    }

    #[test]
    fn test_rejects_path_and_identifier_hazards() {
        for name in ["../widget", "wid get", "widget-v2", "widget/", "wid.get"] {
            assert!(matches!(
                validate_name(name),
                Err(NameError::InvalidChar(_))
            ));
        }
    }

    #[test]
    fn test_spec_carries_name_and_flag() {
        let spec = RouteSpec::new("widget", true).unwrap();
        assert_eq!(spec.name(), "widget");
        assert!(spec.is_protected());
        assert_eq!(spec.router_stem(), "widgetRouter");
    }

    #[test]
    fn test_spec_rejects_invalid_name() {
        assert!(RouteSpec::new("../etc", false).is_err());
    }
}
