//! Macro engine types and error definitions

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Stored message templates. Each lives under a fixed key in the binding store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Removal,
    Ban,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Removal, TemplateKind::Ban];

    /// Binding store key holding the template body
    pub fn store_key(&self) -> &'static str {
        match self {
            TemplateKind::Removal => "removal_body",
            TemplateKind::Ban => "ban_body",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Removal => "removal",
            TemplateKind::Ban => "ban",
        }
    }

    /// Whether `key` is the store key of any template
    pub fn is_template_key(key: &str) -> bool {
        Self::ALL.iter().any(|kind| kind.store_key() == key)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderator-supplied input fields that must not be empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    MacroName,
    MacroContent,
    Message,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::MacroName => f.write_str("macro name"),
            InputField::MacroContent => f.write_str("macro content"),
            InputField::Message => f.write_str("message"),
        }
    }
}

/// Macro engine error type.
///
/// Display strings are shown to the invoking moderator as-is.
#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Cannot reply as the {0} macro has not been set.")]
    TemplateNotConfigured(TemplateKind),

    #[error("Cannot overwrite a default macro.")]
    ReservedName(String),

    #[error("Cannot overwrite a stored message template.")]
    TemplateKeyConflict(String),

    #[error("The macro name may only contain letters, digits and underscores.")]
    InvalidName(String),

    #[error("The {0} cannot be empty.")]
    EmptyInput(InputField),

    #[error("Binding store error: {0}")]
    Store(#[from] StoreError),
}

impl MacroError {
    /// Whether the error was caused by moderator input or configuration rather than
    /// a failing backend
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, MacroError::Store(_))
    }
}

/// Result type for macro operations
pub type MacroResult<T> = Result<T, MacroError>;

/// A custom macro that was written to the binding store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMacro {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_keys() {
        assert_eq!(TemplateKind::Removal.store_key(), "removal_body");
        assert_eq!(TemplateKind::Ban.store_key(), "ban_body");
        assert!(TemplateKind::is_template_key("ban_body"));
        assert!(!TemplateKind::is_template_key("custom_rule"));
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            MacroError::TemplateNotConfigured(TemplateKind::Removal).to_string(),
            "Cannot reply as the removal macro has not been set."
        );
        assert_eq!(
            MacroError::EmptyInput(InputField::MacroName).to_string(),
            "The macro name cannot be empty."
        );
        assert_eq!(
            MacroError::EmptyInput(InputField::MacroContent).to_string(),
            "The macro content cannot be empty."
        );
        assert_eq!(
            MacroError::EmptyInput(InputField::Message).to_string(),
            "The message cannot be empty."
        );
        assert_eq!(
            MacroError::ReservedName("mod".into()).to_string(),
            "Cannot overwrite a default macro."
        );
    }

    #[test]
    fn test_store_errors_are_not_user_facing() {
        let err = MacroError::Store(StoreError::Unavailable("down".into()));
        assert!(!err.is_user_facing());
        assert!(MacroError::ReservedName("kind".into()).is_user_facing());
    }
}
