//! Configuration error types.
//!
//! Message text is a compatibility surface: hosts match on it and the test
//! suite asserts it verbatim, so every variant names the offending option
//! (and value, where one exists).

use owo_colors::OwoColorize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Errors detected while normalizing a raw options value.
///
/// All variants are fatal for the engine instance under construction and
/// are never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("options could not be parsed ({0})")]
    Parse(String),

    #[error("options should be an object")]
    NotAnObject,

    #[error("options.{0} should be a string, object, or array")]
    EntryList(&'static str),

    #[error("options.{0} items must be an object or string")]
    EntryItem(&'static str),

    #[error("options.{0} object must have a string path property")]
    EntryPath(&'static str),

    #[error("options.{0} object publicPath should be a boolean or function")]
    EntryPublicPath(&'static str),

    #[error("options.{0} object should have an object attributes property")]
    EntryAttributes(&'static str),

    #[error("options.{0} object attribute values should strings, booleans or numbers")]
    EntryAttributeValue(&'static str),

    #[error("options.{0} object should have a string glob property")]
    EntryGlob(&'static str),

    #[error("options.{0} object should have a string globBase property")]
    EntryGlobBase(&'static str),

    #[error("options.{0} object should have a string assetPath property")]
    EntryAssetPath(&'static str),

    #[error("options.{0} object asset should be a boolean")]
    EntryAssetFlag(&'static str),

    #[error("options.{option} type must be css or js ({value})")]
    EntryType { option: &'static str, value: String },

    #[error("options.{option} could not determine asset type for ({path})")]
    UnresolvableType { option: &'static str, path: String },

    #[error("options.{0} should be a string or array of strings")]
    Extensions(&'static str),

    #[error("options.{0} array should only contain strings")]
    ExtensionsItem(&'static str),

    #[error("options.files should be a string or array")]
    Files,

    #[error("options.files should be an array of strings")]
    FilesItem,

    #[error("options should specify a publicPath that is either a boolean or a string")]
    PublicPath,

    #[error("options.hash should be a boolean or a function")]
    Hash,

    #[error("options.append should be a boolean")]
    Append,

    #[error("options.debug should be a boolean")]
    Debug,
}

// ============================================================================
// Diagnostic
// ============================================================================

/// Pretty-printable wrapper for surfacing an error in a host build's
/// terminal output.
#[derive(Debug)]
pub struct Diagnostic {
    /// Error description.
    pub message: String,
    /// Fix hint (optional).
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<&ConfigError> for Diagnostic {
    fn from(err: &ConfigError) -> Self {
        Self::new(err.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_option() {
        let err = ConfigError::EntryList("assets");
        assert_eq!(
            err.to_string(),
            "options.assets should be a string, object, or array"
        );

        let err = ConfigError::UnresolvableType {
            option: "assets",
            path: "bad.txt".into(),
        };
        assert_eq!(
            err.to_string(),
            "options.assets could not determine asset type for (bad.txt)"
        );
    }

    #[test]
    fn test_diagnostic_display_contains_message() {
        let diag = Diagnostic::from(&ConfigError::Append).with_hint("use true or false");
        let rendered = format!("{diag}");
        assert!(rendered.contains("options.append should be a boolean"));
        assert!(rendered.contains("use true or false"));
    }
}
