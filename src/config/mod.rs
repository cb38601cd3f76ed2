//! Engine configuration: ingestion and normalization.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── entry      # TagEntry, Attributes, AttrValue
//! ├── error      # ConfigError, Diagnostic
//! ├── raw        # raw-value normalization (this is the option normalizer)
//! └── mod.rs     # EngineOptions (this file)
//! ```
//!
//! Options arrive as a dynamic value (JSON or TOML) or are built
//! programmatically. All raw ingestion funnels through one normalization
//! pass that rejects malformed shapes with errors naming the offending
//! option, so the resolution pipeline downstream only ever sees the strict
//! schema.
//!
//! # Example
//!
//! ```ignore
//! let options = EngineOptions::from_toml_str(r#"
//!     assets = ["vendor/analytics.js", { path = "theme.css" }]
//!     append = false
//!     publicPath = true
//!     hash = true
//! "#)?;
//! ```

mod entry;
mod error;
mod raw;

pub use entry::{AttrValue, Attributes, GlobSpec, TagEntry};
pub use error::{ConfigError, Diagnostic};

use serde_json::Value;

use crate::asset::{HashPolicy, PublicPathPolicy};

// ============================================================================
// EngineOptions
// ============================================================================

/// Normalized engine configuration.
///
/// Invariants: `js_extensions`/`css_extensions` are non-empty; every
/// non-glob `assets` entry carries a resolved kind; `files` empty means
/// every document is processed.
#[derive(Debug)]
pub struct EngineOptions {
    /// Mixed script/stylesheet declarations, split by inferred kind.
    pub assets: Vec<TagEntry>,
    /// Declarations that always render as `<link>`.
    pub links: Vec<TagEntry>,
    /// Declarations that always render as `<script>`.
    pub scripts: Vec<TagEntry>,
    /// Insert after existing tags instead of before them.
    pub append: bool,
    /// Engine-level public path policy.
    pub public_path: PublicPathPolicy,
    /// Extensions recognized as scripts.
    pub js_extensions: Vec<String>,
    /// Extensions recognized as stylesheets.
    pub css_extensions: Vec<String>,
    /// Document filename patterns to process (empty = all).
    pub files: Vec<String>,
    /// Cache-busting hash policy.
    pub hash: HashPolicy,
    /// Log a per-document injection summary.
    pub debug: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            links: Vec::new(),
            scripts: Vec::new(),
            append: false,
            public_path: PublicPathPolicy::default(),
            js_extensions: vec![".js".to_string()],
            css_extensions: vec![".css".to_string()],
            files: Vec::new(),
            hash: HashPolicy::default(),
            debug: false,
        }
    }
}

impl EngineOptions {
    /// Normalize a raw options value.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        raw::normalize(value)
    }

    /// Parse and normalize a JSON options document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Parse and normalize a TOML options document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let value: toml::Value =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let value = serde_json::to_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Attach a caller-supplied hash rewrite `(url, build_hash) -> url`.
    ///
    /// Function values cannot arrive through `from_value`; this is the
    /// function-typed `hash` option.
    pub fn with_hash_fn<F>(mut self, rewrite: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.hash = HashPolicy::Custom(Box::new(rewrite));
        self
    }

    /// Attach a caller-supplied public path rewrite
    /// `(path, build_public_path) -> url`; the function-typed `publicPath`
    /// option.
    pub fn with_public_path_fn<F>(mut self, rewrite: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.public_path = PublicPathPolicy::Custom(Box::new(rewrite));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_str() {
        let options = EngineOptions::from_toml_str(
            r#"
assets = ["foo.js", { path = "bar.css" }]
append = true
publicPath = "abc/"
"#,
        )
        .unwrap();
        assert_eq!(options.assets.len(), 2);
        assert!(options.append);
        assert!(matches!(options.public_path, PublicPathPolicy::Prefix(ref s) if s == "abc/"));
    }

    #[test]
    fn test_from_json_str_parse_error() {
        let err = EngineOptions::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_builder_fns_lower_to_strategies() {
        let options = EngineOptions::default()
            .with_hash_fn(|url, hash| format!("{url}#{hash}"))
            .with_public_path_fn(|path, _| format!("cdn/{path}"));
        assert_eq!(options.hash.apply("a.js", "h1"), "a.js#h1");
        assert!(matches!(options.public_path, PublicPathPolicy::Custom(_)));
    }
}
