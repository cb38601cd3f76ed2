//! Cache-busting hash injection.
//!
//! Rewrites a resolved URL to embed the build's content hash so browsers
//! re-fetch assets when a compilation changes. Runs after public-path
//! prefixing, on the fully qualified URL.

use std::fmt;

/// How the build hash is folded into a resolved URL.
pub enum HashPolicy {
    /// Leave URLs untouched.
    Off,
    /// Append `?<hash>` to the URL (nothing when the hash is empty).
    Append,
    /// Caller-supplied rewrite `(url, build_hash) -> url`, used verbatim.
    /// Allows embedding the hash mid-filename (e.g. replacing a `[hash]`
    /// placeholder) instead of appending a query string.
    Custom(Box<dyn Fn(&str, &str) -> String + Send + Sync>),
}

impl Default for HashPolicy {
    fn default() -> Self {
        Self::Off
    }
}

impl fmt::Debug for HashPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "Off"),
            Self::Append => write!(f, "Append"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl HashPolicy {
    /// Lower a boolean shorthand.
    pub fn from_bool(enabled: bool) -> Self {
        if enabled { Self::Append } else { Self::Off }
    }

    /// Apply the policy to a fully qualified URL.
    pub fn apply(&self, url: &str, build_hash: &str) -> String {
        match self {
            Self::Off => url.to_string(),
            Self::Append => {
                if build_hash.is_empty() {
                    url.to_string()
                } else {
                    format!("{url}?{build_hash}")
                }
            }
            Self::Custom(rewrite) => rewrite(url, build_hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_passes_through() {
        assert_eq!(HashPolicy::Off.apply("myPublic/foobar.css", "abc123"), "myPublic/foobar.css");
    }

    #[test]
    fn test_append_adds_query() {
        assert_eq!(
            HashPolicy::Append.apply("myPublic/foobar.css", "abc123"),
            "myPublic/foobar.css?abc123"
        );
    }

    #[test]
    fn test_append_skips_empty_hash() {
        assert_eq!(HashPolicy::Append.apply("foobar.css", ""), "foobar.css");
    }

    #[test]
    fn test_custom_rewrite_verbatim() {
        let policy = HashPolicy::Custom(Box::new(|url, hash| url.replace("[hash]", hash)));
        assert_eq!(
            policy.apply("foobar.[hash].css", "abc123"),
            "foobar.abc123.css"
        );
        // No extra query string is appended around the rewrite
        assert!(!policy.apply("foobar.[hash].css", "abc123").contains('?'));
    }

    #[test]
    fn test_from_bool() {
        assert!(matches!(HashPolicy::from_bool(true), HashPolicy::Append));
        assert!(matches!(HashPolicy::from_bool(false), HashPolicy::Off));
    }
}
