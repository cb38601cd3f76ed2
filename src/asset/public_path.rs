//! Public base path resolution for computed asset URLs.
//!
//! Boolean and string shorthands are lowered at normalization time into the
//! same strategy enums the caller-supplied functions use, so the resolution
//! step only ever evaluates one uniform contract.

use std::fmt;

/// Rewrite signature shared by the function-valued policies:
/// `(unprefixed path, build public base path) -> url`.
pub type PathRewrite = Box<dyn Fn(&str, &str) -> String + Send + Sync>;

// ============================================================================
// Policies
// ============================================================================

/// Engine-level public path policy.
pub enum PublicPathPolicy {
    /// `true` prefixes with the build's public base path, `false` disables
    /// prefixing.
    Use(bool),
    /// Prefix with a literal string instead of the build's public path.
    Prefix(String),
    /// Caller-supplied rewrite, used verbatim.
    Custom(PathRewrite),
}

impl Default for PublicPathPolicy {
    fn default() -> Self {
        Self::Use(true)
    }
}

impl fmt::Debug for PublicPathPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Use(b) => write!(f, "Use({b})"),
            Self::Prefix(s) => write!(f, "Prefix({s:?})"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Per-entry override. Takes precedence over the engine-level policy.
pub enum PublicPathOverride {
    Use(bool),
    Custom(PathRewrite),
}

impl fmt::Debug for PublicPathOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Use(b) => write!(f, "Use({b})"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// True for URLs the resolver must never prefix: URLs carrying a scheme
/// (`https://cdn/x.js`, `data:...`) and protocol-relative URLs (`//cdn/x.js`).
pub fn is_remote_url(path: &str) -> bool {
    path.starts_with("//") || url::Url::parse(path).is_ok()
}

/// Compute the public URL for an asset path.
///
/// Precedence: remote URLs pass through untouched; then the per-entry
/// override; then the engine-level policy.
pub fn resolve(
    path: &str,
    entry_override: Option<&PublicPathOverride>,
    policy: &PublicPathPolicy,
    build_public_path: &str,
) -> String {
    if is_remote_url(path) {
        return path.to_string();
    }

    match entry_override {
        Some(PublicPathOverride::Use(true)) => join_url(build_public_path, path),
        Some(PublicPathOverride::Use(false)) => path.to_string(),
        Some(PublicPathOverride::Custom(rewrite)) => rewrite(path, build_public_path),
        None => match policy {
            PublicPathPolicy::Use(true) => join_url(build_public_path, path),
            PublicPathPolicy::Use(false) => path.to_string(),
            PublicPathPolicy::Prefix(prefix) => join_url(prefix, path),
            PublicPathPolicy::Custom(rewrite) => rewrite(path, build_public_path),
        },
    }
}

/// Join a prefix and a path with exactly one `/` between them.
///
/// An empty prefix leaves the path untouched.
pub fn join_url(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_single_separator() {
        assert_eq!(join_url("abc", "foo.js"), "abc/foo.js");
        assert_eq!(join_url("abc/", "foo.js"), "abc/foo.js");
        assert_eq!(join_url("abc/", "/foo.js"), "abc/foo.js");
        assert_eq!(join_url("", "foo.js"), "foo.js");
    }

    #[test]
    fn test_remote_urls_never_prefixed() {
        let policy = PublicPathPolicy::Use(true);
        assert_eq!(
            resolve("http://www.foo.com/foobar.js", None, &policy, "thePublicPath"),
            "http://www.foo.com/foobar.js"
        );
        assert_eq!(
            resolve("//www.foo.com/foobar.js", None, &policy, "thePublicPath"),
            "//www.foo.com/foobar.js"
        );
    }

    #[test]
    fn test_engine_policy_boolean() {
        assert_eq!(
            resolve("foobar.js", None, &PublicPathPolicy::Use(true), "thePublicPath"),
            "thePublicPath/foobar.js"
        );
        assert_eq!(
            resolve("foobar.js", None, &PublicPathPolicy::Use(false), "thePublicPath"),
            "foobar.js"
        );
    }

    #[test]
    fn test_engine_policy_literal_prefix() {
        let policy = PublicPathPolicy::Prefix("abc/".into());
        assert_eq!(
            resolve("foobar.js", None, &policy, "thePublicPath"),
            "abc/foobar.js"
        );
        // Empty literal prefix means no prefixing
        let policy = PublicPathPolicy::Prefix(String::new());
        assert_eq!(resolve("foobar.js", None, &policy, "thePublicPath"), "foobar.js");
    }

    #[test]
    fn test_entry_override_beats_engine_policy() {
        let policy = PublicPathPolicy::Use(true);
        assert_eq!(
            resolve(
                "foobar.js",
                Some(&PublicPathOverride::Use(false)),
                &policy,
                "thePublicPath"
            ),
            "foobar.js"
        );

        let policy = PublicPathPolicy::Use(false);
        assert_eq!(
            resolve(
                "foobar.js",
                Some(&PublicPathOverride::Use(true)),
                &policy,
                "thePublicPath"
            ),
            "thePublicPath/foobar.js"
        );
    }

    #[test]
    fn test_custom_rewrite_used_verbatim() {
        let policy = PublicPathPolicy::Custom(Box::new(|path, _| format!("cdn/{path}")));
        assert_eq!(resolve("foobar.js", None, &policy, "ignored"), "cdn/foobar.js");

        let over = PublicPathOverride::Custom(Box::new(|path, base| join_url(base, path)));
        assert_eq!(
            resolve("foobar.js", Some(&over), &PublicPathPolicy::Use(false), "myPublic"),
            "myPublic/foobar.js"
        );
    }
}
