//! File matching: glob expansion for asset declarations and the `files`
//! document filter.
//!
//! The matcher is a pure lookup against the already-materialized output
//! set: `(base, pattern) -> ordered relative file names`. The engine never
//! races the build's own file emission because it only runs once all output
//! assets for the current compilation are known.

use std::path::Path;

/// Expands a glob pattern rooted at a base directory into the relative
/// file names it matches, preserving a deterministic order.
pub trait FileMatcher {
    fn expand(&self, base: &str, pattern: &str) -> Vec<String>;
}

// ============================================================================
// GlobMatcher (filesystem-backed)
// ============================================================================

/// Matches against the real filesystem using the `glob` crate, in its
/// sorted traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobMatcher;

impl FileMatcher for GlobMatcher {
    fn expand(&self, base: &str, pattern: &str) -> Vec<String> {
        let root = Path::new(base);
        let full = root.join(pattern);
        let Some(full) = full.to_str() else {
            return Vec::new();
        };
        let Ok(paths) = glob::glob(full) else {
            return Vec::new();
        };

        paths
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .filter_map(|p| {
                p.strip_prefix(root)
                    .ok()
                    .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            })
            .collect()
    }
}

// ============================================================================
// ListMatcher (emitted-output-backed)
// ============================================================================

/// Matches against an in-memory list of emitted output file paths, in list
/// order. Hosts that track their compilation's output set use this instead
/// of touching the disk.
#[derive(Debug, Clone, Default)]
pub struct ListMatcher {
    files: Vec<String>,
}

impl ListMatcher {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileMatcher for ListMatcher {
    fn expand(&self, base: &str, pattern: &str) -> Vec<String> {
        let Ok(pattern) = glob::Pattern::new(pattern) else {
            return Vec::new();
        };
        let prefix = if base.is_empty() || base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };

        self.files
            .iter()
            .filter_map(|file| file.strip_prefix(&prefix))
            .filter(|rel| pattern.matches(rel))
            .map(str::to_string)
            .collect()
    }
}

// ============================================================================
// Document filter
// ============================================================================

/// Check a document filename against the `files` patterns.
///
/// An empty pattern list processes every document. Patterns use standard
/// `*`/`?` glob wildcards.
pub fn document_matches(patterns: &[String], filename: &str) -> bool {
    if patterns.is_empty() {
        return true;
    }
    patterns
        .iter()
        .any(|p| glob::Pattern::new(p).is_ok_and(|g| g.matches(filename)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("glob.js"), "console.log(1)").unwrap();
        fs::write(dir.path().join("glob.css"), "body {}").unwrap();
        fs::write(dir.path().join("other.txt"), "hello").unwrap();
        dir
    }

    #[test]
    fn test_glob_matcher_expands_relative_names() {
        let dir = fixture_dir();
        let base = dir.path().to_str().unwrap();

        let matched = GlobMatcher.expand(base, "g*.js");
        assert_eq!(matched, vec!["glob.js".to_string()]);

        let matched = GlobMatcher.expand(base, "g*.css");
        assert_eq!(matched, vec!["glob.css".to_string()]);
    }

    #[test]
    fn test_glob_matcher_no_match_is_empty() {
        let dir = fixture_dir();
        let base = dir.path().to_str().unwrap();
        assert!(GlobMatcher.expand(base, "nonexistant*.js").is_empty());
    }

    #[test]
    fn test_glob_matcher_order_is_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["b.js", "a.js", "c.js"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let base = dir.path().to_str().unwrap();
        assert_eq!(GlobMatcher.expand(base, "*.js"), vec!["a.js", "b.js", "c.js"]);
    }

    #[test]
    fn test_list_matcher_preserves_list_order() {
        let matcher = ListMatcher::new(["assets/b.js", "assets/a.js", "assets/x.css"]);
        assert_eq!(matcher.expand("assets", "*.js"), vec!["b.js", "a.js"]);
        assert_eq!(matcher.expand("assets/", "*.css"), vec!["x.css"]);
    }

    #[test]
    fn test_list_matcher_empty_base() {
        let matcher = ListMatcher::new(["a.js", "sub/b.js"]);
        assert_eq!(matcher.expand("", "*.js"), vec!["a.js"]);
    }

    #[test]
    fn test_document_matches() {
        let patterns = vec!["*.html".to_string()];
        assert!(document_matches(&patterns, "index.html"));
        assert!(document_matches(&patterns, "about.html"));
        assert!(!document_matches(&patterns, "app.js"));

        // Empty pattern list processes everything
        assert!(document_matches(&[], "anything.xyz"));

        // Exact names and ? wildcards
        let patterns = vec!["index.html".to_string(), "page-?.html".to_string()];
        assert!(document_matches(&patterns, "index.html"));
        assert!(document_matches(&patterns, "page-1.html"));
        assert!(!document_matches(&patterns, "page-12.html"));
    }
}
