//! tagweld: asset-declaration resolution and HTML tag injection.
//!
//! Given a declarative list of extra script/link assets, the engine decides
//! which `<script>`/`<link>` tags to add to a generated HTML document, in
//! what order, with what computed `src`/`href` and attributes, and merges
//! correctly when several independently configured instances act on the
//! same document in sequence.
//!
//! The engine runs after the host build has materialized its output set:
//! glob expansion is a pure lookup, public-path prefixing and cache-busting
//! hash injection use facts the host supplies through [`BuildContext`], and
//! the document's tag lists are mutated in place for the templating step to
//! render.
//!
//! # Example
//!
//! ```
//! use tagweld::{BuildContext, EngineOptions, HtmlDocument, TagEngine};
//!
//! let options = EngineOptions::from_json_str(r#"{
//!     "assets": ["vendor/analytics.js", { "path": "theme.css" }],
//!     "append": false,
//!     "hash": true
//! }"#).unwrap();
//!
//! let engine = TagEngine::new(options);
//! let ctx = BuildContext::new()
//!     .with_public_path("static/")
//!     .with_build_hash("4f1c09a2");
//!
//! let mut doc = HtmlDocument::new("index.html");
//! engine.process(&mut doc, &ctx).unwrap();
//!
//! assert_eq!(
//!     doc.tags.scripts()[0].to_html(),
//!     r#"<script type="text/javascript" src="static/vendor/analytics.js?4f1c09a2"></script>"#
//! );
//! ```

pub mod asset;
pub mod config;
pub mod logger;
pub mod pipeline;
pub mod utils;

// Resolution strategies and matching
pub use asset::{
    FileMatcher, GlobMatcher, HashPolicy, ListMatcher, PublicPathOverride, PublicPathPolicy,
    TagKind,
};

// Options and normalization
pub use config::{AttrValue, Attributes, ConfigError, Diagnostic, EngineOptions, GlobSpec, TagEntry};

// Engine and document model
pub use pipeline::{BuildContext, HtmlDocument, ResolveError, Tag, TagEngine, TagLists};
