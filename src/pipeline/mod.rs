//! Tag resolution and injection pipeline.
//!
//! Transforms one document's tag lists through a strictly ordered pass:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ files filter → resolve (kind, glob, public path,    │
//! │ hash, attributes) → commit batches into TagLists    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution finishes completely before any commit: a failure aborts the
//! pass without mutating the document. Chained instances over the same
//! document run strictly sequentially and observe each other's mutations.

pub mod inject;
pub mod tag;


pub use inject::{HtmlDocument, TagLists};
pub use tag::Tag;

use thiserror::Error;

use crate::asset::{
    FileMatcher, GlobMatcher, TagKind, document_matches, infer_kind, public_path,
};
use crate::config::{ConfigError, EngineOptions, TagEntry};

// =============================================================================
// Errors
// =============================================================================

/// Resolution-time failures.
///
/// All are fatal for the current document: the host build surfaces them as
/// compilation errors without halting the whole process, and the document's
/// tag lists are left untouched.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Type inference that had to wait for glob results, plus any other
    /// normalization-class failure detected late.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A glob pattern matched zero files in the output set.
    #[error("options.{option} object glob found no files ({pattern})")]
    GlobNoFiles {
        option: &'static str,
        pattern: String,
    },

    /// A declared `assetPath` source does not exist. The engine never
    /// raises this itself (existence is checked by the host's copy step,
    /// preserving deferred failure); it is part of the taxonomy so hosts
    /// report it uniformly.
    #[error("asset file not found ({path})")]
    AssetNotFound { path: String },
}

// =============================================================================
// BuildContext
// =============================================================================

/// Host-supplied facts about the current compilation: the public base
/// path, the content hash, and the matcher over the already-materialized
/// output file set.
pub struct BuildContext<'a> {
    public_path: &'a str,
    build_hash: &'a str,
    matcher: &'a dyn FileMatcher,
}

static DEFAULT_MATCHER: GlobMatcher = GlobMatcher;

impl<'a> BuildContext<'a> {
    pub fn new() -> Self {
        Self {
            public_path: "",
            build_hash: "",
            matcher: &DEFAULT_MATCHER,
        }
    }

    /// The public base path under which emitted files are served.
    pub fn with_public_path(mut self, public_path: &'a str) -> Self {
        self.public_path = public_path;
        self
    }

    /// The compilation's content hash, used for cache busting.
    pub fn with_build_hash(mut self, build_hash: &'a str) -> Self {
        self.build_hash = build_hash;
        self
    }

    /// Glob matcher over the emitted output set. Defaults to the
    /// filesystem-backed matcher.
    pub fn with_matcher(mut self, matcher: &'a dyn FileMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn public_path(&self) -> &str {
        self.public_path
    }

    pub fn build_hash(&self) -> &str {
        self.build_hash
    }
}

impl Default for BuildContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TagEngine
// =============================================================================

/// One configured engine instance.
///
/// Several independently configured instances may process the same
/// document in pipeline order; each one's prepend/append applies to the
/// tag lists as the earlier instances left them.
#[derive(Debug)]
pub struct TagEngine {
    options: EngineOptions,
}

impl TagEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Process one document: decide the tags this instance contributes and
    /// commit them into the document's tag lists.
    ///
    /// Mutates nothing on failure.
    pub fn process(
        &self,
        doc: &mut HtmlDocument,
        ctx: &BuildContext<'_>,
    ) -> Result<(), ResolveError> {
        if !document_matches(&self.options.files, &doc.filename) {
            return Ok(());
        }

        let mut scripts: Vec<Tag> = Vec::new();
        let mut links: Vec<Tag> = Vec::new();

        for entry in &self.options.assets {
            self.resolve_entry("assets", entry, None, doc, ctx, &mut scripts, &mut links)?;
        }
        for entry in &self.options.scripts {
            self.resolve_entry(
                "scripts",
                entry,
                Some(TagKind::Script),
                doc,
                ctx,
                &mut scripts,
                &mut links,
            )?;
        }
        for entry in &self.options.links {
            self.resolve_entry(
                "links",
                entry,
                Some(TagKind::Link),
                doc,
                ctx,
                &mut scripts,
                &mut links,
            )?;
        }

        if self.options.debug {
            crate::log!(
                "inject";
                "{}: {} {} script and {} link tags",
                doc.filename,
                if self.options.append { "appending" } else { "prepending" },
                scripts.len(),
                links.len()
            );
        }

        doc.tags.insert(TagKind::Script, self.options.append, scripts);
        doc.tags.insert(TagKind::Link, self.options.append, links);
        Ok(())
    }

    /// Resolve one declaration into tags, routed into the script or link
    /// batch. `forced` pins the kind for the `scripts`/`links` lists.
    #[allow(clippy::too_many_arguments)]
    fn resolve_entry(
        &self,
        option: &'static str,
        entry: &TagEntry,
        forced: Option<TagKind>,
        doc: &HtmlDocument,
        ctx: &BuildContext<'_>,
        scripts: &mut Vec<Tag>,
        links: &mut Vec<Tag>,
    ) -> Result<(), ResolveError> {
        let mut push = |kind: TagKind, tag: Tag| match kind {
            TagKind::Script => scripts.push(tag),
            TagKind::Link => links.push(tag),
        };

        let Some(glob) = &entry.glob else {
            let kind = forced
                .or(entry.kind)
                .ok_or_else(|| ConfigError::UnresolvableType {
                    option,
                    path: entry.path.clone(),
                })?;
            push(kind, self.build_entry_tag(kind, &entry.path, entry, doc, ctx));
            return Ok(());
        };

        let matched = ctx.matcher.expand(&glob.base, &glob.pattern);
        if matched.is_empty() {
            return Err(ResolveError::GlobNoFiles {
                option,
                pattern: public_path::join_url(&glob.base, &glob.pattern),
            });
        }

        for name in matched {
            let path = public_path::join_url(&entry.path, &name);
            let kind = forced
                .or(entry.kind)
                .or_else(|| {
                    infer_kind(&name, &self.options.js_extensions, &self.options.css_extensions)
                })
                .ok_or_else(|| ConfigError::UnresolvableType {
                    option,
                    path: path.clone(),
                })?;
            push(kind, self.build_entry_tag(kind, &path, entry, doc, ctx));
        }
        Ok(())
    }

    /// Compute the final URL (public path, then hash) and build the tag.
    /// Raw links skip both transforms.
    fn build_entry_tag(
        &self,
        kind: TagKind,
        path: &str,
        entry: &TagEntry,
        doc: &HtmlDocument,
        ctx: &BuildContext<'_>,
    ) -> Tag {
        let url = if entry.raw_asset {
            path.to_string()
        } else {
            let url = public_path::resolve(
                path,
                entry.public_path.as_ref(),
                &self.options.public_path,
                ctx.public_path,
            );
            self.options.hash.apply(&url, ctx.build_hash)
        };
        tag::build_tag(kind, &url, &entry.attributes, doc.default_attributes, entry.raw_asset)
    }
}
