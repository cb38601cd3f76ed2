//! Document tag lists and batch insertion.
//!
//! The tag lists are owned by the surrounding templating step for the
//! lifetime of one document render. The engine only prepends or appends
//! whole batches onto them; it never reorders existing entries. Chained
//! engine instances see the list state left by earlier instances, which is
//! what makes prepend/append relative to the *current* document, not the
//! original one.

use super::tag::Tag;
use crate::asset::TagKind;

// ============================================================================
// TagLists
// ============================================================================

/// The document's ordered script and link tag sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagLists {
    scripts: Vec<Tag>,
    links: Vec<Tag>,
}

impl TagLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripts(&self) -> &[Tag] {
        &self.scripts
    }

    pub fn links(&self) -> &[Tag] {
        &self.links
    }

    /// Seed an existing tag (host templating step only); appends to the
    /// list matching the tag's kind.
    pub fn push(&mut self, tag: Tag) {
        self.list_mut(tag.kind).push(tag);
    }

    /// Commit a resolved batch, preserving its internal order.
    pub(crate) fn insert(&mut self, kind: TagKind, append: bool, batch: Vec<Tag>) {
        let list = self.list_mut(kind);
        if append {
            list.extend(batch);
        } else {
            list.splice(0..0, batch);
        }
    }

    fn list_mut(&mut self, kind: TagKind) -> &mut Vec<Tag> {
        match kind {
            TagKind::Script => &mut self.scripts,
            TagKind::Link => &mut self.links,
        }
    }
}

// ============================================================================
// HtmlDocument
// ============================================================================

/// One generated HTML document, as the engine sees it: its output
/// filename, its mutable tag lists, and whether its template injects the
/// default tag attributes.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    /// Output filename, checked against the `files` patterns.
    pub filename: String,
    /// Host template's default-attribute mode (`type="text/javascript"`,
    /// `rel="stylesheet"`).
    pub default_attributes: bool,
    /// Ordered script/link tag sequences, mutated in place.
    pub tags: TagLists,
}

impl HtmlDocument {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            default_attributes: true,
            tags: TagLists::new(),
        }
    }

    pub fn with_default_attributes(mut self, enabled: bool) -> Self {
        self.default_attributes = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srcs(tags: &[Tag]) -> Vec<&str> {
        tags.iter().filter_map(Tag::url).collect()
    }

    #[test]
    fn test_append_preserves_batch_order() {
        let mut lists = TagLists::new();
        lists.push(Tag::script("app.js"));

        lists.insert(
            TagKind::Script,
            true,
            vec![Tag::script("a.js"), Tag::script("b.js")],
        );
        assert_eq!(srcs(lists.scripts()), vec!["app.js", "a.js", "b.js"]);
    }

    #[test]
    fn test_prepend_preserves_batch_order() {
        let mut lists = TagLists::new();
        lists.push(Tag::script("app.js"));

        lists.insert(
            TagKind::Script,
            false,
            vec![Tag::script("a.js"), Tag::script("b.js")],
        );
        assert_eq!(srcs(lists.scripts()), vec!["a.js", "b.js", "app.js"]);
    }

    #[test]
    fn test_later_prepend_lands_before_earlier_batches() {
        let mut lists = TagLists::new();
        lists.push(Tag::link("style.css"));

        lists.insert(TagKind::Link, false, vec![Tag::link("first.css")]);
        lists.insert(TagKind::Link, false, vec![Tag::link("second.css")]);
        assert_eq!(
            srcs(lists.links()),
            vec!["second.css", "first.css", "style.css"]
        );
    }

    #[test]
    fn test_kinds_do_not_interleave() {
        let mut lists = TagLists::new();
        lists.insert(TagKind::Script, true, vec![Tag::script("a.js")]);
        lists.insert(TagKind::Link, true, vec![Tag::link("a.css")]);
        assert_eq!(lists.scripts().len(), 1);
        assert_eq!(lists.links().len(), 1);
    }
}
