//! Tag kind definitions and extension-based type inference.

/// Kind of tag an asset declaration resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Renders as a `<script>` element.
    Script,
    /// Renders as a `<link>` element.
    Link,
}

impl TagKind {
    /// Parse an explicit `type` option value (`"js"` or `"css"`).
    pub fn from_type_str(value: &str) -> Option<Self> {
        match value {
            "js" => Some(Self::Script),
            "css" => Some(Self::Link),
            _ => None,
        }
    }

    /// Element name for rendering.
    pub const fn element(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Link => "link",
        }
    }
}

/// Infer a tag kind from a file name's extension.
///
/// Comparison is case-sensitive exact-suffix. When suffixes from both lists
/// match (e.g. `.js` and `.map.js`), the longest suffix wins regardless of
/// which list it came from.
pub fn infer_kind(path: &str, js_extensions: &[String], css_extensions: &[String]) -> Option<TagKind> {
    let mut best: Option<(usize, TagKind)> = None;

    let mut consider = |ext: &str, kind: TagKind| {
        if path.ends_with(ext)
            && best.is_none_or(|(len, _)| ext.len() > len)
        {
            best = Some((ext.len(), kind));
        }
    };

    for ext in js_extensions {
        consider(ext, TagKind::Script);
    }
    for ext in css_extensions {
        consider(ext, TagKind::Link);
    }

    best.map(|(_, kind)| kind)
}
