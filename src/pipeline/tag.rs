//! Tag construction and rendering.
//!
//! Builds the final attribute set for a resolved URL: base attributes per
//! kind, then declared attributes merged on top (overriding in place, so
//! rendered attribute order stays stable).

use crate::asset::TagKind;
use crate::config::{AttrValue, Attributes};

/// A fully resolved tag descriptor.
///
/// Created once per entry occurrence and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub kind: TagKind,
    pub attributes: Attributes,
}

impl Tag {
    pub fn new(kind: TagKind, attributes: Attributes) -> Self {
        Self { kind, attributes }
    }

    /// A script tag with the default attribute set, for seeding a
    /// document's existing tags.
    pub fn script(src: &str) -> Self {
        build_tag(TagKind::Script, src, &Attributes::new(), true, false)
    }

    /// A stylesheet link tag with the default attribute set.
    pub fn link(href: &str) -> Self {
        build_tag(TagKind::Link, href, &Attributes::new(), true, false)
    }

    /// The `src`/`href` URL of this tag, when present.
    pub fn url(&self) -> Option<&str> {
        let name = match self.kind {
            TagKind::Script => "src",
            TagKind::Link => "href",
        };
        match self.attributes.get(name) {
            Some(AttrValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Render to HTML. Boolean attributes render bare when true and are
    /// omitted when false.
    pub fn to_html(&self) -> String {
        let mut out = format!("<{}", self.kind.element());
        for (name, value) in self.attributes.iter() {
            match value {
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Bool(false) => {}
                other => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(&other.to_string()));
                    out.push('"');
                }
            }
        }
        match self.kind {
            TagKind::Script => out.push_str("></script>"),
            TagKind::Link => out.push('>'),
        }
        out
    }
}

/// Build the final tag for a resolved URL.
///
/// `default_attributes: false` mirrors the host template's "no default
/// attributes" mode: scripts get only `src`, links only `href`. A raw
/// link (`asset: false`) never gets the `rel` default.
pub(crate) fn build_tag(
    kind: TagKind,
    url: &str,
    declared: &Attributes,
    default_attributes: bool,
    raw_asset: bool,
) -> Tag {
    let mut attributes = Attributes::new();
    match kind {
        TagKind::Script => {
            if default_attributes {
                attributes.set("type", "text/javascript");
            }
            attributes.set("src", url);
        }
        TagKind::Link => {
            attributes.set("href", url);
            if default_attributes && !raw_asset {
                attributes.set("rel", "stylesheet");
            }
        }
    }
    attributes.merge(declared);
    Tag::new(kind, attributes)
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_default_attributes() {
        let tag = Tag::script("app.js");
        assert_eq!(
            tag.to_html(),
            r#"<script type="text/javascript" src="app.js"></script>"#
        );
    }

    #[test]
    fn test_link_default_attributes() {
        let tag = Tag::link("style.css");
        assert_eq!(tag.to_html(), r#"<link href="style.css" rel="stylesheet">"#);
    }

    #[test]
    fn test_no_default_attributes_mode() {
        let tag = build_tag(TagKind::Script, "app.js", &Attributes::new(), false, false);
        assert_eq!(tag.to_html(), r#"<script src="app.js"></script>"#);

        let tag = build_tag(TagKind::Link, "style.css", &Attributes::new(), false, false);
        assert_eq!(tag.to_html(), r#"<link href="style.css">"#);
    }

    #[test]
    fn test_raw_link_skips_rel_default() {
        let tag = build_tag(TagKind::Link, "a.css", &Attributes::new(), true, true);
        assert_eq!(tag.to_html(), r#"<link href="a.css">"#);
    }

    #[test]
    fn test_declared_attributes_override_in_place() {
        let declared: Attributes = [("rel", "the-rel")].into_iter().collect();
        let tag = build_tag(TagKind::Link, "the-href", &declared, true, false);
        assert_eq!(tag.to_html(), r#"<link href="the-href" rel="the-rel">"#);
    }

    #[test]
    fn test_declared_attributes_append_after_base() {
        let declared: Attributes = [
            ("id", crate::config::AttrValue::from("abc")),
            ("media", crate::config::AttrValue::from("screen")),
        ]
        .into_iter()
        .collect();
        let tag = build_tag(TagKind::Link, "assets/def.css", &declared, true, false);
        assert_eq!(
            tag.to_html(),
            r#"<link href="assets/def.css" rel="stylesheet" id="abc" media="screen">"#
        );
    }

    #[test]
    fn test_boolean_and_numeric_attributes() {
        let declared: Attributes = [
            ("async", AttrValue::Bool(true)),
            ("nomodule", AttrValue::Bool(false)),
            ("data-order", AttrValue::Num(2.0)),
        ]
        .into_iter()
        .collect();
        let tag = build_tag(TagKind::Script, "a.js", &declared, true, false);
        assert_eq!(
            tag.to_html(),
            r#"<script type="text/javascript" src="a.js" async data-order="2"></script>"#
        );
    }

    #[test]
    fn test_attribute_value_escaping() {
        let declared: Attributes = [("title", r#"say "hi" & bye"#)].into_iter().collect();
        let tag = build_tag(TagKind::Link, "x.css", &declared, true, false);
        assert!(
            tag.to_html()
                .contains(r#"title="say &quot;hi&quot; &amp; bye""#)
        );
    }

    #[test]
    fn test_url_accessor() {
        assert_eq!(Tag::script("app.js").url(), Some("app.js"));
        assert_eq!(Tag::link("style.css").url(), Some("style.css"));
    }
}
