//! Normalized tag entry types.
//!
//! The dynamic option shapes (plain string, object with options, glob
//! multiplier) all lower into `TagEntry` before any other component sees
//! the data, so the resolution pipeline never branches on raw shapes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::asset::{PublicPathOverride, TagKind};

// ============================================================================
// Attribute values
// ============================================================================

/// Scalar attribute value: string, boolean, or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    Num(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        Self::Num(n as f64)
    }
}

// ============================================================================
// Attributes
// ============================================================================

/// Insertion-ordered attribute mapping.
///
/// `set` overrides an existing name in place (keeping its position) and
/// appends unknown names, which is what keeps rendered attribute order
/// stable when declared attributes override the base set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    pairs: SmallVec<[(String, AttrValue); 4]>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, overriding in place when the name already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(pair) = self.pairs.iter_mut().find(|(n, _)| *n == name) {
            pair.1 = value;
        } else {
            self.pairs.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Merge another attribute set on top of this one, in its order.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            self.set(name, value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<N: Into<String>, V: Into<AttrValue>> FromIterator<(N, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

// ============================================================================
// Tag entries
// ============================================================================

/// Glob expansion request: pattern rooted at a base directory.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobSpec {
    pub pattern: String,
    pub base: String,
}

/// One normalized asset, link, or script declaration.
///
/// Entries are read-only once normalization finishes; a glob entry may
/// expand into many resolved tags at process time.
#[derive(Debug, Default)]
pub struct TagEntry {
    /// Output path, or output directory prefix when a glob is present.
    pub path: String,
    /// Resolved tag kind. `None` only for glob entries whose kind depends
    /// on the matched file names.
    pub kind: Option<TagKind>,
    /// Glob multiplier.
    pub glob: Option<GlobSpec>,
    /// Source file the host should copy into the output for this entry.
    /// The engine only declares the intent; existence is the host's check.
    pub asset_path: Option<String>,
    /// Per-entry public path override.
    pub public_path: Option<PublicPathOverride>,
    /// Declared attributes, merged over the base set.
    pub attributes: Attributes,
    /// `asset: false` marker: emit only the bare href and skip public-path
    /// and hash processing (links only).
    pub raw_asset: bool,
}

impl TagEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: TagKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_glob(mut self, pattern: impl Into<String>, base: impl Into<String>) -> Self {
        self.glob = Some(GlobSpec {
            pattern: pattern.into(),
            base: base.into(),
        });
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_public_path(mut self, public_path: PublicPathOverride) -> Self {
        self.public_path = Some(public_path);
        self
    }
}
