//! Raw options normalization.
//!
//! Accepts the dynamic option shapes (string | object | array) as a
//! `serde_json::Value` and lowers them into the strict `EngineOptions`
//! schema before any resolution work begins. Boolean and string shorthands
//! for `publicPath` and `hash` are lowered to the strategy enums here;
//! function values cannot cross a serde boundary and attach through the
//! `EngineOptions` builder methods instead.

use serde_json::Value;

use super::EngineOptions;
use super::entry::{AttrValue, GlobSpec, TagEntry};
use super::error::ConfigError;
use crate::asset::{HashPolicy, PublicPathOverride, PublicPathPolicy, TagKind, infer_kind};

pub(super) fn normalize(value: &Value) -> Result<EngineOptions, ConfigError> {
    let Value::Object(map) = value else {
        return Err(ConfigError::NotAnObject);
    };

    let mut options = EngineOptions::default();

    if let Some(v) = map.get("append") {
        options.append = v.as_bool().ok_or(ConfigError::Append)?;
    }
    if let Some(v) = map.get("debug") {
        options.debug = v.as_bool().ok_or(ConfigError::Debug)?;
    }
    if let Some(v) = map.get("publicPath") {
        options.public_path = match v {
            Value::Bool(b) => PublicPathPolicy::Use(*b),
            Value::String(s) => PublicPathPolicy::Prefix(s.clone()),
            _ => return Err(ConfigError::PublicPath),
        };
    }
    if let Some(v) = map.get("hash") {
        options.hash = HashPolicy::from_bool(v.as_bool().ok_or(ConfigError::Hash)?);
    }
    if let Some(v) = map.get("jsExtensions") {
        options.js_extensions = normalize_extensions("jsExtensions", v, &options.js_extensions)?;
    }
    if let Some(v) = map.get("cssExtensions") {
        options.css_extensions =
            normalize_extensions("cssExtensions", v, &options.css_extensions)?;
    }
    if let Some(v) = map.get("files") {
        options.files = normalize_files(v)?;
    }
    if let Some(v) = map.get("assets") {
        options.assets = normalize_entries("assets", v)?;
    }
    if let Some(v) = map.get("links") {
        options.links = normalize_entries("links", v)?;
    }
    if let Some(v) = map.get("scripts") {
        options.scripts = normalize_entries("scripts", v)?;
    }

    // Only the mixed `assets` list needs kind resolution; `links` and
    // `scripts` entries have a forced kind.
    for entry in &mut options.assets {
        resolve_entry_kind("assets", entry, &options.js_extensions, &options.css_extensions)?;
    }

    Ok(options)
}

// ============================================================================
// Entry lists
// ============================================================================

fn normalize_entries(option: &'static str, value: &Value) -> Result<Vec<TagEntry>, ConfigError> {
    match value {
        Value::String(s) => Ok(vec![TagEntry::new(s.clone())]),
        Value::Object(_) => Ok(vec![normalize_entry(option, value)?]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(TagEntry::new(s.clone())),
                Value::Object(_) => normalize_entry(option, item),
                _ => Err(ConfigError::EntryItem(option)),
            })
            .collect(),
        _ => Err(ConfigError::EntryList(option)),
    }
}

fn normalize_entry(option: &'static str, value: &Value) -> Result<TagEntry, ConfigError> {
    let Value::Object(map) = value else {
        return Err(ConfigError::EntryItem(option));
    };

    let Some(Value::String(path)) = map.get("path") else {
        return Err(ConfigError::EntryPath(option));
    };
    let mut entry = TagEntry::new(path.clone());

    if let Some(v) = map.get("type") {
        let value_text = match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        entry.kind = Some(
            v.as_str()
                .and_then(TagKind::from_type_str)
                .ok_or(ConfigError::EntryType {
                    option,
                    value: value_text,
                })?,
        );
    }

    if let Some(v) = map.get("publicPath") {
        let Value::Bool(b) = v else {
            return Err(ConfigError::EntryPublicPath(option));
        };
        entry.public_path = Some(PublicPathOverride::Use(*b));
    }

    if let Some(v) = map.get("assetPath") {
        let Value::String(s) = v else {
            return Err(ConfigError::EntryAssetPath(option));
        };
        entry.asset_path = Some(s.clone());
    }

    if let Some(v) = map.get("asset") {
        let Value::Bool(b) = v else {
            return Err(ConfigError::EntryAssetFlag(option));
        };
        entry.raw_asset = !*b;
    }

    if let Some(v) = map.get("attributes") {
        let Value::Object(attrs) = v else {
            return Err(ConfigError::EntryAttributes(option));
        };
        for (name, value) in attrs {
            let value = match value {
                Value::String(s) => AttrValue::Str(s.clone()),
                Value::Bool(b) => AttrValue::Bool(*b),
                Value::Number(n) => AttrValue::Num(n.as_f64().unwrap_or_default()),
                _ => return Err(ConfigError::EntryAttributeValue(option)),
            };
            entry.attributes.set(name.clone(), value);
        }
    }

    match (map.get("glob"), map.get("globBase")) {
        (None, None) => {}
        (Some(Value::String(pattern)), Some(Value::String(base))) => {
            entry.glob = Some(GlobSpec {
                pattern: pattern.clone(),
                base: base.clone(),
            });
        }
        // A string glob with a missing or malformed base names the base;
        // everything else names the glob itself.
        (Some(Value::String(_)), _) => return Err(ConfigError::EntryGlobBase(option)),
        (Some(_), _) | (None, Some(_)) => return Err(ConfigError::EntryGlob(option)),
    }

    Ok(entry)
}

/// Resolve the kind of a mixed-list entry: explicit type, then path suffix,
/// then glob pattern suffix. A glob entry whose pattern has no recognizable
/// suffix keeps `kind: None` and is inferred per matched file at process
/// time; everything else must resolve here.
fn resolve_entry_kind(
    option: &'static str,
    entry: &mut TagEntry,
    js_extensions: &[String],
    css_extensions: &[String],
) -> Result<(), ConfigError> {
    if entry.kind.is_some() {
        return Ok(());
    }
    if let Some(kind) = infer_kind(&entry.path, js_extensions, css_extensions) {
        entry.kind = Some(kind);
        return Ok(());
    }
    if let Some(glob) = &entry.glob {
        entry.kind = infer_kind(&glob.pattern, js_extensions, css_extensions);
        return Ok(());
    }
    Err(ConfigError::UnresolvableType {
        option,
        path: entry.path.clone(),
    })
}

// ============================================================================
// Scalar option lists
// ============================================================================

fn normalize_extensions(
    option: &'static str,
    value: &Value,
    default: &[String],
) -> Result<Vec<String>, ConfigError> {
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                let Value::String(s) = item else {
                    return Err(ConfigError::ExtensionsItem(option));
                };
                out.push(s.clone());
            }
            // Extension lists are always non-empty after normalization
            if out.is_empty() {
                out = default.to_vec();
            }
            Ok(out)
        }
        _ => Err(ConfigError::Extensions(option)),
    }
}

fn normalize_files(value: &Value) -> Result<Vec<String>, ConfigError> {
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ConfigError::FilesItem),
            })
            .collect(),
        _ => Err(ConfigError::Files),
    }
}

// ============================================================================
// Tests
// ============================================================================
