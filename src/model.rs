//! Data model for signature and description files.
//!
//! Everything here is deserialized once per run and never mutated afterwards.
//! Missing keys fall back to empty defaults so partial files stay valid.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

/// Title used when `site.json` has no `WELCOME_TITLE`.
pub const DEFAULT_TITLE: &str = "GreyScript API Documentation";

/// Machine-readable signatures for one object (`signatures/<name>.json`).
#[derive(Debug, Default, Deserialize)]
pub struct SignatureObject {
    /// Methods in declaration order.
    #[serde(default)]
    pub definitions: IndexMap<String, MethodSignature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MethodSignature {
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub returns: Vec<ReturnType>,
}

/// A single method argument, e.g. `{"label": "n", "type": "number", "opt": true}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Argument {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default)]
    pub opt: bool,
}

/// A return type descriptor: either a bare type name or a structured tag
/// such as `{"type": "map", "keyType": "string"}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ReturnType {
    Named(String),
    Structured(serde_json::Value),
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Named(name) => f.write_str(name),
            // Value's Display is compact JSON, keys in source order
            ReturnType::Structured(value) => write!(f, "{}", value),
        }
    }
}

/// Human-written prose for one object (`descriptions/<lang>/<name>.json`).
///
/// Shapes are read leniently: a key whose value is not an object, or a
/// field of the wrong type, resolves to absent instead of failing the file.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "IndexMap<String, serde_json::Value>")]
pub struct DescriptionObject {
    pub meta: Option<ObjectMeta>,
    /// Every other object-valued key is a method name.
    pub methods: IndexMap<String, MethodDescription>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ObjectMeta {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MethodDescription {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Literal source lines.
    #[serde(default, deserialize_with = "lenient")]
    pub example: Option<Vec<String>>,
}

const META_KEY: &str = "$meta";

impl From<IndexMap<String, serde_json::Value>> for DescriptionObject {
    fn from(mut raw: IndexMap<String, serde_json::Value>) -> Self {
        let meta = raw
            .shift_remove(META_KEY)
            .and_then(|v| serde_json::from_value::<ObjectMeta>(v).ok());
        let methods: IndexMap<String, MethodDescription> = raw
            .into_iter()
            .filter_map(|(name, value)| match serde_json::from_value(value) {
                Ok(desc) => Some((name, desc)),
                Err(_) => {
                    debug!(key = %name, "ignoring non-method description key");
                    None
                }
            })
            .collect();
        Self { meta, methods }
    }
}

/// Deserialize `T`, treating a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

impl DescriptionObject {
    /// Object-level prose, or `""` when absent.
    pub fn object_description(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|m| m.description.as_deref())
            .unwrap_or("")
    }
}

/// Site-wide metadata from the reserved `site.json`.
#[derive(Debug, Default, Deserialize)]
pub struct SiteMeta {
    #[serde(rename = "WELCOME_TITLE", default)]
    pub welcome_title: Option<String>,
    #[serde(rename = "WELCOME_TEXT", default)]
    pub welcome_text: Option<String>,
}

impl SiteMeta {
    /// Welcome title, falling back when missing or empty.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.welcome_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(fallback)
    }

    pub fn welcome_text(&self) -> Option<&str> {
        self.welcome_text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Everything loaded for one run.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Keyed by object name, sorted by file name.
    pub signatures: IndexMap<String, SignatureObject>,
    pub descriptions: IndexMap<String, DescriptionObject>,
    pub site: SiteMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_defaults_for_missing_keys() {
        let sig: SignatureObject =
            serde_json::from_str(r#"{"definitions":{"len":{}}}"#).unwrap();
        let len = &sig.definitions["len"];
        assert!(len.arguments.is_empty());
        assert!(len.returns.is_empty());

        let empty: SignatureObject = serde_json::from_str("{}").unwrap();
        assert!(empty.definitions.is_empty());
    }

    #[test]
    fn definitions_keep_declaration_order() {
        let sig: SignatureObject = serde_json::from_str(
            r#"{"definitions":{"zeta":{},"alpha":{},"mid":{}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = sig.definitions.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn argument_type_and_opt() {
        let arg: Argument =
            serde_json::from_str(r#"{"label":"x","type":"number","opt":true}"#).unwrap();
        assert_eq!(arg.label, "x");
        assert_eq!(arg.ty, "number");
        assert!(arg.opt);

        let arg: Argument = serde_json::from_str(r#"{"label":"x","type":"number"}"#).unwrap();
        assert!(!arg.opt);
    }

    #[test]
    fn structured_return_displays_as_json() {
        let ret: ReturnType =
            serde_json::from_str(r#"{"type":"map","valueType":"string","keyType":"number"}"#)
                .unwrap();
        assert_eq!(
            ret.to_string(),
            r#"{"type":"map","valueType":"string","keyType":"number"}"#
        );

        let ret: ReturnType = serde_json::from_str(r#""string""#).unwrap();
        assert_eq!(ret.to_string(), "string");
    }

    #[test]
    fn description_splits_meta_from_methods() {
        let desc: DescriptionObject = serde_json::from_str(
            r#"{"$meta":{"description":"A list."},"push":{"description":"Adds.","example":["l.push(1)"]}}"#,
        )
        .unwrap();
        assert_eq!(desc.object_description(), "A list.");
        assert_eq!(desc.methods.len(), 1);
        let push = &desc.methods["push"];
        assert_eq!(push.description.as_deref(), Some("Adds."));
        assert_eq!(push.example.as_deref(), Some(&["l.push(1)".to_string()][..]));
    }

    #[test]
    fn description_without_meta() {
        let desc: DescriptionObject = serde_json::from_str(r#"{"pop":{}}"#).unwrap();
        assert_eq!(desc.object_description(), "");
        assert!(desc.methods["pop"].description.is_none());
    }

    #[test]
    fn non_list_example_is_absent() {
        let desc: DescriptionObject =
            serde_json::from_str(r#"{"bar":{"description":"x","example":"foo.bar()"}}"#).unwrap();
        let bar = &desc.methods["bar"];
        assert_eq!(bar.description.as_deref(), Some("x"));
        assert!(bar.example.is_none());
    }

    #[test]
    fn non_object_keys_are_skipped() {
        let desc: DescriptionObject = serde_json::from_str(
            r#"{"$schema":"../schema.json","$meta":"oops","bar":{"description":"x"}}"#,
        )
        .unwrap();
        assert_eq!(desc.object_description(), "");
        assert_eq!(desc.methods.len(), 1);
        assert_eq!(desc.methods["bar"].description.as_deref(), Some("x"));
    }

    #[test]
    fn wrongly_typed_description_is_absent() {
        let desc: DescriptionObject =
            serde_json::from_str(r#"{"$meta":{"description":42},"bar":{"description":["a"]}}"#)
                .unwrap();
        assert_eq!(desc.object_description(), "");
        assert!(desc.methods["bar"].description.is_none());
    }

    #[test]
    fn non_object_description_file_still_fails() {
        assert!(serde_json::from_str::<DescriptionObject>(r#"["bar"]"#).is_err());
    }

    #[test]
    fn site_title_fallback() {
        let site = SiteMeta::default();
        assert_eq!(site.title_or(DEFAULT_TITLE), DEFAULT_TITLE);

        let site: SiteMeta = serde_json::from_str(r#"{"WELCOME_TITLE":""}"#).unwrap();
        assert_eq!(site.title_or("fallback"), "fallback");

        let site: SiteMeta =
            serde_json::from_str(r#"{"WELCOME_TITLE":"Hi","WELCOME_TEXT":"<b>x</b>"}"#).unwrap();
        assert_eq!(site.title_or("fallback"), "Hi");
        assert_eq!(site.welcome_text(), Some("<b>x</b>"));
    }
}
