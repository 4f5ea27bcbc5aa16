use gantry_core::types::JSONObject;
use serde::Deserialize;
use serde_json::Value;

use crate::loader_error::PluginLoaderError;

/// One entry of the site's configured plugin list, as the user wrote it:
/// either a bare package specifier or a specifier with options.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawPluginEntry {
  Name(String),
  Spec(JSONObject),
}

/// Canonical form of one configured or injected plugin
#[derive(Clone, Debug, PartialEq)]
pub struct PluginSpec {
  pub resolve_name: String,
  pub options: JSONObject,
}

impl PluginSpec {
  pub fn new(resolve_name: impl Into<String>) -> Self {
    PluginSpec {
      resolve_name: resolve_name.into(),
      options: JSONObject::new(),
    }
  }

  pub fn with_options(resolve_name: impl Into<String>, options: JSONObject) -> Self {
    PluginSpec {
      resolve_name: resolve_name.into(),
      options,
    }
  }
}

/// Canonicalizes the raw configured plugin list.
///
/// Output order matches input order exactly. Ordering is load-bearing for
/// hook precedence further down the pipeline.
pub fn normalize_plugin_entries(
  entries: &[RawPluginEntry],
) -> Result<Vec<PluginSpec>, PluginLoaderError> {
  let mut specs = Vec::with_capacity(entries.len());

  for (index, entry) in entries.iter().enumerate() {
    specs.push(normalize_entry(index, entry)?);
  }

  Ok(specs)
}

fn normalize_entry(index: usize, entry: &RawPluginEntry) -> Result<PluginSpec, PluginLoaderError> {
  let fields = match entry {
    RawPluginEntry::Name(name) => return Ok(PluginSpec::new(name.clone())),
    RawPluginEntry::Spec(fields) => fields,
  };

  let resolve_name = match fields.get("resolveName") {
    Some(Value::String(name)) => name.clone(),
    Some(_) => {
      return Err(PluginLoaderError::InvalidPluginSpec {
        index,
        reason: String::from("resolveName must be a string"),
      })
    }
    None => {
      return Err(PluginLoaderError::InvalidPluginSpec {
        index,
        reason: String::from("missing a resolveName field"),
      })
    }
  };

  let options = match fields.get("options") {
    None | Some(Value::Null) => JSONObject::new(),
    Some(Value::Object(options)) => options.clone(),
    Some(_) => {
      return Err(PluginLoaderError::InvalidPluginSpec {
        index,
        reason: format!("options of {} must be an object", resolve_name),
      })
    }
  };

  Ok(PluginSpec {
    resolve_name,
    options,
  })
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn spec_entry(value: Value) -> RawPluginEntry {
    match value {
      Value::Object(fields) => RawPluginEntry::Spec(fields),
      _ => panic!("expected an object"),
    }
  }

  #[test]
  fn canonicalizes_a_bare_name() {
    let specs =
      normalize_plugin_entries(&[RawPluginEntry::Name(String::from("gantry-plugin-feed"))])
        .unwrap();

    assert_eq!(specs, vec![PluginSpec::new("gantry-plugin-feed")]);
  }

  #[test]
  fn defaults_missing_options_to_an_empty_object() {
    let specs = normalize_plugin_entries(&[spec_entry(json!({
      "resolveName": "gantry-plugin-feed"
    }))])
    .unwrap();

    assert_eq!(specs, vec![PluginSpec::new("gantry-plugin-feed")]);
  }

  #[test]
  fn keeps_supplied_options() {
    let specs = normalize_plugin_entries(&[spec_entry(json!({
      "resolveName": "gantry-plugin-feed",
      "options": { "limit": 10 }
    }))])
    .unwrap();

    assert_eq!(
      specs,
      vec![PluginSpec::with_options(
        "gantry-plugin-feed",
        json!({ "limit": 10 }).as_object().unwrap().clone()
      )]
    );
  }

  #[test]
  fn preserves_input_order() {
    let specs = normalize_plugin_entries(&[
      RawPluginEntry::Name(String::from("b")),
      RawPluginEntry::Name(String::from("a")),
      spec_entry(json!({ "resolveName": "c" })),
    ])
    .unwrap();

    let names: Vec<_> = specs.iter().map(|spec| spec.resolve_name.as_str()).collect();

    assert_eq!(names, vec!["b", "a", "c"]);
  }

  #[test]
  fn errors_on_a_missing_resolve_name() {
    let err = normalize_plugin_entries(&[spec_entry(json!({ "options": {} }))])
      .map_err(|e| e.to_string());

    assert_eq!(
      err,
      Err(String::from(
        "Invalid plugin entry at index 0: missing a resolveName field"
      ))
    );
  }

  #[test]
  fn errors_on_a_non_string_resolve_name() {
    let err = normalize_plugin_entries(&[
      RawPluginEntry::Name(String::from("gantry-plugin-feed")),
      spec_entry(json!({ "resolveName": 42 })),
    ])
    .map_err(|e| e.to_string());

    assert_eq!(
      err,
      Err(String::from(
        "Invalid plugin entry at index 1: resolveName must be a string"
      ))
    );
  }

  #[test]
  fn errors_on_non_object_options() {
    let err = normalize_plugin_entries(&[spec_entry(json!({
      "resolveName": "gantry-plugin-feed",
      "options": ["nope"]
    }))])
    .map_err(|e| e.to_string());

    assert_eq!(
      err,
      Err(String::from(
        "Invalid plugin entry at index 0: options of gantry-plugin-feed must be an object"
      ))
    );
  }

  #[test]
  fn treats_null_options_as_absent() {
    let specs = normalize_plugin_entries(&[spec_entry(json!({
      "resolveName": "gantry-plugin-feed",
      "options": null
    }))])
    .unwrap();

    assert_eq!(specs, vec![PluginSpec::new("gantry-plugin-feed")]);
  }
}
