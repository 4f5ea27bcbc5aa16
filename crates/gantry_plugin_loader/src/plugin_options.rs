use gantry_core::types::JSONObject;
use serde_json::Value;

/// Merges a default plugin's options with the user's override for the same
/// plugin.
///
/// Only the top two levels are merge-aware: user keys override default keys,
/// and where both sides hold an object for the same key the union is taken
/// one level further down. Deeper structures, and arrays at any depth, are
/// replaced wholesale by the user's value.
pub fn merge_plugin_options(defaults: &JSONObject, overrides: &JSONObject) -> JSONObject {
  let mut merged = defaults.clone();

  for (key, value) in overrides {
    let merged_value = match (merged.get(key), value) {
      (Some(Value::Object(default_child)), Value::Object(override_child)) => {
        let mut child = default_child.clone();
        for (child_key, child_value) in override_child {
          child.insert(child_key.clone(), child_value.clone());
        }
        Value::Object(child)
      }
      _ => value.clone(),
    };

    merged.insert(key.clone(), merged_value);
  }

  merged
}
