/// Arbitrary JSON options attached to plugins.
///
/// Backed by an insertion-ordered map so that merged options and the
/// identifiers hashed from them come out the same on every load.
pub type JSONObject = serde_json::Map<String, serde_json::Value>;
