use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::json::JSONObject;

/// One fully resolved plugin instance, ready for pipeline consumption.
///
/// Descriptors are immutable for the remainder of the build and recomputed
/// from scratch on a full reload.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
  /// Stable identifier derived from the resolved package location and the
  /// merged options, so the same logical plugin instance keeps its id across
  /// runs while differently-configured instances of one package stay apart.
  pub id: String,
  /// The specifier this plugin was configured or injected under.
  pub resolve_name: String,
  /// Package name declared by the resolved package, never user supplied.
  pub name: String,
  /// Declared package version, or "unknown" when the metadata was degraded.
  pub version: String,
  /// On-disk package root the specifier resolved to.
  pub resolved_path: PathBuf,
  /// Fully merged options for this instance.
  pub plugin_options: JSONObject,
  pub build_time_hooks: BTreeSet<String>,
  pub browser_hooks: BTreeSet<String>,
  pub server_render_hooks: BTreeSet<String>,
}
