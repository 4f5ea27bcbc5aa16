use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginLoaderError {
  #[error("Invalid plugin entry at index {index}: {reason}")]
  InvalidPluginSpec { index: usize, reason: String },
  #[error("Unable to resolve plugin {resolve_name}")]
  PluginNotFound {
    resolve_name: String,
    #[source]
    source: Box<anyhow::Error>,
  },
  #[error("Invalid metadata for plugin {} at {}: {}", .resolve_name, .path.display(), .reason)]
  PluginMetadata {
    resolve_name: String,
    path: PathBuf,
    reason: String,
  },
  #[error("Failed to load hook module {} of plugin {}", .path.display(), .resolve_name)]
  PluginLoad {
    resolve_name: String,
    path: PathBuf,
    #[source]
    source: Box<anyhow::Error>,
  },
}

// `anyhow::Error` is not `PartialEq`, so the enum cannot derive it; the source
// is compared by its rendered message, mirroring the reference codebase.
impl PartialEq for PluginLoaderError {
  fn eq(&self, other: &Self) -> bool {
    use PluginLoaderError::*;
    match (self, other) {
      (
        InvalidPluginSpec {
          index: a_index,
          reason: a_reason,
        },
        InvalidPluginSpec {
          index: b_index,
          reason: b_reason,
        },
      ) => a_index == b_index && a_reason == b_reason,
      (
        PluginNotFound {
          resolve_name: a_name,
          source: a_source,
        },
        PluginNotFound {
          resolve_name: b_name,
          source: b_source,
        },
      ) => a_name == b_name && a_source.to_string() == b_source.to_string(),
      (
        PluginMetadata {
          resolve_name: a_name,
          path: a_path,
          reason: a_reason,
        },
        PluginMetadata {
          resolve_name: b_name,
          path: b_path,
          reason: b_reason,
        },
      ) => a_name == b_name && a_path == b_path && a_reason == b_reason,
      (
        PluginLoad {
          resolve_name: a_name,
          path: a_path,
          source: a_source,
        },
        PluginLoad {
          resolve_name: b_name,
          path: b_path,
          source: b_source,
        },
      ) => {
        a_name == b_name && a_path == b_path && a_source.to_string() == b_source.to_string()
      }
      _ => false,
    }
  }
}
