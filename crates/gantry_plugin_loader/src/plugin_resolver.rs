use std::path::Path;
use std::path::PathBuf;

use gantry_filesystem::FileSystemRef;
use gantry_package_manager::PackageManagerRef;
use serde::Deserialize;

use crate::loader_error::PluginLoaderError;
use crate::plugin_spec::PluginSpec;

/// Sentinel version for packages whose metadata could not be read.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Metadata a plugin package declares about itself
#[derive(Debug, Default, Deserialize)]
struct PackageMetadata {
  name: Option<String>,
  version: Option<String>,
}

/// A plugin spec located on disk, with its declared metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPlugin {
  pub package_dir: PathBuf,
  pub name: String,
  pub version: String,
}

pub struct PluginResolver {
  fs: FileSystemRef,
  package_manager: PackageManagerRef,
}

impl PluginResolver {
  pub fn new(fs: FileSystemRef, package_manager: PackageManagerRef) -> Self {
    PluginResolver {
      fs,
      package_manager,
    }
  }

  /// Locates the package behind a spec and reads its declared name and
  /// version.
  ///
  /// A resolution miss fails with `PluginNotFound`. Degraded metadata does
  /// not fail the entry: the name falls back to the resolve name and the
  /// version to a sentinel, and the degradation is returned as a warning
  /// for the caller to surface.
  pub fn resolve(
    &self,
    spec: &PluginSpec,
    resolve_from: &Path,
  ) -> Result<(ResolvedPlugin, Option<PluginLoaderError>), PluginLoaderError> {
    let resolution = self
      .package_manager
      .resolve(&spec.resolve_name, resolve_from)
      .map_err(|source| PluginLoaderError::PluginNotFound {
        resolve_name: spec.resolve_name.clone(),
        source: Box::new(source),
      })?;

    let package_dir = self
      .fs
      .canonicalize_base(&resolution.resolved)
      .unwrap_or(resolution.resolved);

    let (metadata, warning) = self.read_metadata(spec, &package_dir);

    Ok((
      ResolvedPlugin {
        name: metadata.name.unwrap_or_else(|| spec.resolve_name.clone()),
        version: metadata
          .version
          .unwrap_or_else(|| String::from(UNKNOWN_VERSION)),
        package_dir,
      },
      warning,
    ))
  }

  fn read_metadata(
    &self,
    spec: &PluginSpec,
    package_dir: &Path,
  ) -> (PackageMetadata, Option<PluginLoaderError>) {
    let manifest_path = package_dir.join("package.json");

    let degraded = |reason: String| {
      (
        PackageMetadata::default(),
        Some(PluginLoaderError::PluginMetadata {
          resolve_name: spec.resolve_name.clone(),
          path: manifest_path.clone(),
          reason,
        }),
      )
    };

    let raw = match self.fs.read_to_string(&manifest_path) {
      Ok(raw) => raw,
      Err(source) => return degraded(source.to_string()),
    };

    let metadata = match serde_json::from_str::<PackageMetadata>(&raw) {
      Ok(metadata) => metadata,
      Err(source) => return degraded(source.to_string()),
    };

    if metadata.name.is_none() || metadata.version.is_none() {
      let (_, warning) = degraded(String::from("missing a name or version field"));
      return (metadata, warning);
    }

    (metadata, None)
  }
}
