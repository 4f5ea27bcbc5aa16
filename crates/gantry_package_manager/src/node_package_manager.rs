use std::path::Path;
use std::path::PathBuf;

use anyhow::anyhow;
use gantry_filesystem::search::find_ancestor_directory;
use gantry_filesystem::FileSystemRef;

use crate::package_manager::PackageManager;
use crate::package_manager::Resolution;

/// Resolves plugin packages the way the JS ecosystem lays them out: site
/// local plugins under `<project root>/plugins` take precedence, then the
/// nearest node_modules ancestor between the resolve origin and the project
/// root.
///
/// Resolution lands on the package root directory. Whether the package's
/// metadata is readable is the caller's concern.
pub struct NodePackageManager {
  fs: FileSystemRef,
  project_root: PathBuf,
}

impl NodePackageManager {
  pub fn new(fs: FileSystemRef, project_root: PathBuf) -> Self {
    NodePackageManager { fs, project_root }
  }
}

impl PackageManager for NodePackageManager {
  fn resolve(&self, specifier: &str, from: &Path) -> anyhow::Result<Resolution> {
    let local = self.project_root.join("plugins").join(specifier);
    if self.fs.is_dir(&local) {
      return Ok(Resolution { resolved: local });
    }

    find_ancestor_directory(
      &*self.fs,
      Path::new("node_modules").join(specifier),
      from,
      &self.project_root,
    )
    .map(|resolved| Resolution { resolved })
    .ok_or_else(|| anyhow!("Unable to resolve {} from {}", specifier, from.display()))
  }
}
