use std::path::Path;
use std::path::PathBuf;

use gantry_filesystem::in_memory_file_system::InMemoryFileSystem;

use crate::default_plugins::INTERNAL_DATA_BRIDGE_PLUGIN;
use crate::default_plugins::TYPESCRIPT_PLUGIN;

pub fn project_root() -> PathBuf {
  PathBuf::from("/project")
}

/// Writes an installed plugin package into the in-memory project.
pub fn write_package(fs: &InMemoryFileSystem, name: &str, version: &str) -> PathBuf {
  let package_dir = project_root().join("node_modules").join(name);

  fs.create_directory(&package_dir);
  fs.write_file(
    &package_dir.join("package.json"),
    format!(r#"{{ "name": "{name}", "version": "{version}" }}"#),
  );

  package_dir
}

/// Writes one category's hook module exporting the given names.
pub fn write_hook_module(
  fs: &InMemoryFileSystem,
  package_dir: &Path,
  module_file: &str,
  exports: &[&str],
) {
  let exports = exports
    .iter()
    .map(|name| format!(r#""{name}": true"#))
    .collect::<Vec<_>>()
    .join(", ");

  fs.write_file(&package_dir.join(module_file), format!("{{ {exports} }}"));
}

/// Installs the packages every successful load needs: the required built-in
/// default plugins.
pub fn write_builtin_packages(fs: &InMemoryFileSystem) {
  let typescript_dir = write_package(fs, TYPESCRIPT_PLUGIN, "5.2.0");
  write_hook_module(
    fs,
    &typescript_dir,
    "gantry-build.json",
    &[
      "resolvableExtensions",
      "onCreateBabelConfig",
      "onCreateWebpackConfig",
    ],
  );

  write_package(fs, INTERNAL_DATA_BRIDGE_PLUGIN, "0.1.0");
}
