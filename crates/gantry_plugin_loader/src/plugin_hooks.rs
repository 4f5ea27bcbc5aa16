use std::collections::BTreeSet;
use std::path::Path;

use anyhow::anyhow;
use gantry_core::types::HookCategory;
use gantry_filesystem::FileSystemRef;
use serde_json::Value;

use crate::loader_error::PluginLoaderError;

/// The hook surface a resolved plugin implements, per category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PluginHooks {
  pub build_time: BTreeSet<String>,
  pub browser: BTreeSet<String>,
  pub server_render: BTreeSet<String>,
}

/// Discovers which lifecycle hooks a resolved plugin implements.
///
/// A plugin package ships up to three optional hook-module manifests, one
/// per category, each a JSON object keyed by the module's exported names.
pub struct HookIntrospector {
  fs: FileSystemRef,
}

impl HookIntrospector {
  pub fn new(fs: FileSystemRef) -> Self {
    HookIntrospector { fs }
  }

  pub fn introspect(
    &self,
    resolve_name: &str,
    package_dir: &Path,
  ) -> Result<PluginHooks, PluginLoaderError> {
    Ok(PluginHooks {
      build_time: self.load_hook_module(resolve_name, package_dir, HookCategory::BuildTime)?,
      browser: self.load_hook_module(resolve_name, package_dir, HookCategory::Browser)?,
      server_render: self.load_hook_module(
        resolve_name,
        package_dir,
        HookCategory::ServerRender,
      )?,
    })
  }

  /// Loads one category's hook module and extracts the recognized hook
  /// names it exports.
  ///
  /// An absent module yields an empty set. Exports outside the category's
  /// table are ignored, so plugins built against a newer hook surface keep
  /// loading. A module that is present but unreadable is fatal: a plugin
  /// that cannot be parsed cannot safely participate in any build.
  fn load_hook_module(
    &self,
    resolve_name: &str,
    package_dir: &Path,
    category: HookCategory,
  ) -> Result<BTreeSet<String>, PluginLoaderError> {
    let module_path = package_dir.join(category.module_file());

    if !self.fs.is_file(&module_path) {
      return Ok(BTreeSet::new());
    }

    let load_error = |source: anyhow::Error| PluginLoaderError::PluginLoad {
      resolve_name: String::from(resolve_name),
      path: module_path.clone(),
      source: Box::new(source),
    };

    let raw = self
      .fs
      .read_to_string(&module_path)
      .map_err(|source| load_error(source.into()))?;

    let exports: Value =
      serde_json::from_str(&raw).map_err(|source| load_error(source.into()))?;

    let exports = exports
      .as_object()
      .ok_or_else(|| load_error(anyhow!("hook module must be an object keyed by export name")))?;

    let recognized = category.recognized_hooks();

    Ok(
      exports
        .keys()
        .filter(|name| recognized.contains(&name.as_str()))
        .cloned()
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;
  use std::sync::Arc;

  use gantry_filesystem::in_memory_file_system::InMemoryFileSystem;

  use super::*;

  fn introspector(fs: Arc<InMemoryFileSystem>) -> HookIntrospector {
    HookIntrospector::new(fs)
  }

  fn hook_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| String::from(*name)).collect()
  }

  #[test]
  fn absent_modules_yield_empty_hook_sets() {
    let fs = Arc::new(InMemoryFileSystem::default());

    let hooks = introspector(fs)
      .introspect("gantry-plugin-feed", Path::new("/pkg"))
      .unwrap();

    assert_eq!(hooks, PluginHooks::default());
  }

  #[test]
  fn collects_recognized_hooks_per_category() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      &PathBuf::from("/pkg/gantry-build.json"),
      String::from(r#"{ "sourceNodes": true, "onCreatePage": true }"#),
    );
    fs.write_file(
      &PathBuf::from("/pkg/gantry-browser.json"),
      String::from(r#"{ "onRouteUpdate": true }"#),
    );
    fs.write_file(
      &PathBuf::from("/pkg/gantry-ssr.json"),
      String::from(r#"{ "onRenderBody": true }"#),
    );

    let hooks = introspector(fs)
      .introspect("gantry-plugin-feed", Path::new("/pkg"))
      .unwrap();

    assert_eq!(
      hooks,
      PluginHooks {
        build_time: hook_set(&["onCreatePage", "sourceNodes"]),
        browser: hook_set(&["onRouteUpdate"]),
        server_render: hook_set(&["onRenderBody"]),
      }
    );
  }

  #[test]
  fn ignores_exports_outside_the_recognized_table() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      &PathBuf::from("/pkg/gantry-build.json"),
      String::from(r#"{ "sourceNodes": true, "unstable_onAssemble": true, "helper": true }"#),
    );

    let hooks = introspector(fs)
      .introspect("gantry-plugin-feed", Path::new("/pkg"))
      .unwrap();

    assert_eq!(hooks.build_time, hook_set(&["sourceNodes"]));
  }

  #[test]
  fn hooks_are_scoped_to_their_own_category() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      &PathBuf::from("/pkg/gantry-browser.json"),
      String::from(r#"{ "sourceNodes": true, "wrapRootElement": true }"#),
    );

    let hooks = introspector(fs)
      .introspect("gantry-plugin-feed", Path::new("/pkg"))
      .unwrap();

    assert_eq!(hooks.browser, hook_set(&["wrapRootElement"]));
  }

  #[test]
  fn errors_on_an_unparsable_module() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      &PathBuf::from("/pkg/gantry-build.json"),
      String::from("module.exports = {}"),
    );

    let err = introspector(fs)
      .introspect("gantry-plugin-feed", Path::new("/pkg"))
      .map_err(|e| e.to_string());

    assert_eq!(
      err,
      Err(String::from(
        "Failed to load hook module /pkg/gantry-build.json of plugin gantry-plugin-feed"
      ))
    );
  }

  #[test]
  fn errors_on_a_module_that_is_not_an_object() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      &PathBuf::from("/pkg/gantry-ssr.json"),
      String::from(r#"["onRenderBody"]"#),
    );

    let err = introspector(fs).introspect("gantry-plugin-feed", Path::new("/pkg"));

    assert!(matches!(
      err,
      Err(PluginLoaderError::PluginLoad { .. })
    ));
  }
}
