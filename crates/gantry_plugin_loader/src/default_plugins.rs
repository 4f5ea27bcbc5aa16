use std::path::Path;
use std::path::PathBuf;

use gantry_core::types::JSONObject;
use gantry_filesystem::FileSystemRef;
use serde_json::Value;

use crate::plugin_options::merge_plugin_options;
use crate::plugin_spec::PluginSpec;

pub const TYPESCRIPT_PLUGIN: &str = "gantry-plugin-typescript";
pub const INTERNAL_DATA_BRIDGE_PLUGIN: &str = "gantry-internal-data-bridge";
pub const PAGE_CREATOR_PLUGIN: &str = "gantry-plugin-page-creator";

/// Condition deciding whether a default plugin applies to a project.
#[derive(Clone, Debug)]
pub enum InjectCondition {
  Always,
  DirectoryExists(PathBuf),
  FileExists(PathBuf),
}

/// A built-in plugin injected unless the user already configured it.
#[derive(Clone, Debug)]
pub struct DefaultPlugin {
  pub resolve_name: &'static str,
  pub default_options: JSONObject,
  pub condition: InjectCondition,
  /// Required defaults ship with the gantry distribution itself, so failing
  /// to resolve one means a broken installation rather than a user mistake.
  pub required: bool,
}

/// The compiled-in catalog of default plugins, in injection order.
///
/// Built once per load from the project root. Never ambient global state.
pub struct DefaultPluginCatalog {
  fs: FileSystemRef,
  entries: Vec<DefaultPlugin>,
}

impl DefaultPluginCatalog {
  pub fn new(fs: FileSystemRef, project_root: &Path) -> Self {
    let pages_dir = project_root.join("src").join("pages");

    let mut typescript_options = JSONObject::new();
    typescript_options.insert(String::from("plugins"), Value::Array(Vec::new()));

    let mut page_creator_options = JSONObject::new();
    page_creator_options.insert(
      String::from("path"),
      Value::String(pages_dir.display().to_string()),
    );
    page_creator_options.insert(String::from("ignore"), Value::Array(Vec::new()));

    let entries = vec![
      DefaultPlugin {
        resolve_name: TYPESCRIPT_PLUGIN,
        default_options: typescript_options,
        condition: InjectCondition::Always,
        required: true,
      },
      DefaultPlugin {
        resolve_name: INTERNAL_DATA_BRIDGE_PLUGIN,
        default_options: JSONObject::new(),
        condition: InjectCondition::Always,
        required: true,
      },
      DefaultPlugin {
        resolve_name: PAGE_CREATOR_PLUGIN,
        default_options: page_creator_options,
        condition: InjectCondition::DirectoryExists(pages_dir),
        required: false,
      },
    ];

    DefaultPluginCatalog { fs, entries }
  }

  /// Whether a resolution miss for this specifier may be downgraded to a
  /// warning.
  pub fn is_required(&self, resolve_name: &str) -> bool {
    self
      .entries
      .iter()
      .any(|default| default.required && default.resolve_name == resolve_name)
  }

  fn applies(&self, default: &DefaultPlugin) -> bool {
    match &default.condition {
      InjectCondition::Always => true,
      InjectCondition::DirectoryExists(path) => self.fs.is_dir(path),
      InjectCondition::FileExists(path) => self.fs.is_file(path),
    }
  }

  /// Folds the applicable defaults into the user's normalized specs.
  ///
  /// A user spec naming a default takes that default's options as its merge
  /// base instead of producing a second entry. Defaults the user did not
  /// configure are appended after all user-declared specs, keeping the
  /// user's relative order intact.
  pub fn apply(&self, mut specs: Vec<PluginSpec>) -> Vec<PluginSpec> {
    let mut injected = Vec::new();

    for default in &self.entries {
      if !self.applies(default) {
        continue;
      }

      let mut matched = false;
      for spec in specs
        .iter_mut()
        .filter(|spec| spec.resolve_name == default.resolve_name)
      {
        spec.options = merge_plugin_options(&default.default_options, &spec.options);
        matched = true;
      }

      if !matched {
        tracing::debug!(plugin = default.resolve_name, "injecting default plugin");
        injected.push(PluginSpec {
          resolve_name: String::from(default.resolve_name),
          options: default.default_options.clone(),
        });
      }
    }

    specs.append(&mut injected);
    specs
  }
}
