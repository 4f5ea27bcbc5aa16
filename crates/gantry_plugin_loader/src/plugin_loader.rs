use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use gantry_core::hash::hash_string;
use gantry_core::types::JSONObject;
use gantry_core::types::PluginDescriptor;
use gantry_filesystem::FileSystemRef;
use gantry_package_manager::PackageManagerRef;
use rayon::prelude::*;
use serde_json::Value;

use crate::default_plugins::DefaultPluginCatalog;
use crate::loader_error::PluginLoaderError;
use crate::plugin_hooks::HookIntrospector;
use crate::plugin_resolver::PluginResolver;
use crate::plugin_spec::normalize_plugin_entries;
use crate::plugin_spec::PluginSpec;
use crate::plugin_spec::RawPluginEntry;

/// Policy for plugin entries whose package cannot be located.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MissingPluginPolicy {
  /// Log a warning and drop the entry from the output.
  #[default]
  WarnAndDrop,
  /// Abort the load.
  Fatal,
}

#[derive(Clone, Debug, Default)]
pub struct LoadPluginsOptions {
  pub missing_plugin_policy: MissingPluginPolicy,
}

/// The result of a successful load: descriptors in configuration order,
/// plus the recoverable errors that were downgraded to warnings.
#[derive(Debug, Default)]
pub struct LoadedPlugins {
  pub plugins: Vec<PluginDescriptor>,
  pub warnings: Vec<PluginLoaderError>,
}

enum SpecOutcome {
  Loaded {
    descriptor: PluginDescriptor,
    warnings: Vec<PluginLoaderError>,
  },
  Dropped {
    warning: PluginLoaderError,
  },
}

/// Resolves a site's configured plugin list into ordered plugin descriptors.
pub struct PluginLoader {
  fs: FileSystemRef,
  package_manager: PackageManagerRef,
  project_root: PathBuf,
}

impl PluginLoader {
  pub fn new(fs: FileSystemRef, package_manager: PackageManagerRef, project_root: PathBuf) -> Self {
    PluginLoader {
      fs,
      package_manager,
      project_root,
    }
  }

  /// Loads every configured plugin plus the applicable built-in defaults.
  ///
  /// Malformed entries fail before any resolution work begins. Entries that
  /// cannot be resolved are dropped with a warning or abort the load,
  /// depending on `MissingPluginPolicy` and whether the plugin is a required
  /// built-in. A plugin whose hook module cannot be loaded always aborts:
  /// hook registration is all-or-nothing for build consistency, so no
  /// partial descriptor list escapes.
  pub fn load(
    &self,
    config_plugins: &[RawPluginEntry],
    options: LoadPluginsOptions,
  ) -> Result<LoadedPlugins, PluginLoaderError> {
    let specs = normalize_plugin_entries(config_plugins)?;

    let catalog = DefaultPluginCatalog::new(Arc::clone(&self.fs), &self.project_root);
    let specs = catalog.apply(specs);

    let resolver = PluginResolver::new(Arc::clone(&self.fs), Arc::clone(&self.package_manager));
    let introspector = HookIntrospector::new(Arc::clone(&self.fs));

    // Specs resolve independently of each other; the ordered collect below
    // is the join point that restores configuration order no matter which
    // task finishes first.
    let outcomes = specs
      .par_iter()
      .map(|spec| self.load_spec(spec, &resolver, &introspector, &catalog, &options))
      .collect::<Result<Vec<_>, PluginLoaderError>>()?;

    let mut loaded = LoadedPlugins::default();
    let mut seen_ids = HashSet::new();

    for outcome in outcomes {
      match outcome {
        SpecOutcome::Loaded {
          descriptor,
          mut warnings,
        } => {
          if !seen_ids.insert(descriptor.id.clone()) {
            tracing::debug!(
              id = %descriptor.id,
              plugin = %descriptor.resolve_name,
              "skipping duplicate plugin entry"
            );
            continue;
          }

          for warning in &warnings {
            tracing::warn!("{}", warning);
          }

          loaded.warnings.append(&mut warnings);
          loaded.plugins.push(descriptor);
        }
        SpecOutcome::Dropped { warning } => {
          tracing::warn!("{}", warning);
          loaded.warnings.push(warning);
        }
      }
    }

    Ok(loaded)
  }

  fn load_spec(
    &self,
    spec: &PluginSpec,
    resolver: &PluginResolver,
    introspector: &HookIntrospector,
    catalog: &DefaultPluginCatalog,
    options: &LoadPluginsOptions,
  ) -> Result<SpecOutcome, PluginLoaderError> {
    let (resolved, metadata_warning) = match resolver.resolve(spec, &self.project_root) {
      Ok(resolved) => resolved,
      Err(error @ PluginLoaderError::PluginNotFound { .. }) => {
        if catalog.is_required(&spec.resolve_name)
          || options.missing_plugin_policy == MissingPluginPolicy::Fatal
        {
          return Err(error);
        }

        return Ok(SpecOutcome::Dropped { warning: error });
      }
      Err(error) => return Err(error),
    };

    let hooks = introspector.introspect(&spec.resolve_name, &resolved.package_dir)?;

    let descriptor = PluginDescriptor {
      id: plugin_id(&resolved.package_dir, &spec.options),
      resolve_name: spec.resolve_name.clone(),
      name: resolved.name,
      version: resolved.version,
      resolved_path: resolved.package_dir,
      plugin_options: spec.options.clone(),
      build_time_hooks: hooks.build_time,
      browser_hooks: hooks.browser,
      server_render_hooks: hooks.server_render,
    };

    Ok(SpecOutcome::Loaded {
      descriptor,
      warnings: metadata_warning.into_iter().collect(),
    })
  }
}

/// Derives the stable identifier for one plugin instance.
///
/// The same package configured twice with different options yields two
/// descriptors with distinct ids; the same logical instance hashes to the
/// same id on every run.
fn plugin_id(package_dir: &Path, options: &JSONObject) -> String {
  let options = Value::Object(options.clone());

  hash_string(&format!("{}:{}", package_dir.display(), options))
}
