pub mod default_plugins;
pub mod loader_error;
pub mod plugin_hooks;
pub mod plugin_loader;
pub mod plugin_options;
pub mod plugin_resolver;
pub mod plugin_spec;

#[cfg(test)]
mod plugin_fixtures;

pub use loader_error::PluginLoaderError;
pub use plugin_loader::LoadPluginsOptions;
pub use plugin_loader::LoadedPlugins;
pub use plugin_loader::MissingPluginPolicy;
pub use plugin_loader::PluginLoader;
pub use plugin_spec::PluginSpec;
pub use plugin_spec::RawPluginEntry;
