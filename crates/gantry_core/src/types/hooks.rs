/// Hooks that run inside the build process: page creation, data sourcing,
/// and webpack/babel configuration.
pub const BUILD_TIME_HOOKS: &[&str] = &[
  "onPreInit",
  "onPreBootstrap",
  "onPostBootstrap",
  "onPreBuild",
  "onPostBuild",
  "createPages",
  "createPagesStatefully",
  "sourceNodes",
  "onCreateNode",
  "onCreatePage",
  "setFieldsOnGraphQLNodeType",
  "resolvableExtensions",
  "onCreateBabelConfig",
  "onCreateWebpackConfig",
  "onCreateDevServer",
];

/// Hooks that run in the browser runtime.
pub const BROWSER_HOOKS: &[&str] = &[
  "onClientEntry",
  "onInitialClientRender",
  "onPreRouteUpdate",
  "onRouteUpdate",
  "onRouteUpdateDelayed",
  "registerServiceWorker",
  "onServiceWorkerActive",
  "shouldUpdateScroll",
  "wrapPageElement",
  "wrapRootElement",
];

/// Hooks that run while rendering pages on the server.
pub const SERVER_RENDER_HOOKS: &[&str] = &[
  "replaceRenderer",
  "onRenderBody",
  "onPreRenderHTML",
  "wrapPageElement",
  "wrapRootElement",
];

/// One of the three lifecycle-hook surfaces a plugin can contribute to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HookCategory {
  BuildTime,
  Browser,
  ServerRender,
}

impl HookCategory {
  /// File name of the optional hook-module manifest a plugin package ships
  /// for this category.
  pub fn module_file(self) -> &'static str {
    match self {
      HookCategory::BuildTime => "gantry-build.json",
      HookCategory::Browser => "gantry-browser.json",
      HookCategory::ServerRender => "gantry-ssr.json",
    }
  }

  /// The fixed table of hook names recognized for this category. Exported
  /// names outside this table are ignored during introspection.
  pub fn recognized_hooks(self) -> &'static [&'static str] {
    match self {
      HookCategory::BuildTime => BUILD_TIME_HOOKS,
      HookCategory::Browser => BROWSER_HOOKS,
      HookCategory::ServerRender => SERVER_RENDER_HOOKS,
    }
  }
}
