use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use mockall::automock;

/// The package root a specifier resolved to
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
  pub resolved: PathBuf,
}

pub type PackageManagerRef = Arc<dyn PackageManager + Send + Sync>;

/// Locates installed plugin packages on disk.
#[automock]
pub trait PackageManager {
  fn resolve(&self, specifier: &str, from: &Path) -> anyhow::Result<Resolution>;
}
