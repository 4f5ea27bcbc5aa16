use std::path::Path;
use std::path::PathBuf;

use crate::FileSystem;

/// What to look for while walking up from a starting path.
#[derive(Clone, Copy, Debug)]
pub enum AncestorEntry<'a> {
  Directory(&'a Path),
  File(&'a Path),
}

/// Walks the ancestors of `from` up to and including `root`, returning the
/// first ancestor that contains `entry`. The walk stops early at any
/// ancestor named node_modules so lookups never escape into an installed
/// package's own tree.
pub fn find_ancestor(
  fs: &dyn FileSystem,
  entry: AncestorEntry,
  from: &Path,
  root: &Path,
) -> Option<PathBuf> {
  for dir in from.ancestors() {
    if let Some(name) = dir.file_name() {
      if name == "node_modules" {
        break;
      }
    }

    let candidate = match entry {
      AncestorEntry::Directory(dirname) => dir.join(dirname),
      AncestorEntry::File(filename) => dir.join(filename),
    };

    let found = match entry {
      AncestorEntry::Directory(_) => fs.is_dir(&candidate),
      AncestorEntry::File(_) => fs.is_file(&candidate),
    };

    if found {
      return Some(candidate);
    }

    if dir == root {
      break;
    }
  }

  None
}

pub fn find_ancestor_directory(
  fs: &dyn FileSystem,
  dirname: impl AsRef<Path>,
  from: &Path,
  root: &Path,
) -> Option<PathBuf> {
  find_ancestor(fs, AncestorEntry::Directory(dirname.as_ref()), from, root)
}

pub fn find_ancestor_file(
  fs: &dyn FileSystem,
  filename: impl AsRef<Path>,
  from: &Path,
  root: &Path,
) -> Option<PathBuf> {
  find_ancestor(fs, AncestorEntry::File(filename.as_ref()), from, root)
}

#[cfg(test)]
mod tests {
  use crate::in_memory_file_system::InMemoryFileSystem;

  use super::*;

  #[test]
  fn finds_a_file_in_the_starting_directory() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(&PathBuf::from("/project/package.json"), String::from("{}"));

    assert_eq!(
      find_ancestor_file(
        &fs,
        "package.json",
        Path::new("/project"),
        Path::new("/project")
      ),
      Some(PathBuf::from("/project/package.json"))
    );
  }

  #[test]
  fn finds_a_directory_in_an_ancestor() {
    let fs = InMemoryFileSystem::default();
    fs.create_directory(&PathBuf::from("/project/node_modules/pkg"));

    assert_eq!(
      find_ancestor_directory(
        &fs,
        Path::new("node_modules").join("pkg"),
        Path::new("/project/src/pages"),
        Path::new("/project")
      ),
      Some(PathBuf::from("/project/node_modules/pkg"))
    );
  }

  #[test]
  fn stops_at_the_root() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(&PathBuf::from("/package.json"), String::from("{}"));

    assert_eq!(
      find_ancestor_file(
        &fs,
        "package.json",
        Path::new("/project/src"),
        Path::new("/project")
      ),
      None
    );
  }

  #[test]
  fn does_not_search_within_node_modules_ancestors() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(
      &PathBuf::from("/project/node_modules/pkg/config.json"),
      String::from("{}"),
    );

    assert_eq!(
      find_ancestor_file(
        &fs,
        "config.json",
        Path::new("/project/node_modules"),
        Path::new("/project")
      ),
      None
    );
  }
}
