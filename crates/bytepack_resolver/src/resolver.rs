use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

use oxc_resolver::{ResolveError, ResolveOptions, Resolver as OxcResolver};

/// Module-resolution probe used to classify entry locations. Loaders and
/// compiled artifacts are required through CommonJS at runtime, so the
/// conditions and extensions follow node's `require` semantics.
pub struct Resolver {
  cwd: PathBuf,
  inner: OxcResolver,
}

impl std::fmt::Debug for Resolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Resolver").field("cwd", &self.cwd).finish_non_exhaustive()
  }
}

impl Resolver {
  pub fn new(cwd: PathBuf) -> Self {
    let options = ResolveOptions {
      builtin_modules: true,
      condition_names: vec!["require".to_string(), "node".to_string(), "default".to_string()],
      main_fields: vec!["main".to_string(), "module".to_string()],
      extensions: vec![".js".to_string(), ".json".to_string(), ".node".to_string()],
      ..ResolveOptions::default()
    };

    Self { cwd: cwd.normalize(), inner: OxcResolver::new(options) }
  }

  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  pub fn resolve(&self, specifier: &str) -> Result<PathBuf, ResolveError> {
    self.inner.resolve(&self.cwd, specifier).map(|resolution| resolution.full_path())
  }

  /// Whether a location string denotes a resolvable runtime dependency.
  ///
  /// Absolute paths and explicit relative specifiers are always local.
  /// Everything else is probed; node builtins count as resolvable, and a
  /// failed probe degrades to "local" rather than surfacing an error.
  pub fn is_dependency(&self, specifier: &str) -> bool {
    if Self::is_path_specifier(specifier) {
      return false;
    }

    match self.inner.resolve(&self.cwd, specifier) {
      Ok(_) | Err(ResolveError::Builtin { .. }) => true,
      Err(_) => false,
    }
  }

  fn is_path_specifier(specifier: &str) -> bool {
    Path::new(specifier).is_absolute()
      || specifier == "."
      || specifier == ".."
      || specifier.starts_with("./")
      || specifier.starts_with("../")
  }
}

#[cfg(test)]
mod tests {
  use super::Resolver;

  fn resolver() -> Resolver {
    Resolver::new(std::env::current_dir().expect("cwd"))
  }

  #[test]
  fn path_specifiers_are_never_dependencies() {
    let resolver = resolver();
    assert!(!resolver.is_dependency("./fixtures/first.js"));
    assert!(!resolver.is_dependency("../shared/util.js"));
    assert!(!resolver.is_dependency("."));
    #[cfg(unix)]
    assert!(!resolver.is_dependency("/opt/app/main.js"));
  }

  #[test]
  fn builtins_are_dependencies() {
    let resolver = resolver();
    assert!(resolver.is_dependency("fs"));
    assert!(resolver.is_dependency("path"));
  }

  #[test]
  fn unresolvable_specifiers_degrade_to_local() {
    let resolver = resolver();
    assert!(!resolver.is_dependency("package-that-is-not-installed-anywhere"));
  }
}
