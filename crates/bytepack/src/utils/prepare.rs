use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

use bytepack_common::{CODE_EXTENSION, EntryLocation, PreparedEntry};
use bytepack_resolver::Resolver;
use bytepack_utils::path_ext::PathExt;

/// Derive the identity of one entry variant. Dependency locations pass
/// through untouched; local locations are resolved against the context
/// directory and get the suffix appended to their basename only, keeping
/// directory and extension intact.
///
/// The compiled and loader variants of an entry come from two separate
/// calls with different suffixes, never from post-processing.
pub fn prepare(
  context: &Path,
  locations: &[String],
  name: Option<&str>,
  suffix: &str,
  resolver: &Resolver,
) -> PreparedEntry {
  let locations: Vec<EntryLocation> = locations
    .iter()
    .map(|location| {
      if resolver.is_dependency(location) {
        return EntryLocation { location: location.as_str().into(), dependency: true, basename: None };
      }

      let path = Path::new(location);
      let path: PathBuf =
        if path.is_absolute() { path.to_path_buf() } else { context.join(path).normalize() };

      let directory = path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
      let extension =
        path.extension().map_or_else(String::new, |ext| format!(".{}", ext.to_string_lossy()));
      let stem = path.file_stem().map_or_else(String::new, |stem| stem.to_string_lossy().into_owned());

      let basename = format!("{stem}{suffix}");
      let rewritten = directory.join(format!("{basename}{extension}"));

      EntryLocation {
        location: rewritten.expect_to_str().into(),
        dependency: false,
        basename: Some(basename),
      }
    })
    .collect();

  let mut basename = format!("main{suffix}");

  if let [single] = locations.as_slice() {
    if let Some(single_basename) = &single.basename {
      basename.clone_from(single_basename);
    }
  }

  let name = name.map_or(basename, |name| format!("{name}{suffix}"));

  PreparedEntry { name, extension: CODE_EXTENSION.to_string(), locations }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use bytepack_resolver::Resolver;
  use bytepack_utils::path_ext::PathExt;

  use super::prepare;

  fn resolver() -> Resolver {
    Resolver::new(std::env::current_dir().expect("cwd"))
  }

  fn loc(entry: &bytepack_common::PreparedEntry, index: usize) -> String {
    Path::new(entry.locations[index].location.as_str()).expect_to_slash()
  }

  #[test]
  fn suffix_touches_only_the_basename() {
    let resolver = resolver();
    let context = Path::new("proj");
    let locations = vec!["./fixtures/first.js".to_string()];

    let prepared = prepare(context, &locations, None, ".compiled", &resolver);
    assert_eq!(loc(&prepared, 0), "proj/fixtures/first.compiled.js");
    assert_eq!(prepared.name, "first.compiled");
    assert!(!prepared.locations[0].dependency);

    // Pure function of its inputs.
    let again = prepare(context, &locations, None, ".compiled", &resolver);
    assert_eq!(loc(&again, 0), loc(&prepared, 0));
    assert_eq!(again.name, prepared.name);
  }

  #[test]
  fn provided_name_gets_the_suffix() {
    let resolver = resolver();
    let prepared = prepare(
      Path::new("proj"),
      &["./fixtures/first.js".to_string()],
      Some("app"),
      ".loader",
      &resolver,
    );
    assert_eq!(prepared.name, "app.loader");
    assert_eq!(loc(&prepared, 0), "proj/fixtures/first.loader.js");
  }

  #[test]
  fn multiple_locations_default_to_main() {
    let resolver = resolver();
    let prepared = prepare(
      Path::new("proj"),
      &["./fixtures/second.js".to_string(), "./fixtures/third.js".to_string()],
      None,
      ".compiled",
      &resolver,
    );
    assert_eq!(prepared.name, "main.compiled");
    assert_eq!(loc(&prepared, 0), "proj/fixtures/second.compiled.js");
    assert_eq!(loc(&prepared, 1), "proj/fixtures/third.compiled.js");
  }

  #[test]
  fn dependencies_are_never_rewritten() {
    let resolver = resolver();

    for suffix in ["", ".compiled", ".loader"] {
      let prepared = prepare(Path::new("proj"), &["fs".to_string()], None, suffix, &resolver);
      assert_eq!(prepared.locations[0].location.as_str(), "fs");
      assert!(prepared.locations[0].dependency);
      assert_eq!(prepared.locations[0].basename, None);
      // No local location, so the default name falls back to main.
      assert_eq!(prepared.name, format!("main{suffix}"));
    }
  }

  #[test]
  fn absolute_locations_skip_context_resolution() {
    let resolver = resolver();
    let absolute = std::env::current_dir().expect("cwd").join("fixtures").join("first.js");
    let prepared = prepare(
      Path::new("elsewhere"),
      &[absolute.expect_to_str().to_string()],
      None,
      ".loader",
      &resolver,
    );
    let location = loc(&prepared, 0);
    assert!(location.ends_with("fixtures/first.loader.js"));
    assert!(!location.contains("elsewhere"));
  }
}
