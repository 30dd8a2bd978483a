use std::path::PathBuf;

use sugar_path::SugarPath;

use bytepack_common::{
  BundlerOptions, COMPILED_SUFFIX, LOADER_SUFFIX, Mode, ProcessedOptions, Target,
};
use bytepack_error::BuildResult;
use bytepack_resolver::Resolver;
use bytepack_utils::{indexmap::FxIndexMap, path_ext::PathExt};

use crate::utils::{
  asset_name::compiled_asset_name, loader_code::create_loader_code,
  normalize_entry::normalize_entry, prepare::prepare, preprocess_output::preprocess_output,
  relative_import::to_relative_import_path,
};

/// Rewrite the host configuration before compilation starts: each logical
/// entry is pointed at a generated loader, the original source is
/// re-registered under an internal compiled entry, and the artifact import
/// path is marked external. Pure with respect to the host options; the
/// caller applies the returned patch.
pub fn process_options(
  options: &BundlerOptions,
  resolver: &Resolver,
) -> BuildResult<ProcessedOptions> {
  let output = preprocess_output(options);
  let context = options.context.clone().unwrap_or_else(|| resolver.cwd().to_path_buf());

  let mut entry = FxIndexMap::default();
  let mut entry_loaders = Vec::new();
  let mut externals = Vec::new();
  let mut virtual_modules = FxIndexMap::default();

  for raw in normalize_entry(&options.entry)? {
    // A fixed output name wins, then the declared entry name, then the
    // bundler-conventional default.
    let entry_name = output.name.clone().or(raw.name).unwrap_or_else(|| "main".to_string());

    let original = prepare(&context, &raw.locations, Some(&entry_name), "", resolver);
    let compiled = prepare(&context, &raw.locations, Some(&entry_name), COMPILED_SUFFIX, resolver);
    let loader = prepare(&context, &raw.locations, Some(&entry_name), LOADER_SUFFIX, resolver);

    entry.insert(entry_name.clone(), loader.location_strings());
    entry_loaders.push(entry_name.clone());

    // The original source still gets bundled, under the compiled entry, so
    // the asset stage has something to turn into bytecode.
    entry.insert(compiled.name.clone(), original.location_strings());

    let loader_output = output.of(&entry_name);
    let artifact = compiled_asset_name(&output.of(&compiled.name), &output.extension);
    let output_path = options.output.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let mut import_path = to_relative_import_path(&output_path, &loader_output, &artifact);

    // In development the renderer is served over a protocol instead of read
    // from disk, so relative resolution from the loader never finds the
    // artifact. Dev output is not relocated between bundling and launch,
    // which is what makes the absolute path safe.
    if options.target == Target::ElectronRenderer && options.mode == Mode::Development {
      import_path =
        output_path.join("renderer").join(&import_path).absolutize().expect_to_str().to_string();
    }

    externals.push(import_path.clone());

    for location in &loader.locations {
      // Dependency locations already exist in the resolution system and
      // never receive generated content.
      if !location.dependency {
        virtual_modules.insert(location.location.clone(), create_loader_code(&import_path));
      }
    }
  }

  Ok(ProcessedOptions { entry, entry_loaders, externals, output, virtual_modules })
}

#[cfg(test)]
mod tests {
  use std::path::{Path, PathBuf};

  use bytepack_common::{BundlerOptions, EntryDescriptor, Mode, OutputOptions, Target};
  use bytepack_resolver::Resolver;

  use super::process_options;

  fn resolver() -> Resolver {
    Resolver::new(std::env::current_dir().expect("cwd"))
  }

  fn options(entry: EntryDescriptor) -> BundlerOptions {
    BundlerOptions {
      context: Some(PathBuf::from("proj")),
      entry,
      output: OutputOptions { filename: None, path: Some(PathBuf::from("/out")) },
      ..BundlerOptions::default()
    }
  }

  #[test]
  fn registers_loader_and_compiled_entries() {
    let processed = process_options(&options("./fixtures/first.js".into()), &resolver()).unwrap();

    let names: Vec<_> = processed.entry.keys().cloned().collect();
    assert_eq!(names, vec!["main".to_string(), "main.compiled".to_string()]);
    assert_eq!(processed.entry_loaders, vec!["main".to_string()]);

    let loader_locations = &processed.entry["main"];
    assert_eq!(loader_locations.len(), 1);
    assert!(loader_locations[0].as_str().ends_with("first.loader.js"));

    let original_locations = &processed.entry["main.compiled"];
    assert!(original_locations[0].as_str().ends_with("first.js"));
    assert!(!original_locations[0].as_str().contains(".loader"));
  }

  #[test]
  fn artifact_import_is_external_and_required_by_the_loader() {
    let processed = process_options(&options("./fixtures/first.js".into()), &resolver()).unwrap();

    assert_eq!(processed.externals, vec!["./main.js.jsc".to_string()]);

    assert_eq!(processed.virtual_modules.len(), 1);
    let (location, code) = processed.virtual_modules.first().unwrap();
    assert!(location.as_str().ends_with("first.loader.js"));
    assert_eq!(code, "require('bytenode');\nrequire('./main.js.jsc');\n");
  }

  #[test]
  fn dependency_locations_never_become_virtual_modules() {
    let entry = EntryDescriptor::Multiple(vec!["fs".to_string(), "./fixtures/first.js".to_string()]);
    let processed = process_options(&options(entry), &resolver()).unwrap();

    // The dependency stays in the loader entry untouched.
    let loader_locations = &processed.entry["main"];
    assert_eq!(loader_locations[0].as_str(), "fs");
    assert!(loader_locations[1].as_str().ends_with("first.loader.js"));

    // Only the local location got loader content.
    assert_eq!(processed.virtual_modules.len(), 1);
  }

  #[test]
  fn static_output_name_wins_over_entry_names() {
    let mut options = options("./fixtures/first.js".into());
    options.output.filename = Some("named.js".to_string());

    let processed = process_options(&options, &resolver()).unwrap();
    let names: Vec<_> = processed.entry.keys().cloned().collect();
    assert_eq!(names, vec!["named".to_string(), "named.compiled".to_string()]);
    assert_eq!(processed.externals, vec!["./named.js.jsc".to_string()]);
  }

  #[test]
  fn dev_renderer_uses_an_absolute_import_path() {
    let mut options = options("./fixtures/first.js".into());
    options.target = Target::ElectronRenderer;
    options.mode = Mode::Development;

    let processed = process_options(&options, &resolver()).unwrap();
    let import = Path::new(&processed.externals[0]);
    assert!(import.is_absolute());
    assert!(processed.externals[0].contains("renderer"));
    assert!(processed.externals[0].ends_with("main.js.jsc"));

    // Production renderer builds keep the relative path.
    options.mode = Mode::Production;
    let processed = process_options(&options, &resolver()).unwrap();
    assert_eq!(processed.externals, vec!["./main.js.jsc".to_string()]);
  }

  #[test]
  fn missing_output_path_degrades_to_the_current_directory() {
    let mut options = options("./fixtures/first.js".into());
    options.output.path = None;
    options.target = Target::ElectronRenderer;
    options.mode = Mode::Development;

    let processed = process_options(&options, &resolver()).unwrap();
    assert!(Path::new(&processed.externals[0]).is_absolute());
    assert!(processed.externals[0].contains("renderer"));
  }
}
