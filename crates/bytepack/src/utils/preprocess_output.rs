use std::path::Path;

use bytepack_common::{BundlerOptions, CODE_EXTENSION, NAME_PLACEHOLDER, OutputSpec};

/// Resolve the output filename template. Static templates are rewritten to
/// carry a per-entry placeholder so downstream naming never branches on
/// static vs templated output; the static basename is kept as the canonical
/// single output name.
pub fn preprocess_output(options: &BundlerOptions) -> OutputSpec {
  let filename = options
    .output
    .filename
    .clone()
    .unwrap_or_else(|| format!("{NAME_PLACEHOLDER}{CODE_EXTENSION}"));

  let dynamic = filename.contains(['[', ']']);

  let path = Path::new(&filename);
  let extension = path
    .extension()
    .map_or_else(|| CODE_EXTENSION.to_string(), |ext| format!(".{}", ext.to_string_lossy()));

  if dynamic {
    OutputSpec { filename, dynamic, extension, name: None }
  } else {
    let name = path.file_stem().map(|stem| stem.to_string_lossy().into_owned());
    OutputSpec { filename: format!("{NAME_PLACEHOLDER}{extension}"), dynamic, extension, name }
  }
}
