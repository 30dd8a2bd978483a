use bytepack_common::{BYTECODE_EXTENSION, COMPILED_SUFFIX};

/// Name of the bytecode artifact emitted for a bundled asset. The internal
/// `.compiled` marker collapses so the artifact lands next to its loader:
/// `main.compiled.js` becomes `main.js.jsc`, `vendor.js` becomes
/// `vendor.js.jsc`.
pub fn compiled_asset_name(asset_name: &str, extension: &str) -> String {
  let stem = strip_extension(asset_name, extension).unwrap_or(asset_name);
  let stem = stem.strip_suffix(COMPILED_SUFFIX).unwrap_or(stem);
  format!("{stem}{extension}{BYTECODE_EXTENSION}")
}

/// Case-insensitive extension match, the way the host matches emitted
/// filenames.
pub fn matches_extension(asset_name: &str, extension: &str) -> bool {
  strip_extension(asset_name, extension).is_some()
}

fn strip_extension<'a>(asset_name: &'a str, extension: &str) -> Option<&'a str> {
  let split = asset_name.len().checked_sub(extension.len())?;
  if !asset_name.is_char_boundary(split) {
    return None;
  }

  let (stem, tail) = asset_name.split_at(split);
  tail.eq_ignore_ascii_case(extension).then_some(stem)
}
