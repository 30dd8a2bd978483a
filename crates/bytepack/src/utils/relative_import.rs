use std::path::Path;

use sugar_path::SugarPath;

use bytepack_utils::path_ext::PathExt;

/// Import specifier that reaches `to` from `from`, both given as output
/// filenames relative to the output directory. The result always carries an
/// explicit relative marker so the runtime resolves it from disk instead of
/// the module search path.
pub fn to_relative_import_path(base: &Path, from: &str, to: &str) -> String {
  let base = base.absolutize();
  let from = base.join(from).normalize();
  let from_dir = from.parent().map_or_else(|| base.to_path_buf(), Path::to_path_buf);
  let to = base.join(to).normalize();

  let relative = to.relative(from_dir).expect_to_slash();

  if relative.starts_with('.') { relative } else { format!("./{relative}") }
}
