use arcstr::ArcStr;

/// One module reference of a prepared entry.
#[derive(Debug, Clone)]
pub struct EntryLocation {
  /// Raw specifier for dependencies, rewritten absolute path otherwise.
  pub location: ArcStr,
  /// True when the specifier resolves to an installed package rather than a
  /// local file. Dependency locations are never renamed or path-rewritten.
  pub dependency: bool,
  /// Suffixed basename of a local location.
  pub basename: Option<String>,
}

/// Derived identity for one canonical entry. The entry, compiled and loader
/// variants of the same logical entry are three separate `prepare` results.
#[derive(Debug, Clone)]
pub struct PreparedEntry {
  pub name: String,
  pub extension: String,
  pub locations: Vec<EntryLocation>,
}

impl PreparedEntry {
  /// The location strings, in declaration order.
  pub fn location_strings(&self) -> Vec<ArcStr> {
    self.locations.iter().map(|location| location.location.clone()).collect()
  }
}
