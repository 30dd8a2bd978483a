use arcstr::ArcStr;
use bytepack_utils::indexmap::FxIndexMap;

use crate::{EntryDescriptor, EntryValue, OutputSpec};

/// The rewritten configuration bundle: everything the pre-compilation stage
/// derived, expressed as an explicit patch the host applies. Computed once
/// per build and held for its duration.
#[derive(Debug, Clone)]
pub struct ProcessedOptions {
  /// Rewritten entry map: logical entry name to loader locations, plus one
  /// internal entry per logical entry that bundles the original source.
  pub entry: FxIndexMap<String, Vec<ArcStr>>,
  /// Entry names whose output is a generated loader. Loaders are never
  /// recompiled into bytecode.
  pub entry_loaders: Vec<String>,
  /// Import specifiers the bundler must leave unbundled, resolved by a
  /// runtime `require` instead.
  pub externals: Vec<String>,
  pub output: OutputSpec,
  /// Synthetic source files keyed by absolute module path.
  pub virtual_modules: FxIndexMap<ArcStr, String>,
}

impl ProcessedOptions {
  /// Apply the entry/output part of the patch to the host configuration.
  /// Externals and virtual modules are surfaced separately since hosts
  /// register those through their own mechanisms.
  pub fn apply_to(&self, options: &mut crate::BundlerOptions) {
    options.entry = EntryDescriptor::Named(
      self
        .entry
        .iter()
        .map(|(name, locations)| {
          (
            name.clone(),
            EntryValue::Multiple(locations.iter().map(ToString::to_string).collect()),
          )
        })
        .collect(),
    );
    options.output.filename = Some(self.output.filename.clone());
  }
}
