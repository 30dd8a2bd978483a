pub mod entry;
pub mod mode;
pub mod target;

use std::path::PathBuf;

use crate::{EntryDescriptor, Mode, Target};

/// Snapshot of the host bundler configuration this plugin reads and patches.
/// Read once per build, before compilation starts.
#[derive(Debug, Clone, Default)]
pub struct BundlerOptions {
  /// Base directory for resolving relative entry locations.
  pub context: Option<PathBuf>,
  pub entry: EntryDescriptor,
  pub output: OutputOptions,
  pub target: Target,
  pub mode: Mode,
  /// Whether the host should emit source maps for the build.
  pub source_maps: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
  /// Output filename template, possibly containing the `[name]` placeholder.
  pub filename: Option<String>,
  /// Absolute output directory.
  pub path: Option<PathBuf>,
}
