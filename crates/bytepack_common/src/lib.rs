mod bundler_options;
mod plugin_options;
mod types;

pub use bundler_options::{
  BundlerOptions, OutputOptions,
  entry::{EntryDescriptor, EntryFunction, EntryImport, EntryValue},
  mode::Mode,
  target::Target,
};

pub use crate::{
  plugin_options::PluginOptions,
  types::{
    compilation::Compilation,
    output_asset::OutputAsset,
    output_spec::{NAME_PLACEHOLDER, OutputSpec},
    prepared_entry::{EntryLocation, PreparedEntry},
    processed_options::ProcessedOptions,
  },
};

/// The bundler's native code file extension.
pub const CODE_EXTENSION: &str = ".js";

/// File extension of emitted bytecode artifacts.
pub const BYTECODE_EXTENSION: &str = ".jsc";

/// Suffix of the internal entry that bundles the original source so the
/// asset stage can compile it.
pub const COMPILED_SUFFIX: &str = ".compiled";

/// Suffix of the generated loader entry.
pub const LOADER_SUFFIX: &str = ".loader";
