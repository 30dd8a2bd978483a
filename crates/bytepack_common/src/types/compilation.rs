use bytepack_utils::indexmap::FxIndexMap;

use crate::OutputAsset;

/// The host's per-build asset store, handed to the asset transformation
/// stage once bundling has produced final outputs. Mutated in place; owned
/// by the host pipeline for the rest of the build.
#[derive(Debug, Default)]
pub struct Compilation {
  /// Final assets in emission order.
  pub assets: FxIndexMap<String, OutputAsset>,
  /// Entry point name to the output files it produced.
  pub entrypoints: FxIndexMap<String, Vec<String>>,
}

impl Compilation {
  pub fn emit_asset(&mut self, filename: impl Into<String>, content: Vec<u8>) {
    let filename = filename.into();
    self.assets.insert(filename.clone(), OutputAsset::new(filename, content));
  }

  pub fn delete_asset(&mut self, filename: &str) -> Option<OutputAsset> {
    self.assets.shift_remove(filename)
  }

  pub fn entrypoint_files(&self, name: &str) -> &[String] {
    self.entrypoints.get(name).map_or(&[], Vec::as_slice)
  }

  pub fn asset_filenames(&self) -> Vec<String> {
    self.assets.keys().cloned().collect()
  }
}
