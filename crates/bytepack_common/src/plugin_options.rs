/// Recognized plugin options with the same defaults the plugin has always
/// shipped with.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone)]
pub struct PluginOptions {
  /// Wrap each bundled source in a CommonJS module body before compiling.
  pub compile_as_module: bool,
  /// Compile with the Electron-targeted runtime instead of plain Node.
  pub compile_for_electron: bool,
  pub debug_lifecycle: bool,
  pub debug_logs: bool,
  /// Keep the plaintext asset next to the compiled artifact.
  pub keep_source: bool,
  /// Force the host's source-map generation off for compiled outputs.
  pub prevent_source_maps: bool,
  pub silent: bool,
}

impl Default for PluginOptions {
  fn default() -> Self {
    Self {
      compile_as_module: true,
      compile_for_electron: false,
      debug_lifecycle: false,
      debug_logs: false,
      keep_source: false,
      prevent_source_maps: true,
      silent: false,
    }
  }
}
