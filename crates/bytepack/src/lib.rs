mod plugin;
mod plugin_driver;
mod stages;
mod utils;

pub use crate::{
  plugin::BytecodePlugin,
  plugin_driver::{Plugin, PluginDriver},
  stages::{rewrite_config::process_options, transform_assets::transform_assets},
  utils::{
    asset_name::{compiled_asset_name, matches_extension},
    loader_code::create_loader_code,
    normalize_entry::{RawEntry, normalize_entry},
    prepare::prepare,
    preprocess_output::preprocess_output,
    relative_import::to_relative_import_path,
  },
};
pub use bytepack_bytecode::{BytecodeCompiler, ProcessCompiler, wrap_module};
pub use bytepack_common::*;
pub use bytepack_error::{BuildError, BuildResult, CompilationError, ConfigurationError};
