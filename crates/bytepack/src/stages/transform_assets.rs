use bytepack_bytecode::{BytecodeCompiler, wrap_module};
use bytepack_common::{Compilation, PluginOptions, ProcessedOptions};
use bytepack_error::BuildResult;
use bytepack_utils::indexmap::FxIndexSet;

use crate::utils::asset_name::{compiled_asset_name, matches_extension};

/// Turn every eligible bundled asset into a bytecode artifact. Runs once
/// per build after final assets exist, sequentially in emission order, and
/// fails fast on the first compiler error; the host awaits the stage as a
/// single unit.
pub async fn transform_assets(
  options: &PluginOptions,
  processed: &ProcessedOptions,
  compilation: &mut Compilation,
  compiler: &dyn BytecodeCompiler,
) -> BuildResult<()> {
  // Files produced by loader entry points are excluded up front, whatever
  // their names look like. A loader must never itself be recompiled.
  let loader_files: FxIndexSet<String> = processed
    .entry_loaders
    .iter()
    .flat_map(|name| compilation.entrypoint_files(name).iter().cloned())
    .collect();

  let extension = processed.output.extension.clone();
  let candidates: Vec<String> = compilation
    .assets
    .keys()
    .filter(|name| matches_extension(name, &extension) && !loader_files.contains(*name))
    .cloned()
    .collect();

  for name in candidates {
    let Some(asset) = compilation.assets.get(&name) else { continue };

    let source = asset.content_as_text().into_owned();
    let source = if options.compile_as_module { wrap_module(&source) } else { source };

    let artifact_name = compiled_asset_name(&name, &extension);
    log::debug!("compiling `{name}` to `{artifact_name}`");

    let bytecode = compiler.compile(&source).await?;
    compilation.emit_asset(artifact_name, bytecode);

    if !options.keep_source {
      compilation.delete_asset(&name);
    }
  }

  Ok(())
}
