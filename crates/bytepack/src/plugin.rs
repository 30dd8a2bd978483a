use std::sync::Arc;

use futures::future::BoxFuture;

use bytepack_bytecode::{BytecodeCompiler, ProcessCompiler};
use bytepack_common::{BundlerOptions, Compilation, PluginOptions, ProcessedOptions};
use bytepack_error::BuildResult;
use bytepack_resolver::Resolver;

use crate::{
  plugin_driver::Plugin,
  stages::{rewrite_config::process_options, transform_assets::transform_assets},
};

/// For every entry point, ships the final output as a bytecode artifact
/// (`<name>.js.jsc`) plus a `<name>.js` loader that loads the bytecode
/// runtime and requires the artifact from disk.
pub struct BytecodePlugin {
  options: PluginOptions,
  compiler: Arc<dyn BytecodeCompiler>,
  processed: Option<ProcessedOptions>,
}

impl BytecodePlugin {
  pub fn new(options: PluginOptions) -> Self {
    let compiler: Arc<dyn BytecodeCompiler> = if options.compile_for_electron {
      Arc::new(ProcessCompiler::electron())
    } else {
      Arc::new(ProcessCompiler::node())
    };

    Self { options, compiler, processed: None }
  }

  /// Swap the compilation primitive, e.g. for a pinned runtime binary.
  pub fn with_compiler(options: PluginOptions, compiler: Arc<dyn BytecodeCompiler>) -> Self {
    Self { options, compiler, processed: None }
  }

  /// The rewritten configuration, available once `before_compile` has run.
  /// Hosts read `externals` and `virtual_modules` from here and register
  /// them through their own mechanisms.
  pub fn processed_options(&self) -> Option<&ProcessedOptions> {
    self.processed.as_ref()
  }

  fn debug(&self, message: impl FnOnce() -> String) {
    if self.options.debug_logs && !self.options.silent {
      log::debug!("{}", message());
    }
  }

  fn lifecycle(&self, stage: &str) {
    if self.options.debug_lifecycle && !self.options.silent {
      log::debug!("{}: {stage}", self.name());
    }
  }
}

impl Plugin for BytecodePlugin {
  fn name(&self) -> &'static str {
    "BytecodePlugin"
  }

  fn before_compile(&mut self, options: &mut BundlerOptions) -> BuildResult<()> {
    self.lifecycle("before_compile");
    self.debug(|| format!("original options: {options:?}"));

    let context = options
      .context
      .clone()
      .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));
    let resolver = Resolver::new(context);

    let processed = process_options(options, &resolver)?;
    processed.apply_to(options);

    if self.options.prevent_source_maps {
      options.source_maps = Some(false);
    }

    self.debug(|| format!("processed options: {processed:?}"));
    self.debug(|| format!("modified options: {options:?}"));

    self.processed = Some(processed);
    Ok(())
  }

  fn process_assets<'a>(
    &'a self,
    compilation: &'a mut Compilation,
  ) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async move {
      self.lifecycle("process_assets");

      // Nothing to do unless the rewrite stage ran for this build.
      let Some(processed) = &self.processed else {
        return Ok(());
      };

      transform_assets(&self.options, processed, compilation, &*self.compiler).await
    })
  }
}
