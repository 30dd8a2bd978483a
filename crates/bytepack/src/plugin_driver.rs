use futures::future::BoxFuture;

use bytepack_common::{BundlerOptions, Compilation};
use bytepack_error::BuildResult;

/// Build-pipeline stages a plugin can take part in, in invocation order.
///
/// `before_compile` runs synchronously before the bundler reads its
/// configuration; mutations after it are ignored by the host.
/// `process_assets` runs once final assets exist and is awaited as a single
/// unit before the build is reported complete.
pub trait Plugin {
  fn name(&self) -> &'static str;

  fn before_compile(&mut self, _options: &mut BundlerOptions) -> BuildResult<()> {
    Ok(())
  }

  fn process_assets<'a>(
    &'a self,
    _compilation: &'a mut Compilation,
  ) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async { Ok(()) })
  }
}

/// Adapts the stage contract to whatever staged hook API a host exposes.
/// Plugins run in registration order within each stage.
pub struct PluginDriver {
  pub plugins: Vec<Box<dyn Plugin>>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
    Self { plugins }
  }

  pub fn before_compile(&mut self, options: &mut BundlerOptions) -> BuildResult<()> {
    for plugin in &mut self.plugins {
      log::trace!("{}: before_compile", plugin.name());
      plugin.before_compile(options)?;
    }

    Ok(())
  }

  pub async fn process_assets(&self, compilation: &mut Compilation) -> BuildResult<()> {
    for plugin in &self.plugins {
      log::trace!("{}: process_assets", plugin.name());
      plugin.process_assets(compilation).await?;
    }

    Ok(())
  }
}
