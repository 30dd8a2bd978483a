mod configuration_error;

use std::ops::{Deref, DerefMut};

pub use crate::configuration_error::{CompilationError, ConfigurationError};

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<ConfigurationError> for BuildError {
  fn from(error: ConfigurationError) -> Self {
    Self(vec![error.into()])
  }
}

impl From<CompilationError> for BuildError {
  fn from(error: CompilationError) -> Self {
    Self(vec![error.into()])
  }
}

impl BuildError {
  /// First error that is a `ConfigurationError`, if any.
  pub fn as_configuration_error(&self) -> Option<&ConfigurationError> {
    self.0.iter().find_map(anyhow::Error::downcast_ref)
  }

  pub fn as_compilation_error(&self) -> Option<&CompilationError> {
    self.0.iter().find_map(anyhow::Error::downcast_ref)
  }
}

impl std::fmt::Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;
