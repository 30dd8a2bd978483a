/// Fatal, pre-build errors raised while rewriting the bundler configuration.
/// These abort the build before any bundling work starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
  #[error("entry as a function is not supported")]
  FunctionEntry,

  #[error("entry `{0}` does not contain any location")]
  EmptyEntry(String),
}

/// Fatal, per-build errors raised while turning a bundled asset into a
/// bytecode artifact. The first one aborts the whole asset stage.
#[derive(Debug, thiserror::Error)]
pub enum CompilationError {
  #[error("failed to spawn bytecode compiler `{program}`: {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  #[error("bytecode compiler `{program}` exited with {status}: {stderr}")]
  CompilerExit { program: String, status: String, stderr: String },

  #[error("bytecode compiler `{program}` produced no output")]
  EmptyOutput { program: String },

  #[error(transparent)]
  Io(#[from] std::io::Error),
}
