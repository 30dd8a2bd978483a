use std::process::Stdio;

use futures::future::BoxFuture;
use tokio::{io::AsyncWriteExt, process::Command};

use bytepack_error::{BuildResult, CompilationError};

/// Script fed to the runtime to turn source text on stdin into V8 cached
/// data on stdout.
const COMPILE_SNIPPET: &str = r"
const vm = require('vm');
const chunks = [];
process.stdin.on('data', (chunk) => chunks.push(chunk));
process.stdin.on('end', () => {
  const source = Buffer.concat(chunks).toString('utf8');
  const script = new vm.Script(source, { produceCachedData: true });
  const bytecode = script.createCachedData ? script.createCachedData() : script.cachedData;
  process.stdout.write(bytecode);
});
";

/// The bytecode-compilation primitive: UTF-8 source text in, binary
/// artifact out. Failure is fatal to the current build.
pub trait BytecodeCompiler: Send + Sync {
  fn compile<'a>(&'a self, source: &'a str) -> BoxFuture<'a, BuildResult<Vec<u8>>>;
}

/// Compiles through a spawned JavaScript runtime, since cached data must be
/// produced by the same V8 build that will execute it. The electron variant
/// runs the electron binary as node so the artifact matches electron's V8.
#[derive(Debug, Clone)]
pub struct ProcessCompiler {
  program: String,
  electron: bool,
}

impl ProcessCompiler {
  pub fn node() -> Self {
    Self { program: "node".to_string(), electron: false }
  }

  pub fn electron() -> Self {
    Self { program: "electron".to_string(), electron: true }
  }

  /// Override the runtime executable, e.g. a pinned node or a packaged
  /// electron binary.
  pub fn with_program(mut self, program: impl Into<String>) -> Self {
    self.program = program.into();
    self
  }

  async fn spawn_and_compile(&self, source: &str) -> BuildResult<Vec<u8>> {
    let mut command = Command::new(&self.program);
    // Lazy compilation would leave most functions out of the cached data.
    command
      .arg("--no-lazy")
      .arg("-e")
      .arg(COMPILE_SNIPPET)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped());

    if self.electron {
      command.env("ELECTRON_RUN_AS_NODE", "1");
    }

    log::debug!("compiling {} bytes of source with `{}`", source.len(), self.program);

    let mut child = command
      .spawn()
      .map_err(|source| CompilationError::Spawn { program: self.program.clone(), source })?;

    let mut stdin = child.stdin.take().expect("stdin was piped");
    stdin.write_all(source.as_bytes()).await.map_err(CompilationError::from)?;
    drop(stdin);

    let output = child.wait_with_output().await.map_err(CompilationError::from)?;

    if !output.status.success() {
      return Err(
        CompilationError::CompilerExit {
          program: self.program.clone(),
          status: output.status.to_string(),
          stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into(),
      );
    }

    if output.stdout.is_empty() {
      return Err(CompilationError::EmptyOutput { program: self.program.clone() }.into());
    }

    Ok(output.stdout)
  }
}

impl BytecodeCompiler for ProcessCompiler {
  fn compile<'a>(&'a self, source: &'a str) -> BoxFuture<'a, BuildResult<Vec<u8>>> {
    Box::pin(self.spawn_and_compile(source))
  }
}
