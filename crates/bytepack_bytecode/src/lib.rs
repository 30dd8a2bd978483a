mod compiler;
mod wrap;

pub use crate::{
  compiler::{BytecodeCompiler, ProcessCompiler},
  wrap::wrap_module,
};
