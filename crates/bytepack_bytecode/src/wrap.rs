/// Wrap source text in a CommonJS module body, the same shape node's
/// `Module.wrap` produces, so the compiled artifact sees `require`,
/// `module` and friends when executed.
pub fn wrap_module(source: &str) -> String {
  format!("(function (exports, require, module, __filename, __dirname) {{ {source}\n}});")
}
