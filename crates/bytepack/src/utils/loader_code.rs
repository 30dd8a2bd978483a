use std::path::Path;

/// Source text of a generated loader: pull in the bytecode runtime, then
/// require the compiled artifact. Injected as virtual-module content.
pub fn create_loader_code(import_path: &str) -> String {
  let import_path = if cfg!(windows) && Path::new(import_path).is_absolute() {
    // The path is embedded in a quoted string, so separators need escaping.
    import_path.replace('/', "\\").replace('\\', "\\\\")
  } else {
    import_path.replace('\\', "/")
  };

  format!("require('bytenode');\nrequire('{import_path}');\n")
}

#[cfg(test)]
mod tests {
  use super::create_loader_code;

  #[test]
  fn loads_the_runtime_before_the_artifact() {
    let code = create_loader_code("./main.js.jsc");
    let runtime = code.find("require('bytenode')").expect("loads the runtime");
    let artifact = code.find("require('./main.js.jsc')").expect("requires the artifact");
    assert!(runtime < artifact);
  }

  #[cfg(not(windows))]
  #[test]
  fn relative_paths_are_slash_normalized() {
    let code = create_loader_code("./renderer\\main.js.jsc");
    assert!(code.contains("require('./renderer/main.js.jsc')"));
  }
}
