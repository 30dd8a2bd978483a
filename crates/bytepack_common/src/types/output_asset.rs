/// A finished output file owned by the host's asset store. Content is raw
/// bytes since compiled artifacts are not text.
#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: String,
  pub content: Vec<u8>,
}

impl OutputAsset {
  pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
    Self { filename: filename.into(), content }
  }

  pub fn filename(&self) -> &str {
    &self.filename
  }

  /// Source text of a plaintext asset. Lossy on purpose: the host hands us
  /// whatever the bundler emitted.
  pub fn content_as_text(&self) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(&self.content)
  }
}
