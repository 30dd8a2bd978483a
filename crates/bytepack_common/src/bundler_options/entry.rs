use std::{fmt, sync::Arc};

use bytepack_utils::indexmap::FxIndexMap;

/// Computed entry descriptors are accepted by the host bundler but not by
/// this plugin. The variant exists so the rewrite stage can reject them
/// before any bundling work happens.
pub type EntryFunction = Arc<dyn Fn() -> EntryValue + Send + Sync>;

/// The raw `entry` configuration value, one variant per accepted shape.
#[derive(Clone)]
pub enum EntryDescriptor {
  /// `entry: "./src/main.js"`
  Single(String),
  /// `entry: ["./a.js", "./b.js"]`
  Multiple(Vec<String>),
  /// `entry: { import: ... }`
  Descriptor(EntryImport),
  /// `entry: [{ import: ... }, ...]`
  Descriptors(Vec<EntryImport>),
  /// `entry: { name: <any of the above> }`, declaration order preserved
  Named(FxIndexMap<String, EntryValue>),
  Function(EntryFunction),
}

impl Default for EntryDescriptor {
  fn default() -> Self {
    Self::Named(FxIndexMap::default())
  }
}

impl fmt::Debug for EntryDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Single(location) => f.debug_tuple("Single").field(location).finish(),
      Self::Multiple(locations) => f.debug_tuple("Multiple").field(locations).finish(),
      Self::Descriptor(import) => f.debug_tuple("Descriptor").field(import).finish(),
      Self::Descriptors(imports) => f.debug_tuple("Descriptors").field(imports).finish(),
      Self::Named(entries) => f.debug_tuple("Named").field(entries).finish(),
      Self::Function(_) => f.write_str("Function(..)"),
    }
  }
}

/// A descriptor object `{ import: path | path[] }`. A single path is a one
/// element list.
#[derive(Debug, Clone)]
pub struct EntryImport {
  pub import: Vec<String>,
}

impl EntryImport {
  pub fn new<I, S>(import: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self { import: import.into_iter().map(Into::into).collect() }
  }
}

impl From<&str> for EntryImport {
  fn from(value: &str) -> Self {
    Self { import: vec![value.to_string()] }
  }
}

/// Shapes allowed as the value of a named entry. Everything except another
/// name mapping or a function.
#[derive(Debug, Clone)]
pub enum EntryValue {
  Single(String),
  Multiple(Vec<String>),
  Descriptor(EntryImport),
  Descriptors(Vec<EntryImport>),
}

impl EntryValue {
  /// Flatten to the ordered list of location strings.
  pub fn locations(&self) -> Vec<String> {
    match self {
      Self::Single(location) => vec![location.clone()],
      Self::Multiple(locations) => locations.clone(),
      Self::Descriptor(descriptor) => descriptor.import.clone(),
      Self::Descriptors(descriptors) => {
        descriptors.iter().flat_map(|descriptor| descriptor.import.iter().cloned()).collect()
      }
    }
  }
}

impl From<&str> for EntryDescriptor {
  fn from(value: &str) -> Self {
    Self::Single(value.to_string())
  }
}

impl From<String> for EntryDescriptor {
  fn from(value: String) -> Self {
    Self::Single(value)
  }
}

impl From<Vec<String>> for EntryDescriptor {
  fn from(value: Vec<String>) -> Self {
    Self::Multiple(value)
  }
}

impl From<&[&str]> for EntryDescriptor {
  fn from(value: &[&str]) -> Self {
    Self::Multiple(value.iter().map(ToString::to_string).collect())
  }
}

impl From<&str> for EntryValue {
  fn from(value: &str) -> Self {
    Self::Single(value.to_string())
  }
}

impl From<Vec<String>> for EntryValue {
  fn from(value: Vec<String>) -> Self {
    Self::Multiple(value)
  }
}

impl From<&[&str]> for EntryValue {
  fn from(value: &[&str]) -> Self {
    Self::Multiple(value.iter().map(ToString::to_string).collect())
  }
}

impl From<EntryValue> for EntryDescriptor {
  fn from(value: EntryValue) -> Self {
    match value {
      EntryValue::Single(location) => Self::Single(location),
      EntryValue::Multiple(locations) => Self::Multiple(locations),
      EntryValue::Descriptor(import) => Self::Descriptor(import),
      EntryValue::Descriptors(imports) => Self::Descriptors(imports),
    }
  }
}
