use bytepack_common::{EntryDescriptor, EntryImport, EntryValue};
use bytepack_error::{BuildResult, ConfigurationError};

/// Canonical form of one declared entry before any path work.
#[derive(Debug, Clone)]
pub struct RawEntry {
  pub name: Option<String>,
  pub locations: Vec<String>,
}

/// Reduce the raw `entry` configuration to named, ordered, non-empty
/// location lists. Descriptor shapes are matched in a fixed precedence
/// order: single descriptor-with-import, list of descriptors, list of plain
/// locations, plain location. Functions fail fast, before any bundling.
pub fn normalize_entry(entry: &EntryDescriptor) -> BuildResult<Vec<RawEntry>> {
  let entries = match entry {
    EntryDescriptor::Function(_) => return Err(ConfigurationError::FunctionEntry.into()),
    EntryDescriptor::Named(named) => named
      .iter()
      .map(|(name, value)| raw_entry(Some(name.as_str()), value.locations()))
      .collect::<BuildResult<Vec<_>>>()?,
    EntryDescriptor::Descriptor(descriptor) => vec![raw_entry(None, descriptor.import.clone())?],
    EntryDescriptor::Descriptors(descriptors) => vec![raw_entry(None, flatten(descriptors))?],
    EntryDescriptor::Multiple(locations) => vec![raw_entry(None, locations.clone())?],
    EntryDescriptor::Single(location) => vec![raw_entry(None, vec![location.clone()])?],
  };

  Ok(entries)
}

fn raw_entry(name: Option<&str>, locations: Vec<String>) -> BuildResult<RawEntry> {
  if locations.is_empty() {
    return Err(ConfigurationError::EmptyEntry(name.unwrap_or("<unnamed>").to_string()).into());
  }

  Ok(RawEntry { name: name.map(ToString::to_string), locations })
}

fn flatten(descriptors: &[EntryImport]) -> Vec<String> {
  descriptors.iter().flat_map(|descriptor| descriptor.import.iter().cloned()).collect()
}
