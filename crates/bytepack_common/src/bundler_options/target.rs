use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
  #[default]
  Node,
  ElectronMain,
  ElectronRenderer,
  ElectronPreload,
}

impl Target {
  #[inline]
  pub fn is_electron(&self) -> bool {
    !matches!(self, Self::Node)
  }
}

impl Display for Target {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Node => write!(f, "node"),
      Self::ElectronMain => write!(f, "electron-main"),
      Self::ElectronRenderer => write!(f, "electron-renderer"),
      Self::ElectronPreload => write!(f, "electron-preload"),
    }
  }
}
