use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the server a device lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  /// Output device
  Sink,
  /// Input device
  Source,
}

impl Direction {
  pub fn set_volume_command(&self) -> Command {
    match self {
      Direction::Sink => Command::SetSinkVolume,
      Direction::Source => Command::SetSourceVolume,
    }
  }

  pub fn set_mute_command(&self) -> Command {
    match self {
      Direction::Sink => Command::SetSinkMute,
      Direction::Source => Command::SetSourceMute,
    }
  }

  /// Name of the server's default device for this direction
  pub fn default_device<'a>(&self, info: &'a ServerInfo) -> &'a str {
    match self {
      Direction::Sink => &info.default_sink,
      Direction::Source => &info.default_source,
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Direction::Sink => write!(f, "sink"),
      Direction::Source => write!(f, "source"),
    }
  }
}

/// Commands this crate issues. The numeric ids follow the native protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  SetSinkVolume,
  SetSourceVolume,
  SetSinkMute,
  SetSourceMute,
}

impl Command {
  pub fn id(&self) -> u32 {
    match self {
      Command::SetSinkVolume => 36,
      Command::SetSourceVolume => 38,
      Command::SetSinkMute => 39,
      Command::SetSourceMute => 40,
    }
  }

  pub fn name(&self) -> &str {
    match self {
      Command::SetSinkVolume => "SET_SINK_VOLUME",
      Command::SetSourceVolume => "SET_SOURCE_VOLUME",
      Command::SetSinkMute => "SET_SINK_MUTE",
      Command::SetSourceMute => "SET_SOURCE_MUTE",
    }
  }
}

/// Per-channel fixed-point volume levels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cvolume(pub Vec<u32>);

impl Cvolume {
  /// Single-channel volume, the only shape this crate sends
  pub fn mono(value: u32) -> Self {
    Cvolume(vec![value])
  }

  pub fn first(&self) -> Option<u32> {
    self.0.first().copied()
  }

  pub fn channels(&self) -> &[u32] {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl From<Vec<u32>> for Cvolume {
  fn from(values: Vec<u32>) -> Self {
    Cvolume(values)
  }
}

/// Snapshot of the server-wide settings relevant to device resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
  pub server_name: String,
  pub server_version: String,
  pub default_sink: String,
  pub default_source: String,
}

/// Snapshot of a sink or source as reported by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
  pub index: u32,
  pub name: String,
  pub description: String,
  pub cvolume: Cvolume,
  pub muted: bool,
}

impl Device {
  pub fn new(name: impl Into<String>, cvolume: impl Into<Cvolume>, muted: bool) -> Self {
    Self {
      index: 0,
      name: name.into(),
      description: String::new(),
      cvolume: cvolume.into(),
      muted,
    }
  }
}
