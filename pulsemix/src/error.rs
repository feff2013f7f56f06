use crate::model::Direction;

/// Errors surfaced by the volume and mute controllers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PulseError {
  /// Failure reported by the connection; carried through untouched
  #[error("transport error: {0}")]
  Transport(String),

  #[error("{direction} {name} not found")]
  DeviceNotFound { direction: Direction, name: String },

  #[error("device {0} reports no volume channels")]
  NoChannels(String),

  #[error("invalid request field: {0}")]
  InvalidField(String),
}

impl PulseError {
  pub fn sink_not_found(name: impl Into<String>) -> Self {
    PulseError::DeviceNotFound { direction: Direction::Sink, name: name.into() }
  }

  pub fn source_not_found(name: impl Into<String>) -> Self {
    PulseError::DeviceNotFound { direction: Direction::Source, name: name.into() }
  }
}

pub type Result<T> = std::result::Result<T, PulseError>;
