pub mod compat;
pub mod config;
pub mod error;
pub mod model;
pub mod mute;
pub mod resolve;
pub mod tagstruct;
pub mod transport;
pub mod volume;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export key types for easier access
pub use compat::BestEffort;
pub use config::{MixerConfig, VOLUME_MAX, VOLUME_NORM};
pub use error::{PulseError, Result};
pub use model::{Command, Cvolume, Device, Direction, ServerInfo};
pub use mute::MuteController;
pub use resolve::find_device;
pub use tagstruct::Field;
pub use transport::{Introspect, Reply, Request, Transport};
pub use volume::VolumeController;
