use log::{debug, warn};

use crate::config::MixerConfig;
use crate::error::{PulseError, Result};
use crate::model::{Cvolume, Direction};
use crate::resolve;
use crate::transport::{Introspect, Request, Transport};

/// A stateless volume controller. Every call re-reads server state, so the
/// default device may differ between two consecutive calls.
#[derive(Debug, Clone)]
pub struct VolumeController<C> {
    conn: C,
    config: MixerConfig,
}

impl<C: Transport + Introspect> VolumeController<C> {
    /// Create a controller with the default volume scale
    pub fn new(conn: C) -> Self {
        Self::with_config(conn, MixerConfig::default())
    }

    pub fn with_config(conn: C, config: MixerConfig) -> Self {
        Self { conn, config }
    }

    /// Get a reference to the connection used by this controller
    pub fn connection(&self) -> &C {
        &self.conn
    }

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    /// Volume of the default sink, where 1.0 is unity gain and anything above
    /// is boost. Only the first channel is read.
    pub fn volume(&self) -> Result<f32> {
        self.default_volume(Direction::Sink)
    }

    /// Volume of the default source
    pub fn source_volume(&self) -> Result<f32> {
        self.default_volume(Direction::Source)
    }

    /// Set the volume of the default sink. Values are not clamped.
    pub fn set_volume(&self, volume: f32) -> Result<()> {
        let sink = resolve::default_device_name(&self.conn, Direction::Sink)?;
        self.set_device_volume(Direction::Sink, &sink, volume)
    }

    pub fn set_sink_volume(&self, sink: &str, volume: f32) -> Result<()> {
        self.set_device_volume(Direction::Sink, sink, volume)
    }

    pub fn set_source_volume(&self, source: &str, volume: f32) -> Result<()> {
        self.set_device_volume(Direction::Source, source, volume)
    }

    fn default_volume(&self, direction: Direction) -> Result<f32> {
        let device = resolve::default_device(&self.conn, direction)?;
        let fixed = device
            .cvolume
            .first()
            .ok_or_else(|| PulseError::NoChannels(device.name.clone()))?;

        Ok(self.config.to_normalized(fixed))
    }

    fn set_device_volume(&self, direction: Direction, device: &str, volume: f32) -> Result<()> {
        let fixed = self.config.to_fixed(volume);
        debug!("Setting {} {} volume to {} ({})", direction, device, volume, fixed);
        if !self.config.is_within_range(fixed) {
            warn!(
                "{} {} volume {} is above the server maximum {}, sending as is",
                direction, device, fixed, self.config.volume_max
            );
        }

        self.conn
            .request(Request::set_volume(direction, device, Cvolume::mono(fixed)))?;
        Ok(())
    }
}
