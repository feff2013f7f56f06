use log::{debug, warn};

use crate::compat::BestEffort;
use crate::error::{PulseError, Result};
use crate::model::Direction;
use crate::resolve;
use crate::transport::{Introspect, Request, Transport};

/// A stateless mute controller
#[derive(Debug, Clone)]
pub struct MuteController<C> {
    conn: C,
}

impl<C: Transport + Introspect> MuteController<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    /// Get a reference to the connection used by this controller
    pub fn connection(&self) -> &C {
        &self.conn
    }

    /// Whether the default sink is muted
    pub fn mute(&self) -> Result<bool> {
        Ok(resolve::default_device(&self.conn, Direction::Sink)?.muted)
    }

    /// Whether the default source is muted
    pub fn source_mute(&self) -> Result<bool> {
        Ok(resolve::default_device(&self.conn, Direction::Source)?.muted)
    }

    pub fn set_mute(&self, muted: bool) -> Result<()> {
        let sink = resolve::default_device_name(&self.conn, Direction::Sink)?;
        self.set_sink_mute(muted, &[sink.as_str()])
    }

    /// Mute or unmute the named sinks, or the default sink when `sinks` is
    /// empty. Requests go out in order and the first failure aborts the rest.
    pub fn set_sink_mute(&self, muted: bool, sinks: &[&str]) -> Result<()> {
        self.set_device_mute(Direction::Sink, muted, sinks)
    }

    /// Same as [`MuteController::set_sink_mute`] for sources
    pub fn set_source_mute(&self, muted: bool, sources: &[&str]) -> Result<()> {
        self.set_device_mute(Direction::Source, muted, sources)
    }

    /// Flip the default sink's mute flag and return the new state
    pub fn toggle_mute(&self) -> Result<bool> {
        self.conn.server_info()?;
        let muted = self.mute()?;
        self.set_mute(!muted)?;
        Ok(!muted)
    }

    /// [`MuteController::mute`] with the legacy fallback values: `false` when
    /// server state could not be read, `true` when the default sink is missing.
    pub fn mute_compat(&self) -> BestEffort<bool> {
        let info = match self.conn.server_info() {
            Ok(info) => info,
            Err(err) => return BestEffort::failed(false, err),
        };
        let sinks = match self.conn.sinks() {
            Ok(sinks) => sinks,
            Err(err) => return BestEffort::failed(false, err),
        };

        match resolve::find_device(&sinks, &info.default_sink) {
            Some(sink) => BestEffort::ok(sink.muted),
            None => BestEffort::failed(true, PulseError::sink_not_found(info.default_sink)),
        }
    }

    /// [`MuteController::toggle_mute`] with the legacy values: `true` when the
    /// current state could not be read, otherwise the intended new state even if
    /// setting it failed.
    pub fn toggle_mute_compat(&self) -> BestEffort<bool> {
        if let Err(err) = self.conn.server_info() {
            return BestEffort::failed(true, err);
        }
        let muted = match self.mute() {
            Ok(muted) => muted,
            Err(err) => return BestEffort::failed(true, err),
        };

        match self.set_mute(!muted) {
            Ok(()) => BestEffort::ok(!muted),
            Err(err) => BestEffort::failed(!muted, err),
        }
    }

    fn set_device_mute(&self, direction: Direction, muted: bool, names: &[&str]) -> Result<()> {
        let targets: Vec<String> = if names.is_empty() {
            vec![resolve::default_device_name(&self.conn, direction)?]
        } else {
            names.iter().map(|name| name.to_string()).collect()
        };

        for (i, name) in targets.iter().enumerate() {
            debug!("Setting {} {} mute to {}", direction, name, muted);

            if let Err(err) = self.conn.request(Request::set_mute(direction, name, muted)) {
                let skipped = targets.len() - i - 1;
                if skipped > 0 {
                    warn!("Mute of {} {} failed, skipping {} remaining", direction, name, skipped);
                }
                return Err(err);
            }
        }

        Ok(())
    }
}
