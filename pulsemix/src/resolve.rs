use log::debug;

use crate::error::{PulseError, Result};
use crate::model::{Device, Direction};
use crate::transport::Introspect;

/// Linear scan for a device by exact name
pub fn find_device<'a>(devices: &'a [Device], name: &str) -> Option<&'a Device> {
  devices.iter().find(|device| device.name == name)
}

pub(crate) fn devices<C: Introspect + ?Sized>(conn: &C, direction: Direction) -> Result<Vec<Device>> {
  match direction {
    Direction::Sink => conn.sinks(),
    Direction::Source => conn.sources(),
  }
}

/// Name of the current default device, fetched fresh from the server
pub(crate) fn default_device_name<C: Introspect + ?Sized>(conn: &C, direction: Direction) -> Result<String> {
  let info = conn.server_info()?;
  let name = direction.default_device(&info).to_string();
  debug!("Default {} is {}", direction, name);
  Ok(name)
}

/// Snapshot of the current default device
pub(crate) fn default_device<C: Introspect + ?Sized>(conn: &C, direction: Direction) -> Result<Device> {
  let name = default_device_name(conn, direction)?;
  let devices = devices(conn, direction)?;

  find_device(&devices, &name)
    .cloned()
    .ok_or(PulseError::DeviceNotFound { direction, name })
}
