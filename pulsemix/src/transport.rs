use std::sync::Arc;

use bytes::Bytes;

use crate::error::Result;
use crate::model::{Command, Cvolume, Device, Direction, ServerInfo};
use crate::tagstruct::{self, Field, INVALID_INDEX};

/// A command plus its ordered payload fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
  pub command: Command,
  pub fields: Vec<Field>,
}

/// Raw reply body; this crate never inspects it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
  pub body: Bytes,
}

impl Request {
  pub fn set_volume(direction: Direction, device: &str, cvolume: Cvolume) -> Self {
    Self {
      command: direction.set_volume_command(),
      fields: vec![
        Field::U32(INVALID_INDEX),
        Field::String(device.to_string()),
        Field::Cvolume(cvolume),
      ],
    }
  }

  pub fn set_mute(direction: Direction, device: &str, muted: bool) -> Self {
    Self {
      command: direction.set_mute_command(),
      fields: vec![
        Field::U32(INVALID_INDEX),
        Field::String(device.to_string()),
        Field::Bool(muted),
      ],
    }
  }

  /// Name of the device this request addresses, if any
  pub fn device(&self) -> Option<&str> {
    self.fields.iter().find_map(|field| match field {
      Field::String(name) => Some(name.as_str()),
      _ => None,
    })
  }

  /// Serialized payload, without the command id or any framing
  pub fn encode(&self) -> Result<Bytes> {
    tagstruct::encode(&self.fields)
  }
}

/// Synchronous request/response over an established connection
pub trait Transport {
  fn request(&self, request: Request) -> Result<Reply>;
}

/// Read-only queries over server state
pub trait Introspect {
  fn server_info(&self) -> Result<ServerInfo>;
  fn sinks(&self) -> Result<Vec<Device>>;
  fn sources(&self) -> Result<Vec<Device>>;
}

impl<T: Transport + ?Sized> Transport for &T {
  fn request(&self, request: Request) -> Result<Reply> {
    (**self).request(request)
  }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
  fn request(&self, request: Request) -> Result<Reply> {
    (**self).request(request)
  }
}

impl<T: Introspect + ?Sized> Introspect for &T {
  fn server_info(&self) -> Result<ServerInfo> {
    (**self).server_info()
  }

  fn sinks(&self) -> Result<Vec<Device>> {
    (**self).sinks()
  }

  fn sources(&self) -> Result<Vec<Device>> {
    (**self).sources()
  }
}

impl<T: Introspect + ?Sized> Introspect for Arc<T> {
  fn server_info(&self) -> Result<ServerInfo> {
    (**self).server_info()
  }

  fn sinks(&self) -> Result<Vec<Device>> {
    (**self).sinks()
  }

  fn sources(&self) -> Result<Vec<Device>> {
    (**self).sources()
  }
}
