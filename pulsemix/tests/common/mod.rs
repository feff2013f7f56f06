#![allow(dead_code)]

use std::sync::Mutex;

use log::LevelFilter;
use pulsemix::tagstruct::{self, Field};
use pulsemix::{Command, Cvolume, Device, Introspect, PulseError, Reply, Request, Result, ServerInfo, Transport};
use simplelog::{Config, TestLogger};

pub fn init_logging() {
  let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// A request as the server saw it after decoding the payload
#[derive(Debug, Clone, PartialEq)]
pub struct Received {
  pub command: u32,
  pub fields: Vec<Field>,
}

impl Received {
  pub fn device(&self) -> Option<&str> {
    self.fields.iter().find_map(|field| match field {
      Field::String(name) => Some(name.as_str()),
      _ => None,
    })
  }
}

struct State {
  info: ServerInfo,
  sinks: Vec<Device>,
  sources: Vec<Device>,
  received: Vec<Received>,
  rejected: Vec<String>,
}

/// In-memory audio server. Applies every set request to its device list after
/// a full encode/decode pass, and records what it received.
pub struct FakeServer {
  state: Mutex<State>,
}

impl FakeServer {
  pub fn new(default_sink: &str, default_source: &str) -> Self {
    Self {
      state: Mutex::new(State {
        info: ServerInfo {
          server_name: "pulseaudio".to_string(),
          server_version: "17.0".to_string(),
          default_sink: default_sink.to_string(),
          default_source: default_source.to_string(),
        },
        sinks: vec![],
        sources: vec![],
        received: vec![],
        rejected: vec![],
      }),
    }
  }

  pub fn with_sink(self, device: Device) -> Self {
    self.state.lock().unwrap().sinks.push(device);
    self
  }

  pub fn with_source(self, device: Device) -> Self {
    self.state.lock().unwrap().sources.push(device);
    self
  }

  /// Make every request addressing `name` fail
  pub fn reject(&self, name: &str) {
    self.state.lock().unwrap().rejected.push(name.to_string());
  }

  pub fn set_default_sink(&self, name: &str) {
    self.state.lock().unwrap().info.default_sink = name.to_string();
  }

  pub fn received(&self) -> Vec<Received> {
    self.state.lock().unwrap().received.clone()
  }

  pub fn sink(&self, name: &str) -> Option<Device> {
    let state = self.state.lock().unwrap();
    state.sinks.iter().find(|d| d.name == name).cloned()
  }

  pub fn source(&self, name: &str) -> Option<Device> {
    let state = self.state.lock().unwrap();
    state.sources.iter().find(|d| d.name == name).cloned()
  }
}

fn no_such_entity(name: &str) -> PulseError {
  PulseError::Transport(format!("no such entity: {}", name))
}

impl Transport for FakeServer {
  fn request(&self, request: Request) -> Result<Reply> {
    let payload = request.encode()?;
    let fields = tagstruct::decode(&payload)?;

    let mut state = self.state.lock().unwrap();
    let received = Received { command: request.command.id(), fields: fields.clone() };
    let name = received.device().unwrap_or_default().to_string();
    state.received.push(received);

    if state.rejected.contains(&name) {
      return Err(no_such_entity(&name));
    }

    let devices = match request.command {
      Command::SetSinkVolume | Command::SetSinkMute => &mut state.sinks,
      Command::SetSourceVolume | Command::SetSourceMute => &mut state.sources,
    };
    let device = devices
      .iter_mut()
      .find(|d| d.name == name)
      .ok_or_else(|| no_such_entity(&name))?;

    match fields.last() {
      Some(Field::Cvolume(cvolume)) => {
        let value = cvolume.first().unwrap_or_default();
        let channels = device.cvolume.channels().len().max(1);
        device.cvolume = Cvolume(vec![value; channels]);
      }
      Some(Field::Bool(muted)) => device.muted = *muted,
      other => return Err(PulseError::InvalidField(format!("unexpected field {:?}", other))),
    }

    Ok(Reply::default())
  }
}

impl Introspect for FakeServer {
  fn server_info(&self) -> Result<ServerInfo> {
    Ok(self.state.lock().unwrap().info.clone())
  }

  fn sinks(&self) -> Result<Vec<Device>> {
    Ok(self.state.lock().unwrap().sinks.clone())
  }

  fn sources(&self) -> Result<Vec<Device>> {
    Ok(self.state.lock().unwrap().sources.clone())
  }
}
