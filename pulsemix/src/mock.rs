use mockall::mock;

use crate::error::{PulseError, Result};
use crate::model::{Device, ServerInfo};
use crate::transport::{Introspect, Reply, Request, Transport};

mock! {
    pub Connection {}

    impl Transport for Connection {
        fn request(&self, request: Request) -> Result<Reply>;
    }

    impl Introspect for Connection {
        fn server_info(&self) -> Result<ServerInfo>;
        fn sinks(&self) -> Result<Vec<Device>>;
        fn sources(&self) -> Result<Vec<Device>>;
    }
}

/// Builds a [`MockConnection`] that answers introspection queries from fixed
/// snapshots. Request expectations are left to the caller.
pub struct MockConnectionBuilder {
    server_info: Result<ServerInfo>,
    sinks: Result<Vec<Device>>,
    sources: Result<Vec<Device>>,
}

impl MockConnectionBuilder {
    pub fn new() -> Self {
        Self {
            server_info: Ok(ServerInfo {
                server_name: "pulseaudio".into(),
                server_version: "17.0".into(),
                default_sink: "alsa_output.analog-stereo".into(),
                default_source: "alsa_input.analog-stereo".into(),
            }),
            sinks: Ok(vec![Device::new("alsa_output.analog-stereo", vec![32768, 32768], false)]),
            sources: Ok(vec![Device::new("alsa_input.analog-stereo", vec![65535], false)]),
        }
    }

    pub fn default_sink(mut self, name: impl Into<String>) -> Self {
        if let Ok(info) = self.server_info.as_mut() {
            info.default_sink = name.into();
        }
        self
    }

    pub fn default_source(mut self, name: impl Into<String>) -> Self {
        if let Ok(info) = self.server_info.as_mut() {
            info.default_source = name.into();
        }
        self
    }

    pub fn sinks(mut self, sinks: Vec<Device>) -> Self {
        self.sinks = Ok(sinks);
        self
    }

    pub fn sources(mut self, sources: Vec<Device>) -> Self {
        self.sources = Ok(sources);
        self
    }

    pub fn server_info_error(mut self, err: PulseError) -> Self {
        self.server_info = Err(err);
        self
    }

    pub fn sinks_error(mut self, err: PulseError) -> Self {
        self.sinks = Err(err);
        self
    }

    pub fn sources_error(mut self, err: PulseError) -> Self {
        self.sources = Err(err);
        self
    }

    pub fn build(self) -> MockConnection {
        let mut conn = MockConnection::new();

        let server_info = self.server_info;
        conn.expect_server_info().returning(move || server_info.clone());
        let sinks = self.sinks;
        conn.expect_sinks().returning(move || sinks.clone());
        let sources = self.sources;
        conn.expect_sources().returning(move || sources.clone());

        conn
    }
}

impl Default for MockConnectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
