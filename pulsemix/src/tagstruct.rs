//! Tagged field encoding used by the native protocol payloads.
//!
//! Each field is written as a one byte tag followed by its value. Booleans are
//! a bare tag with no value, which is why a mute command is a single `'1'` or
//! `'0'` byte on the wire.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{PulseError, Result};
use crate::model::Cvolume;

pub const TAG_U32: u8 = b'L';
pub const TAG_STRING: u8 = b't';
pub const TAG_CVOLUME: u8 = b'v';
pub const TAG_TRUE: u8 = b'1';
pub const TAG_FALSE: u8 = b'0';

/// Maximum channel count the server accepts in a cvolume
pub const CHANNELS_MAX: usize = 32;

/// Index sentinel meaning "address the device by name"
pub const INVALID_INDEX: u32 = u32::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
  U32(u32),
  String(String),
  Bool(bool),
  Cvolume(Cvolume),
}

impl Field {
  /// The byte a mute flag is sent as
  pub fn mute_byte(muted: bool) -> u8 {
    if muted { TAG_TRUE } else { TAG_FALSE }
  }

  pub fn encode(&self, buf: &mut BytesMut) -> Result<()> {
    match self {
      Field::U32(value) => {
        buf.put_u8(TAG_U32);
        buf.put_u32(*value);
      }
      Field::String(value) => {
        if value.as_bytes().contains(&0) {
          return Err(PulseError::InvalidField(format!("string {:?} contains a nul byte", value)));
        }
        buf.put_u8(TAG_STRING);
        buf.put_slice(value.as_bytes());
        buf.put_u8(0);
      }
      Field::Bool(value) => buf.put_u8(Self::mute_byte(*value)),
      Field::Cvolume(cvolume) => {
        let channels = cvolume.channels();
        if channels.is_empty() || channels.len() > CHANNELS_MAX {
          return Err(PulseError::InvalidField(format!(
            "cvolume must have 1..={} channels, got {}",
            CHANNELS_MAX,
            channels.len()
          )));
        }
        buf.put_u8(TAG_CVOLUME);
        buf.put_u8(channels.len() as u8);
        for value in channels {
          buf.put_u32(*value);
        }
      }
    }
    Ok(())
  }
}

/// Concatenate fields in order
pub fn encode(fields: &[Field]) -> Result<Bytes> {
  let mut buf = BytesMut::new();
  for field in fields {
    field.encode(&mut buf)?;
  }
  Ok(buf.freeze())
}

/// Parse a payload back into fields. Transports and test doubles use this to
/// inspect what was sent.
pub fn decode(mut payload: &[u8]) -> Result<Vec<Field>> {
  let mut fields = Vec::new();

  while payload.has_remaining() {
    let tag = payload.get_u8();
    let field = match tag {
      TAG_U32 => Field::U32(take_u32(&mut payload)?),
      TAG_STRING => {
        let end = payload
          .iter()
          .position(|b| *b == 0)
          .ok_or_else(|| PulseError::InvalidField("unterminated string".to_string()))?;
        let value = String::from_utf8(payload[..end].to_vec())
          .map_err(|e| PulseError::InvalidField(format!("string is not utf-8: {}", e)))?;
        payload.advance(end + 1);
        Field::String(value)
      }
      TAG_TRUE => Field::Bool(true),
      TAG_FALSE => Field::Bool(false),
      TAG_CVOLUME => {
        if !payload.has_remaining() {
          return Err(PulseError::InvalidField("truncated cvolume".to_string()));
        }
        let channels = payload.get_u8() as usize;
        if channels == 0 || channels > CHANNELS_MAX {
          return Err(PulseError::InvalidField(format!("bad channel count {}", channels)));
        }
        let mut values = Vec::with_capacity(channels);
        for _ in 0..channels {
          values.push(take_u32(&mut payload)?);
        }
        Field::Cvolume(Cvolume(values))
      }
      other => {
        return Err(PulseError::InvalidField(format!("unknown tag 0x{:02x}", other)));
      }
    };
    fields.push(field);
  }

  Ok(fields)
}

fn take_u32(payload: &mut &[u8]) -> Result<u32> {
  if payload.remaining() < 4 {
    return Err(PulseError::InvalidField("truncated u32".to_string()));
  }
  Ok(payload.get_u32())
}
