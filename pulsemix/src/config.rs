use serde::{Deserialize, Serialize};

/// Fixed-point value the server treats as unity gain (100%)
pub const VOLUME_NORM: u32 = 0xffff;

/// Largest volume the server will accept, well into boost territory
pub const VOLUME_MAX: u32 = u32::MAX / 2;

/// Volume scaling shared by the controllers.
///
/// Neither bound is enforced when encoding: out-of-range values are sent as is
/// and the server decides what to do with them. `volume_max` is only reported
/// through [`MixerConfig::is_within_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    pub volume_norm: u32,
    pub volume_max: u32,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            volume_norm: VOLUME_NORM,
            volume_max: VOLUME_MAX,
        }
    }
}

impl MixerConfig {
    /// Convert a normalized volume to the fixed-point encoding.
    ///
    /// Truncates toward zero. Negative and NaN inputs become 0, inputs past
    /// `u32::MAX` saturate.
    pub fn to_fixed(&self, volume: f32) -> u32 {
        (volume * self.volume_norm as f32) as u32
    }

    /// Convert a fixed-point volume back to the normalized scale
    pub fn to_normalized(&self, fixed: u32) -> f32 {
        fixed as f32 / self.volume_norm as f32
    }

    pub fn is_within_range(&self, fixed: u32) -> bool {
        fixed <= self.volume_max
    }

    pub fn is_boosted(&self, fixed: u32) -> bool {
        fixed > self.volume_norm
    }
}
