pub mod buffer;
mod error;
pub mod generator;
pub mod mixer;
pub mod modulator;
pub mod osc;
pub mod stereo;

use std::sync::Arc;
use std::time::Duration;

pub use buffer::{attenuate, compress_16, compress_8, interleave};
pub use error::{Error, Result};
pub use generator::{Constant, Generator, Node};
pub use mixer::Mixer;
pub use modulator::Modulator;
pub use osc::{
    noise::WhiteNoise, simplex::SimplexNoise, Oscillator, Sawtooth, Sine, Square, Triangle,
};
pub use stereo::{PcmBlock, PcmFormat, StereoRenderer};

/// A single audio sample. Generators work in the bipolar range `[-1, 1]`.
pub type Sample = f64;

pub const DEFAULT_SAMPLE_RATE: Sample = 44_100.0;
/// Frequency used by oscillators that are built without one, in Hz.
pub const DEFAULT_FREQUENCY: Sample = 440.0;

/// Configuration shared by every generator in a tree.
///
/// Settings are immutable once created. Generators hold them through an
/// [`Arc`] so the same value can be referenced by both channels of a stereo
/// pair, or by trees living on different threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The sample rate of the audio stream, in Hz.
    sample_rate: Sample,
}

impl Settings {
    pub fn new(sample_rate: Sample) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        tracing::debug!(sample_rate, "created settings");
        Ok(Self { sample_rate })
    }

    /// Shorthand for `Arc::new(Settings::new(sample_rate)?)`.
    pub fn shared(sample_rate: Sample) -> Result<Arc<Self>> {
        Self::new(sample_rate).map(Arc::new)
    }

    pub fn sample_rate(&self) -> Sample {
        self.sample_rate
    }

    /// The number of samples needed to cover `duration` of audio, truncated.
    pub fn buffer_len(&self, duration: Duration) -> usize {
        (self.sample_rate * duration.as_micros() as Sample / 1_000_000.0) as usize
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}
