use crate::{
    buffer::{attenuate, compress_16, compress_8, interleave},
    generator::{Generator, Node},
    Result, Sample,
};

/// Attenuation applied to the mixed stereo signal unless overridden.
pub const DEFAULT_GAIN: Sample = 1.0 / 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcmFormat {
    /// Unsigned 8-bit, centered on 127.
    U8,
    /// Signed 16-bit.
    S16,
}

/// Interleaved stereo PCM, ready to hand to an output device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PcmBlock {
    U8(Vec<u8>),
    S16(Vec<i16>),
}

impl PcmBlock {
    /// The number of samples across both channels.
    pub fn len(&self) -> usize {
        match self {
            PcmBlock::U8(data) => data.len(),
            PcmBlock::S16(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders a pair of generator trees into interleaved stereo PCM.
///
/// Each call fills both channels, interleaves them, applies the gain and quantizes to the
/// configured format. The renderer knows nothing about devices; the caller decides when to
/// render and where the block goes.
pub struct StereoRenderer {
    left: Node,
    right: Node,
    format: PcmFormat,
    gain: Sample,
    left_buf: Vec<Sample>,
    right_buf: Vec<Sample>,
}

impl StereoRenderer {
    pub fn new(left: impl Into<Node>, right: impl Into<Node>, format: PcmFormat) -> Self {
        tracing::debug!(?format, gain = DEFAULT_GAIN, "created stereo renderer");
        Self {
            left: left.into(),
            right: right.into(),
            format,
            gain: DEFAULT_GAIN,
            left_buf: Vec::new(),
            right_buf: Vec::new(),
        }
    }

    pub fn with_gain(mut self, gain: Sample) -> Self {
        self.gain = gain;
        self
    }

    pub fn format(&self) -> PcmFormat {
        self.format
    }

    pub fn channels_mut(&mut self) -> (&mut Node, &mut Node) {
        (&mut self.left, &mut self.right)
    }

    /// Render the next `frames` stereo frames.
    pub fn render(&mut self, frames: usize) -> Result<PcmBlock> {
        self.left_buf.resize(frames, 0.0);
        self.right_buf.resize(frames, 0.0);
        self.left.fill_buffer(&mut self.left_buf);
        self.right.fill_buffer(&mut self.right_buf);

        let mut interleaved = interleave(&self.left_buf, &self.right_buf)?;
        attenuate(&mut interleaved, self.gain);
        tracing::trace!(frames, format = ?self.format, "rendered stereo block");

        Ok(match self.format {
            PcmFormat::U8 => PcmBlock::U8(compress_8(&interleaved)),
            PcmFormat::S16 => PcmBlock::S16(compress_16(&interleaved)),
        })
    }
}
