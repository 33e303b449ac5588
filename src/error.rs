use crate::Sample;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Two channel buffers that must be paired have different lengths.
    #[error("buffer size mismatch: left has {left} samples, right has {right}")]
    SizeMismatch { left: usize, right: usize },

    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(Sample),

    /// A modulator range with `min > max` or a non-finite bound.
    #[error("invalid modulator range [{min}, {max}]")]
    InvalidRange { min: Sample, max: Sample },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
