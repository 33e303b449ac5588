use super::{fold, Waveform};
use crate::Sample;

/// Shares the sawtooth's phase, emitting +1 while the phase is positive and -1 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareWave;

impl Waveform for SquareWave {
    const CYCLE: Sample = 2.0;

    fn sample(phase: Sample) -> Sample {
        if phase > 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    fn wrap(phase: Sample) -> Sample {
        fold(phase, 1.0)
    }
}
