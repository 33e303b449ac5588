use super::{fold, Waveform};
use crate::Sample;

/// A rising ramp from -1 to 1. The phase is the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SawWave;

impl Waveform for SawWave {
    const CYCLE: Sample = 2.0;

    fn sample(phase: Sample) -> Sample {
        phase
    }

    fn wrap(phase: Sample) -> Sample {
        fold(phase, 1.0)
    }
}
