use super::{fold, Waveform};
use crate::Sample;

#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleWave;

impl Waveform for TriangleWave {
    const CYCLE: Sample = 4.0;

    fn sample(phase: Sample) -> Sample {
        phase.abs() - 1.0
    }

    fn wrap(phase: Sample) -> Sample {
        fold(phase, 2.0)
    }
}
