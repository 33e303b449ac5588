use std::f64::consts::{PI, TAU};

use super::{fold, Waveform};
use crate::Sample;

/// A sine wave with its phase in radians.
///
/// Unlike the other waveforms, the phase is only folded back into `(-π, π]` after a whole
/// buffer has been rendered, so it may run past `π` within a buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineWave;

impl Waveform for SineWave {
    const CYCLE: Sample = TAU;

    fn sample(phase: Sample) -> Sample {
        phase.sin()
    }

    fn wrap_block(phase: Sample) -> Sample {
        fold(phase, PI)
    }
}
