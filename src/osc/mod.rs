pub mod noise;
pub mod saw;
pub mod simplex;
pub mod sine;
pub mod square;
pub mod triangle;

use std::{marker::PhantomData, sync::Arc};

use crate::{generator::Generator, modulator::Modulator, Sample, Settings, DEFAULT_FREQUENCY};

pub use saw::SawWave;
pub use sine::SineWave;
pub use square::SquareWave;
pub use triangle::TriangleWave;

pub type Sawtooth = Oscillator<SawWave>;
pub type Square = Oscillator<SquareWave>;
pub type Triangle = Oscillator<TriangleWave>;
pub type Sine = Oscillator<SineWave>;

/// The shape of a periodic waveform, expressed over a phase accumulator.
pub trait Waveform: Send {
    /// How far the phase advances over one full cycle.
    const CYCLE: Sample;

    /// The output for the current phase.
    fn sample(phase: Sample) -> Sample;

    /// Bring the phase back into range after each sample.
    fn wrap(phase: Sample) -> Sample {
        phase
    }

    /// Bring the phase back into range once the whole buffer has been rendered.
    fn wrap_block(phase: Sample) -> Sample {
        phase
    }
}

/// Phases further than this many cycles out are reduced with a single remainder before folding.
const MAX_FOLD_CYCLES: Sample = 1024.0;

/// Fold `phase` into `(-half, half]` by stepping whole cycles of `2 * half`.
///
/// Phases within [`MAX_FOLD_CYCLES`] are stepped one cycle at a time. Anything further out is
/// first reduced with `rem_euclid`, so the fold finishes in bounded time for any finite phase.
pub(crate) fn fold(mut phase: Sample, half: Sample) -> Sample {
    if !phase.is_finite() {
        return phase;
    }
    let cycle = 2.0 * half;
    if phase.abs() > cycle * MAX_FOLD_CYCLES {
        phase = phase.rem_euclid(cycle);
    }
    while phase > half {
        phase -= cycle;
    }
    while phase <= -half {
        phase += cycle;
    }
    phase
}

/// A periodic generator driven by a phase accumulator.
///
/// The frequency is either the constant [`frequency`](Self::frequency) or, when a frequency
/// modulator is attached, a per-sample value produced by the modulator.
pub struct Oscillator<W: Waveform> {
    settings: Arc<Settings>,
    frequency: Sample,
    frequency_modulator: Option<Box<Modulator>>,
    phase: Sample,
    /// Per-sample frequencies, reused between calls.
    freqs: Vec<Sample>,
    waveform: PhantomData<W>,
}

impl<W: Waveform> Oscillator<W> {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self::with_frequency(settings, DEFAULT_FREQUENCY)
    }

    pub fn with_frequency(settings: Arc<Settings>, frequency: Sample) -> Self {
        Self {
            settings,
            frequency,
            frequency_modulator: None,
            phase: 0.0,
            freqs: Vec::new(),
            waveform: PhantomData,
        }
    }

    /// Drive the frequency from `modulator` instead of the constant frequency.
    pub fn with_frequency_modulator(mut self, modulator: Modulator) -> Self {
        self.set_frequency_modulator(Some(modulator));
        self
    }

    pub fn set_frequency_modulator(&mut self, modulator: Option<Modulator>) {
        self.frequency_modulator = modulator.map(Box::new);
    }

    pub fn frequency_modulator_mut(&mut self) -> Option<&mut Modulator> {
        self.frequency_modulator.as_deref_mut()
    }

    /// The constant frequency, in Hz. Ignored while a frequency modulator is attached.
    pub fn frequency(&self) -> Sample {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: Sample) {
        self.frequency = frequency;
    }

    pub fn phase(&self) -> Sample {
        self.phase
    }
}

impl<W: Waveform> Generator for Oscillator<W> {
    fn fill_buffer(&mut self, buffer: &mut [Sample]) {
        self.freqs.resize(buffer.len(), 0.0);
        let freqs = &mut self.freqs[..buffer.len()];
        match self.frequency_modulator.as_deref_mut() {
            Some(modulator) => modulator.fill_buffer(freqs),
            None => freqs.fill(self.frequency),
        }

        let sample_rate = self.settings.sample_rate();
        let mut phase = self.phase;
        for (sample, freq) in buffer.iter_mut().zip(freqs.iter()) {
            *sample = W::sample(phase);
            phase += freq / sample_rate * W::CYCLE;
            phase = W::wrap(phase);
        }
        self.phase = W::wrap_block(phase);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn settings(sample_rate: Sample) -> Arc<Settings> {
        Settings::shared(sample_rate).unwrap()
    }

    pub(crate) fn render<G: Generator>(generator: &mut G, len: usize) -> Vec<Sample> {
        let mut buffer = vec![0.0; len];
        generator.fill_buffer(&mut buffer);
        buffer
    }

    #[test]
    fn phase_continues_across_buffers() {
        let settings = settings(48_000.0);
        let mut whole = Sawtooth::with_frequency(settings.clone(), 333.0);
        let mut split = Sawtooth::with_frequency(settings, 333.0);

        let expected = render(&mut whole, 300);
        let mut actual = render(&mut split, 100);
        actual.extend(render(&mut split, 7));
        actual.extend(render(&mut split, 193));

        assert_eq!(expected, actual);
    }

    #[test]
    fn empty_buffer_keeps_phase() {
        let mut osc = Triangle::with_frequency(settings(48_000.0), 1000.0);
        render(&mut osc, 10);
        let phase = osc.phase();
        render(&mut osc, 0);
        assert_eq!(osc.phase(), phase);
    }

    #[test]
    fn fold_steps_near_phases_cycle_by_cycle() {
        assert_eq!(fold(1.5, 1.0), 1.5 - 2.0);
        assert_eq!(fold(-1.0, 1.0), 1.0);
        assert_eq!(fold(1.0, 1.0), 1.0);
        assert_eq!(fold(9.25, 2.0), 9.25 - 4.0 - 4.0);
    }

    #[test]
    fn fold_reduces_far_phases_in_bounded_time() {
        for phase in [2e17, -2e17, 1e300, -1e300, 3.0 * 2f64.powi(60) + 0.5] {
            let folded = fold(phase, 1.0);
            assert!(folded > -1.0 && folded <= 1.0, "{phase} folded to {folded}");
        }
        assert_eq!(fold(2e17, 1.0), 0.0);
        assert!(fold(Sample::INFINITY, 1.0).is_infinite());
        assert!(fold(Sample::NAN, 1.0).is_nan());
    }

    #[test]
    fn huge_frequency_completes() {
        let settings = settings(1.0);
        let mut saw = Sawtooth::with_frequency(settings.clone(), 1e17);
        let buffer = render(&mut saw, 2);
        assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)), "{buffer:?}");

        let mut triangle = Triangle::with_frequency(settings.clone(), -3e300);
        let buffer = render(&mut triangle, 8);
        assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)), "{buffer:?}");

        let mut sine = Sine::with_frequency(settings, 1e200);
        render(&mut sine, 8);
        assert!(sine.phase() > -std::f64::consts::PI && sine.phase() <= std::f64::consts::PI);
    }

    #[test]
    fn default_frequency_is_a440() {
        let osc = Sine::new(settings(48_000.0));
        assert_eq!(osc.frequency(), DEFAULT_FREQUENCY);
        assert_eq!(osc.phase(), 0.0);
    }
}
