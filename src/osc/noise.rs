use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{generator::Generator, Sample};

/// Independent uniform samples in `[-1, 1)`.
///
/// Every instance owns its random source, so separate trees never contend for shared state.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    rng: StdRng,
}

impl WhiteNoise {
    /// Seeded from the operating system's entropy source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible noise stream.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for WhiteNoise {
    fn fill_buffer(&mut self, buffer: &mut [Sample]) {
        for sample in buffer.iter_mut() {
            *sample = self.rng.gen_range(-1.0..1.0);
        }
    }
}
