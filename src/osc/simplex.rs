//! Coherent noise from a slow walk through 3D simplex noise.
//!
//! Each axis of the walk position is pushed through `sin` and scaled by [`WALK_RADIUS`] before
//! sampling the noise field, so the query point orbits a bounded region instead of drifting
//! away. The per-axis step sizes are re-drawn at the start of every buffer, which makes the
//! texture wander rather than repeat.

use std::{f64::consts::PI, fmt, sync::Arc};

use noise::{NoiseFn, Simplex};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::fold;
use crate::{generator::Generator, Sample, Settings};

pub const WALK_RADIUS: Sample = 1024.0;

/// Bounds of the per-buffer step multiplier drawn for each axis.
const WANDER: std::ops::Range<Sample> = 0.5..1.5;

type NoiseField = Box<dyn NoiseFn<f64, 3> + Send>;

pub struct SimplexNoise {
    settings: Arc<Settings>,
    /// How fast the walk advances. Higher values give faster-changing noise.
    pub frequency: Sample,
    walk: [Sample; 3],
    field: NoiseField,
    rng: StdRng,
}

impl SimplexNoise {
    /// A noise walk whose field and wander are seeded from the operating system's entropy source.
    pub fn new(settings: Arc<Settings>, frequency: Sample) -> Self {
        Self::from_rng(settings, frequency, StdRng::from_entropy())
    }

    /// A reproducible noise walk.
    pub fn with_seed(settings: Arc<Settings>, frequency: Sample, seed: u64) -> Self {
        Self::from_rng(settings, frequency, StdRng::seed_from_u64(seed))
    }

    /// Sample `field` instead of simplex noise. `rng` drives the per-buffer wander.
    pub fn with_field<F>(settings: Arc<Settings>, frequency: Sample, field: F, rng: StdRng) -> Self
    where
        F: NoiseFn<f64, 3> + Send + 'static,
    {
        Self {
            settings,
            frequency,
            walk: [0.0; 3],
            field: Box::new(field),
            rng,
        }
    }

    fn from_rng(settings: Arc<Settings>, frequency: Sample, mut rng: StdRng) -> Self {
        let seed: u32 = rng.gen();
        tracing::debug!(seed, frequency, "seeded simplex field");
        Self::with_field(settings, frequency, Simplex::new(seed), rng)
    }

    /// The current walk position. Each axis lies in `(-π, π]` between buffers.
    pub fn walk(&self) -> [Sample; 3] {
        self.walk
    }
}

impl fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimplexNoise")
            .field("frequency", &self.frequency)
            .field("walk", &self.walk)
            .finish_non_exhaustive()
    }
}

impl Generator for SimplexNoise {
    fn fill_buffer(&mut self, buffer: &mut [Sample]) {
        let sample_rate = self.settings.sample_rate();
        let mut steps = [0.0; 3];
        for step in steps.iter_mut() {
            *step = self.frequency * self.rng.gen_range(WANDER) / WALK_RADIUS / sample_rate;
        }

        for sample in buffer.iter_mut() {
            let [x, y, z] = self.walk;
            *sample = self.field.get([
                x.sin() * WALK_RADIUS,
                y.sin() * WALK_RADIUS,
                z.sin() * WALK_RADIUS,
            ]);
            for (axis, step) in self.walk.iter_mut().zip(steps) {
                *axis += step;
            }
        }

        for axis in self.walk.iter_mut() {
            *axis = fold(*axis, PI);
        }
    }
}
