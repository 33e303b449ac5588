use crate::{
    generator::{Generator, Node},
    Error, Result, Sample,
};

/// Remaps a bipolar generator into `[min, max]`.
///
/// Any generator can become a control signal this way, e.g. the per-sample frequency of an
/// oscillator. Output is clamped to the range, so children that overshoot `[-1, 1]` saturate
/// at the bounds.
pub struct Modulator {
    child: Box<Node>,
    min: Sample,
    max: Sample,
}

impl Modulator {
    /// Fails with [`Error::InvalidRange`] unless both bounds are finite, `min <= max`, and the
    /// span `max - min` is itself finite.
    pub fn new(child: impl Into<Node>, min: Sample, max: Sample) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(Error::InvalidRange { min, max });
        }
        tracing::debug!(min, max, "created modulator");
        Ok(Self {
            child: Box::new(child.into()),
            min,
            max,
        })
    }

    pub fn min(&self) -> Sample {
        self.min
    }

    pub fn max(&self) -> Sample {
        self.max
    }

    pub fn child_mut(&mut self) -> &mut Node {
        &mut self.child
    }

    pub fn fill_buffer(&mut self, buffer: &mut [Sample]) {
        self.child.fill_buffer(buffer);
        let span = self.max - self.min;
        for sample in buffer.iter_mut() {
            *sample = ((*sample / 2.0 + 0.5) * span + self.min).clamp(self.min, self.max);
        }
    }
}
