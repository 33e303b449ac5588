use crate::{
    mixer::Mixer,
    osc::{noise::WhiteNoise, simplex::SimplexNoise, Sawtooth, Sine, Square, Triangle},
    Sample,
};

pub trait Generator: Send {
    /// Overwrite every element of `buffer` with the next `buffer.len()` samples.
    ///
    /// Implementations carry their internal state (phase, walk position) across calls, so
    /// consecutive buffers join without discontinuities. The buffer length may change between
    /// calls.
    fn fill_buffer(&mut self, buffer: &mut [Sample]);
}

/// A node in a generator tree.
///
/// Each node exclusively owns its children, so a tree can never contain cycles or shared
/// subtrees. The root is owned by whoever drives the tree.
#[enum_delegate::implement(Generator, pub trait Generator { fn fill_buffer(&mut self, buffer: &mut [Sample]); })]
pub enum Node {
    Sawtooth(Sawtooth),
    Square(Square),
    Triangle(Triangle),
    Sine(Sine),
    WhiteNoise(WhiteNoise),
    SimplexNoise(SimplexNoise),
    Mixer(Mixer),
    Constant(Constant),
}

/// Emits the same value for every sample. Useful as a fixed control signal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constant {
    pub value: Sample,
}

impl Constant {
    pub fn new(value: Sample) -> Self {
        Self { value }
    }
}

impl Generator for Constant {
    fn fill_buffer(&mut self, buffer: &mut [Sample]) {
        buffer.fill(self.value);
    }
}
