use crate::{
    generator::{Generator, Node},
    Sample,
};

/// The equal-weight average of its children.
///
/// Averaging rather than summing keeps the output within the children's range no matter how
/// many are mixed, at the cost of attenuating each child by `1 / n`. A mixer without children
/// is silent.
#[derive(Default)]
pub struct Mixer {
    children: Vec<Node>,
    /// Holds each child's output before it is folded in.
    scratch: Vec<Sample>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child and return it for further configuration.
    pub fn add(&mut self, child: impl Into<Node>) -> &mut Node {
        self.children.push(child.into());
        tracing::trace!(children = self.children.len(), "added mixer child");
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The children in the order they are mixed.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }
}

impl Generator for Mixer {
    fn fill_buffer(&mut self, buffer: &mut [Sample]) {
        buffer.fill(0.0);
        if self.children.is_empty() {
            return;
        }

        let count = self.children.len() as Sample;
        self.scratch.resize(buffer.len(), 0.0);
        let scratch = &mut self.scratch[..buffer.len()];
        for child in self.children.iter_mut() {
            child.fill_buffer(scratch);
            for (out, sample) in buffer.iter_mut().zip(scratch.iter()) {
                *out += *sample / count;
            }
        }
    }
}
