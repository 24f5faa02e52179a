use crate::catalog::ModelDescriptor;
use crate::simulator::V;

/// Keeps physically bounded state variables at or above zero.
///
/// Built from the `non_negative` flags of a descriptor's state variables;
/// models without flagged variables get an inactive clamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clamp {
    indices: Vec<usize>,
}

impl Clamp {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn from_descriptor(descriptor: &ModelDescriptor) -> Self {
        Self::new(
            descriptor
                .state
                .iter()
                .enumerate()
                .filter(|(_, var)| var.non_negative)
                .map(|(i, _)| i)
                .collect(),
        )
    }

    pub fn is_active(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Replace negative values of the clamped variables with zero.
    pub fn apply(&self, state: &mut V) {
        for &i in &self.indices {
            state[i] = state[i].max(0.0);
        }
    }
}
