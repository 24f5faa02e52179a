pub mod analytical;
pub mod clamp;
pub mod euler;
pub mod sampler;
pub mod trajectory;

use crate::catalog::{ModelDescriptor, ModelKind};
use crate::GalleryError;

use analytical::Analytical;
use euler::Integrator;
use trajectory::{assemble, Trajectory};

pub type T = f64;
pub type V = nalgebra::DVector<T>;

/// This function represents the closed-form solution of a model:
/// Params:
/// - x0: The initial state vector
/// - p: The parameters of the model; Use the [fetch_params!] macro to extract the parameters
/// - t: The time at which the solution is evaluated
///
/// Returns the state at time t, or the reason the formula left its domain.
pub type ClosedFormEq = fn(&V, &V, T) -> Result<V, crate::DomainViolation>;

/// This function represents the differential equation of the model:
/// Params:
/// - x: The state vector at time t
/// - p: The parameters of the model; Use the [fetch_params!] macro to extract the parameters
/// - t: The time at which the differential equation is evaluated
/// - dx: A mutable reference to the derivative of the state vector at time t
/// Example:
/// ```ignore
/// use odegallery::*;
/// let diff_eq = |x: &V, p: &V, _t: T, dx: &mut V| {
///     fetch_params!(p, r);
///     dx[0] = r * x[0];
/// };
/// ```
pub type DiffEq = fn(&V, &V, T, &mut V);

/// Full-resolution samples, before downsampling.
///
/// `times[i]` is the unrounded (accumulated) time of `states[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTrajectory {
    times: Vec<T>,
    states: Vec<V>,
}

impl RawTrajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, time: T, state: V) {
        self.times.push(time);
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[T] {
        &self.times
    }

    pub fn states(&self) -> &[V] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, &V)> {
        self.times.iter().copied().zip(self.states.iter())
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<V>) {
        (self.times, self.states)
    }
}

/// Next grid time, `t + dt`.
///
/// Fails when the sum rounds back to `t`, which would stall the grid loop.
pub(crate) fn advance(model: &str, t: T, dt: T) -> Result<T, GalleryError> {
    let next = t + dt;
    if next <= t {
        return Err(GalleryError::invalid(
            model,
            format!("time stopped advancing at t = {} with dt = {}", t, dt),
        ));
    }
    Ok(next)
}

/// Compute the full-resolution trajectory of a model, without sampling.
///
/// The descriptor is validated first.
pub fn solve(descriptor: &ModelDescriptor) -> Result<RawTrajectory, GalleryError> {
    descriptor.validate()?;
    match descriptor.kind {
        ModelKind::Analytic { .. } => Analytical::from_descriptor(descriptor)?.solve(),
        ModelKind::Integrated { .. } => Integrator::from_descriptor(descriptor)?.solve(),
    }
}

/// Compute, sample and assemble the trajectory of a model.
///
/// Every call recomputes from scratch.
pub fn simulate(descriptor: &ModelDescriptor) -> Result<Trajectory, GalleryError> {
    let raw = solve(descriptor)?;
    let computed = raw.len();
    let sampled = descriptor.sampling.sample(raw);

    tracing::debug!(
        model = %descriptor.id,
        kind = %descriptor.kind,
        computed,
        retained = sampled.len(),
        "generated trajectory"
    );

    assemble(descriptor, sampled)
}
