pub mod systems;

use serde::{Deserialize, Serialize};

pub use systems::*;

use crate::catalog::{ModelDescriptor, ModelKind, TimeDomain};
use crate::simulator::clamp::Clamp;
use crate::simulator::{advance, DiffEq, RawTrajectory, T, V};
use crate::{DomainViolation, GalleryError};

/// Built-in systems without a closed-form solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dynamics {
    /// SIR epidemic (beta, gamma, N)
    Sir,
    /// Lotka-Volterra (alpha, beta, delta, gamma)
    PredatorPrey,
    /// Damped harmonic oscillator (omega0, zeta)
    Oscillator,
    /// Two-compartment drug kinetics (k12, k21, k10)
    Drug,
}

impl Dynamics {
    /// The derivative function for this system
    pub fn equation(&self) -> DiffEq {
        match self {
            Self::Sir => sir,
            Self::PredatorPrey => predator_prey,
            Self::Oscillator => oscillator,
            Self::Drug => drug,
        }
    }

    /// Parameter names, in the order the derivative function fetches them
    pub fn expected_parameters(&self) -> &'static [&'static str] {
        match self {
            Self::Sir => &["beta", "gamma", "N"],
            Self::PredatorPrey => &["alpha", "beta", "delta", "gamma"],
            Self::Oscillator => &["omega0", "zeta"],
            Self::Drug => &["k12", "k21", "k10"],
        }
    }

    pub fn num_states(&self) -> usize {
        match self {
            Self::Sir => 3,
            Self::PredatorPrey | Self::Oscillator | Self::Drug => 2,
        }
    }
}

/// Fixed-step update rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// `x += f(x) * dt` for every component at once
    #[default]
    ForwardEuler,
    /// For a state laid out as `[positions.., velocities..]`: velocities are
    /// advanced first, then positions use the updated velocities.
    SemiImplicitEuler,
}

/// Fixed-step integrator for a single model run
#[derive(Clone, Debug)]
pub struct Integrator {
    id: String,
    diffeq: DiffEq,
    scheme: Scheme,
    params: V,
    state: V,
    clamp: Clamp,
    domain: TimeDomain,
}

impl Integrator {
    pub fn new(
        id: impl Into<String>,
        diffeq: DiffEq,
        scheme: Scheme,
        params: V,
        initial_state: V,
        clamp: Clamp,
        domain: TimeDomain,
    ) -> Self {
        Self {
            id: id.into(),
            diffeq,
            scheme,
            params,
            state: initial_state,
            clamp,
            domain,
        }
    }

    /// Resolve the derivative function, parameters and clamp of an
    /// integrated descriptor.
    pub fn from_descriptor(descriptor: &ModelDescriptor) -> Result<Self, GalleryError> {
        let ModelKind::Integrated { system, scheme } = descriptor.kind else {
            return Err(GalleryError::KindMismatch {
                model: descriptor.id.clone(),
                expected: "integrated",
            });
        };

        Ok(Self::new(
            descriptor.id.clone(),
            system.equation(),
            scheme,
            descriptor.parameter_vector()?,
            descriptor.initial_state(),
            Clamp::from_descriptor(descriptor),
            descriptor.domain,
        ))
    }

    /// Current state
    pub fn state(&self) -> &V {
        &self.state
    }

    fn forward_euler_step(&mut self, time: T, dt: T) {
        let mut dx = V::zeros(self.state.len());
        (self.diffeq)(&self.state, &self.params, time, &mut dx);

        for i in 0..self.state.len() {
            self.state[i] += dx[i] * dt;
        }
    }

    fn semi_implicit_step(&mut self, time: T, dt: T) {
        let n = self.state.len();
        let half = n / 2;
        let mut dx = V::zeros(n);

        (self.diffeq)(&self.state, &self.params, time, &mut dx);
        for i in half..n {
            self.state[i] += dx[i] * dt;
        }

        (self.diffeq)(&self.state, &self.params, time, &mut dx);
        for i in 0..half {
            self.state[i] += dx[i] * dt;
        }
    }

    /// Advance the state by one step of `dt`, then clamp.
    pub fn step(&mut self, time: T, dt: T) -> Result<(), GalleryError> {
        match self.scheme {
            Scheme::ForwardEuler => self.forward_euler_step(time, dt),
            Scheme::SemiImplicitEuler => self.semi_implicit_step(time, dt),
        }

        if self.state.iter().any(|v| !v.is_finite()) {
            return Err(GalleryError::NumericDomain {
                model: self.id.clone(),
                time: time + dt,
                source: DomainViolation::NonFinite,
            });
        }

        self.clamp.apply(&mut self.state);
        Ok(())
    }

    /// Integrate over the whole domain at full resolution.
    ///
    /// The state is recorded before each step while `t <= t_end`, and `t` is
    /// accumulated by repeated addition of `dt`.
    pub fn solve(&mut self) -> Result<RawTrajectory, GalleryError> {
        self.domain.validate(&self.id)?;
        let TimeDomain { t0, t_end, dt } = self.domain;
        let mut raw = RawTrajectory::with_capacity(self.domain.grid_len() + 1);

        let mut t = t0;
        while t <= t_end {
            raw.push(t, self.state.clone());
            self.step(t, dt)?;
            t = advance(&self.id, t, dt)?;
        }

        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use approx::assert_relative_eq;

    fn integrator(id: &str) -> Integrator {
        let catalog = Catalog::builtin();
        Integrator::from_descriptor(catalog.get(id).unwrap()).unwrap()
    }

    #[test]
    fn forward_euler_single_step() {
        let mut sir = integrator("sir");
        sir.step(0.0, 0.1).unwrap();
        let x = sir.state();

        let infection = 0.5 * 999.0 * 1.0 / 1000.0;
        assert_eq!(x[0], 999.0 + (-0.5 * 999.0 * 1.0 / 1000.0) * 0.1);
        assert_relative_eq!(x[1], 1.0 + (infection - 0.1) * 0.1, epsilon = 1e-15);
        assert_relative_eq!(x[2], 0.1 * 0.1, epsilon = 1e-15);
    }

    #[test]
    fn semi_implicit_uses_updated_velocity() {
        let mut oscillator = integrator("oscillator");
        oscillator.step(0.0, 0.01).unwrap();
        let x = oscillator.state();

        // v = 0 + (-4) * 0.01, then x = 1 + v * 0.01
        assert_eq!(x[1], -0.04);
        assert_eq!(x[0], 1.0 + -0.04 * 0.01);
    }

    #[test]
    fn explicit_oscillator_differs_from_semi_implicit() {
        let catalog = Catalog::builtin();
        let descriptor = catalog.get("oscillator").unwrap();
        let mut explicit = Integrator::new(
            "oscillator",
            oscillator,
            Scheme::ForwardEuler,
            descriptor.parameter_vector().unwrap(),
            descriptor.initial_state(),
            Clamp::default(),
            descriptor.domain,
        );
        explicit.step(0.0, 0.01).unwrap();

        // plain Euler moves x with the old velocity (zero)
        assert_eq!(explicit.state()[0], 1.0);
        assert_eq!(explicit.state()[1], -0.04);
    }

    #[test]
    fn clamp_runs_after_each_step() {
        let mut crash = Integrator::new(
            "crash",
            predator_prey,
            Scheme::ForwardEuler,
            V::from_vec(vec![0.1, 10.0, 0.01, 0.1]),
            V::from_vec(vec![1.0, 50.0]),
            Clamp::new(vec![0, 1]),
            TimeDomain::new(0.0, 1.0, 0.5),
        );
        crash.step(0.0, 0.5).unwrap();
        assert_eq!(crash.state()[0], 0.0);
        assert!(crash.state()[1] > 0.0);
    }

    #[test]
    fn divergence_is_a_domain_error() {
        let mut blowup = Integrator::new(
            "blowup",
            drug,
            Scheme::ForwardEuler,
            V::from_vec(vec![-1e308, 0.0, -1e308]),
            V::from_vec(vec![1e10, 0.0]),
            Clamp::default(),
            TimeDomain::new(0.0, 1.0, 1.0),
        );
        let err = blowup.solve().unwrap_err();
        assert!(matches!(
            err,
            GalleryError::NumericDomain {
                source: DomainViolation::NonFinite,
                ..
            }
        ));
    }

    #[test]
    fn solve_refuses_an_oversized_domain() {
        let mut huge = Integrator::new(
            "huge",
            drug,
            Scheme::ForwardEuler,
            V::from_vec(vec![0.2, 0.1, 0.15]),
            V::from_vec(vec![100.0, 0.0]),
            Clamp::default(),
            TimeDomain::new(0.0, 1e8, 1e-12),
        );
        assert!(matches!(
            huge.solve(),
            Err(GalleryError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn solve_records_initial_state_first() {
        let raw = integrator("drug").solve().unwrap();
        assert_eq!(raw.times()[0], 0.0);
        assert_eq!(raw.states()[0].as_slice(), &[100.0, 0.0]);
        assert!(raw.len() >= 500);
    }

    #[test]
    fn integrating_an_analytic_model_is_rejected() {
        let catalog = Catalog::builtin();
        let err = Integrator::from_descriptor(catalog.get("growth").unwrap()).unwrap_err();
        assert!(matches!(err, GalleryError::KindMismatch { .. }));
    }
}
