pub mod closed_form_models;

use serde::{Deserialize, Serialize};

pub use closed_form_models::*;

use crate::catalog::{ModelDescriptor, ModelKind, TimeDomain};
use crate::simulator::{advance, ClosedFormEq, RawTrajectory, T, V};
use crate::{DomainViolation, GalleryError};

/// Built-in closed-form solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosedForm {
    /// Newton's law of cooling (k, T_room)
    Cooling,
    /// Unbounded exponential growth (r)
    Growth,
    /// Exponential decay (lambda)
    Decay,
    /// Logistic growth (r, K)
    Logistic,
}

impl ClosedForm {
    /// The solution function for this model
    pub fn equation(&self) -> ClosedFormEq {
        match self {
            Self::Cooling => cooling,
            Self::Growth => growth,
            Self::Decay => decay,
            Self::Logistic => logistic,
        }
    }

    /// Parameter names, in the order the solution function fetches them
    pub fn expected_parameters(&self) -> &'static [&'static str] {
        match self {
            Self::Cooling => &["k", "T_room"],
            Self::Growth => &["r"],
            Self::Decay => &["lambda"],
            Self::Logistic => &["r", "K"],
        }
    }

    pub fn num_states(&self) -> usize {
        1
    }
}

/// Model evaluated from its closed-form solution.
///
/// There is no step-to-step state: each grid point is computed directly from
/// the initial state, so no numerical error accumulates.
#[derive(Clone, Debug)]
pub struct Analytical {
    id: String,
    eq: ClosedFormEq,
    params: V,
    initial: V,
    domain: TimeDomain,
}

impl Analytical {
    pub fn new(
        id: impl Into<String>,
        eq: ClosedFormEq,
        params: V,
        initial: V,
        domain: TimeDomain,
    ) -> Self {
        Self {
            id: id.into(),
            eq,
            params,
            initial,
            domain,
        }
    }

    /// Resolve the solution function and parameters of an analytic descriptor.
    pub fn from_descriptor(descriptor: &ModelDescriptor) -> Result<Self, GalleryError> {
        let ModelKind::Analytic { solution } = descriptor.kind else {
            return Err(GalleryError::KindMismatch {
                model: descriptor.id.clone(),
                expected: "analytic",
            });
        };

        Ok(Self::new(
            descriptor.id.clone(),
            solution.equation(),
            descriptor.parameter_vector()?,
            descriptor.initial_state(),
            descriptor.domain,
        ))
    }

    /// State at time `t`
    pub fn evaluate(&self, t: T) -> Result<V, GalleryError> {
        let domain_error = |source| GalleryError::NumericDomain {
            model: self.id.clone(),
            time: t,
            source,
        };

        let x = (self.eq)(&self.initial, &self.params, t).map_err(domain_error)?;
        if x.iter().any(|v| !v.is_finite()) {
            return Err(domain_error(DomainViolation::NonFinite));
        }
        Ok(x)
    }

    /// Evaluate every grid point from `t0` to `t_end`.
    ///
    /// The grid time is accumulated by repeated addition of `dt`, so the last
    /// point depends on floating-point rounding of the sum.
    pub fn solve(&self) -> Result<RawTrajectory, GalleryError> {
        self.domain.validate(&self.id)?;
        let TimeDomain { t0, t_end, dt } = self.domain;
        let mut raw = RawTrajectory::with_capacity(self.domain.grid_len() + 1);

        let mut t = t0;
        while t <= t_end {
            raw.push(t, self.evaluate(t)?);
            t = advance(&self.id, t, dt)?;
        }

        Ok(raw)
    }
}

/// Evaluate an analytic descriptor at a single time.
pub fn evaluate(descriptor: &ModelDescriptor, t: T) -> Result<V, GalleryError> {
    Analytical::from_descriptor(descriptor)?.evaluate(t)
}
