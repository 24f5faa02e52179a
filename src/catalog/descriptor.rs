//! Descriptor types for catalog models
//!
//! A [`ModelDescriptor`] is plain serde data: everything needed to compute a
//! trajectory (parameters, initial state, time domain, sampling policy and
//! the solution kind) plus the display metadata handed to the presentation
//! layer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::simulator::analytical::ClosedForm;
use crate::simulator::euler::{Dynamics, Scheme};
use crate::simulator::sampler::SamplingPolicy;
use crate::simulator::{T, V};
use crate::GalleryError;

// ═══════════════════════════════════════════════════════════════════════════════
// Parameters
// ═══════════════════════════════════════════════════════════════════════════════

/// A named model constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: f64,
}

/// Ordered mapping from parameter name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter, replacing any earlier value with the same name
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        match self.0.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(Parameter { name, value }),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|p| p.name == name).map(|p| p.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collect the values of `names`, in that order, into a parameter vector.
    ///
    /// Returns the first missing name on failure.
    pub fn resolve<'a>(&self, names: &[&'a str]) -> Result<V, &'a str> {
        let mut values = Vec::with_capacity(names.len());
        for &name in names {
            values.push(self.get(name).ok_or(name)?);
        }
        Ok(V::from_vec(values))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// State, time domain and outputs
// ═══════════════════════════════════════════════════════════════════════════════

/// One component of the model state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateVariable {
    pub name: String,
    pub initial: f64,
    /// Clamp the variable at zero after every integration step
    #[serde(default)]
    pub non_negative: bool,
}

impl StateVariable {
    pub fn new(name: impl Into<String>, initial: f64) -> Self {
        Self {
            name: name.into(),
            initial,
            non_negative: false,
        }
    }

    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }
}

/// Upper bound on the number of grid points of one run
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Simulated time span and step size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomain {
    pub t0: T,
    pub t_end: T,
    pub dt: T,
}

impl TimeDomain {
    pub fn new(t0: T, t_end: T, dt: T) -> Self {
        Self { t0, t_end, dt }
    }

    /// Approximate number of grid points in `[t0, t_end]`
    pub fn grid_len(&self) -> usize {
        // float to int casts saturate, NaN becomes 0
        let steps = ((self.t_end - self.t0) / self.dt + 1e-9).floor() as usize;
        steps.saturating_add(1)
    }

    /// Decimal digits needed to display a multiple of `dt`, at least one.
    pub fn display_decimals(&self) -> u32 {
        for decimals in 1..=6 {
            let scaled = self.dt * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-9 {
                return decimals;
            }
        }
        6
    }

    pub(crate) fn validate(&self, model: &str) -> Result<(), GalleryError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(GalleryError::invalid(
                model,
                format!("step size must be positive and finite, got {}", self.dt),
            ));
        }
        if !(self.t0.is_finite() && self.t_end.is_finite()) || self.t_end < self.t0 {
            return Err(GalleryError::invalid(
                model,
                format!("invalid time domain [{}, {}]", self.t0, self.t_end),
            ));
        }
        // t += dt must move t across the whole domain
        if self.t0 + self.dt == self.t0 || self.t_end + self.dt == self.t_end {
            return Err(GalleryError::invalid(
                model,
                format!(
                    "step size {} is below the float resolution of [{}, {}]",
                    self.dt, self.t0, self.t_end
                ),
            ));
        }
        let steps = (self.t_end - self.t0) / self.dt;
        if steps >= MAX_GRID_POINTS as f64 {
            return Err(GalleryError::invalid(
                model,
                format!(
                    "{} steps requested, at most {} allowed",
                    steps, MAX_GRID_POINTS
                ),
            ));
        }
        Ok(())
    }
}

/// A plotted series, read from one state variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputField {
    /// Series key in emitted data points
    pub key: String,
    pub label: String,
    pub color: String,
    /// Name of the state variable the series is read from
    pub state: String,
}

impl OutputField {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
            state: state.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Model kind
// ═══════════════════════════════════════════════════════════════════════════════

/// How a model's trajectory is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelKind {
    /// Closed-form solution evaluated on the time grid
    Analytic { solution: ClosedForm },
    /// Fixed-step integration of a derivative function
    Integrated {
        system: Dynamics,
        #[serde(default)]
        scheme: Scheme,
    },
}

impl ModelKind {
    pub fn expected_parameters(&self) -> &'static [&'static str] {
        match self {
            Self::Analytic { solution } => solution.expected_parameters(),
            Self::Integrated { system, .. } => system.expected_parameters(),
        }
    }

    pub fn num_states(&self) -> usize {
        match self {
            Self::Analytic { solution } => solution.num_states(),
            Self::Integrated { system, .. } => system.num_states(),
        }
    }

    pub fn is_analytic(&self) -> bool {
        matches!(self, Self::Analytic { .. })
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analytic { .. } => write!(f, "analytic"),
            Self::Integrated { .. } => write!(f, "integrated"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Descriptor
// ═══════════════════════════════════════════════════════════════════════════════

/// Complete description of one dynamical system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub display_name: String,
    pub equation_text: String,
    #[serde(default)]
    pub description: String,
    pub parameters: Parameters,
    pub state: Vec<StateVariable>,
    pub domain: TimeDomain,
    #[serde(default)]
    pub sampling: SamplingPolicy,
    pub outputs: Vec<OutputField>,
    pub axis_labels: AxisLabels,
    #[serde(flatten)]
    pub kind: ModelKind,
}

impl ModelDescriptor {
    /// Initial state vector, in declaration order
    pub fn initial_state(&self) -> V {
        V::from_iterator(self.state.len(), self.state.iter().map(|s| s.initial))
    }

    pub fn state_index(&self, name: &str) -> Option<usize> {
        self.state.iter().position(|s| s.name == name)
    }

    /// State indices backing each output field, in output order
    pub fn output_indices(&self) -> Result<Vec<usize>, GalleryError> {
        self.outputs
            .iter()
            .map(|field| {
                self.state_index(&field.state).ok_or_else(|| {
                    GalleryError::invalid(
                        &self.id,
                        format!(
                            "output '{}' reads unknown state variable '{}'",
                            field.key, field.state
                        ),
                    )
                })
            })
            .collect()
    }

    /// Parameter vector ordered as the model kind expects it
    pub fn parameter_vector(&self) -> Result<V, GalleryError> {
        self.parameters
            .resolve(self.kind.expected_parameters())
            .map_err(|missing| {
                GalleryError::invalid(&self.id, format!("missing parameter '{}'", missing))
            })
    }

    /// Presentation metadata for this model
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            equation_text: self.equation_text.clone(),
            description: self.description.clone(),
            output_fields: self
                .outputs
                .iter()
                .map(|field| SeriesSummary {
                    key: field.key.clone(),
                    label: field.label.clone(),
                    color: field.color.clone(),
                })
                .collect(),
            axis_labels: self.axis_labels.clone(),
        }
    }

    /// Check that the descriptor can be simulated.
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.id.trim().is_empty() {
            return Err(GalleryError::invalid(&self.id, "id must not be empty"));
        }

        self.parameter_vector()?;

        let expected = self.kind.num_states();
        if self.state.len() != expected {
            return Err(GalleryError::invalid(
                &self.id,
                format!(
                    "{} state variables declared, {} expected",
                    self.state.len(),
                    expected
                ),
            ));
        }

        let mut names = HashSet::new();
        for var in &self.state {
            if !names.insert(var.name.as_str()) {
                return Err(GalleryError::invalid(
                    &self.id,
                    format!("duplicate state variable '{}'", var.name),
                ));
            }
        }

        if let ModelKind::Integrated {
            scheme: Scheme::SemiImplicitEuler,
            ..
        } = self.kind
        {
            if expected % 2 != 0 {
                return Err(GalleryError::invalid(
                    &self.id,
                    "semi-implicit Euler needs a position/velocity split",
                ));
            }
        }

        self.domain.validate(&self.id)?;
        self.sampling
            .validate()
            .map_err(|reason| GalleryError::invalid(&self.id, reason))?;

        if self.outputs.is_empty() {
            return Err(GalleryError::invalid(&self.id, "no output fields"));
        }
        let mut keys = HashSet::new();
        for field in &self.outputs {
            if field.key == "time" || !keys.insert(field.key.as_str()) {
                return Err(GalleryError::invalid(
                    &self.id,
                    format!("output key '{}' is reserved or duplicated", field.key),
                ));
            }
        }
        self.output_indices()?;

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Summaries for the presentation layer
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub key: String,
    pub label: String,
    pub color: String,
}

/// What `list_models` reports for each model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub id: String,
    pub display_name: String,
    pub equation_text: String,
    pub description: String,
    pub output_fields: Vec<SeriesSummary>,
    pub axis_labels: AxisLabels,
}
