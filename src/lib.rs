/// Bind the entries of a parameter vector to local names, by position.
///
/// Equations receive parameters as a plain vector ordered by the model's
/// `expected_parameters`, so the names here must follow that order.
///
/// ```ignore
/// fetch_params!(p, beta, gamma, n);
/// ```
#[macro_export]
macro_rules! fetch_params {
    ($p:expr, $($name:ident),*) => {
        let p = $p;
        let mut idx = 0;
        $(
            let $name = p[idx];
            idx += 1;
        )*
        let _ = idx; // Consume idx to avoid unused_assignments warning
    };
}

pub mod catalog;
pub mod error;
pub mod simulator;

pub use crate::catalog::{
    generate_trajectory, get_model, list_models, snippet, Catalog, ModelDescriptor, ModelKind,
    ModelSummary,
};
pub use crate::simulator::analytical::{evaluate, ClosedForm};
pub use crate::simulator::euler::{Dynamics, Scheme};
pub use crate::simulator::sampler::SamplingPolicy;
pub use crate::simulator::trajectory::{DataPoint, Trajectory};
pub use crate::simulator::{ClosedFormEq, DiffEq, T, V};
pub use error::{DomainViolation, GalleryError};

pub mod prelude {
    pub mod catalog {
        pub use crate::catalog::{
            AxisLabels, Catalog, ModelDescriptor, ModelKind, ModelSummary, OutputField,
            Parameters, SeriesSummary, StateVariable, TimeDomain,
        };
    }
    pub mod simulator {
        pub use crate::simulator::{
            analytical::{Analytical, ClosedForm},
            clamp::Clamp,
            euler::{Dynamics, Integrator, Scheme},
            sampler::SamplingPolicy,
            trajectory::{DataPoint, Trajectory},
            RawTrajectory,
        };
    }
    pub mod models {
        pub use crate::simulator::analytical::{cooling, decay, growth, logistic};
        pub use crate::simulator::euler::{drug, oscillator, predator_prey, sir};
    }

    pub use crate::{generate_trajectory, list_models, GalleryError};
}

#[cfg(test)]
mod tests {
    use crate::V;

    #[test]
    fn test_fetch_params_macro() {
        let params = V::from_vec(vec![1.0, 2.5, 3.7]);

        fetch_params!(&params, ka, ke, v);

        assert_eq!(ka, 1.0);
        assert_eq!(ke, 2.5);
        assert_eq!(v, 3.7);
    }
}
