use thiserror::Error;

/// Errors raised while looking up models or computing trajectories.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// No model with this id exists in the catalog
    #[error("Unknown model '{0}'")]
    UnknownModel(String),

    /// A closed form or an integration step left its valid domain
    #[error("Numeric domain error in model '{model}' at t = {time}: {source}")]
    NumericDomain {
        model: String,
        time: f64,
        #[source]
        source: DomainViolation,
    },

    /// The operation does not apply to this kind of model
    #[error("Model '{model}' is not {expected}")]
    KindMismatch { model: String, expected: &'static str },

    /// A descriptor was rejected by catalog validation
    #[error("Invalid descriptor '{model}': {reason}")]
    InvalidDescriptor { model: String, reason: String },

    /// Failed to parse or serialize JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GalleryError {
    pub(crate) fn invalid(model: &str, reason: impl Into<String>) -> Self {
        GalleryError::InvalidDescriptor {
            model: model.to_string(),
            reason: reason.into(),
        }
    }
}

/// Reason a numeric evaluation was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainViolation {
    #[error("denominator {value} is not positive")]
    SingularDenominator { value: f64 },

    #[error("state is not finite")]
    NonFinite,
}
