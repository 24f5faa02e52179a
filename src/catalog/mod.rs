//! Model Catalog
//!
//! Provides a registry of model descriptors that can be:
//! - Used directly via their ID
//! - Extended with descriptors loaded from JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use odegallery::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//!
//! for id in catalog.ids() {
//!     println!("Available: {}", id);
//! }
//!
//! let trajectory = catalog.generate_trajectory("sir")?;
//! println!("{} points", trajectory.len());
//! ```

mod builtin;
mod descriptor;
pub mod snippet;

pub use descriptor::*;

use lazy_static::lazy_static;

use crate::simulator::analytical::ClosedForm;
use crate::simulator::euler::{Dynamics, Scheme};
use crate::simulator::sampler::SamplingPolicy;
use crate::simulator::{self, trajectory::Trajectory};
use crate::GalleryError;

lazy_static! {
    static ref BUILTIN: Catalog = Catalog::builtin();
}

/// An ordered registry of model descriptors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    models: Vec<ModelDescriptor>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Create a catalog with the eight built-in models
    pub fn builtin() -> Self {
        Self {
            models: builtin::models(),
        }
    }

    /// Shared, read-only built-in catalog
    pub fn shared() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a JSON array of descriptors into a new catalog
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        let mut catalog = Self::new();
        catalog.load_json(json)?;
        Ok(catalog)
    }

    /// Add every descriptor of a JSON array to this catalog.
    ///
    /// Nothing is added unless every descriptor parses and validates.
    pub fn load_json(&mut self, json: &str) -> Result<(), GalleryError> {
        let models: Vec<ModelDescriptor> = serde_json::from_str(json)?;

        for model in &models {
            if let Err(e) = model.validate() {
                tracing::warn!(model = %model.id, "rejected descriptor: {}", e);
                return Err(e);
            }
        }

        for model in models {
            self.insert(model);
        }
        Ok(())
    }

    /// Export all descriptors as a JSON array
    pub fn to_json(&self) -> Result<String, GalleryError> {
        Ok(serde_json::to_string_pretty(&self.models)?)
    }

    /// Validate and add a model, replacing any model with the same id in place
    pub fn add(&mut self, model: ModelDescriptor) -> Result<(), GalleryError> {
        model.validate()?;
        self.insert(model);
        Ok(())
    }

    fn insert(&mut self, model: ModelDescriptor) {
        tracing::trace!(model = %model.id, kind = %model.kind, "catalog insert");
        match self.models.iter_mut().find(|m| m.id == model.id) {
            Some(existing) => *existing = model,
            None => self.models.push(model),
        }
    }

    /// Remove a model from the catalog
    pub fn remove(&mut self, id: &str) -> Option<ModelDescriptor> {
        let index = self.models.iter().position(|m| m.id == id)?;
        Some(self.models.remove(index))
    }

    /// Get a model by ID
    pub fn get(&self, id: &str) -> Result<&ModelDescriptor, GalleryError> {
        self.models
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| GalleryError::UnknownModel(id.to_string()))
    }

    /// Check if a model exists
    pub fn contains(&self, id: &str) -> bool {
        self.models.iter().any(|m| m.id == id)
    }

    /// All descriptors, in catalog order
    pub fn list(&self) -> &[ModelDescriptor] {
        &self.models
    }

    /// All model ids, in catalog order
    pub fn ids(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.id.as_str()).collect()
    }

    /// Presentation metadata for every model, in catalog order
    pub fn summaries(&self) -> Vec<ModelSummary> {
        self.models.iter().map(ModelDescriptor::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Compute the trajectory of a model. Nothing is cached.
    pub fn generate_trajectory(&self, id: &str) -> Result<Trajectory, GalleryError> {
        simulator::simulate(self.get(id)?)
    }

    /// Display-only scipy snippet for a model
    pub fn snippet(&self, id: &str) -> Result<String, GalleryError> {
        Ok(snippet::snippet(self.get(id)?))
    }
}

/// Presentation metadata for the built-in models, in catalog order
pub fn list_models() -> Vec<ModelSummary> {
    BUILTIN.summaries()
}

/// Look up a built-in model
pub fn get_model(id: &str) -> Result<&'static ModelDescriptor, GalleryError> {
    BUILTIN.get(id)
}

/// Compute the trajectory of a built-in model
pub fn generate_trajectory(id: &str) -> Result<Trajectory, GalleryError> {
    BUILTIN.generate_trajectory(id)
}

/// Display-only scipy snippet for a built-in model
pub fn snippet(id: &str) -> Result<String, GalleryError> {
    BUILTIN.snippet(id)
}
