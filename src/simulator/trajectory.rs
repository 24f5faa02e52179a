//! Plot-ready trajectories.
//!
//! A [`Trajectory`] is the only artifact the engine hands to its consumers:
//! sampled points with display-rounded time and one value per output field.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::catalog::ModelDescriptor;
use crate::simulator::{RawTrajectory, T, V};
use crate::GalleryError;

/// One emitted sample
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    time: T,
    keys: Arc<[String]>,
    values: Vec<f64>,
    state: V,
}

impl DataPoint {
    /// Display-rounded time of the sample
    pub fn time(&self) -> T {
        self.time
    }

    /// Value of the series `key`, if the model has it
    pub fn get(&self, key: &str) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| self.values[i])
    }

    /// Output values, in output field order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Full state the sample was read from
    pub fn state(&self) -> &V {
        &self.state
    }
}

impl Serialize for DataPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("time", &self.time)?;
        for (key, value) in self.keys.iter().zip(&self.values) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Ordered samples of one model run
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    model: String,
    keys: Arc<[String]>,
    points: Vec<DataPoint>,
}

impl Trajectory {
    /// Id of the model that produced the trajectory
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Output series keys
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&DataPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&DataPoint> {
        self.points.last()
    }

    pub fn times(&self) -> Vec<T> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// All values of one series, or `None` for an unknown key
    pub fn series(&self, key: &str) -> Option<Vec<f64>> {
        let index = self.keys.iter().position(|k| k == key)?;
        Some(self.points.iter().map(|p| p.values[index]).collect())
    }

    /// JSON array of `{ "time": .., "<key>": .. }` objects
    pub fn to_json(&self) -> Result<String, GalleryError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for Trajectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.points.len()))?;
        for point in &self.points {
            seq.serialize_element(point)?;
        }
        seq.end()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Round `time` to `decimals` digits for display.
pub fn round_time(time: T, decimals: u32) -> T {
    let scale = 10f64.powi(decimals as i32);
    (time * scale).round() / scale
}

/// Turn retained raw samples into the model's [`Trajectory`].
pub fn assemble(
    descriptor: &ModelDescriptor,
    raw: RawTrajectory,
) -> Result<Trajectory, GalleryError> {
    let indices = descriptor.output_indices()?;
    let keys: Arc<[String]> = descriptor.outputs.iter().map(|f| f.key.clone()).collect();
    let decimals = descriptor.domain.display_decimals();

    let (times, states) = raw.into_parts();
    let points = times
        .into_iter()
        .zip(states)
        .map(|(time, state)| DataPoint {
            time: round_time(time, decimals),
            keys: Arc::clone(&keys),
            values: indices.iter().map(|&i| state[i]).collect(),
            state,
        })
        .collect();

    Ok(Trajectory {
        model: descriptor.id.clone(),
        keys,
        points,
    })
}
