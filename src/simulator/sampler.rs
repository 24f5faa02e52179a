use serde::{Deserialize, Serialize};

use crate::simulator::{RawTrajectory, T};

/// Which computed points are kept for output.
///
/// Sampling never changes the integration step; it only selects among the
/// states already computed at full resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SamplingPolicy {
    /// Keep every computed point
    #[default]
    KeepAll,
    /// Keep every `every`-th point, counting from index 0
    IndexModulo { every: usize },
    /// Keep a point when `t % interval < tolerance`.
    ///
    /// `t` is the accumulated, unrounded time, so points near an interval
    /// boundary may be admitted twice or skipped depending on rounding.
    TimeModulo { interval: T, tolerance: T },
}

impl SamplingPolicy {
    pub fn retains(&self, index: usize, time: T) -> bool {
        match *self {
            Self::KeepAll => true,
            Self::IndexModulo { every } => index.checked_rem(every) == Some(0),
            Self::TimeModulo {
                interval,
                tolerance,
            } => time % interval < tolerance,
        }
    }

    /// Keep only the retained points of `raw`
    pub fn sample(&self, raw: RawTrajectory) -> RawTrajectory {
        if let Self::KeepAll = self {
            return raw;
        }

        let (times, states) = raw.into_parts();
        let mut sampled = RawTrajectory::default();
        for (index, (time, state)) in times.into_iter().zip(states).enumerate() {
            if self.retains(index, time) {
                sampled.push(time, state);
            }
        }
        sampled
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match *self {
            Self::KeepAll => Ok(()),
            Self::IndexModulo { every } if every == 0 => {
                Err("index sampling needs a positive stride".to_string())
            }
            Self::IndexModulo { .. } => Ok(()),
            Self::TimeModulo {
                interval,
                tolerance,
            } => {
                if !(interval.is_finite() && interval > 0.0) {
                    Err(format!("sampling interval must be positive, got {}", interval))
                } else if !(tolerance.is_finite() && tolerance > 0.0) {
                    Err(format!("sampling tolerance must be positive, got {}", tolerance))
                } else {
                    Ok(())
                }
            }
        }
    }
}
