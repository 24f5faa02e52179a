use crate::{simulator::*, DomainViolation};

/// Newton's law of cooling.
///
/// # Assumptions
/// - `p` holds `k` and `T_room` in that order
/// - `x0` is a vector of length 1 with the initial temperature
pub fn cooling(x0: &V, p: &V, t: T) -> Result<V, DomainViolation> {
    fetch_params!(p, k, t_room);
    let mut x = x0.clone();

    x[0] = t_room + (x0[0] - t_room) * (-k * t).exp();
    Ok(x)
}

/// Exponential growth, `p` holds the rate `r`.
pub fn growth(x0: &V, p: &V, t: T) -> Result<V, DomainViolation> {
    fetch_params!(p, r);
    let mut x = x0.clone();

    x[0] = x0[0] * (r * t).exp();
    Ok(x)
}

/// Exponential decay, `p` holds the decay constant `lambda`.
pub fn decay(x0: &V, p: &V, t: T) -> Result<V, DomainViolation> {
    fetch_params!(p, lambda);
    let mut x = x0.clone();

    x[0] = x0[0] * (-lambda * t).exp();
    Ok(x)
}

/// Logistic growth towards the carrying capacity.
///
/// # Assumptions
/// - `p` holds `r` and `K` in that order
/// - `x0` is a vector of length 1 with the initial population
///
/// The denominator is positive whenever `K` and `P0` are, but is checked
/// anyway so that other parameter sets fail instead of producing infinities.
pub fn logistic(x0: &V, p: &V, t: T) -> Result<V, DomainViolation> {
    fetch_params!(p, r, capacity);
    let mut x = x0.clone();
    let growth = (r * t).exp();

    let denominator = capacity + x0[0] * (growth - 1.0);
    if denominator <= 0.0 || denominator.is_nan() {
        return Err(DomainViolation::SingularDenominator { value: denominator });
    }

    x[0] = capacity * x0[0] * growth / denominator;
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(values: &[f64]) -> V {
        V::from_vec(values.to_vec())
    }

    #[test]
    fn cooling_approaches_room_temperature() {
        let p = v(&[0.1, 20.0]);
        let x0 = v(&[90.0]);
        assert_relative_eq!(cooling(&x0, &p, 0.0).unwrap()[0], 90.0);
        assert_relative_eq!(cooling(&x0, &p, 50.0).unwrap()[0], 20.4717, epsilon = 1e-4);
        assert_relative_eq!(cooling(&x0, &p, 500.0).unwrap()[0], 20.0, epsilon = 1e-12);
    }

    #[test]
    fn growth_and_decay_are_inverse() {
        let x0 = v(&[100.0]);
        let up = growth(&x0, &v(&[0.1]), 10.0).unwrap();
        let down = decay(&up, &v(&[0.1]), 10.0).unwrap();
        assert_relative_eq!(up[0], 100.0 * 1f64.exp(), epsilon = 1e-9);
        assert_relative_eq!(down[0], 100.0, epsilon = 1e-9);
    }

    #[test]
    fn logistic_is_bounded_by_capacity() {
        let p = v(&[0.5, 1000.0]);
        let x0 = v(&[50.0]);
        assert_relative_eq!(logistic(&x0, &p, 0.0).unwrap()[0], 50.0);

        let mut previous = 0.0;
        for step in 0..=200 {
            let value = logistic(&x0, &p, step as f64 * 0.2).unwrap()[0];
            assert!(value > previous);
            assert!(value < 1000.0);
            previous = value;
        }
        assert!(logistic(&x0, &p, 60.0).unwrap()[0] > 999.9);
    }

    #[test]
    fn logistic_rejects_non_positive_denominator() {
        // A negative initial population larger than K drives the denominator below zero
        let p = v(&[0.5, 100.0]);
        let x0 = v(&[-50.0]);
        let err = logistic(&x0, &p, 10.0).unwrap_err();
        assert!(matches!(err, DomainViolation::SingularDenominator { value } if value < 0.0));
    }
}
