use approx::assert_relative_eq;
use odegallery::*;

fn trajectory(id: &str) -> Trajectory {
    generate_trajectory(id).unwrap_or_else(|e| panic!("{}: {}", id, e))
}

fn series(trajectory: &Trajectory, key: &str) -> Vec<f64> {
    trajectory
        .series(key)
        .unwrap_or_else(|| panic!("{} has no series '{}'", trajectory.model(), key))
}

fn strictly_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] < w[0])
}

fn strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}

fn local_maxima(values: &[f64]) -> usize {
    values
        .windows(3)
        .filter(|w| w[1] > w[0] && w[1] >= w[2])
        .count()
}

#[test]
fn every_model_starts_at_t0_and_moves_forward() {
    for summary in list_models() {
        let descriptor = get_model(&summary.id).unwrap();
        let trajectory = trajectory(&summary.id);
        let times = trajectory.times();

        assert!(!trajectory.is_empty(), "{}", summary.id);
        assert_eq!(times[0], descriptor.domain.t0, "{}", summary.id);
        assert!(
            times.windows(2).all(|w| w[0] <= w[1]),
            "{}: time went backwards",
            summary.id
        );
        assert!(
            *times.last().unwrap() <= descriptor.domain.t_end,
            "{}",
            summary.id
        );
    }
}

#[test]
fn output_keys_match_summaries() {
    for summary in list_models() {
        let trajectory = trajectory(&summary.id);
        let keys: Vec<&str> = summary.output_fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(trajectory.keys(), keys.as_slice());
    }
}

#[test]
fn cooling_decays_to_room_temperature() {
    let trajectory = trajectory("cooling");
    let temperature = series(&trajectory, "value");

    assert_eq!(temperature[0], 90.0);
    assert!(strictly_decreasing(&temperature));
    assert!(temperature.iter().all(|&t| t > 20.0));

    let last = trajectory.last().unwrap();
    assert_eq!(last.time(), 50.0);
    assert_relative_eq!(last.values()[0], 20.0 + 70.0 * (-5.0f64).exp(), epsilon = 1e-9);
    assert_relative_eq!(last.values()[0], 20.47, epsilon = 1e-2);
}

#[test]
fn growth_is_exponential() {
    let trajectory = trajectory("growth");
    let population = series(&trajectory, "value");

    assert_eq!(population[0], 100.0);
    assert!(strictly_increasing(&population));

    let at_ten = trajectory.iter().find(|p| p.time() == 10.0).unwrap();
    assert_relative_eq!(at_ten.values()[0], 271.83, epsilon = 1e-2);
}

#[test]
fn decay_stays_positive() {
    let amount = series(&trajectory("decay"), "value");

    assert_eq!(amount[0], 1000.0);
    assert!(strictly_decreasing(&amount));
    assert!(amount.iter().all(|&n| n > 0.0));
}

#[test]
fn logistic_saturates_below_capacity() {
    let trajectory = trajectory("logistic");
    let population = series(&trajectory, "value");

    assert_eq!(population[0], 50.0);
    assert!(strictly_increasing(&population));
    assert!(population.iter().all(|&p| p < 1000.0));
    assert!(*population.last().unwrap() > 999.0);
    assert!((100..=101).contains(&trajectory.len()));
}

#[test]
fn sir_conserves_population_and_is_monotone() {
    let trajectory = trajectory("sir");
    let s = series(&trajectory, "susceptible");
    let i = series(&trajectory, "infected");
    let r = series(&trajectory, "recovered");

    assert!((100..=101).contains(&trajectory.len()));
    assert_eq!((s[0], i[0], r[0]), (999.0, 1.0, 0.0));

    for k in 0..trajectory.len() {
        assert_relative_eq!(s[k] + i[k] + r[k], 1000.0, max_relative = 0.01);
    }
    assert!(s.windows(2).all(|w| w[1] <= w[0]));
    assert!(r.windows(2).all(|w| w[1] >= w[0]));

    // the epidemic peaks and burns out inside the window
    let peak = i.iter().cloned().fold(f64::MIN, f64::max);
    assert!(peak > 100.0);
    assert!(*i.last().unwrap() < peak / 10.0);
}

#[test]
fn sir_keeps_every_tenth_step() {
    let trajectory = trajectory("sir");
    for (k, point) in trajectory.iter().enumerate() {
        assert_relative_eq!(point.time(), k as f64, epsilon = 1e-9);
    }
}

#[test]
fn predator_prey_is_non_negative_and_cycles() {
    let trajectory = trajectory("predatorprey");
    let rabbits = series(&trajectory, "rabbits");
    let foxes = series(&trajectory, "foxes");

    assert_eq!((rabbits[0], foxes[0]), (40.0, 9.0));
    assert!(rabbits.iter().chain(foxes.iter()).all(|&v| v >= 0.0));
    assert!(local_maxima(&rabbits) >= 2);
    assert!(local_maxima(&foxes) >= 2);

    // roughly one sample every two time units
    assert!((90..=110).contains(&trajectory.len()));
}

#[test]
fn oscillator_starts_at_rest_and_decays() {
    let trajectory = trajectory("oscillator");
    let first = trajectory.first().unwrap();

    assert_eq!(first.time(), 0.0);
    assert_eq!(first.state().as_slice(), &[1.0, 0.0]);
    assert_eq!(first.get("value"), Some(1.0));

    let position = series(&trajectory, "value");
    let half = position.len() / 2;
    let early = position[..half].iter().fold(0.0f64, |m, x| m.max(x.abs()));
    let late = position[half..].iter().fold(0.0f64, |m, x| m.max(x.abs()));
    assert!(late < 0.5 * early);
}

#[test]
fn drug_is_eliminated() {
    let trajectory = trajectory("drug");
    let blood = series(&trajectory, "blood");
    let tissue = series(&trajectory, "tissue");

    assert_eq!((blood[0], tissue[0]), (100.0, 0.0));

    let tissue_peak = tissue.iter().cloned().fold(f64::MIN, f64::max);
    assert!(*blood.last().unwrap() < 5.0);
    assert!(*tissue.last().unwrap() < 0.5 * tissue_peak);

    let half = blood.len() / 2;
    assert!(blood[half..].windows(2).all(|w| w[1] <= w[0]));
    assert!(tissue[half..].windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn sample_counts_match_reference_output() {
    // time-modulo counts include the points admitted or skipped by
    // accumulated float drift at interval boundaries
    for (id, expected) in [
        ("cooling", 101),
        ("growth", 101),
        ("decay", 61),
        ("logistic", 101),
        ("sir", 101),
        ("predatorprey", 100),
        ("oscillator", 100),
        ("drug", 102),
    ] {
        assert_eq!(trajectory(id).len(), expected, "{}", id);
    }
}

#[test]
fn repeated_generation_is_bit_identical() {
    for summary in list_models() {
        let a = trajectory(&summary.id);
        let b = trajectory(&summary.id);
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p.time().to_bits(), q.time().to_bits());
            for (x, y) in p.values().iter().zip(q.values()) {
                assert_eq!(x.to_bits(), y.to_bits());
            }
        }
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }
}

#[test]
fn unknown_model_is_an_error() {
    match generate_trajectory("lorenz") {
        Err(GalleryError::UnknownModel(id)) => assert_eq!(id, "lorenz"),
        other => panic!("expected UnknownModel, got {:?}", other.map(|t| t.len())),
    }
}
