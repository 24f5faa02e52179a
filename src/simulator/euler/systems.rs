use crate::simulator::*;

/// Kermack-McKendrick SIR epidemic.
///
/// # Assumptions
/// - `p` holds `beta`, `gamma` and `N` in that order
/// - `x` is `[S, I, R]`
pub fn sir(x: &V, p: &V, _t: T, dx: &mut V) {
    fetch_params!(p, beta, gamma, n);
    let (s, i) = (x[0], x[1]);

    dx[0] = -beta * s * i / n;
    dx[1] = beta * s * i / n - gamma * i;
    dx[2] = gamma * i;
}

/// Lotka-Volterra predator-prey, `x` is `[rabbits, foxes]`.
pub fn predator_prey(x: &V, p: &V, _t: T, dx: &mut V) {
    fetch_params!(p, alpha, beta, delta, gamma);
    let (rabbits, foxes) = (x[0], x[1]);

    dx[0] = alpha * rabbits - beta * rabbits * foxes;
    dx[1] = delta * rabbits * foxes - gamma * foxes;
}

/// Damped harmonic oscillator reduced to first order.
///
/// `x` is `[position, velocity]`; the position derivative is the velocity,
/// which lets the semi-implicit scheme advance the position with the freshly
/// updated velocity.
pub fn oscillator(x: &V, p: &V, _t: T, dx: &mut V) {
    fetch_params!(p, omega0, zeta);
    let (position, velocity) = (x[0], x[1]);

    dx[0] = velocity;
    dx[1] = -2.0 * zeta * omega0 * velocity - omega0 * omega0 * position;
}

/// Two-compartment drug kinetics, `x` is `[blood, tissue]`.
pub fn drug(x: &V, p: &V, _t: T, dx: &mut V) {
    fetch_params!(p, k12, k21, k10);
    let (c1, c2) = (x[0], x[1]);

    dx[0] = -k12 * c1 - k10 * c1 + k21 * c2;
    dx[1] = k12 * c1 - k21 * c2;
}
