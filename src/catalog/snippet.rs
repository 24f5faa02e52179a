//! Display-only code snippets
//!
//! Produces a Python/scipy illustration of how a model could be solved with
//! `odeint`. The text is a template filled in from the descriptor; it is
//! never executed and nothing checks that it would run.

use super::ModelDescriptor;

/// Render the scipy illustration for a model
pub fn snippet(model: &ModelDescriptor) -> String {
    let parameters = model
        .parameters
        .iter()
        .map(|p| format!("{} = {}", p.name, p.value))
        .collect::<Vec<_>>()
        .join("\n");

    let state_names = model
        .state
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let initial = model
        .state
        .iter()
        .map(|s| s.initial.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let domain = &model.domain;

    format!(
        r#"from scipy.integrate import odeint
import numpy as np
import matplotlib.pyplot as plt

# {name}
{parameters}

def model(y, t):
    {state_names} = y
    # {equation}
    return dydt

t = np.linspace({t0}, {t_end}, {points})
y0 = [{initial}]
sol = odeint(model, y0, t)

plt.plot(t, sol)
plt.xlabel('{xlabel}')
plt.ylabel('{ylabel}')
plt.show()"#,
        name = model.display_name,
        parameters = parameters,
        state_names = state_names,
        equation = model.equation_text,
        t0 = domain.t0,
        t_end = domain.t_end,
        points = domain.grid_len(),
        initial = initial,
        xlabel = model.axis_labels.x,
        ylabel = model.axis_labels.y,
    )
}
