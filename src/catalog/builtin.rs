//! The eight built-in models.

use super::*;

pub(crate) fn models() -> Vec<ModelDescriptor> {
    vec![
        cooling(),
        growth(),
        decay(),
        logistic(),
        sir(),
        predator_prey(),
        oscillator(),
        drug(),
    ]
}

fn analytic(solution: ClosedForm) -> ModelKind {
    ModelKind::Analytic { solution }
}

fn integrated(system: Dynamics, scheme: Scheme) -> ModelKind {
    ModelKind::Integrated { system, scheme }
}

fn cooling() -> ModelDescriptor {
    ModelDescriptor {
        id: "cooling".into(),
        display_name: "Newton's Law of Cooling".into(),
        equation_text: "dT/dt = -k(T - T_room)".into(),
        description: "A hot cup of coffee cools down to room temperature".into(),
        parameters: Parameters::new().with("k", 0.1).with("T_room", 20.0),
        state: vec![StateVariable::new("T", 90.0)],
        domain: TimeDomain::new(0.0, 50.0, 0.5),
        sampling: SamplingPolicy::KeepAll,
        outputs: vec![OutputField::new(
            "value",
            "Temperature (°C)",
            "#e74c3c",
            "T",
        )],
        axis_labels: AxisLabels::new("Time (minutes)", "Temperature (°C)"),
        kind: analytic(ClosedForm::Cooling),
    }
}

fn growth() -> ModelDescriptor {
    ModelDescriptor {
        id: "growth".into(),
        display_name: "Exponential Growth".into(),
        equation_text: "dP/dt = r·P".into(),
        description: "Bacteria multiply without any limit".into(),
        parameters: Parameters::new().with("r", 0.1),
        state: vec![StateVariable::new("P", 100.0)],
        domain: TimeDomain::new(0.0, 50.0, 0.5),
        sampling: SamplingPolicy::KeepAll,
        outputs: vec![OutputField::new("value", "Population", "#2ecc71", "P")],
        axis_labels: AxisLabels::new("Time (hours)", "Population"),
        kind: analytic(ClosedForm::Growth),
    }
}

fn decay() -> ModelDescriptor {
    ModelDescriptor {
        id: "decay".into(),
        display_name: "Radioactive Decay".into(),
        equation_text: "dN/dt = -λ·N".into(),
        description: "A radioactive sample decays over time".into(),
        parameters: Parameters::new().with("lambda", 0.15),
        state: vec![StateVariable::new("N", 1000.0)],
        domain: TimeDomain::new(0.0, 30.0, 0.5),
        sampling: SamplingPolicy::KeepAll,
        outputs: vec![OutputField::new("value", "Amount", "#9b59b6", "N")],
        axis_labels: AxisLabels::new("Time (years)", "Amount"),
        kind: analytic(ClosedForm::Decay),
    }
}

fn logistic() -> ModelDescriptor {
    ModelDescriptor {
        id: "logistic".into(),
        display_name: "Logistic Growth".into(),
        equation_text: "dP/dt = r·P(1 - P/K)".into(),
        description: "Population growth with limited resources".into(),
        parameters: Parameters::new().with("r", 0.5).with("K", 1000.0),
        state: vec![StateVariable::new("P", 50.0)],
        domain: TimeDomain::new(0.0, 20.0, 0.2),
        sampling: SamplingPolicy::KeepAll,
        outputs: vec![OutputField::new("value", "Population", "#3498db", "P")],
        axis_labels: AxisLabels::new("Time", "Population"),
        kind: analytic(ClosedForm::Logistic),
    }
}

fn sir() -> ModelDescriptor {
    ModelDescriptor {
        id: "sir".into(),
        display_name: "SIR Epidemic Model".into(),
        equation_text: "dS/dt = -βSI, dI/dt = βSI - γI, dR/dt = γI".into(),
        description: "A disease spreads through a population".into(),
        parameters: Parameters::new()
            .with("beta", 0.5)
            .with("gamma", 0.1)
            .with("N", 1000.0),
        state: vec![
            StateVariable::new("S", 999.0),
            StateVariable::new("I", 1.0),
            StateVariable::new("R", 0.0),
        ],
        domain: TimeDomain::new(0.0, 100.0, 0.1),
        sampling: SamplingPolicy::IndexModulo { every: 10 },
        outputs: vec![
            OutputField::new("susceptible", "Susceptible (S)", "#3498db", "S"),
            OutputField::new("infected", "Infected (I)", "#e74c3c", "I"),
            OutputField::new("recovered", "Recovered (R)", "#2ecc71", "R"),
        ],
        axis_labels: AxisLabels::new("Time (days)", "People"),
        kind: integrated(Dynamics::Sir, Scheme::ForwardEuler),
    }
}

fn predator_prey() -> ModelDescriptor {
    ModelDescriptor {
        id: "predatorprey".into(),
        display_name: "Predator-Prey (Lotka-Volterra)".into(),
        equation_text: "dR/dt = αR - βRF, dF/dt = δRF - γF".into(),
        description: "Rabbit and fox populations rise and fall in cycles".into(),
        parameters: Parameters::new()
            .with("alpha", 0.1)
            .with("beta", 0.02)
            .with("delta", 0.01)
            .with("gamma", 0.1),
        state: vec![
            StateVariable::new("R", 40.0).non_negative(),
            StateVariable::new("F", 9.0).non_negative(),
        ],
        domain: TimeDomain::new(0.0, 200.0, 0.1),
        sampling: SamplingPolicy::TimeModulo {
            interval: 2.0,
            tolerance: 0.1,
        },
        outputs: vec![
            OutputField::new("rabbits", "Rabbits", "#95a5a6", "R"),
            OutputField::new("foxes", "Foxes", "#e67e22", "F"),
        ],
        axis_labels: AxisLabels::new("Time", "Population"),
        kind: integrated(Dynamics::PredatorPrey, Scheme::ForwardEuler),
    }
}

fn oscillator() -> ModelDescriptor {
    ModelDescriptor {
        id: "oscillator".into(),
        display_name: "Damped Oscillator".into(),
        equation_text: "d²x/dt² + 2ζω₀(dx/dt) + ω₀²x = 0".into(),
        description: "A spring-mass system slowed down by friction".into(),
        parameters: Parameters::new().with("omega0", 2.0).with("zeta", 0.1),
        state: vec![StateVariable::new("x", 1.0), StateVariable::new("v", 0.0)],
        domain: TimeDomain::new(0.0, 10.0, 0.01),
        sampling: SamplingPolicy::TimeModulo {
            interval: 0.1,
            tolerance: 0.01,
        },
        outputs: vec![OutputField::new("value", "Position", "#1abc9c", "x")],
        axis_labels: AxisLabels::new("Time (seconds)", "Position"),
        kind: integrated(Dynamics::Oscillator, Scheme::SemiImplicitEuler),
    }
}

fn drug() -> ModelDescriptor {
    ModelDescriptor {
        id: "drug".into(),
        display_name: "Two-Compartment Drug Model".into(),
        equation_text: "dC₁/dt = -k₁₂C₁ - k₁₀C₁ + k₂₁C₂".into(),
        description: "A drug distributes between blood and tissue".into(),
        parameters: Parameters::new()
            .with("k12", 0.2)
            .with("k21", 0.1)
            .with("k10", 0.15),
        state: vec![StateVariable::new("C1", 100.0), StateVariable::new("C2", 0.0)],
        domain: TimeDomain::new(0.0, 50.0, 0.1),
        sampling: SamplingPolicy::TimeModulo {
            interval: 0.5,
            tolerance: 0.1,
        },
        outputs: vec![
            OutputField::new("blood", "Blood", "#e74c3c", "C1"),
            OutputField::new("tissue", "Tissue", "#3498db", "C2"),
        ],
        axis_labels: AxisLabels::new("Time (hours)", "Concentration (mg/L)"),
        kind: integrated(Dynamics::Drug, Scheme::ForwardEuler),
    }
}
