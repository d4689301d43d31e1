//! Summary metrics derived from a finished state sequence.

use std::fmt::{self, Display};

use crate::engine::CompartmentState;
use crate::parameters::Parameters;

/// Whether an outbreak sustains itself, judged from the basic reproduction
/// number. Undefined (and therefore absent) when the recovery rate is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trajectory {
    /// R0 < 1: each case causes less than one new case.
    DiesOut,
    /// R0 >= 1: the outbreak sustains or grows.
    Grows,
}

impl Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Trajectory::DiesOut => write!(f, "dies out"),
            Trajectory::Grows => write!(f, "grows"),
        }
    }
}

/// Scalar metrics for one simulation run, computed once after the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Total population N, echoed for display.
    pub population: f64,
    /// Vaccinated individuals at step 0.
    pub vaccinated_count: f64,
    /// Maximum of the infected series, including the initial state.
    pub peak_infected: f64,
    /// Recovered compartment at the last step.
    pub final_recovered: f64,
    /// Basic reproduction number beta / gamma. `None` when gamma is zero.
    pub reproduction_number: Option<f64>,
    /// Immune fraction needed to stop sustained spread, `1 - 1/R0`.
    /// Present exactly when the reproduction number is. Surfaced
    /// unclamped: a value at or below zero means no vaccination is needed.
    pub herd_immunity_threshold: Option<f64>,
}

impl Summary {
    /// Derives the summary from the parameters and the recorded sequence.
    #[must_use]
    pub fn from_series(params: &Parameters, states: &[CompartmentState]) -> Self {
        let reproduction_number = if params.recovery_rate > 0.0 {
            Some(params.infection_rate / params.recovery_rate)
        } else {
            None
        };

        Summary {
            population: params.population,
            vaccinated_count: params.vaccinated_count(),
            peak_infected: states
                .iter()
                .map(|state| state.infected)
                .fold(f64::NEG_INFINITY, f64::max),
            final_recovered: states.last().map_or(0.0, |state| state.recovered),
            reproduction_number,
            herd_immunity_threshold: reproduction_number.map(|r0| 1.0 - 1.0 / r0),
        }
    }

    /// Classifies the outbreak, or `None` when the reproduction number is
    /// undefined.
    #[must_use]
    pub fn trajectory(&self) -> Option<Trajectory> {
        self.reproduction_number.map(|r0| {
            if r0 < 1.0 {
                Trajectory::DiesOut
            } else {
                Trajectory::Grows
            }
        })
    }

    /// The herd-immunity advisory shown alongside the metrics, mirroring
    /// the "math fact" box of the interactive frontend.
    #[must_use]
    pub fn herd_immunity_advisory(&self) -> Option<String> {
        match (self.reproduction_number, self.herd_immunity_threshold) {
            (Some(r0), Some(threshold)) => Some(format!(
                "With an R0 of {r0:.2}, vaccinating {:.1}% of the population stops the spread.",
                threshold * 100.0
            )),
            _ => None,
        }
    }
}
