//! The discrete-time SIR integration loop.
//!
//! [`simulate`] takes a resolved [`Parameters`] record and walks the three
//! compartments (susceptible, infected, recovered) forward one step at a
//! time, recording every intermediate state. All of the reads for a step
//! happen against the previous state before any compartment is written, so
//! the update is simultaneous rather than sequential.

use crate::log::trace;
use crate::parameters::Parameters;
use crate::summary::Summary;

/// A snapshot of the three compartments at a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompartmentState {
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl CompartmentState {
    /// The initial compartment split. Vaccinated people are immune from the
    /// start and seed the recovered compartment; whoever is left after
    /// removing them and the initial infected is susceptible.
    fn initial(params: &Parameters) -> Self {
        let vaccinated_count = params.vaccinated_count();
        CompartmentState {
            susceptible: clamp_non_negative(
                params.population - params.initial_infected - vaccinated_count,
            ),
            infected: params.initial_infected,
            recovered: vaccinated_count,
        }
    }

    /// Applies the update rule once, reading only from `self`.
    ///
    /// The three compartments are clamped independently; clamping one does
    /// not rebalance the others, so the total is not strictly conserved once
    /// any compartment would have gone negative.
    fn step(&self, params: &Parameters) -> Self {
        let new_infections =
            params.infection_rate * self.susceptible * self.infected / params.population;
        let new_recoveries = params.recovery_rate * self.infected;

        CompartmentState {
            susceptible: clamp_non_negative(self.susceptible - new_infections),
            infected: clamp_non_negative(self.infected + new_infections - new_recoveries),
            recovered: clamp_non_negative(self.recovered + new_recoveries),
        }
    }
}

// `f64::max(0.0)` would swallow a NaN; a zero-population run has to surface
// NaN to the caller rather than a fabricated zero.
fn clamp_non_negative(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// The full output of one simulation run: the state sequence plus the
/// summary metrics derived from it. Immutable once produced.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    states: Vec<CompartmentState>,
    summary: Summary,
}

impl SimulationResult {
    /// The recorded sequence of states, index 0 being the initial state.
    /// Always `steps + 1` long.
    pub fn states(&self) -> &[CompartmentState] {
        &self.states
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Susceptible counts over time, one value per step index.
    pub fn susceptible_series(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|state| state.susceptible)
    }

    /// Infected counts over time, one value per step index.
    pub fn infected_series(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|state| state.infected)
    }

    /// Recovered counts over time, one value per step index.
    pub fn recovered_series(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|state| state.recovered)
    }
}

/// Runs the outbreak to completion and returns the state sequence together
/// with the derived summary metrics.
///
/// This is a pure function of `params`: no hidden state, no randomness, and
/// identical inputs produce bit-identical outputs. A population of zero is
/// not guarded; the infection term then divides by zero and the resulting
/// NaN propagates through the susceptible and infected series.
pub fn simulate(params: &Parameters) -> SimulationResult {
    trace!(
        "simulating {} steps over a population of {}",
        params.steps,
        params.population
    );

    let mut states = Vec::with_capacity(params.steps + 1);
    let mut current = CompartmentState::initial(params);
    states.push(current);

    for _ in 0..params.steps {
        current = current.step(params);
        states.push(current);
    }

    let summary = Summary::from_series(params, &states);
    trace!("simulation finished: {:?}", summary);

    SimulationResult { states, summary }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn params() -> Parameters {
        Parameters::default()
    }

    #[test]
    fn sequence_has_steps_plus_one_entries() {
        for steps in [1, 10, 365] {
            let result = simulate(&Parameters {
                steps,
                ..params()
            });
            assert_eq!(result.states().len(), steps + 1);
        }
    }

    #[test]
    fn initial_state_splits_population() {
        let result = simulate(&Parameters {
            population: 1000.0,
            initial_infected: 10.0,
            vaccinated_fraction: 0.25,
            ..params()
        });
        let initial = result.states()[0];
        assert_approx_eq!(initial.susceptible, 1000.0 - 10.0 - 250.0);
        assert_approx_eq!(initial.infected, 10.0);
        assert_approx_eq!(initial.recovered, 250.0);
    }

    #[test]
    fn initial_susceptible_clamps_to_zero() {
        // More vaccinated plus infected than people exist.
        let result = simulate(&Parameters {
            population: 100.0,
            initial_infected: 20.0,
            vaccinated_fraction: 0.9,
            ..params()
        });
        assert_eq!(result.states()[0].susceptible, 0.0);
    }

    #[test]
    fn single_step_update_matches_hand_computation() {
        let result = simulate(&Parameters {
            population: 1000.0,
            initial_infected: 1.0,
            infection_rate: 0.3,
            recovery_rate: 0.1,
            vaccinated_fraction: 0.0,
            steps: 1,
        });

        // S0 = 999, new infections = 0.3 * 999 * 1 / 1000 = 0.2997,
        // new recoveries = 0.1.
        let after = result.states()[1];
        assert_approx_eq!(after.susceptible, 999.0 - 0.2997);
        assert_approx_eq!(after.infected, 1.0 + 0.2997 - 0.1);
        assert_approx_eq!(after.recovered, 0.1);
    }

    #[test]
    fn compartments_never_go_negative() {
        // Aggressive parameters that would overshoot without clamping.
        let result = simulate(&Parameters {
            population: 50.0,
            initial_infected: 49.0,
            infection_rate: 1.0,
            recovery_rate: 1.0,
            vaccinated_fraction: 0.5,
            steps: 200,
        });
        for state in result.states() {
            assert!(state.susceptible >= 0.0);
            assert!(state.infected >= 0.0);
            assert!(state.recovered >= 0.0);
        }
    }

    #[test]
    fn epidemic_rises_then_falls() {
        // With beta well above gamma the classic epidemic curve appears:
        // infections grow from the seed, peak strictly inside the run, and
        // decline afterwards. Global monotonicity does not hold.
        let result = simulate(&Parameters {
            population: 1000.0,
            initial_infected: 1.0,
            infection_rate: 0.5,
            recovery_rate: 0.1,
            vaccinated_fraction: 0.0,
            steps: 200,
        });
        let infected: Vec<f64> = result.infected_series().collect();
        let peak_index = result
            .states()
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.infected.total_cmp(&b.infected))
            .map(|(i, _)| i)
            .unwrap();

        assert!(peak_index > 0);
        assert!(peak_index < infected.len() - 1);
        assert!(infected[1] > infected[0]);
        assert!(infected[infected.len() - 1] < infected[peak_index]);
    }

    #[test]
    fn no_seed_means_no_outbreak() {
        let result = simulate(&Parameters {
            population: 100.0,
            initial_infected: 0.0,
            infection_rate: 0.9,
            recovery_rate: 0.1,
            vaccinated_fraction: 0.0,
            steps: 50,
        });
        assert!(result.infected_series().all(|infected| infected == 0.0));
    }

    #[test]
    fn full_vaccination_blocks_spread() {
        let result = simulate(&Parameters {
            population: 1000.0,
            initial_infected: 1.0,
            infection_rate: 1.0,
            recovery_rate: 0.1,
            vaccinated_fraction: 1.0,
            steps: 100,
        });
        // Nobody is susceptible, so the seed can only recover.
        assert!(result.susceptible_series().all(|s| s == 0.0));
        assert_approx_eq!(result.summary().peak_infected, 1.0);
        let infected: Vec<f64> = result.infected_series().collect();
        assert!(infected.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn identical_parameters_give_bit_identical_runs() {
        let p = Parameters {
            population: 5000.0,
            initial_infected: 3.0,
            infection_rate: 0.4,
            recovery_rate: 0.2,
            vaccinated_fraction: 0.1,
            steps: 150,
        };
        let first = simulate(&p);
        let second = simulate(&p);
        for (a, b) in first.states().iter().zip(second.states()) {
            assert_eq!(a.susceptible.to_bits(), b.susceptible.to_bits());
            assert_eq!(a.infected.to_bits(), b.infected.to_bits());
            assert_eq!(a.recovered.to_bits(), b.recovered.to_bits());
        }
    }

    #[test]
    fn zero_population_propagates_nan() {
        let result = simulate(&Parameters {
            population: 0.0,
            initial_infected: 1.0,
            ..params()
        });
        let after = result.states()[1];
        assert!(after.susceptible.is_nan());
        assert!(after.infected.is_nan());
        // Recoveries never touch the division, so this compartment stays
        // finite.
        assert!(after.recovered.is_finite());
    }
}
