//! Simulation parameters and their resolution from the input boundary.
//!
//! The UI collaborator (here, a JSON config file picked up by the runner)
//! supplies up to six scalar values; anything absent falls back to its
//! documented default. Resolution is deliberately permissive: out-of-range
//! combinations (say, a vaccinated fraction large enough to empty the
//! susceptible compartment) are not rejected here but corrected downstream
//! by the engine's clamping.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::OutbreakError;
use crate::log::trace;

/// The resolved, immutable inputs for one simulation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameters {
    /// Total population N.
    #[serde(default = "default_population")]
    pub population: f64,

    /// Number of infected individuals at step 0.
    #[serde(default = "default_initial_infected")]
    pub initial_infected: f64,

    /// Number of discrete steps to run. The sequence produced has one more
    /// entry than this, for the initial state.
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Infection rate beta.
    #[serde(default = "default_infection_rate")]
    pub infection_rate: f64,

    /// Recovery rate gamma. Zero is allowed; the reproduction number is
    /// then undefined and omitted from the summary.
    #[serde(default = "default_recovery_rate")]
    pub recovery_rate: f64,

    /// Fraction of the population vaccinated before step 0, in `[0, 1]`.
    /// Vaccinated individuals start out immune.
    #[serde(default = "default_vaccinated_fraction")]
    pub vaccinated_fraction: f64,
}

fn default_population() -> f64 {
    1000.0
}

fn default_initial_infected() -> f64 {
    1.0
}

fn default_steps() -> usize {
    100
}

fn default_infection_rate() -> f64 {
    0.3
}

fn default_recovery_rate() -> f64 {
    0.1
}

fn default_vaccinated_fraction() -> f64 {
    0.0
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            population: default_population(),
            initial_infected: default_initial_infected(),
            steps: default_steps(),
            infection_rate: default_infection_rate(),
            recovery_rate: default_recovery_rate(),
            vaccinated_fraction: default_vaccinated_fraction(),
        }
    }
}

impl Parameters {
    /// Whole number of vaccinated individuals, rounded down.
    #[must_use]
    pub fn vaccinated_count(&self) -> f64 {
        (self.population * self.vaccinated_fraction).floor()
    }
}

/// Loads parameters from a JSON config file. Missing fields take their
/// defaults.
///
/// # Errors
///
/// Returns an [`OutbreakError`] if the file cannot be read or does not
/// parse as a parameters object.
pub fn load_parameters(path: &Path) -> Result<Parameters, OutbreakError> {
    trace!("loading parameters from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let params = serde_json::from_str(&contents)?;
    Ok(params)
}
