//! A deterministic simulator of a compartmental epidemic, styled as a
//! zombie outbreak
//!
//! The simulator tracks a population through the three classic SIR
//! compartments (susceptible, infected, recovered) with a discrete-time
//! update rule. A caller supplies six scalar parameters (population size,
//! initial infected, step count, infection rate, recovery rate, and the
//! fraction vaccinated up front) and gets back the full compartment time
//! series along with derived summary metrics such as the basic
//! reproduction number, the herd-immunity threshold, and the peak
//! infection count.
//!
//! The pieces fit together in a straight line:
//! * The [`parameters`] module resolves raw inputs into an immutable
//!   [`Parameters`] record, filling in defaults for anything absent.
//! * The [`engine`] module integrates the model: [`simulate`] is a pure
//!   function from parameters to a [`SimulationResult`].
//! * The [`summary`] module derives the scalar metrics and classifies the
//!   outbreak trajectory.
//! * The [`report`] module writes the series and metrics as CSVs, and the
//!   [`runner`] module wires everything to a command line.
//!
//! Runs are transient: nothing persists between invocations, and two runs
//! with the same parameters produce bit-identical output.

pub mod engine;
pub mod error;
pub mod log;
pub mod parameters;
pub mod report;
pub mod runner;
pub mod summary;

// Macro re-exports live in the macro namespace, so `error` here does not
// collide with the `error` module.
pub use crate::log::{debug, error, info, trace, warn};

pub use engine::{simulate, CompartmentState, SimulationResult};
pub use error::OutbreakError;
pub use parameters::{load_parameters, Parameters};
pub use summary::{Summary, Trajectory};
