//! A discrete-time, stochastic, agent-based epidemic simulator for a closed,
//! fixed-size population.
//!
//! Per-individual infection, detection, recovery and death are modeled as
//! probabilistic state transitions driven by a daily time-stepping loop. A
//! run produces aggregate time series (counts of infected, discovered,
//! healed, dead) for policy analysis, e.g. the effect of detection efficiency
//! on the outbreak trajectory.
//!
//! The simulation consists of a small set of pieces that work together:
//! * A [`people::Person`] is the per-individual state machine: a single
//!   tagged health status plus the intrinsic behavioral parameters
//!   (encounter rate `Ne`, spread probability `Ps`).
//! * A [`population::Population`] owns all people, partitions their indices
//!   into status sets, and exposes the daily transition operations.
//! * [`transmission::new_infects`] converts one infected person's parameters
//!   into the number of people they infect today.
//! * [`runner::run_simulation`] orchestrates the daily loop and records the
//!   [`runner::TimeSeries`].
//!
//! The population is well-mixed (no spatial or network structure) and every
//! run is single-threaded. All randomness flows through an explicitly
//! injected, seedable random number generator, so the same seed reproduces
//! the same run:
//!
//! ```rust
//! use outbreak::population::Population;
//! use outbreak::runner::{run_simulation, DEFAULT_DISCOVERY_EFFICIENCY};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut population = Population::new(1000, 5, &mut rng).unwrap();
//! let series =
//!     run_simulation(&mut population, 60, DEFAULT_DISCOVERY_EFFICIENCY, 0, &mut rng).unwrap();
//! assert_eq!(series.len(), 60);
//! ```

pub mod config;
pub mod error;
pub mod log;
pub mod parameters;
pub mod people;
pub mod population;
pub mod report;
pub mod runner;
pub mod transmission;

pub use crate::log::{debug, error, info, trace, warn};

pub use config::ScenarioConfig;
pub use error::OutbreakError;
pub use parameters::{ParameterSampler, Parameters};
pub use people::{HealthStatus, Illness, Person};
pub use population::{Counts, Population};
pub use report::{write_time_series, DailyCounts};
pub use runner::{run_simulation, TimeSeries, DEFAULT_DISCOVERY_EFFICIENCY};
pub use transmission::new_infects;
