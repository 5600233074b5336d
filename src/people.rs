//! The per-individual infection state machine.
//!
//! A [`Person`] carries a single tagged [`HealthStatus`] plus the intrinsic
//! behavioral parameters that drive transmission. Illness bookkeeping
//! (`days_sick` and the sampled resolution thresholds) exists only while the
//! person has actually been infected; a susceptible person carries none of it.

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};

/// Mean of the sampled day count after which discovery becomes possible.
const DAYS_CRIT_MEAN: f64 = 10.0;
const DAYS_CRIT_STD_DEV: f64 = 2.0;
/// Mean of the sampled day count after which the illness resolves.
const DAYS_TOT_MEAN: f64 = 20.0;
const DAYS_TOT_STD_DEV: f64 = 4.0;
/// Probability, fixed at infection time, that resolution is fatal.
const FATALITY_PROBABILITY: f64 = 0.03;

/// The health state of one person.
///
/// `Healed` keeps track of whether the case was ever detected: a recovered
/// case that was never discovered while sick stays eligible for (late)
/// detection, which affects the discovered time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    /// Never infected.
    Susceptible,
    /// Currently sick, not yet detected.
    Infected,
    /// Currently sick and detected (quarantined).
    Discovered,
    /// Recovered; no longer infectious.
    Healed { discovered: bool },
    /// Deceased.
    Dead,
}

impl HealthStatus {
    /// The allowed-transition table. Anything not listed here is a
    /// programming error on the caller's part.
    #[must_use]
    pub fn can_transition_to(self, next: HealthStatus) -> bool {
        use HealthStatus::{Dead, Discovered, Healed, Infected, Susceptible};
        matches!(
            (self, next),
            (Susceptible, Infected)
                | (Infected, Discovered)
                | (Infected, Healed { discovered: false })
                | (Infected, Dead)
                | (Discovered, Healed { discovered: true })
                | (Discovered, Dead)
                // Late detection of a recovered case.
                | (Healed { discovered: false }, Healed { discovered: true })
        )
    }
}

/// Illness bookkeeping, present from infection onwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illness {
    /// Number of simulated days spent sick, incremented once per day by the
    /// driver.
    pub days_sick: u32,
    /// Earliest day count at which discovery may succeed.
    pub days_crit: f64,
    /// Day count after which the illness resolves.
    pub days_tot: f64,
    /// Whether resolution is fatal. Immutable once sampled.
    pub die_after: bool,
}

impl Illness {
    /// True once the discovery pass may consider this case.
    #[must_use]
    pub fn discovery_due(&self) -> bool {
        f64::from(self.days_sick) >= self.days_crit
    }

    /// True once the illness has run its course.
    #[must_use]
    pub fn resolution_due(&self) -> bool {
        f64::from(self.days_sick) > self.days_tot
    }
}

/// One individual with a fixed identity for the lifetime of the population.
#[derive(Debug)]
pub struct Person {
    status: HealthStatus,
    illness: Option<Illness>,
    encounter_rate: f64,
    spread_probability: f64,
}

impl Person {
    /// Creates a susceptible person with the given intrinsic behavioral
    /// parameters.
    #[must_use]
    pub fn new(encounter_rate: f64, spread_probability: f64) -> Self {
        Person {
            status: HealthStatus::Susceptible,
            illness: None,
            encounter_rate,
            spread_probability,
        }
    }

    #[must_use]
    pub fn status(&self) -> HealthStatus {
        self.status
    }

    #[must_use]
    pub fn illness(&self) -> Option<&Illness> {
        self.illness.as_ref()
    }

    /// Expected number of daily encounters (`Ne`).
    #[must_use]
    pub fn encounter_rate(&self) -> f64 {
        self.encounter_rate
    }

    /// Per-encounter transmission probability (`Ps`).
    #[must_use]
    pub fn spread_probability(&self) -> f64 {
        self.spread_probability
    }

    /// Transitions susceptible → infected, sampling the illness thresholds
    /// and the fatality flag. The caller must invoke this at most once per
    /// person.
    pub fn infect(&mut self, rng: &mut dyn RngCore) {
        self.transition(HealthStatus::Infected);
        let days_crit = Normal::new(DAYS_CRIT_MEAN, DAYS_CRIT_STD_DEV)
            .expect("invalid normal parameters")
            .sample(rng);
        let days_tot = Normal::new(DAYS_TOT_MEAN, DAYS_TOT_STD_DEV)
            .expect("invalid normal parameters")
            .sample(rng);
        self.illness = Some(Illness {
            days_sick: 0,
            days_crit,
            days_tot,
            die_after: rng.random_bool(FATALITY_PROBABILITY),
        });
    }

    /// Marks the case as detected and replaces the encounter rate with the
    /// supplied quarantine value. The caller guarantees the person has never
    /// been discovered before.
    pub fn discover(&mut self, quarantine_encounter_rate: f64) {
        let next = match self.status {
            HealthStatus::Infected => HealthStatus::Discovered,
            HealthStatus::Healed { discovered: false } => {
                HealthStatus::Healed { discovered: true }
            }
            other => panic!("cannot discover a person who is {other:?}"),
        };
        self.transition(next);
        self.encounter_rate = quarantine_encounter_rate;
    }

    /// Resolves the illness as recovery. The person is no longer infectious
    /// (`Ps` forced to 0) but still counts as previously infected.
    pub fn heal(&mut self) {
        let next = HealthStatus::Healed {
            discovered: self.status == HealthStatus::Discovered,
        };
        self.transition(next);
        self.spread_probability = 0.0;
    }

    /// Resolves the illness as fatal.
    pub fn die(&mut self) {
        self.transition(HealthStatus::Dead);
    }

    /// Adds one day to the sickness day count.
    ///
    /// # Panics
    ///
    /// Panics if the person was never infected.
    pub fn advance_day(&mut self) {
        self.illness
            .as_mut()
            .expect("advance_day called on a susceptible person")
            .days_sick += 1;
    }

    /// Overwrites the intrinsic parameters unconditionally, regardless of
    /// discovery or recovery state. This can undo a quarantine's reduced
    /// encounter rate or re-enable transmission on a recovered person; it is
    /// the global policy-reset mechanism used by
    /// [`Population::update_people_parameters`](crate::population::Population::update_people_parameters).
    pub fn update_specs(&mut self, encounter_rate: Option<f64>, spread_probability: Option<f64>) {
        if let Some(encounter_rate) = encounter_rate {
            self.encounter_rate = encounter_rate;
        }
        if let Some(spread_probability) = spread_probability {
            self.spread_probability = spread_probability;
        }
    }

    #[must_use]
    pub fn is_susceptible(&self) -> bool {
        self.status == HealthStatus::Susceptible
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.status == HealthStatus::Dead
    }

    /// Membership in the cumulative infected set: everyone ever infected and
    /// not yet dead, including recovered people.
    #[must_use]
    pub fn counts_as_infected(&self) -> bool {
        !self.is_susceptible() && !self.is_dead()
    }

    /// True while the person has never been discovered, so the discovery
    /// pass may still consider them.
    #[must_use]
    pub fn detectable(&self) -> bool {
        matches!(
            self.status,
            HealthStatus::Infected | HealthStatus::Healed { discovered: false }
        )
    }

    /// True while the illness has neither healed nor killed.
    #[must_use]
    pub fn unresolved(&self) -> bool {
        matches!(
            self.status,
            HealthStatus::Infected | HealthStatus::Discovered
        )
    }

    fn transition(&mut self, next: HealthStatus) {
        assert!(
            self.status.can_transition_to(next),
            "invalid health status transition {:?} -> {next:?}",
            self.status
        );
        self.status = next;
    }
}
