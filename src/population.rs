//! The population container: owns every [`Person`] and partitions their
//! indices into status sets.
//!
//! People are never removed from the underlying collection; daily transition
//! operations only reclassify indices between the sets. The `infected` set is
//! cumulative — everyone ever infected and not yet dead, including recovered
//! people — which is exactly the set the daily driver iterates.

use std::collections::VecDeque;

use log::trace;
use rand::{Rng, RngCore};

use crate::error::OutbreakError;
use crate::parameters::{
    ParameterSampler, Parameters, ENCOUNTER_RATE, QUARANTINE_ENCOUNTER_RATE, SPREAD_PROBABILITY,
};
use crate::people::Person;

/// Aggregate population statistics for one point in time.
///
/// `infected` is cumulative (currently sick, discovered and healed people);
/// `discovered`, `healed` and `dead` are cumulative as well. `total` includes
/// the dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub infected: usize,
    pub discovered: usize,
    pub healed: usize,
    pub dead: usize,
    pub total: usize,
}

/// A closed, fixed-size population.
pub struct Population {
    people: Vec<Person>,
    /// Never-infected indices, kept in ascending order. New infections always
    /// take from the front so runs with the same seed select the same people.
    healthy: VecDeque<usize>,
    /// Everyone ever infected and not yet dead, in ascending index order.
    infected: Vec<usize>,
    discovered: Vec<usize>,
    healed: Vec<usize>,
    dead: Vec<usize>,
    parameters: Parameters,
}

impl Population {
    /// Creates a population of `ntotal` people with the default parameter
    /// table and immediately infects the first `ninfected` of them.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if `ninfected > ntotal`.
    pub fn new(
        ntotal: usize,
        ninfected: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Self, OutbreakError> {
        Self::with_parameters(ntotal, ninfected, Parameters::default(), rng)
    }

    /// Creates a population sampling each person's intrinsic `Ne`/`Ps` from
    /// the supplied registry, then infects the first `ninfected` indices.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if `ninfected > ntotal`.
    pub fn with_parameters(
        ntotal: usize,
        ninfected: usize,
        parameters: Parameters,
        rng: &mut dyn RngCore,
    ) -> Result<Self, OutbreakError> {
        if ninfected > ntotal {
            return Err(OutbreakError::OutbreakError(format!(
                "cannot infect {ninfected} people in a population of {ntotal}"
            )));
        }

        let mut people = Vec::with_capacity(ntotal);
        for _ in 0..ntotal {
            let encounter_rate = parameters.sample(ENCOUNTER_RATE, rng);
            let spread_probability = parameters.sample(SPREAD_PROBABILITY, rng);
            people.push(Person::new(encounter_rate, spread_probability));
        }

        let mut population = Population {
            people,
            healthy: (0..ntotal).collect(),
            infected: Vec::new(),
            discovered: Vec::new(),
            healed: Vec::new(),
            dead: Vec::new(),
            parameters,
        };
        population.infect(ninfected, rng);
        Ok(population)
    }

    /// Replaces named entries in the parameter registry. Affects only
    /// subsequently sampled values; people keep their current parameters
    /// unless [`update_people_parameters`](Self::update_people_parameters)
    /// is used.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if `names` and `samplers` differ in length.
    pub fn set_people_parameters(
        &mut self,
        names: &[&str],
        samplers: Vec<ParameterSampler>,
    ) -> Result<(), OutbreakError> {
        self.parameters.set(names, samplers)
    }

    /// Replaces named registry entries, then re-samples and overwrites
    /// `Ne`/`Ps` for every person in the population — including discovered
    /// and healed people, whose quarantine- or recovery-adjusted values are
    /// reset. This is a global policy reset, not a per-person update.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if `names` and `samplers` differ in length.
    pub fn update_people_parameters(
        &mut self,
        names: &[&str],
        samplers: Vec<ParameterSampler>,
        rng: &mut dyn RngCore,
    ) -> Result<(), OutbreakError> {
        self.set_people_parameters(names, samplers)?;
        for person in &mut self.people {
            let encounter_rate = self.parameters.sample(ENCOUNTER_RATE, rng);
            let spread_probability = self.parameters.sample(SPREAD_PROBABILITY, rng);
            person.update_specs(Some(encounter_rate), Some(spread_probability));
        }
        Ok(())
    }

    /// Infects the first `n` people of the healthy pool in ascending index
    /// order. If fewer than `n` susceptibles remain, everyone remaining is
    /// infected; this is not an error.
    pub fn infect(&mut self, n: usize, rng: &mut dyn RngCore) {
        for _ in 0..n {
            let Some(index) = self.healthy.pop_front() else {
                trace!("healthy pool exhausted");
                break;
            };
            self.people[index].infect(rng);
            self.infected.push(index);
        }
    }

    /// Runs one discovery pass: every case in the infected set that has
    /// never been discovered and whose `days_sick` has reached `days_crit`
    /// is detected with probability `efficiency`, drawing a fresh quarantine
    /// encounter rate (`Nl`) on success.
    pub fn discover(&mut self, efficiency: f64, rng: &mut dyn RngCore) {
        for position in 0..self.infected.len() {
            let index = self.infected[position];
            let person = &self.people[index];
            let eligible =
                person.detectable() && person.illness().is_some_and(|i| i.discovery_due());
            if eligible && rng.random_range(0.0..1.0) < efficiency {
                let quarantine_rate = self.parameters.sample(QUARANTINE_ENCOUNTER_RATE, rng);
                self.people[index].discover(quarantine_rate);
                self.discovered.push(index);
                trace!("person {index} discovered, encounter rate now {quarantine_rate:.2}");
            }
        }
    }

    /// Resolves every case whose illness has run its course
    /// (`days_sick > days_tot`): recovery forces `Ps = 0` and keeps the index
    /// in the infected set; death removes it. Calling this again after a case
    /// has resolved changes nothing.
    pub fn end_disease(&mut self) {
        for position in 0..self.infected.len() {
            let index = self.infected[position];
            let person = &mut self.people[index];
            if !person.unresolved() {
                continue;
            }
            let illness = *person
                .illness()
                .expect("an infected person always has an illness record");
            if !illness.resolution_due() {
                continue;
            }
            if illness.die_after {
                person.die();
                self.dead.push(index);
                trace!("person {index} died after {} days", illness.days_sick);
            } else {
                person.heal();
                self.healed.push(index);
                trace!("person {index} healed after {} days", illness.days_sick);
            }
        }
        self.infected
            .retain(|&index| !self.people[index].is_dead());
    }

    /// Draws one fresh sample from the named parameter sampler.
    ///
    /// # Panics
    ///
    /// Panics if no sampler is registered under `name`.
    #[must_use]
    pub fn sample_parameter(&self, name: &str, rng: &mut dyn RngCore) -> f64 {
        self.parameters.sample(name, rng)
    }

    /// The current aggregate statistics.
    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts {
            infected: self.infected.len(),
            discovered: self.discovered.len(),
            healed: self.healed.len(),
            dead: self.dead.len(),
            total: self.people.len(),
        }
    }

    /// The people in the cumulative infected set, in ascending index order.
    pub fn infected(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.counts_as_infected())
    }

    /// Mutable access to the cumulative infected set, in ascending index
    /// order. The daily driver uses this to advance sickness day counts.
    pub fn infected_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.people.iter_mut().filter(|p| p.counts_as_infected())
    }

    /// The never-infected people, in ascending index order.
    pub fn healthy(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.is_susceptible())
    }

    /// The person at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn person(&self, index: usize) -> &Person {
        &self.people[index]
    }
}
