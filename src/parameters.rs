//! A named registry of stochastic parameter samplers.
//!
//! Behavioral parameters of the population are not fixed numbers but
//! distributions: every time an agent needs a value (its daily encounter
//! rate, its per-encounter spread probability, the reduced encounter rate
//! assigned on discovery) one fresh sample is drawn from the registered
//! sampler. The registry is per-instance state: each [`Parameters`] value is
//! initialized from the immutable default table, so overriding an entry in
//! one simulation never leaks into another.

use crate::error::OutbreakError;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};
use rustc_hash::FxHashMap;

/// Key for the expected number of daily encounters of an individual.
pub const ENCOUNTER_RATE: &str = "Ne";
/// Key for the probability that a given encounter results in transmission.
pub const SPREAD_PROBABILITY: &str = "Ps";
/// Key for the reduced encounter rate assigned upon discovery (quarantine).
pub const QUARANTINE_ENCOUNTER_RATE: &str = "Nl";

/// A zero-argument numeric sampler, up to the explicitly injected random
/// number generator. Keeping the generator an argument (rather than hidden
/// process-wide state) is what makes seeded runs reproducible.
pub type ParameterSampler = Box<dyn Fn(&mut dyn RngCore) -> f64>;

/// A sampler drawing uniformly from `[low, high)`.
pub fn uniform(low: f64, high: f64) -> ParameterSampler {
    Box::new(move |rng: &mut dyn RngCore| rng.random_range(low..high))
}

/// A sampler that always returns `value`.
pub fn constant(value: f64) -> ParameterSampler {
    Box::new(move |_: &mut dyn RngCore| value)
}

/// A sampler drawing from `Normal(mean, std_dev)`.
///
/// # Panics
///
/// Panics if `std_dev` is negative or not finite.
pub fn normal(mean: f64, std_dev: f64) -> ParameterSampler {
    let distribution = Normal::new(mean, std_dev).expect("invalid normal parameters");
    Box::new(move |rng: &mut dyn RngCore| distribution.sample(rng))
}

/// The registry of parameter samplers, keyed by name.
pub struct Parameters {
    samplers: FxHashMap<String, ParameterSampler>,
}

impl Default for Parameters {
    /// Builds a fresh registry from the default table:
    /// `Ne ~ Uniform(40, 60)`, `Ps = 0.1`, `Nl ~ Uniform(1, 10)`.
    fn default() -> Self {
        let mut samplers: FxHashMap<String, ParameterSampler> = FxHashMap::default();
        samplers.insert(ENCOUNTER_RATE.to_string(), uniform(40.0, 60.0));
        samplers.insert(SPREAD_PROBABILITY.to_string(), constant(0.1));
        samplers.insert(QUARANTINE_ENCOUNTER_RATE.to_string(), uniform(1.0, 10.0));
        Parameters { samplers }
    }
}

impl Parameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the named entries with the supplied samplers. Entries not
    /// named keep their current sampler; replacement affects only samples
    /// drawn afterwards.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if `names` and `samplers` differ in length.
    pub fn set(
        &mut self,
        names: &[&str],
        samplers: Vec<ParameterSampler>,
    ) -> Result<(), OutbreakError> {
        if names.len() != samplers.len() {
            return Err(OutbreakError::OutbreakError(format!(
                "got {} parameter names but {} samplers",
                names.len(),
                samplers.len()
            )));
        }
        for (name, sampler) in names.iter().zip(samplers) {
            self.samplers.insert((*name).to_string(), sampler);
        }
        Ok(())
    }

    /// Draws one fresh sample from the named sampler. Samples are never
    /// cached; two consecutive calls generally return different values.
    ///
    /// # Panics
    ///
    /// Panics if no sampler is registered under `name`.
    pub fn sample(&self, name: &str, rng: &mut dyn RngCore) -> f64 {
        let sampler = self
            .samplers
            .get(name)
            .unwrap_or_else(|| panic!("no parameter sampler registered under {name:?}"));
        sampler(rng)
    }
}
