//! The daily driver: steps a [`Population`] through a sequence of simulated
//! days and records the aggregate time series.
//!
//! Each day runs the same fixed sequence — discovery pass, per-case day
//! advance plus new-infection sampling, infection of the sampled number of
//! susceptibles, illness resolution, statistics recording. The order is part
//! of the model: changing it changes the statistical output.

use log::{debug, info};
use rand::RngCore;

use crate::error::OutbreakError;
use crate::population::{Counts, Population};
use crate::transmission::new_infects;

/// Daily probability that an eligible case is detected, when none is given.
pub const DEFAULT_DISCOVERY_EFFICIENCY: f64 = 0.2;

/// The aggregate output of one simulation run: a day-index sequence and four
/// parallel count sequences, one entry per day, in ascending day order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSeries {
    pub days: Vec<u32>,
    pub infected: Vec<usize>,
    pub discovered: Vec<usize>,
    pub healed: Vec<usize>,
    pub dead: Vec<usize>,
}

impl TimeSeries {
    fn with_capacity(ndays: usize) -> Self {
        TimeSeries {
            days: Vec::with_capacity(ndays),
            infected: Vec::with_capacity(ndays),
            discovered: Vec::with_capacity(ndays),
            healed: Vec::with_capacity(ndays),
            dead: Vec::with_capacity(ndays),
        }
    }

    fn record(&mut self, day: u32, counts: Counts) {
        self.days.push(day);
        self.infected.push(counts.infected);
        self.discovered.push(counts.discovered);
        self.healed.push(counts.healed);
        self.dead.push(counts.dead);
    }

    /// Number of recorded days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Runs one simulation of `ndays` days over `population`.
///
/// Day 0 records the population's current counts only; no transitions occur.
/// Every subsequent day, strictly in order:
///
/// 1. one discovery pass with probability `efficiency`,
/// 2. the probability that a random encounter is with an infected person is
///    computed from the *previous* day's counts,
/// 3. every case in the cumulative infected set gains one sickness day and
///    samples how many people it infects today,
/// 4. that many susceptibles are infected (lowest indices first),
/// 5. overdue illnesses resolve,
/// 6. the day's counts are recorded.
///
/// `day0` is accepted for call-site compatibility but is not applied to any
/// computation; the returned day indices always start at zero.
///
/// # Errors
///
/// Returns an `OutbreakError` if `ndays` is zero, if `efficiency` lies
/// outside `[0, 1]`, or if the entire population has died, which leaves the
/// encounter infection probability undefined.
pub fn run_simulation(
    population: &mut Population,
    ndays: u32,
    efficiency: f64,
    day0: u32,
    rng: &mut dyn RngCore,
) -> Result<TimeSeries, OutbreakError> {
    if ndays == 0 {
        return Err(OutbreakError::OutbreakError(
            "a simulation covers at least one day".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&efficiency) {
        return Err(OutbreakError::OutbreakError(format!(
            "discovery efficiency must lie in [0, 1], got {efficiency}"
        )));
    }
    let _ = day0;

    let total = population.counts().total;
    info!("running a {ndays}-day simulation over {total} people (efficiency {efficiency})");

    let mut series = TimeSeries::with_capacity(ndays as usize);
    let mut previous = population.counts();
    series.record(0, previous);

    for day in 1..ndays {
        population.discover(efficiency, rng);

        // Probability that a random encounter is with an infected person,
        // from the previous day's recorded counts.
        let alive = total - previous.dead;
        if alive == 0 {
            return Err(OutbreakError::OutbreakError(format!(
                "the entire population is dead on day {day}; the encounter infection \
                 probability is undefined"
            )));
        }
        #[allow(clippy::cast_precision_loss)]
        let p_already_infected = previous.infected as f64 / alive as f64;

        let mut new_cases: u64 = 0;
        for person in population.infected_mut() {
            person.advance_day();
            new_cases += new_infects(
                person.encounter_rate(),
                person.spread_probability(),
                p_already_infected,
                rng,
            );
        }

        #[allow(clippy::cast_possible_truncation)]
        population.infect(new_cases as usize, rng);
        population.end_disease();

        previous = population.counts();
        series.record(day, previous);
        debug!(
            "day {day}: infected {}, discovered {}, healed {}, dead {}",
            previous.infected, previous.discovered, previous.healed, previous.dead
        );
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_day_run_returns_the_initial_snapshot() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = Population::new(100, 5, &mut rng).unwrap();
        let before = population.counts();

        let series = run_simulation(&mut population, 1, 0.2, 0, &mut rng).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.days, vec![0]);
        assert_eq!(series.infected, vec![5]);
        assert_eq!(series.discovered, vec![0]);
        assert_eq!(series.healed, vec![0]);
        assert_eq!(series.dead, vec![0]);
        // No transitions occurred.
        assert_eq!(population.counts(), before);
    }

    #[test]
    fn day_indices_ascend_from_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = Population::new(50, 2, &mut rng).unwrap();
        let series = run_simulation(&mut population, 8, 0.2, 0, &mut rng).unwrap();
        assert_eq!(series.days, (0..8).collect::<Vec<_>>());
        assert_eq!(series.infected.len(), 8);
        assert_eq!(series.discovered.len(), 8);
        assert_eq!(series.healed.len(), 8);
        assert_eq!(series.dead.len(), 8);
    }

    #[test]
    fn day_offset_does_not_shift_the_output() {
        let mut first_rng = StdRng::seed_from_u64(42);
        let mut first = Population::new(50, 2, &mut first_rng).unwrap();
        let offset_zero = run_simulation(&mut first, 6, 0.2, 0, &mut first_rng).unwrap();

        let mut second_rng = StdRng::seed_from_u64(42);
        let mut second = Population::new(50, 2, &mut second_rng).unwrap();
        let offset_ten = run_simulation(&mut second, 6, 0.2, 10, &mut second_rng).unwrap();

        assert_eq!(offset_zero, offset_ten);
    }

    #[test]
    fn zero_days_is_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = Population::new(10, 1, &mut rng).unwrap();
        assert!(run_simulation(&mut population, 0, 0.2, 0, &mut rng).is_err());
    }

    #[test]
    fn out_of_range_efficiency_is_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = Population::new(10, 1, &mut rng).unwrap();
        assert!(run_simulation(&mut population, 5, 1.5, 0, &mut rng).is_err());
        assert!(run_simulation(&mut population, 5, -0.1, 0, &mut rng).is_err());
    }
}
