//! The new-infection sampler: converts one infected person's behavioral
//! parameters into the number of people they infect today.

use rand::RngCore;
use rand_distr::{Binomial, Distribution};

/// Samples how many new infections one infected person causes in a day.
///
/// Of the person's `encounters`, a fraction `p_already_infected` is expected
/// to be already infected and cannot be infected again; the remainder is
/// truncated to a whole number of contacts and each one is infected with
/// probability `spread_probability`, i.e. one draw from
/// `Binomial(contacts, spread_probability)`.
///
/// `encounters = 0` and `spread_probability = 0` deterministically yield 0.
///
/// # Panics
///
/// Panics if `spread_probability` lies outside `[0, 1]`.
pub fn new_infects(
    encounters: f64,
    spread_probability: f64,
    p_already_infected: f64,
    rng: &mut dyn RngCore,
) -> u64 {
    assert!(
        (0.0..=1.0).contains(&spread_probability),
        "spread probability must lie in [0, 1], got {spread_probability}"
    );

    // Discount the encounters that are already infected.
    let susceptible_contacts = encounters - encounters * p_already_infected;
    if susceptible_contacts < 1.0 || spread_probability == 0.0 {
        return 0;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let contacts = susceptible_contacts.floor() as u64;
    Binomial::new(contacts, spread_probability)
        .expect("binomial parameters are validated above")
        .sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_encounters_yield_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        for p_already_infected in [0.0, 0.3, 1.0] {
            assert_eq!(new_infects(0.0, 0.5, p_already_infected, &mut rng), 0);
        }
    }

    #[test]
    fn zero_spread_probability_yields_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        for encounters in [1.0, 17.0, 50.0] {
            assert_eq!(new_infects(encounters, 0.0, 0.0, &mut rng), 0);
        }
    }

    #[test]
    fn saturated_population_yields_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        // Every contact is already infected, so there is nobody to infect.
        assert_eq!(new_infects(50.0, 0.5, 1.0, &mut rng), 0);
    }

    #[test]
    fn bounded_by_the_contact_count() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(new_infects(10.0, 0.9, 0.0, &mut rng) <= 10);
        }
    }

    #[test]
    fn certain_transmission_infects_every_contact() {
        let mut rng = StdRng::seed_from_u64(42);
        // 10 encounters, half already infected, certain transmission.
        assert_eq!(new_infects(10.0, 1.0, 0.5, &mut rng), 5);
    }

    #[test]
    fn sample_mean_tracks_the_binomial_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 10_000;
        let total: u64 = (0..draws)
            .map(|_| new_infects(50.0, 0.1, 0.0, &mut rng))
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = total as f64 / f64::from(draws);
        // E = 50 * 0.1 = 5; a seeded run lands well within this tolerance.
        assert_approx_eq!(mean, 5.0, 0.2);
    }

    #[test]
    #[should_panic(expected = "spread probability must lie in [0, 1]")]
    fn out_of_range_probability_is_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        new_infects(10.0, 1.5, 0.0, &mut rng);
    }
}
