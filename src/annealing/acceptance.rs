//! Metropolis acceptance test.

use rand::Rng;

/// Probability of accepting a move with cost change `delta` at `temperature`.
///
/// Improving moves (`delta < 0`) always have probability 1. Otherwise the
/// result is `exp(-delta / temperature)`, saturated to 0 when the temperature
/// is not positive or the inputs are not finite. Never panics.
///
/// # Examples
///
/// ```
/// use u_route_anneal::annealing::metropolis_probability;
///
/// assert_eq!(metropolis_probability(-3.0, 1.0), 1.0);
/// assert_eq!(metropolis_probability(0.0, 1.0), 1.0);
/// assert!((metropolis_probability(1.0, 1.0) - (-1.0f64).exp()).abs() < 1e-12);
/// assert_eq!(metropolis_probability(1.0, 0.0), 0.0);
/// assert_eq!(metropolis_probability(1e308, 1e-308), 0.0);
/// ```
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    if !delta.is_finite() || !temperature.is_finite() || temperature <= 0.0 {
        return 0.0;
    }
    let exponent = -delta / temperature;
    if exponent.is_nan() {
        return 0.0;
    }
    // exp underflows to 0.0 for large negative exponents, including -inf.
    exponent.exp()
}

/// Draws the accept/reject decision for one candidate.
///
/// Improving moves are accepted without consuming a random draw; all others
/// draw one uniform value in `[0, 1)` and compare it to
/// [`metropolis_probability`].
pub fn accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    rng.random::<f64>() < metropolis_probability(delta, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_improving_always_accepted() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            assert!(accept(-1e-9, 1e-6, &mut rng));
            assert!(accept(-5.0, 0.0, &mut rng));
        }
    }

    #[test]
    fn test_zero_delta_always_accepted() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!((0..1_000).all(|_| accept(0.0, 0.5, &mut rng)));
    }

    #[test]
    fn test_empirical_rate_matches_probability() {
        let mut rng = StdRng::seed_from_u64(42);
        let cases: [(f64, f64); 3] = [(1.0, 2.0), (5.0, 5.0), (3.0, 1.0)];
        for (delta, temperature) in cases {
            let expected = (-delta / temperature).exp();
            let trials = 10_000;
            let accepted = (0..trials)
                .filter(|_| accept(delta, temperature, &mut rng))
                .count();
            let rate = accepted as f64 / trials as f64;
            assert!(
                (rate - expected).abs() < 0.05,
                "delta {delta}, T {temperature}: rate {rate}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_degenerate_inputs_saturate_to_zero() {
        assert_eq!(metropolis_probability(1.0, 0.0), 0.0);
        assert_eq!(metropolis_probability(1.0, -1.0), 0.0);
        assert_eq!(metropolis_probability(f64::INFINITY, 1.0), 0.0);
        assert_eq!(metropolis_probability(f64::NAN, 1.0), 0.0);
        assert_eq!(metropolis_probability(1.0, f64::NAN), 0.0);
        assert_eq!(metropolis_probability(1e300, f64::MIN_POSITIVE), 0.0);

        let mut rng = StdRng::seed_from_u64(0);
        assert!((0..1_000).all(|_| !accept(1e300, 1e-300, &mut rng)));
    }

    #[test]
    fn test_probability_decreases_with_temperature() {
        let hot = metropolis_probability(2.0, 10.0);
        let cold = metropolis_probability(2.0, 1.0);
        assert!(hot > cold);
        assert!(hot < 1.0 && cold > 0.0);
    }
}
