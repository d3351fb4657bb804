//! Backoff schedule: fixed exponential component plus uniform jitter.

use std::time::Duration;

use rand::Rng;

use crate::config::RetryConfig;

/// Delay computed for one failed attempt. The fixed and random components
/// have independent generation rules; callers sleep for their sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryDelay {
    /// Exponential/constant component in seconds, capped at the ceiling.
    pub fixed: f64,
    /// Uniform random component in seconds.
    pub random: f64,
}

impl RetryDelay {
    pub fn total(&self) -> Duration {
        Duration::from_secs_f64(self.fixed + self.random)
    }
}

impl RetryConfig {
    /// Compute the delay to sleep after failed attempt `attempt`. The index
    /// is zero-based and counts completed failures, so the wait after the
    /// first failure uses exponent 0 and equals `delay` before growth begins.
    ///
    /// The fixed component is `min(max_delay, delay * backoff^attempt)`; if
    /// the exponential term overflows to infinity it saturates at the ceiling
    /// instead. The random component is drawn uniformly from the jitter
    /// bounds on every call and does not depend on `attempt`.
    pub fn delay_for<R: Rng>(&self, attempt: u64, rng: &mut R) -> RetryDelay {
        let exponent = attempt.min(i32::MAX as u64) as i32;
        let fixed = if self.delay == 0.0 {
            // 0 * inf is NaN; a zero base stays zero at every exponent.
            0.0
        } else {
            let grown = self.delay * self.backoff.powi(exponent);
            if grown.is_finite() && grown < self.max_delay {
                grown
            } else {
                self.max_delay
            }
        };

        let random = if self.jitter.min < self.jitter.max {
            rng.random_range(self.jitter.min..=self.jitter.max)
        } else {
            self.jitter.min
        };

        RetryDelay { fixed, random }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JitterBounds;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn config(backoff: f64, delay: f64, max_delay: f64) -> RetryConfig {
        RetryConfig {
            backoff,
            delay,
            max_delay,
            jitter: JitterBounds { min: 0.0, max: 0.0 },
            tries: 3,
        }
    }

    #[test]
    fn first_wait_uses_exponent_zero() {
        let c = config(2.0, 3.0, 100.0);
        assert_eq!(c.delay_for(0, &mut rng()).fixed, 3.0);
    }

    #[test]
    fn exponential_growth_doubles() {
        let c = config(2.0, 1.0, 1000.0);
        let mut r = rng();
        assert_eq!(c.delay_for(0, &mut r).fixed, 1.0);
        assert_eq!(c.delay_for(1, &mut r).fixed, 2.0);
        assert_eq!(c.delay_for(2, &mut r).fixed, 4.0);
        assert_eq!(c.delay_for(3, &mut r).fixed, 8.0);
    }

    #[test]
    fn multiplier_one_gives_constant_delay() {
        let c = config(1.0, 5.0, 100.0);
        let mut r = rng();
        for attempt in 0..20 {
            assert_eq!(c.delay_for(attempt, &mut r).fixed, 5.0);
        }
    }

    #[test]
    fn multiplier_zero_collapses_after_first_wait() {
        let c = config(0.0, 5.0, 100.0);
        let mut r = rng();
        // 0^0 = 1, so the first wait is still the base delay.
        assert_eq!(c.delay_for(0, &mut r).fixed, 5.0);
        assert_eq!(c.delay_for(1, &mut r).fixed, 0.0);
        assert_eq!(c.delay_for(9, &mut r).fixed, 0.0);
    }

    #[test]
    fn fixed_is_non_decreasing_and_capped_when_growing() {
        let c = config(3.0, 0.5, 60.0);
        let mut r = rng();
        let mut prev = 0.0;
        for attempt in 0..50 {
            let fixed = c.delay_for(attempt, &mut r).fixed;
            assert!(fixed >= prev, "attempt {}: {} < {}", attempt, fixed, prev);
            assert!(fixed <= c.max_delay);
            prev = fixed;
        }
        assert_eq!(prev, 60.0);
    }

    #[test]
    fn base_above_ceiling_is_capped_immediately() {
        let c = config(2.0, 500.0, 60.0);
        assert_eq!(c.delay_for(0, &mut rng()).fixed, 60.0);
    }

    #[test]
    fn huge_attempt_saturates_instead_of_overflowing() {
        let c = config(2.0, 1.0, 60.0);
        let d = c.delay_for(u64::MAX, &mut rng());
        assert_eq!(d.fixed, 60.0);
        assert!(d.total() <= Duration::from_secs(60));
    }

    #[test]
    fn zero_base_stays_zero_under_growth() {
        let c = config(2.0, 0.0, 60.0);
        let mut r = rng();
        assert_eq!(c.delay_for(0, &mut r).fixed, 0.0);
        assert_eq!(c.delay_for(10_000, &mut r).fixed, 0.0);
    }

    #[test]
    fn random_component_stays_within_bounds() {
        let c = RetryConfig {
            jitter: JitterBounds { min: 2.0, max: 5.0 },
            ..config(1.0, 0.0, 60.0)
        };
        let mut r = rng();
        for attempt in 0..200 {
            let random = c.delay_for(attempt, &mut r).random;
            assert!((2.0..=5.0).contains(&random), "got {}", random);
        }
    }

    #[test]
    fn equal_jitter_bounds_draw_deterministically() {
        let c = RetryConfig {
            jitter: JitterBounds { min: 4.0, max: 4.0 },
            ..config(1.0, 0.0, 60.0)
        };
        let mut r = rng();
        for attempt in 0..10 {
            assert_eq!(c.delay_for(attempt, &mut r).random, 4.0);
        }
    }

    #[test]
    fn total_sums_both_components() {
        let d = RetryDelay {
            fixed: 1.5,
            random: 0.5,
        };
        assert_eq!(d.total(), Duration::from_secs(2));
    }
}
