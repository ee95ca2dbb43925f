//! Distribution sampling on top of the xorshift64* core.
//!
//! The demand model and order synthesizer need more than uniform draws:
//! normal daily volumes, exponential basket sizes, beta-distributed product
//! popularity, and weight-proportional choices. All of it is implemented
//! here as inherent methods on [`RngManager`] so that every draw advances
//! the single seeded state.

use super::RngManager;

impl RngManager {
    /// Sample from a uniform distribution over [min, max)
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        assert!(min < max, "min must be less than max");
        min + self.next_f64() * (max - min)
    }

    /// Coin flip with success probability `p`
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Sample from the standard normal distribution using Box-Muller.
    pub fn standard_normal(&mut self) -> f64 {
        // 1.0 - u is in (0, 1], keeping ln() finite
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Sample from Normal(mean, std_dev)
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }

    /// Sample from Exponential(rate)
    ///
    /// # Panics
    /// Panics if rate is not positive
    pub fn exponential(&mut self, rate: f64) -> f64 {
        assert!(rate > 0.0, "rate must be positive");
        let u = 1.0 - self.next_f64();
        -u.ln() / rate
    }

    /// Sample from Gamma(shape, 1) via Marsaglia-Tsang.
    ///
    /// Used as the building block for beta sampling; shape must be positive.
    pub fn gamma(&mut self, shape: f64) -> f64 {
        assert!(shape > 0.0, "shape must be positive");

        if shape < 1.0 {
            // Boost: Gamma(a) = Gamma(a + 1) * U^(1/a)
            let u = 1.0 - self.next_f64();
            return self.gamma(shape + 1.0) * u.powf(1.0 / shape);
        }

        let d = shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();

        loop {
            let x = self.standard_normal();
            let v = (1.0 + c * x).powi(3);
            if v <= 0.0 {
                continue;
            }

            let u = self.next_f64();
            if u < 1.0 - 0.0331 * x.powi(4) {
                return d * v;
            }
            if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
                return d * v;
            }
        }
    }

    /// Sample from Beta(alpha, beta)
    ///
    /// Returns a value in [0, 1). Product popularity uses Beta(2, 5),
    /// concentrating mass on the low end so a few products dominate sales.
    pub fn beta(&mut self, alpha: f64, beta: f64) -> f64 {
        let x = self.gamma(alpha);
        let y = self.gamma(beta);
        x / (x + y)
    }

    /// Select an index proportionally to the given weights.
    ///
    /// Weights need not sum to 1; sampling is weight-proportional.
    ///
    /// # Panics
    /// Panics if `weights` is empty
    pub fn weighted_index(&mut self, weights: &[f64]) -> usize {
        assert!(!weights.is_empty(), "weights must not be empty");

        let total: f64 = weights.iter().sum();
        let mut target = self.next_f64() * total;

        for (idx, weight) in weights.iter().enumerate() {
            target -= weight;
            if target <= 0.0 {
                return idx;
            }
        }

        // Fallback to last index (floating-point remainder)
        weights.len() - 1
    }

    /// Pick a uniformly random element of a slice.
    ///
    /// # Panics
    /// Panics if `values` is empty
    pub fn choice<'a, T>(&mut self, values: &'a [T]) -> &'a T {
        assert!(!values.is_empty(), "values must not be empty");
        let idx = self.range(0, values.len() as i64) as usize;
        &values[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_in_bounds() {
        let mut rng = RngManager::new(42);
        for _ in 0..1000 {
            let v = rng.uniform(0.05, 0.30);
            assert!(v >= 0.05 && v < 0.30);
        }
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = RngManager::new(42);
        for _ in 0..100 {
            assert!(!rng.bernoulli(0.0));
            assert!(rng.bernoulli(1.0));
        }
    }

    #[test]
    fn test_normal_sample_mean() {
        let mut rng = RngManager::new(42);
        let n = 10_000;
        let sum: f64 = (0..n).map(|_| rng.normal(2700.0, 400.0)).sum();
        let mean = sum / n as f64;
        // 4 sigma of the sample mean is 400 / sqrt(10000) * 4 = 16
        assert!(
            (mean - 2700.0).abs() < 16.0,
            "sample mean {} too far from 2700",
            mean
        );
    }

    #[test]
    fn test_exponential_positive() {
        let mut rng = RngManager::new(42);
        for _ in 0..1000 {
            assert!(rng.exponential(0.5) >= 0.0);
        }
    }

    #[test]
    fn test_beta_in_unit_interval() {
        let mut rng = RngManager::new(42);
        for _ in 0..1000 {
            let v = rng.beta(2.0, 5.0);
            assert!(v >= 0.0 && v < 1.0, "beta sample {} out of [0, 1)", v);
        }
    }

    #[test]
    fn test_beta_2_5_mean() {
        let mut rng = RngManager::new(42);
        let n = 10_000;
        let sum: f64 = (0..n).map(|_| rng.beta(2.0, 5.0)).sum();
        let mean = sum / n as f64;
        // Beta(2, 5) has mean 2/7 ≈ 0.2857
        assert!(
            (mean - 2.0 / 7.0).abs() < 0.02,
            "beta(2,5) sample mean {} too far from 2/7",
            mean
        );
    }

    #[test]
    fn test_weighted_index_respects_weights() {
        let mut rng = RngManager::new(42);
        let weights = [10.0, 1.0];
        let mut counts = [0usize; 2];
        for _ in 0..5000 {
            counts[rng.weighted_index(&weights)] += 1;
        }
        assert!(counts[0] > counts[1] * 5);
    }

    #[test]
    fn test_weighted_index_zero_weight_never_chosen() {
        let mut rng = RngManager::new(42);
        let weights = [0.0, 1.0, 0.0];
        for _ in 0..1000 {
            assert_eq!(rng.weighted_index(&weights), 1);
        }
    }

    #[test]
    fn test_choice_covers_slice() {
        let mut rng = RngManager::new(42);
        let values = [1, 2, 3];
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[*rng.choice(&values) as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
