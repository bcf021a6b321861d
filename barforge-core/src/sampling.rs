//! Distribution sampling for the per-row draws.

use rand::Rng;

/// Distribution for sampling a generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueDist {
    /// Fixed value (no randomness)
    Fixed(f64),
    /// Uniform random: U(min, max)
    Uniform { min: f64, max: f64 },
    /// Normal distribution: N(mean, std_dev)
    Normal { mean: f64, std_dev: f64 },
}

impl ValueDist {
    /// Sample a value from the distribution.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        match self {
            Self::Fixed(value) => *value,
            Self::Uniform { min, max } => rng.gen_range(*min..=*max),
            Self::Normal { mean, std_dev } => {
                if *std_dev == 0.0 {
                    return *mean;
                }
                // Box-Muller transform for normal distribution
                let u1: f64 = rng.gen();
                let u2: f64 = rng.gen();
                let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
                mean + std_dev * z
            }
        }
    }
}
