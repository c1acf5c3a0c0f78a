use crate::error::{SecretError, SecretResult};

/// Smallest radix a point value may be encoded in.
pub const MIN_RADIX: u32 = 2;

/// Largest radix a point value may be encoded in (`0-9` then `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Top-level field holding `n` and `k`; every other field is a point.
pub const RESERVED_KEYS_FIELD: &str = "keys";

pub use math::DEFAULT_PIVOT_EPSILON;

/// Numeric knobs for the interpolation solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    pivot_epsilon: f64,
}

impl SolverConfig {
    /// Build a config with an explicit singular-pivot threshold.
    ///
    /// Returns an error when `pivot_epsilon` is negative or not finite.
    pub fn new(pivot_epsilon: f64) -> SecretResult<Self> {
        if !pivot_epsilon.is_finite() || pivot_epsilon < 0.0 {
            return Err(SecretError::InvalidConfig(format!(
                "pivot epsilon must be a finite, non-negative number, got \
                 {pivot_epsilon}"
            )));
        }
        Ok(Self { pivot_epsilon })
    }

    #[inline]
    pub const fn pivot_epsilon(&self) -> f64 {
        self.pivot_epsilon
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_epsilon: DEFAULT_PIVOT_EPSILON,
        }
    }
}

/// Whether `base` is a supported radix.
#[inline]
pub fn is_supported_radix(base: u64) -> bool {
    (u64::from(MIN_RADIX)..=u64::from(MAX_RADIX)).contains(&base)
}
