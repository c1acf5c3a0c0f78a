use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// One decoded sample `(x, y)` of the unknown polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointRecord {
    pub x: i64,
    pub y: BigUint,
}

impl PointRecord {
    pub fn new(x: i64, y: impl Into<BigUint>) -> Self {
        Self { x, y: y.into() }
    }

    /// `y` as a finite `f64`, or `None` if it overflows.
    pub fn y_f64(&self) -> Option<f64> {
        self.y.to_f64().filter(|y| y.is_finite())
    }
}

impl From<(i64, u64)> for PointRecord {
    fn from((x, y): (i64, u64)) -> Self {
        Self::new(x, y)
    }
}
