//! Exact symbolic angles as rational multiples of π.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// An exact angle of the form `num/den · π`.
///
/// Wave-plate and phase-plate settings are fixed rational fractions of π
/// (`pi/8`, `3pi/8`, `-pi/2`, ...). Keeping them as a normalized
/// numerator/denominator pair makes equality exact and lets downstream
/// numeric evaluation happen once, at the very end, via [`as_f64`].
///
/// The representation is always normalized: the fraction is reduced, the
/// denominator is positive, and zero is stored as `0/1`.
///
/// [`as_f64`]: PiFraction::as_f64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PiFraction {
    num: i64,
    den: i64,
}

impl PiFraction {
    /// Create a fraction `num/den` of π, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "PiFraction denominator must be non-zero");
        if num == 0 {
            return Self { num: 0, den: 1 };
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: (den / g).abs(),
        }
    }

    /// The zero angle.
    pub fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    /// The angle π.
    pub fn pi() -> Self {
        Self { num: 1, den: 1 }
    }

    /// Numerator of the reduced fraction.
    pub fn numerator(&self) -> i64 {
        self.num
    }

    /// Denominator of the reduced fraction (always positive).
    pub fn denominator(&self) -> i64 {
        self.den
    }

    /// Whether this is the zero angle.
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Evaluate to a concrete angle in radians.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        PI * self.num as f64 / self.den as f64
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl fmt::Display for PiFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.num, self.den) {
            (0, _) => write!(f, "0"),
            (1, 1) => write!(f, "pi"),
            (-1, 1) => write!(f, "-pi"),
            (n, 1) => write!(f, "{n}pi"),
            (1, d) => write!(f, "pi/{d}"),
            (-1, d) => write!(f, "-pi/{d}"),
            (n, d) => write!(f, "{n}pi/{d}"),
        }
    }
}

impl std::ops::Neg for PiFraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(PiFraction::new(2, 4), PiFraction::new(1, 2));
        assert_eq!(PiFraction::new(-3, -8), PiFraction::new(3, 8));
        assert_eq!(PiFraction::new(1, -2), PiFraction::new(-1, 2));
        assert_eq!(PiFraction::new(0, 7), PiFraction::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(PiFraction::zero().to_string(), "0");
        assert_eq!(PiFraction::pi().to_string(), "pi");
        assert_eq!(PiFraction::new(1, 8).to_string(), "pi/8");
        assert_eq!(PiFraction::new(3, 8).to_string(), "3pi/8");
        assert_eq!(PiFraction::new(-1, 2).to_string(), "-pi/2");
        assert_eq!(PiFraction::new(2, 1).to_string(), "2pi");
    }

    #[test]
    fn test_as_f64() {
        assert!((PiFraction::new(1, 2).as_f64() - PI / 2.0).abs() < 1e-12);
        assert!((PiFraction::new(-1, 2).as_f64() + PI / 2.0).abs() < 1e-12);
        assert_eq!(PiFraction::zero().as_f64(), 0.0);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-PiFraction::new(1, 2), PiFraction::new(-1, 2));
        assert_eq!(-PiFraction::zero(), PiFraction::zero());
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_denominator_panics() {
        let _ = PiFraction::new(1, 0);
    }
}
