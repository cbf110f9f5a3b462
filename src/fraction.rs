//! Arbitrary precision rational numbers in canonical form

use core::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::traits::Arithmetic;

/// A rational number `numerator / denominator` where the two parts are
/// coprime and the denominator is positive. Every operation returns a new
/// reduced value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExactFraction {
    ratio: BigRational,
}

impl ExactFraction {
    /// Create a reduced fraction, fails if the denominator is zero
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numerator: N, denominator: D) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(ExactFraction {
            ratio: BigRational::new(numerator.into(), denominator),
        })
    }

    pub fn from_integer<N: Into<BigInt>>(value: N) -> Self {
        ExactFraction {
            ratio: BigRational::from_integer(value.into()),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        ExactFraction {
            ratio: BigRational::zero(),
        }
    }

    #[inline]
    pub fn one() -> Self {
        ExactFraction {
            ratio: BigRational::one(),
        }
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        self.ratio.numer()
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        self.ratio.denom()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.ratio.is_zero()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.ratio.is_integer()
    }

    /// Divide by another fraction, fails if the divisor is zero
    pub fn try_div(&self, rhs: &ExactFraction) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(ExactFraction {
            ratio: &self.ratio / &rhs.ratio,
        })
    }

    /// Swap numerator and denominator, fails if the fraction is zero
    pub fn try_recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(ExactFraction {
            ratio: self.ratio.recip(),
        })
    }

    /// Raise to an integer power. Negative exponents go through the reciprocal.
    pub fn pow(&self, exp: i32) -> Result<Self> {
        let base = if exp < 0 { self.try_recip()? } else { self.clone() };
        let exp = exp.unsigned_abs();
        Ok(ExactFraction {
            ratio: BigRational::new_raw(base.numer().pow(exp), base.denom().pow(exp)),
        })
    }

    /// Difference between the bit lengths of numerator and denominator, a
    /// cheap estimate of `log2(|self|)`
    pub fn power_difference(&self) -> i64 {
        self.numer().bits() as i64 - self.denom().bits() as i64
    }

    pub fn max_bit_length(&self) -> u64 {
        self.numer().bits().max(self.denom().bits())
    }

    /// Lossy conversion to a double, not suitable for exact comparisons
    pub fn to_f64(&self) -> f64 {
        self.ratio.to_f64().unwrap_or(f64::NAN)
    }

    pub fn into_ratio(self) -> BigRational {
        self.ratio
    }
}

impl From<i64> for ExactFraction {
    fn from(value: i64) -> Self {
        ExactFraction::from_integer(value)
    }
}

impl From<BigInt> for ExactFraction {
    fn from(value: BigInt) -> Self {
        ExactFraction::from_integer(value)
    }
}

impl From<BigRational> for ExactFraction {
    /// A [BigRational] is always reduced and has a non-zero denominator
    fn from(ratio: BigRational) -> Self {
        ExactFraction { ratio }
    }
}

impl Ord for ExactFraction {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self - other).numer().sign() {
            Sign::Minus => Ordering::Less,
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => Ordering::Greater,
        }
    }
}

impl PartialOrd for ExactFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ExactFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer(), self.denom())
    }
}

macro_rules! impl_fraction_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a> $imp<&'a ExactFraction> for &'a ExactFraction {
            type Output = ExactFraction;

            fn $method(self, rhs: &'a ExactFraction) -> ExactFraction {
                ExactFraction {
                    ratio: (&self.ratio).$method(&rhs.ratio),
                }
            }
        }

        impl $imp<ExactFraction> for ExactFraction {
            type Output = ExactFraction;

            fn $method(self, rhs: ExactFraction) -> ExactFraction {
                ExactFraction {
                    ratio: self.ratio.$method(rhs.ratio),
                }
            }
        }
    };
}

impl_fraction_binop!(impl Add, add);
impl_fraction_binop!(impl Sub, sub);
impl_fraction_binop!(impl Mul, mul);

impl Neg for ExactFraction {
    type Output = ExactFraction;

    fn neg(self) -> ExactFraction {
        ExactFraction { ratio: -self.ratio }
    }
}

impl<'a> Neg for &'a ExactFraction {
    type Output = ExactFraction;

    fn neg(self) -> ExactFraction {
        ExactFraction {
            ratio: -&self.ratio,
        }
    }
}

impl Arithmetic for ExactFraction {
    fn value_of(i: i32) -> Self {
        ExactFraction::from_integer(i)
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn subtract(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn multiply(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn divide(&self, rhs: &Self) -> Result<Self> {
        self.try_div(rhs)
    }

    fn compare(&self, rhs: &Self) -> Result<Ordering> {
        Ok(self.cmp(rhs))
    }
}
