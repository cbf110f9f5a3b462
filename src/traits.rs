use core::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive};

use crate::error::Result;

/// The numeric contract consumed by downstream code (for example a generic
/// complex number or a fractal evaluator). All backends of this crate
/// implement it, so consumers can be written once and monomorphized.
pub trait Arithmetic: Sized {
    fn value_of(i: i32) -> Self;

    fn add(&self, rhs: &Self) -> Self;
    fn subtract(&self, rhs: &Self) -> Self;
    fn multiply(&self, rhs: &Self) -> Self;

    /// Fails with [DivisionByZero][crate::Error::DivisionByZero] if `rhs` is zero
    fn divide(&self, rhs: &Self) -> Result<Self>;

    fn compare(&self, rhs: &Self) -> Result<Ordering>;
}

#[derive(PartialEq, Debug, Clone)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the value of the approximation, no matter whether it is exact
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

/// An integer type that can be used as the term of a continued fraction.
///
/// The arbitrary precision implementation on [BigInt] is exact. The
/// implementations on fixed-width primitives wrap around on overflow instead
/// of panicking: they trade correctness on large magnitudes for speed.
pub trait Term:
    Integer + Signed + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Convert from an arbitrary precision integer, keeping the low bits if
    /// the value doesn't fit
    fn from_bigint(value: &BigInt) -> Self;

    fn to_bigint(&self) -> BigInt;

    /// `self + x * y`
    fn add_mul(&self, x: &Self, y: &Self) -> Self;

    /// `self - x * y`
    fn sub_mul(&self, x: &Self, y: &Self) -> Self;

    /// Floor division, `rhs` must be non-zero
    fn floor_div(&self, rhs: &Self) -> Self;

    /// `|self - rhs|`
    fn distance(&self, rhs: &Self) -> Self;
}

impl Term for BigInt {
    #[inline]
    fn from_bigint(value: &BigInt) -> Self {
        value.clone()
    }

    #[inline]
    fn to_bigint(&self) -> BigInt {
        self.clone()
    }

    fn add_mul(&self, x: &Self, y: &Self) -> Self {
        self + x * y
    }

    fn sub_mul(&self, x: &Self, y: &Self) -> Self {
        self - x * y
    }

    fn floor_div(&self, rhs: &Self) -> Self {
        Integer::div_floor(self, rhs)
    }

    fn distance(&self, rhs: &Self) -> Self {
        (self - rhs).abs()
    }
}

macro_rules! impl_fixed_width_term {
    ($($T:ty),*) => {$(
        impl Term for $T {
            fn from_bigint(value: &BigInt) -> Self {
                // the residue is below 2^BITS, so it always fits in u128
                let modulus = BigInt::one() << <$T>::BITS;
                value.mod_floor(&modulus).to_u128().map_or(0, |v| v as $T)
            }

            #[inline]
            fn to_bigint(&self) -> BigInt {
                BigInt::from(*self)
            }

            #[inline]
            fn add_mul(&self, x: &Self, y: &Self) -> Self {
                self.wrapping_add(x.wrapping_mul(*y))
            }

            #[inline]
            fn sub_mul(&self, x: &Self, y: &Self) -> Self {
                self.wrapping_sub(x.wrapping_mul(*y))
            }

            #[inline]
            fn floor_div(&self, rhs: &Self) -> Self {
                if *rhs == -1 {
                    self.wrapping_neg() // MIN / -1
                } else {
                    Integer::div_floor(self, rhs)
                }
            }

            #[inline]
            fn distance(&self, rhs: &Self) -> Self {
                self.wrapping_sub(*rhs).wrapping_abs()
            }
        }
    )*};
}
impl_fixed_width_term!(i32, i64, i128);
