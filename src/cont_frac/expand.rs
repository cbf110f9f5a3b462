//! Producers that expand known values into continued fraction terms

use tracing::trace;

use crate::error::Result;
use crate::fraction::ExactFraction;
use crate::terms::TermProducer;
use crate::traits::Term;

/// Euclidean expansion of the rational number `num / den`.
///
/// Every step emits `p = ⌊num / den⌋` and continues with `den / (num - p·den)`,
/// so the expansion of any rational terminates. The first term carries the
/// sign and may be zero, all later terms are positive.
#[derive(Debug, Clone)]
pub struct FractionExpander<T> {
    num: T,
    den: T,
}

impl<T: Term> FractionExpander<T> {
    /// Expand `num / den`. A zero denominator gives an empty expansion.
    pub fn new(num: T, den: T) -> Self {
        if den.is_negative() {
            FractionExpander {
                num: negate(&num),
                den: negate(&den),
            }
        } else {
            FractionExpander { num, den }
        }
    }

    /// Expand an exact fraction. Fixed-width terms keep only the low bits of
    /// a numerator or denominator that doesn't fit.
    pub fn from_fraction(value: &ExactFraction) -> Self {
        Self::new(T::from_bigint(value.numer()), T::from_bigint(value.denom()))
    }
}

#[inline]
fn negate<T: Term>(v: &T) -> T {
    T::zero().sub_mul(v, &T::one())
}

impl<T: Term> TermProducer<T> for FractionExpander<T> {
    fn next_term(&mut self) -> Result<Option<T>> {
        if self.den.is_zero() {
            return Ok(None);
        }

        let p = self.num.floor_div(&self.den);
        let r = self.num.sub_mul(&p, &self.den);
        self.num = std::mem::replace(&mut self.den, r);
        trace!(term = %p, "expanded fraction term");
        Ok(Some(p))
    }
}

/// Terms of an eventually periodic continued fraction: the aperiodic part
/// followed by the periodic part repeated forever
#[derive(Debug, Clone)]
pub struct Periodic<T> {
    a_coeffs: Vec<T>,
    p_coeffs: Vec<T>,
    index: usize,
}

impl<T> Periodic<T> {
    pub fn new(a_coeffs: Vec<T>, p_coeffs: Vec<T>) -> Self {
        Periodic {
            a_coeffs,
            p_coeffs,
            index: 0,
        }
    }

    #[inline]
    pub fn aperiodic_coeffs(&self) -> &[T] {
        &self.a_coeffs[..]
    }

    #[inline]
    pub fn periodic_coeffs(&self) -> &[T] {
        &self.p_coeffs[..]
    }
}

impl<T: Clone + Send> TermProducer<T> for Periodic<T> {
    fn next_term(&mut self) -> Result<Option<T>> {
        let term = if self.index < self.a_coeffs.len() {
            self.a_coeffs.get(self.index)
        } else if self.p_coeffs.is_empty() {
            None
        } else {
            let offset = (self.index - self.a_coeffs.len()) % self.p_coeffs.len();
            self.p_coeffs.get(offset)
        };

        if term.is_some() {
            self.index += 1;
        }
        Ok(term.cloned())
    }
}
