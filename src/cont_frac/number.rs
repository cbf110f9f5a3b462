//! Real numbers represented by lazily expanded simple continued fractions

use core::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;

use super::block::{Block, DualBlock};
use super::expand::{FractionExpander, Periodic};
use super::gosper::{GosperConfig, GosperTransducer, Operator};
use crate::error::{Error, Result};
use crate::fraction::ExactFraction;
use crate::symbols::ECoefficients;
use crate::terms::{Cursor, LazyTermSequence, TermProducer};
use crate::traits::{Approximation, Arithmetic, Term};

/// Number of terms read by [ContinuedFractionNumber::to_f64]
const F64_TERMS: usize = 64;

/// A real number `a0 + 1/(a1 + 1/(a2 + ...))` whose terms are produced on
/// demand. The first term carries the sign, every later term is positive.
///
/// The number is immutable. Cloning is cheap and shares the term cache, and
/// arithmetic returns a new number whose terms are computed only when read.
pub struct ContinuedFractionNumber<T> {
    terms: LazyTermSequence<T>,
}

/// Continued fractions with arbitrary precision terms
pub type BigContinuedFraction = ContinuedFractionNumber<BigInt>;

/// Continued fractions with 64-bit terms. Intermediate values wrap around
/// silently when they overflow, so large operands give wrong results.
pub type LongContinuedFraction = ContinuedFractionNumber<i64>;

impl<T> Clone for ContinuedFractionNumber<T> {
    fn clone(&self) -> Self {
        ContinuedFractionNumber {
            terms: self.terms.clone(),
        }
    }
}

impl<T: Term> ContinuedFractionNumber<T> {
    pub fn from_sequence(terms: LazyTermSequence<T>) -> Self {
        ContinuedFractionNumber { terms }
    }

    pub fn from_producer<P: TermProducer<T> + 'static>(producer: P) -> Self {
        Self::from_sequence(LazyTermSequence::new(producer))
    }

    pub fn from_fraction(value: &ExactFraction) -> Self {
        Self::from_producer(FractionExpander::from_fraction(value))
    }

    /// Create the number `num / den`, fails if `den` is zero
    pub fn from_ratio<N: Into<BigInt>, D: Into<BigInt>>(num: N, den: D) -> Result<Self> {
        Ok(Self::from_fraction(&ExactFraction::new(num, den)?))
    }

    pub fn from_integer(value: T) -> Self {
        Self::from_sequence(LazyTermSequence::from_iterator(std::iter::once(value)))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_integer(T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_integer(T::one())
    }

    /// Create a finite continued fraction from its terms
    pub fn from_terms(terms: Vec<T>) -> Result<Self> {
        if terms.is_empty() {
            return Err(Error::EmptyExpansion);
        }
        check_canonical(&terms, 0)?;
        Ok(Self::from_producer(Periodic::new(terms, Vec::new())))
    }

    /// Create an eventually periodic continued fraction, where the periodic
    /// terms repeat forever after the aperiodic ones
    pub fn from_periodic(a_coeffs: Vec<T>, p_coeffs: Vec<T>) -> Result<Self> {
        if a_coeffs.is_empty() && p_coeffs.is_empty() {
            return Err(Error::EmptyExpansion);
        }
        check_canonical(&a_coeffs, 0)?;
        check_canonical(&p_coeffs, a_coeffs.len())?;
        Ok(Self::from_producer(Periodic::new(a_coeffs, p_coeffs)))
    }

    /// Euler's number `e = [2; 1, 2, 1, 1, 4, 1, 1, 6, ...]`
    pub fn e() -> Self {
        Self::from_producer(ECoefficients::new())
    }

    /// The underlying term sequence
    #[inline]
    pub fn terms(&self) -> &LazyTermSequence<T> {
        &self.terms
    }

    /// An independent reader of the terms
    #[inline]
    pub fn cursor(&self) -> Cursor<T> {
        self.terms.cursor()
    }

    /// The term at `index`, `None` if the expansion is shorter
    #[inline]
    pub fn term(&self, index: usize) -> Result<Option<T>> {
        self.terms.get(index)
    }

    /// Lazily compute `self op rhs`
    pub fn apply(&self, rhs: &Self, op: Operator) -> Self {
        self.apply_with(rhs, op, GosperConfig::default())
    }

    pub fn apply_with(&self, rhs: &Self, op: Operator, config: GosperConfig) -> Self {
        self.bihomo(rhs, op.block(), config)
    }

    /// Lazily compute `(a + bx + cy + dxy) / (e + fx + gy + hxy)` where x is
    /// self and y is rhs
    pub fn bihomo(&self, rhs: &Self, block: DualBlock<T>, config: GosperConfig) -> Self {
        Self::from_producer(GosperTransducer::new(block, self.cursor(), rhs.cursor(), config))
    }

    /// Lazily compute `(ax + b) / (cx + d)` where x is self
    pub fn homo(&self, a: T, b: T, c: T, d: T, config: GosperConfig) -> Self {
        Self::from_producer(GosperTransducer::homographic(self.cursor(), a, b, c, d, config))
    }

    /// Divide by another number. Fails immediately if the divisor is exactly
    /// zero, reading at most two of its terms.
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero()? {
            return Err(Error::DivisionByZero);
        }
        Ok(self.apply(rhs, Operator::Divide))
    }

    /// Whether the number is exactly zero, i.e. the expansion is `[0]`
    pub fn is_zero(&self) -> Result<bool> {
        match self.term(0)? {
            Some(t) if t.is_zero() => Ok(self.term(1)?.is_none()),
            _ => Ok(false),
        }
    }

    fn sign(&self) -> Result<Ordering> {
        match self.term(0)? {
            Some(t) if t.is_negative() => Ok(Ordering::Less),
            Some(t) if t.is_positive() => Ok(Ordering::Greater),
            // [0; a1, ...] lies in (0, 1)
            Some(_) => match self.term(1)? {
                Some(_) => Ok(Ordering::Greater),
                None => Ok(Ordering::Equal),
            },
            None => Ok(Ordering::Equal),
        }
    }

    /// `-1`, `0` or `1` depending on the sign of the number
    pub fn signum(&self) -> Result<T> {
        Ok(match self.sign()? {
            Ordering::Less => -T::one(),
            Ordering::Equal => T::zero(),
            Ordering::Greater => T::one(),
        })
    }

    /// Compare the terms of two expansions from the first one on.
    ///
    /// The first differing term decides. If one expansion is a prefix of the
    /// other, the shorter one is less. Note that this is a structural order
    /// that doesn't follow the numeric order on the odd positions, use
    /// [value_cmp][Self::value_cmp] for the latter. Comparing two different
    /// sequences with the same infinite expansion never returns.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        if self.terms.ptr_eq(&other.terms) {
            return Ok(Ordering::Equal);
        }

        let (mut lhs, mut rhs) = (self.cursor(), other.cursor());
        loop {
            match (lhs.advance()?, rhs.advance()?) {
                (None, None) => return Ok(Ordering::Equal),
                (None, Some(_)) => return Ok(Ordering::Less),
                (Some(_), None) => return Ok(Ordering::Greater),
                (Some(l), Some(r)) => match l.cmp(&r) {
                    Ordering::Equal => continue,
                    o => return Ok(o),
                },
            }
        }
    }

    /// Numeric comparison through the sign of `self - other`. Two equal
    /// irrational numbers fail with
    /// [NonTerminatingExpansion][Error::NonTerminatingExpansion].
    pub fn value_cmp(&self, other: &Self) -> Result<Ordering> {
        if self.terms.ptr_eq(&other.terms) {
            return Ok(Ordering::Equal);
        }
        (self - other).sign()
    }

    /// Evaluate a finite expansion to the exact fraction it represents.
    /// Doesn't return on an infinite expansion.
    pub fn to_fraction(&self) -> Result<ExactFraction> {
        let terms = self.cursor().collect::<Result<Vec<T>>>()?;
        let mut rev = terms.iter().rev();
        let mut value = match rev.next() {
            Some(t) => ExactFraction::from_integer(t.to_bigint()),
            None => return Err(Error::EmptyExpansion),
        };
        for t in rev {
            value = ExactFraction::from_integer(t.to_bigint()) + value.try_recip()?;
        }
        Ok(value)
    }

    /// Iterator over the convergents `p_k / q_k` of the expansion
    pub fn convergents(&self) -> Convergents<T> {
        Convergents {
            cursor: self.cursor(),
            block: Block::identity(),
        }
    }

    /// Evaluate the expansion using at most `max_terms` terms. The result is
    /// exact if the expansion is not longer.
    pub fn to_fraction_bounded(&self, max_terms: usize) -> Result<Approximation<ExactFraction>> {
        let mut convergents = self.convergents();
        let mut last = match convergents.next().transpose()? {
            Some(c) => c,
            None => return Err(Error::EmptyExpansion),
        };
        for _ in 1..max_terms {
            match convergents.next().transpose()? {
                Some(c) => last = c,
                None => return Ok(Approximation::Exact(last)),
            }
        }

        let position = convergents.cursor.position();
        if self.term(position)?.is_none() {
            Ok(Approximation::Exact(last))
        } else {
            Ok(Approximation::Approximated(last))
        }
    }

    /// Lossy conversion to a double, based on the first 64 terms
    pub fn to_f64(&self) -> Result<f64> {
        Ok(self.to_fraction_bounded(F64_TERMS)?.value().to_f64())
    }
}

fn check_canonical<T: Term>(terms: &[T], offset: usize) -> Result<()> {
    for (i, t) in terms.iter().enumerate() {
        let index = offset + i;
        if index > 0 && !t.is_positive() {
            return Err(Error::NonCanonicalTerm { index });
        }
    }
    Ok(())
}

/// Iterator of [ContinuedFractionNumber::convergents()] result
pub struct Convergents<T> {
    cursor: Cursor<T>,
    block: Block<BigInt>,
}

impl<T: Term> Iterator for Convergents<T> {
    type Item = Result<ExactFraction>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = match self.cursor.advance() {
            Ok(Some(a)) => a,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };
        let (p, q) = self.block.rmove(a.to_bigint());
        self.block.update(p.clone(), q.clone());
        Some(ExactFraction::new(p, q))
    }
}

impl<T: Term> From<&ExactFraction> for ContinuedFractionNumber<T> {
    fn from(value: &ExactFraction) -> Self {
        Self::from_fraction(value)
    }
}

impl<T: Term> fmt::Debug for ContinuedFractionNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuedFractionNumber")
            .field("terms", &self.terms)
            .finish()
    }
}

impl<T: Term> fmt::Display for ContinuedFractionNumber<T> {
    /// Formats as `[a0; a1, a2]`. With a precision, at most that many terms
    /// are shown and a longer expansion ends with `, ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = f.precision();
        let mut cursor = self.cursor();

        write!(f, "[")?;
        loop {
            let index = cursor.position();
            if limit.map_or(false, |n| index >= n) {
                if !matches!(cursor.peek(), Ok(None)) {
                    write!(f, "{}...", if index == 0 { "" } else { ", " })?;
                }
                break;
            }

            let sep = match index {
                0 => "",
                1 => "; ",
                _ => ", ",
            };
            match cursor.advance() {
                Ok(Some(t)) => write!(f, "{}{}", sep, t)?,
                Ok(None) => break,
                Err(e) => {
                    write!(f, "{}<{}>", sep, e)?;
                    break;
                }
            }
        }
        write!(f, "]")
    }
}

impl<T: Term> PartialEq for ContinuedFractionNumber<T> {
    /// Term by term equality, false if reading the terms fails
    fn eq(&self, other: &Self) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Equal))
    }
}

impl<T: Term> PartialOrd for ContinuedFractionNumber<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

macro_rules! impl_binop_for_cfrac {
    (impl $imp:ident, $method:ident, $op:expr) => {
        impl<'a, 'b, T: Term> $imp<&'b ContinuedFractionNumber<T>> for &'a ContinuedFractionNumber<T> {
            type Output = ContinuedFractionNumber<T>;

            #[inline]
            fn $method(self, rhs: &'b ContinuedFractionNumber<T>) -> ContinuedFractionNumber<T> {
                self.apply(rhs, $op)
            }
        }

        impl<'a, T: Term> $imp<&'a ContinuedFractionNumber<T>> for ContinuedFractionNumber<T> {
            type Output = ContinuedFractionNumber<T>;

            #[inline]
            fn $method(self, rhs: &'a ContinuedFractionNumber<T>) -> ContinuedFractionNumber<T> {
                self.apply(rhs, $op)
            }
        }

        impl<'a, T: Term> $imp<ContinuedFractionNumber<T>> for &'a ContinuedFractionNumber<T> {
            type Output = ContinuedFractionNumber<T>;

            #[inline]
            fn $method(self, rhs: ContinuedFractionNumber<T>) -> ContinuedFractionNumber<T> {
                self.apply(&rhs, $op)
            }
        }

        impl<T: Term> $imp<ContinuedFractionNumber<T>> for ContinuedFractionNumber<T> {
            type Output = ContinuedFractionNumber<T>;

            #[inline]
            fn $method(self, rhs: ContinuedFractionNumber<T>) -> ContinuedFractionNumber<T> {
                self.apply(&rhs, $op)
            }
        }
    };
}

impl_binop_for_cfrac!(impl Add, add, Operator::Add);
impl_binop_for_cfrac!(impl Sub, sub, Operator::Subtract);
impl_binop_for_cfrac!(impl Mul, mul, Operator::Multiply);

impl<'a, T: Term> Neg for &'a ContinuedFractionNumber<T> {
    type Output = ContinuedFractionNumber<T>;

    fn neg(self) -> ContinuedFractionNumber<T> {
        self.homo(-T::one(), T::zero(), T::zero(), T::one(), GosperConfig::default())
    }
}

impl<T: Term> Neg for ContinuedFractionNumber<T> {
    type Output = ContinuedFractionNumber<T>;

    #[inline]
    fn neg(self) -> ContinuedFractionNumber<T> {
        -&self
    }
}

impl<T: Term> Arithmetic for ContinuedFractionNumber<T> {
    fn value_of(i: i32) -> Self {
        Self::from_integer(T::from_bigint(&BigInt::from(i)))
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
        self.try_cmp(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn big(n: i64, d: i64) -> BigContinuedFraction {
        BigContinuedFraction::from_ratio(n, d).unwrap()
    }

    fn long(n: i64, d: i64) -> LongContinuedFraction {
        LongContinuedFraction::from_ratio(n, d).unwrap()
    }

    fn frac(n: i64, d: i64) -> ExactFraction {
        ExactFraction::new(n, d).unwrap()
    }

    fn terms(x: &LongContinuedFraction) -> Vec<i64> {
        x.cursor().collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn creation_test() {
        assert_eq!(terms(&long(13, 11)), vec![1, 5, 2]);
        assert_eq!(terms(&long(1, 2)), vec![0, 2]);
        assert_eq!(terms(&LongContinuedFraction::zero()), vec![0]);
        assert_eq!(terms(&LongContinuedFraction::from_integer(-4)), vec![-4]);
        assert_eq!(LongContinuedFraction::from_ratio(1, 0).unwrap_err(), Error::DivisionByZero);
        assert_eq!(BigContinuedFraction::from(&frac(-7, 3)).term(0), Ok(Some(BigInt::from(-3))));

        assert_eq!(terms(&LongContinuedFraction::from_terms(vec![-1, 3, 7]).unwrap()), vec![-1, 3, 7]);
        assert_eq!(
            LongContinuedFraction::from_terms(Vec::new()).unwrap_err(),
            Error::EmptyExpansion
        );
        assert_eq!(
            LongContinuedFraction::from_terms(vec![1, 2, 0]).unwrap_err(),
            Error::NonCanonicalTerm { index: 2 }
        );
        assert_eq!(
            LongContinuedFraction::from_periodic(vec![1], vec![2, -2]).unwrap_err(),
            Error::NonCanonicalTerm { index: 2 }
        );
        assert_eq!(
            LongContinuedFraction::from_periodic(Vec::new(), Vec::new()).unwrap_err(),
            Error::EmptyExpansion
        );
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", long(13, 11)), "[1; 5, 2]");
        assert_eq!(format!("{}", long(5, 1)), "[5]");
        assert_eq!(format!("{}", long(-7, 3)), "[-3; 1, 2]");

        let sqrt2 = LongContinuedFraction::from_periodic(vec![1], vec![2]).unwrap();
        assert_eq!(format!("{:.4}", sqrt2), "[1; 2, 2, 2, ...]");
        assert_eq!(format!("{:.3}", long(13, 11)), "[1; 5, 2]");
        assert_eq!(format!("{:.2}", long(13, 11)), "[1; 5, ...]");
        assert_eq!(format!("{:.0}", sqrt2), "[...]");

        let failing = LongContinuedFraction::one().apply(&LongContinuedFraction::zero(), Operator::Divide);
        assert_eq!(format!("{}", failing), "[<division by zero>]");
    }

    #[test]
    fn arithmetic_test() {
        assert_eq!(terms(&(long(13, 11) + long(1, 2))), vec![1, 1, 2, 7]);
        assert_eq!((big(13, 11) + big(1, 2)).to_fraction(), Ok(frac(37, 22)));
        assert_eq!((&big(1, 3) - &big(1, 2)).to_fraction(), Ok(frac(-1, 6)));
        assert_eq!((big(2, 3) * &big(9, 4)).to_fraction(), Ok(frac(3, 2)));
        assert_eq!((&big(2, 3) * big(-9, 4)).to_fraction(), Ok(frac(-3, 2)));
        assert_eq!(big(2, 3).try_div(&big(4, 9)).unwrap().to_fraction(), Ok(frac(3, 2)));
        assert_eq!((-big(2, 3)).to_fraction(), Ok(frac(-2, 3)));
        assert_eq!((-&long(13, 11)).to_fraction(), Ok(frac(-13, 11)));

        let config = GosperConfig::default().with_ingestion_limit(16);
        let sum = long(1, 3).apply_with(&long(1, 6), Operator::Add, config);
        assert_eq!(terms(&sum), vec![0, 2]);

        // 2x + 1
        let y = long(1, 4).homo(2, 1, 0, 1, GosperConfig::default());
        assert_eq!(y.to_fraction(), Ok(frac(3, 2)));

        // (3x + 7) / (x + 2) at x = -3/2 is 5, the first input term is negative
        let y = long(-3, 2).homo(3, 7, 1, 2, GosperConfig::default());
        assert_eq!(terms(&y), vec![5]);
        assert!(y == long(5, 1));
        let block = DualBlock::new(7, 3, 7, 3, 2, 1, 2, 1);
        let z = long(-3, 2).bihomo(&long(1, 2), block, GosperConfig::default());
        assert_eq!(terms(&z), vec![5]);
        assert_eq!(z.to_fraction(), Ok(frac(5, 1)));
        assert_eq!(terms(&-long(-3, 2)), vec![1, 2]);
    }

    #[test]
    fn division_test() {
        let one = BigContinuedFraction::one();
        let zero = BigContinuedFraction::zero();
        assert_eq!(one.try_div(&zero).unwrap_err(), Error::DivisionByZero);
        assert_eq!(one.try_div(&big(0, 5)).unwrap_err(), Error::DivisionByZero);
        assert_eq!(Arithmetic::divide(&one, &zero).unwrap_err(), Error::DivisionByZero);

        // the lazy operator reports the failure when the terms are read
        let lazy = one.apply(&zero, Operator::Divide);
        assert_eq!(lazy.term(0), Err(Error::DivisionByZero));
        assert_eq!(lazy.to_fraction(), Err(Error::DivisionByZero));
    }

    #[test]
    fn sign_test() {
        assert_eq!(long(0, 1).is_zero(), Ok(true));
        assert_eq!(long(1, 2).is_zero(), Ok(false));
        assert_eq!(long(-1, 2).is_zero(), Ok(false));

        assert_eq!(long(1, 2).signum(), Ok(1));
        assert_eq!(long(-1, 2).signum(), Ok(-1));
        assert_eq!(long(0, 2).signum(), Ok(0));
        assert_eq!(big(5, 2).signum(), Ok(BigInt::one()));
    }

    #[test]
    fn cmp_test() {
        // structural order on the terms
        assert_eq!(long(13, 11).try_cmp(&long(13, 11)), Ok(Ordering::Equal));
        assert_eq!(long(1, 2).try_cmp(&long(2, 1)), Ok(Ordering::Less));
        assert_eq!(
            LongContinuedFraction::from_terms(vec![1, 5]).unwrap().try_cmp(&long(13, 11)),
            Ok(Ordering::Less)
        );
        assert_eq!(long(13, 11).try_cmp(&LongContinuedFraction::one()), Ok(Ordering::Greater));
        assert!(long(13, 11) == long(26, 22));
        assert!(long(1, 3) < long(1, 2).homo(1, 1, 0, 1, GosperConfig::default()));
        assert_eq!(Arithmetic::compare(&long(-2, 1), &long(3, 1)), Ok(Ordering::Less));

        // numeric order, [0; 3] < [0; 2] although 3 > 2
        assert_eq!(long(1, 3).try_cmp(&long(1, 2)), Ok(Ordering::Greater));
        assert_eq!(long(1, 3).value_cmp(&long(1, 2)), Ok(Ordering::Less));
        assert_eq!(long(-1, 2).value_cmp(&long(-1, 3)), Ok(Ordering::Less));
        assert_eq!(big(4, 6).value_cmp(&big(2, 3)), Ok(Ordering::Equal));

        let sqrt2 = BigContinuedFraction::from_periodic(vec![BigInt::from(1)], vec![BigInt::from(2)]).unwrap();
        assert_eq!(sqrt2.value_cmp(&big(141, 100)), Ok(Ordering::Greater));
        assert_eq!(sqrt2.value_cmp(&big(142, 100)), Ok(Ordering::Less));
        assert_eq!(sqrt2.value_cmp(&sqrt2.clone()), Ok(Ordering::Equal));
    }

    #[test]
    fn convergents_test() {
        let convergents = long(13, 11).convergents().collect::<Result<Vec<_>>>();
        assert_eq!(convergents, Ok(vec![frac(1, 1), frac(6, 5), frac(13, 11)]));

        let sqrt2 = LongContinuedFraction::from_periodic(vec![1], vec![2]).unwrap();
        assert_eq!(
            sqrt2.to_fraction_bounded(4),
            Ok(Approximation::Approximated(frac(17, 12)))
        );
        assert_eq!(long(13, 11).to_fraction_bounded(3), Ok(Approximation::Exact(frac(13, 11))));
        assert_eq!(long(13, 11).to_fraction_bounded(10), Ok(Approximation::Exact(frac(13, 11))));

        let v = sqrt2.to_f64().unwrap();
        assert!((v - std::f64::consts::SQRT_2).abs() < 1e-15);
        assert_eq!(long(-7, 4).to_f64(), Ok(-1.75));
    }

    #[test]
    fn arithmetic_trait_test() {
        fn sum_of_squares<N: Arithmetic>(n: i32) -> N {
            let mut acc = N::value_of(0);
            for i in 1..=n {
                let v = N::value_of(i);
                acc = acc.add(&v.multiply(&v));
            }
            acc
        }

        let big: BigContinuedFraction = sum_of_squares(5);
        assert_eq!(big.to_fraction(), Ok(frac(55, 1)));
        let fraction: ExactFraction = sum_of_squares(5);
        assert_eq!(fraction, frac(55, 1));
    }
}
