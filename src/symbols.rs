//! Generators of well known irrational constants

use crate::error::Result;
use crate::terms::TermProducer;
use crate::traits::Term;

/// Terms of Euler's number `e = [2; 1, 2, 1, 1, 4, 1, 1, 6, ...]`
#[derive(Debug, Clone)]
pub struct ECoefficients<T> {
    i: T,
    m: u8,
}

impl<T: Term> ECoefficients<T> {
    pub fn new() -> Self {
        ECoefficients { i: T::zero(), m: 0 }
    }
}

impl<T: Term> Default for ECoefficients<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Term> Iterator for ECoefficients<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let two = T::one() + T::one();
        if self.i.is_zero() {
            self.i = two.clone();
            return Some(two); // a0 = 2
        }

        // repeating pattern 1, 2k, 1
        let result = if self.m == 1 { self.i.clone() } else { T::one() };
        if self.m == 2 {
            self.m = 0;
            self.i = two + self.i.clone();
        } else {
            self.m += 1;
        }
        Some(result)
    }
}

impl<T: Term> TermProducer<T> for ECoefficients<T> {
    #[inline]
    fn next_term(&mut self) -> Result<Option<T>> {
        Ok(self.next())
    }
}
