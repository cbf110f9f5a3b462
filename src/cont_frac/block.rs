use std::fmt;
use std::mem::swap;

use num_integer::Integer;
use num_traits::{NumRef, One, RefNum, Zero};

use crate::traits::Term;

/// A block on the magic table for the convergents of a simple continued fraction
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone, Copy)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p;
        self.qm1 = q;
    }
}

impl<T: Zero + One> Block<T> {
    /// create a block that represents a identity operation
    pub fn identity() -> Self {
        Block {
            pm1: T::one(),
            pm2: T::zero(),
            qm1: T::zero(),
            qm2: T::one(),
        }
    }
}

impl<T: Integer + NumRef> Block<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// move with an coefficient from regular continued fraction
    pub fn rmove(&self, a: T) -> (T, T) {
        let p = &a * &self.pm1 + &self.pm2;
        let q = a * &self.qm1 + &self.qm2;
        (p, q)
    }
}

/// Bound of the output value at one corner of the input domain. A corner
/// whose denominator vanishes is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bound<T> {
    Finite(T),
    Infinite,
}

impl<T: Term> Bound<T> {
    /// `⌊num / den⌋`, or [Bound::Infinite] if `den` is zero
    pub fn ratio(num: &T, den: &T) -> Self {
        if den.is_zero() {
            Bound::Infinite
        } else {
            Bound::Finite(num.floor_div(den))
        }
    }

    /// Width between two bounds. Two infinite bounds are considered equal.
    pub fn distance(&self, other: &Self) -> Self {
        match (self, other) {
            (Bound::Infinite, Bound::Infinite) => Bound::Finite(T::zero()),
            (Bound::Finite(l), Bound::Finite(r)) => Bound::Finite(l.distance(r)),
            _ => Bound::Infinite,
        }
    }
}

/// A block on the magic table for bihomographic operation computation of continued fractions
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/bihom.html>
///
/// The block represents `(a + bx + cy + dxy) / (e + fx + gy + hxy)` where `x`
/// and `y` are the unread tails of the two inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualBlock<T> {
    a: T, // constant
    b: T, // x
    c: T, // y
    d: T, // xy
    e: T,
    f: T,
    g: T,
    h: T,
}

impl<T> DualBlock<T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: T, b: T, c: T, d: T, e: T, f: T, g: T, h: T) -> Self {
        DualBlock {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }
}

impl<T: Term> DualBlock<T> {
    /// Bounds at the four corners of the input domain, in the order
    /// `a/e, b/f, c/g, d/h`
    pub fn bounds(&self) -> [Bound<T>; 4] {
        [
            Bound::ratio(&self.a, &self.e),
            Bound::ratio(&self.b, &self.f),
            Bound::ratio(&self.c, &self.g),
            Bound::ratio(&self.d, &self.h),
        ]
    }

    /// Whether the denominator vanishes everywhere, i.e. every bound is infinite
    pub fn is_unbounded(&self) -> bool {
        self.e.is_zero() && self.f.is_zero() && self.g.is_zero() && self.h.is_zero()
    }

    /// Return the next output term if it is determined by the block.
    ///
    /// All four corners must agree on the integer part, and the denominator
    /// must keep one sign over the whole domain so that there is no pole
    /// between the corners.
    pub fn agreeing_term(&self) -> Option<T> {
        let positive = self.e.is_positive();
        let same_sign = |v: &T| if positive { v.is_positive() } else { v.is_negative() };
        if self.e.is_zero() || !same_sign(&self.f) || !same_sign(&self.g) || !same_sign(&self.h) {
            return None;
        }

        let r = self.a.floor_div(&self.e);
        if self.b.floor_div(&self.f) == r && self.c.floor_div(&self.g) == r && self.d.floor_div(&self.h) == r {
            Some(r)
        } else {
            None
        }
    }

    /// Whether the next term should be read from x rather than from y
    pub fn prefers_x(&self) -> bool {
        let [n0, n1, n2, _] = self.bounds();
        n1.distance(&n0) > n2.distance(&n0)
    }

    /// Output the term `r`, the block becomes `1 / (z - r)`
    pub fn egest(&mut self, r: &T) {
        // (e, f, g, h, a - er, b - fr, c - gr, d - hr)
        let a = self.a.sub_mul(&self.e, r);
        let b = self.b.sub_mul(&self.f, r);
        let c = self.c.sub_mul(&self.g, r);
        let d = self.d.sub_mul(&self.h, r);
        swap(&mut self.a, &mut self.e);
        swap(&mut self.b, &mut self.f);
        swap(&mut self.c, &mut self.g);
        swap(&mut self.d, &mut self.h);
        self.e = a;
        self.f = b;
        self.g = c;
        self.h = d;
    }

    /// Substitute `x = p + 1/x'`. `None` means that x is exhausted and the
    /// block is evaluated at `x = ∞`.
    pub fn ingest_x(&mut self, p: Option<&T>) {
        match p {
            Some(p) => {
                // (b, a + bp, d, c + dp, f, e + fp, h, g + hp)
                let b = self.a.add_mul(&self.b, p);
                let d = self.c.add_mul(&self.d, p);
                let f = self.e.add_mul(&self.f, p);
                let h = self.g.add_mul(&self.h, p);
                swap(&mut self.a, &mut self.b);
                swap(&mut self.c, &mut self.d);
                swap(&mut self.e, &mut self.f);
                swap(&mut self.g, &mut self.h);
                self.b = b;
                self.d = d;
                self.f = f;
                self.h = h;
            }
            None => {
                // (b, b, d, d, f, f, h, h)
                self.a = self.b.clone();
                self.c = self.d.clone();
                self.e = self.f.clone();
                self.g = self.h.clone();
            }
        }
    }

    /// Substitute `y = q + 1/y'`. `None` means that y is exhausted and the
    /// block is evaluated at `y = ∞`.
    pub fn ingest_y(&mut self, q: Option<&T>) {
        match q {
            Some(q) => {
                // (c, d, a + cq, b + dq, g, h, e + gq, f + hq)
                let c = self.a.add_mul(&self.c, q);
                let d = self.b.add_mul(&self.d, q);
                let g = self.e.add_mul(&self.g, q);
                let h = self.f.add_mul(&self.h, q);
                swap(&mut self.a, &mut self.c);
                swap(&mut self.b, &mut self.d);
                swap(&mut self.e, &mut self.g);
                swap(&mut self.f, &mut self.h);
                self.c = c;
                self.d = d;
                self.g = g;
                self.h = h;
            }
            None => {
                // (c, d, c, d, g, h, g, h)
                self.a = self.c.clone();
                self.b = self.d.clone();
                self.e = self.g.clone();
                self.f = self.h.clone();
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for DualBlock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} {} {} {} ]\n[ {} {} {} {} ]", self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(v: [i64; 8]) -> DualBlock<i64> {
        DualBlock::new(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7])
    }

    #[test]
    fn bound_test() {
        assert_eq!(Bound::ratio(&7i64, &2), Bound::Finite(3));
        assert_eq!(Bound::ratio(&-7i64, &2), Bound::Finite(-4));
        assert_eq!(Bound::ratio(&7i64, &0), Bound::Infinite);

        let inf = Bound::<i64>::Infinite;
        assert_eq!(inf.distance(&Bound::Infinite), Bound::Finite(0));
        assert_eq!(inf.distance(&Bound::Finite(3)), Bound::Infinite);
        assert_eq!(Bound::Finite(-2i64).distance(&Bound::Finite(3)), Bound::Finite(5));
        assert!(Bound::Finite(i64::MAX) < Bound::Infinite);
    }

    #[test]
    fn convergent_block_test() {
        // 13/11 = [1; 5, 2]
        let mut block = Block::<i64>::identity();
        let mut convergents = Vec::new();
        for a in [1, 5, 2].iter() {
            let (p, q) = block.rmove(*a);
            block.update(p, q);
            convergents.push((p, q));
        }
        assert_eq!(convergents, vec![(1, 1), (6, 5), (13, 11)]);
    }

    #[test]
    fn ingest_egest_test() {
        // [1; 5, 2] + [0; 2] = [1; 1, 2, 7]
        let mut m = block([0, 1, 1, 0, 1, 0, 0, 0]);
        assert!(m.agreeing_term().is_none());
        assert!(!m.prefers_x());

        m.ingest_y(Some(&0));
        assert_eq!(m, block([1, 0, 0, 1, 0, 0, 1, 0]));
        assert!(!m.prefers_x());
        m.ingest_y(Some(&2));
        assert_eq!(m, block([0, 1, 1, 2, 1, 0, 2, 0]));
        assert!(m.prefers_x());
        m.ingest_x(Some(&1));
        assert_eq!(m, block([1, 1, 2, 3, 0, 1, 0, 2]));
        assert!(m.prefers_x());
        m.ingest_x(Some(&5));
        assert_eq!(m, block([1, 6, 3, 17, 1, 5, 2, 10]));

        assert_eq!(m.agreeing_term(), Some(1));
        m.egest(&1);
        assert_eq!(m, block([1, 5, 2, 10, 0, 1, 1, 7]));
        assert_eq!(m.agreeing_term(), None);

        m.ingest_y(None);
        assert_eq!(m, block([2, 10, 2, 10, 1, 7, 1, 7]));
        m.ingest_x(Some(&2));
        assert_eq!(format!("{}", m), "[ 10 22 10 22 ]\n[ 7 15 7 15 ]");

        let mut terms = Vec::new();
        while let Some(r) = m.agreeing_term() {
            m.egest(&r);
            terms.push(r);
        }
        assert_eq!(terms, vec![1, 2]);
        m.ingest_x(None);
        assert_eq!(m.agreeing_term(), Some(7));
        m.egest(&7);
        assert!(m.is_unbounded());
    }

    #[test]
    fn pole_test() {
        // the corners agree but the denominator changes its sign in between
        let m = block([1, 1, 1, 1, 1, -1, 1, -1]);
        assert_eq!(m.bounds(), [Bound::Finite(1), Bound::Finite(-1), Bound::Finite(1), Bound::Finite(-1)]);
        assert_eq!(m.agreeing_term(), None);

        let m = block([-3, -3, -3, -3, -2, -2, -2, -2]);
        assert_eq!(m.agreeing_term(), Some(1));

        let mut m = block([0, 1, 0, 0, 0, 0, 1, 0]);
        m.ingest_x(None);
        m.ingest_y(None);
        assert!(m.is_unbounded());
    }
}
