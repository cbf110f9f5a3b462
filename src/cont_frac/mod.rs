//! Lazy arithmetic on simple continued fractions
//!
//! A number is a possibly infinite sequence of terms produced on demand.
//! 1. [FractionExpander][expand::FractionExpander] expands a rational number, [Periodic][expand::Periodic] an eventually periodic expansion
//! 2. [GosperTransducer][gosper::GosperTransducer] combines two expansions with a bihomographic function, one term at a time
//! 3. [ContinuedFractionNumber] wraps a memoized term sequence and provides the operators
//!
//! # References:
//! - <https://perl.plover.com/yak/cftalk/INFO/gosper.txt>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/bihom.html>
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>

mod block;
pub mod expand;
pub mod gosper;
mod number;

pub use block::{Bound, DualBlock};
pub use expand::{FractionExpander, Periodic};
pub use gosper::{GosperConfig, GosperTransducer, Operator};
pub use number::*;
