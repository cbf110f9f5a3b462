//! Exact real arithmetic on lazily expanded continued fractions
//!
//! ```
//! use num_cfrac::{BigContinuedFraction, ExactFraction};
//!
//! let x = BigContinuedFraction::from_ratio(13, 11).unwrap();
//! let y = BigContinuedFraction::from_ratio(1, 2).unwrap();
//! let sum = &x + &y;
//! assert_eq!(format!("{}", sum), "[1; 1, 2, 7]");
//! assert_eq!(sum.to_fraction(), ExactFraction::new(37, 22));
//! ```

pub mod cont_frac;
mod error;
pub mod fraction;
pub mod symbols;
pub mod terms;
pub mod traits;

pub use cont_frac::{BigContinuedFraction, ContinuedFractionNumber, LongContinuedFraction, Operator};
pub use error::{Error, Result};
pub use fraction::ExactFraction;
pub use terms::{Cursor, LazyTermSequence, TermProducer};
pub use traits::{Approximation, Arithmetic, Term};
