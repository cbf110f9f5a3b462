//! Lazy arithmetic on two continued fractions with Gosper's algorithm
//!
//! The transducer holds a [DualBlock] representing the output as a
//! bihomographic function of the unread tails of both inputs. Input terms are
//! ingested until the four corner bounds of the block agree on an integer,
//! which is then egested as the next output term.

use std::collections::VecDeque;

use tracing::{error, trace};

use super::block::DualBlock;
use crate::error::{Error, Result};
use crate::terms::{Cursor, LazyTermSequence, TermProducer};
use crate::traits::Term;

/// Number of input terms kept per side for diagnostics
const RECENT_TERMS: usize = 8;

/// The four arithmetic operators, each selecting an initial block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The block computing `x op y`
    pub fn block<T: Term>(self) -> DualBlock<T> {
        let (o, l) = (T::zero, T::one);
        match self {
            Operator::Add => DualBlock::new(o(), l(), l(), o(), l(), o(), o(), o()),
            Operator::Subtract => DualBlock::new(o(), l(), -l(), o(), l(), o(), o(), o()),
            Operator::Multiply => DualBlock::new(o(), o(), o(), l(), l(), o(), o(), o()),
            Operator::Divide => DualBlock::new(o(), l(), o(), o(), o(), o(), l(), o()),
        }
    }
}

/// Runtime options of the transducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GosperConfig {
    /// Maximum number of consecutive ingestions without an output term
    pub ingestion_limit: usize,
}

impl GosperConfig {
    pub const DEFAULT_INGESTION_LIMIT: usize = 4096;

    pub fn with_ingestion_limit(mut self, ingestion_limit: usize) -> Self {
        self.ingestion_limit = ingestion_limit;
        self
    }
}

impl Default for GosperConfig {
    fn default() -> Self {
        GosperConfig {
            ingestion_limit: Self::DEFAULT_INGESTION_LIMIT,
        }
    }
}

/// Producer of the terms of `(a + bx + cy + dxy) / (e + fx + gy + hxy)`
pub struct GosperTransducer<T> {
    block: DualBlock<T>,
    x: Cursor<T>,
    y: Cursor<T>,
    x_started: bool,
    y_started: bool,
    x_done: bool,
    y_done: bool,
    emitted: usize,
    ingestions: usize, // since the last output term
    recent_x: VecDeque<T>,
    recent_y: VecDeque<T>,
    config: GosperConfig,
}

impl<T: Term> GosperTransducer<T> {
    /// Bihomographic function of two inputs
    pub fn new(block: DualBlock<T>, x: Cursor<T>, y: Cursor<T>, config: GosperConfig) -> Self {
        GosperTransducer {
            block,
            x,
            y,
            x_started: false,
            y_started: false,
            x_done: false,
            y_done: false,
            emitted: 0,
            ingestions: 0,
            recent_x: VecDeque::with_capacity(RECENT_TERMS),
            recent_y: VecDeque::with_capacity(RECENT_TERMS),
            config,
        }
    }

    /// `x op y`
    pub fn from_operator(op: Operator, x: Cursor<T>, y: Cursor<T>, config: GosperConfig) -> Self {
        Self::new(op.block(), x, y, config)
    }

    /// Homographic function `(ax + b) / (cx + d)` of a single input. The
    /// second input is an empty sequence already evaluated at infinity.
    pub fn homographic(x: Cursor<T>, a: T, b: T, c: T, d: T, config: GosperConfig) -> Self {
        let block = DualBlock::new(b.clone(), a.clone(), b, a, d.clone(), c.clone(), d, c);
        let mut transducer = Self::new(block, x, LazyTermSequence::empty().cursor(), config);
        transducer.y_started = true;
        transducer.y_done = true;
        transducer
    }

    /// Number of output terms produced so far
    #[inline]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn remember(recent: &mut VecDeque<T>, term: &T) {
        if recent.len() == RECENT_TERMS {
            recent.pop_front();
        }
        recent.push_back(term.clone());
    }

    /// The corner bounds are only valid once the tail of every input lies in
    /// `[1, ∞]`, i.e. after its first term was read or it turned out empty
    fn bounds_valid(&self) -> bool {
        (self.x_started || self.x_done) && (self.y_started || self.y_done)
    }

    fn ingest(&mut self) -> Result<()> {
        let from_x = match (self.x_done, self.y_done) {
            (false, true) => true,
            (true, false) => false,
            _ if !self.x_started && self.y_started => true,
            _ if self.x_started && !self.y_started => false,
            _ => self.block.prefers_x(),
        };

        if from_x {
            let term = self.x.advance()?;
            match &term {
                Some(p) => {
                    trace!(term = %p, "ingested x term");
                    self.x_started = true;
                    Self::remember(&mut self.recent_x, p);
                }
                None if !self.x_done => {
                    trace!(position = self.x.position(), "x exhausted");
                    self.x_done = true;
                }
                None => {}
            }
            self.block.ingest_x(term.as_ref());
        } else {
            let term = self.y.advance()?;
            match &term {
                Some(q) => {
                    trace!(term = %q, "ingested y term");
                    self.y_started = true;
                    Self::remember(&mut self.recent_y, q);
                }
                None if !self.y_done => {
                    trace!(position = self.y.position(), "y exhausted");
                    self.y_done = true;
                }
                None => {}
            }
            self.block.ingest_y(term.as_ref());
        }

        self.ingestions += 1;
        Ok(())
    }
}

impl<T: Term> TermProducer<T> for GosperTransducer<T> {
    fn next_term(&mut self) -> Result<Option<T>> {
        loop {
            if self.block.is_unbounded() {
                if self.emitted == 0 {
                    // the result is infinite, only a zero divisor gets here
                    return Err(Error::DivisionByZero);
                }
                return Ok(None);
            }

            let agreed = if self.bounds_valid() { self.block.agreeing_term() } else { None };
            if let Some(r) = agreed {
                self.block.egest(&r);
                self.emitted += 1;
                self.ingestions = 0;
                trace!(term = %r, index = self.emitted - 1, "egested term");
                return Ok(Some(r));
            }

            if self.ingestions >= self.config.ingestion_limit {
                error!(
                    ingestions = self.ingestions,
                    emitted = self.emitted,
                    block = %self.block,
                    recent_x = ?self.recent_x,
                    recent_y = ?self.recent_y,
                    "no output term within the ingestion limit"
                );
                return Err(Error::NonTerminatingExpansion {
                    ingestions: self.ingestions,
                });
            }

            self.ingest()?;
        }
    }
}
