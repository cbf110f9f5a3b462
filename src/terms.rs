//! Lazily produced, memoized term sequences
//!
//! A [LazyTermSequence] turns a one-shot [TermProducer] into a replayable
//! sequence: every term is produced at most once and cached in an append-only
//! buffer, and any number of [Cursor]s can walk the buffer independently.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// A one-shot source of terms. `Ok(None)` marks the end of the sequence;
/// the producer is never called again after returning it.
pub trait TermProducer<T>: Send {
    fn next_term(&mut self) -> Result<Option<T>>;
}

/// Adapter that produces the items of an iterator as terms
#[derive(Debug, Clone)]
pub struct IterProducer<I>(pub I);

impl<T, I: Iterator<Item = T> + Send> TermProducer<T> for IterProducer<I> {
    #[inline]
    fn next_term(&mut self) -> Result<Option<T>> {
        Ok(self.0.next())
    }
}

struct Source<T> {
    producer: Option<Box<dyn TermProducer<T>>>, // None once exhausted or failed
    failure: Option<Error>,
}

struct Shared<T> {
    terms: RwLock<Vec<T>>,
    source: Mutex<Source<T>>,
}

/// An append-only, shared cache of the terms of one producer.
///
/// Cloning the sequence is cheap and shares the cache.
pub struct LazyTermSequence<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for LazyTermSequence<T> {
    fn clone(&self) -> Self {
        LazyTermSequence {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone> LazyTermSequence<T> {
    pub fn new<P: TermProducer<T> + 'static>(producer: P) -> Self {
        LazyTermSequence {
            shared: Arc::new(Shared {
                terms: RwLock::new(Vec::new()),
                source: Mutex::new(Source {
                    producer: Some(Box::new(producer)),
                    failure: None,
                }),
            }),
        }
    }

    pub fn from_iterator<I: Iterator<Item = T> + Send + 'static>(iter: I) -> Self
    where
        T: 'static,
    {
        Self::new(IterProducer(iter))
    }

    /// A sequence without any term
    pub fn empty() -> Self {
        LazyTermSequence {
            shared: Arc::new(Shared {
                terms: RwLock::new(Vec::new()),
                source: Mutex::new(Source {
                    producer: None,
                    failure: None,
                }),
            }),
        }
    }

    /// Returns an independent reader positioned at the first term
    pub fn cursor(&self) -> Cursor<T> {
        Cursor {
            sequence: self.clone(),
            index: 0,
        }
    }

    /// Get the term at `index`, producing the missing terms if necessary.
    /// Returns `Ok(None)` if the sequence has less terms.
    pub fn get(&self, index: usize) -> Result<Option<T>> {
        let cached = self.shared.terms.read().get(index).cloned();
        if cached.is_some() {
            return Ok(cached);
        }

        let mut source = self.shared.source.lock();
        loop {
            // another reader may have produced the term while we were waiting
            let cached = self.shared.terms.read().get(index).cloned();
            if cached.is_some() {
                return Ok(cached);
            }
            if let Some(e) = &source.failure {
                return Err(e.clone());
            }

            let producer = match source.producer.as_mut() {
                Some(p) => p,
                None => return Ok(None),
            };
            match producer.next_term() {
                Ok(Some(term)) => self.shared.terms.write().push(term),
                Ok(None) => {
                    trace!(len = self.cached_len(), "term sequence exhausted");
                    source.producer = None;
                }
                Err(e) => {
                    debug!(error = %e, len = self.cached_len(), "term producer failed");
                    source.producer = None;
                    source.failure = Some(e.clone());
                    return Err(e);
                }
            }
        }
    }

    /// Number of terms produced so far
    pub fn cached_len(&self) -> usize {
        self.shared.terms.read().len()
    }

    /// Whether the producer has signaled the end of the sequence
    pub fn is_exhausted(&self) -> bool {
        let source = self.shared.source.lock();
        source.producer.is_none() && source.failure.is_none()
    }

    /// Terms are an append-only log, removing one always fails
    pub fn remove(&self, _index: usize) -> Result<T> {
        Err(Error::UnsupportedMutation)
    }

    /// Whether two handles share the same cache
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyTermSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyTermSequence")
            .field("cached", &*self.shared.terms.read())
            .finish()
    }
}

/// A read position in a [LazyTermSequence]
#[derive(Clone, Debug)]
pub struct Cursor<T> {
    sequence: LazyTermSequence<T>,
    index: usize,
}

impl<T: Clone> Cursor<T> {
    /// Read the term under the cursor and move past it. At the end of the
    /// sequence the cursor stays in place and `Ok(None)` is returned.
    pub fn advance(&mut self) -> Result<Option<T>> {
        let term = self.sequence.get(self.index)?;
        if term.is_some() {
            self.index += 1;
        }
        Ok(term)
    }

    /// Read the term under the cursor without moving
    pub fn peek(&self) -> Result<Option<T>> {
        self.sequence.get(self.index)
    }

    /// Index of the next term to be read
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Removing through a cursor is unsupported as well
    pub fn remove(&mut self) -> Result<T> {
        self.sequence.remove(self.index)
    }
}

impl<T: Clone> Iterator for Cursor<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }
}
