//! Transactional accumulation buffer
//!
//! Decouples producers that append values from a consumer that periodically
//! drains them. All operations serialize on a single mutex. The drain swaps
//! the accumulated batch out inside one critical section, so no element is
//! lost between a copy and a clear, and no element is delivered twice.

use parking_lot::Mutex;
use std::mem;

/// Thread-safe accumulation buffer with atomic drain.
///
/// Producers call [`push_back`](TransactionalBuffer::push_back) from any
/// number of threads; a consumer periodically calls
/// [`consume`](TransactionalBuffer::consume) to take everything accumulated
/// so far in one step. Each pushed element is delivered to exactly one
/// `consume` call, exactly once, in the order it landed relative to the
/// other elements present at drain time.
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - `push_back()`/`extend()`: lock, append, unlock
/// - `consume()`: detaches the whole batch inside one critical section
/// - `len()`/`is_empty()`: read the count under the same lock
///
/// The lock is never held across caller-supplied code, I/O, or logging, and
/// no operation acquires a second lock. Relative order among concurrent
/// pushers is whatever the lock's fairness policy yields; each call lands
/// entirely before or entirely after any given drain.
///
/// # Example
///
/// ```
/// use transactional_buffer::TransactionalBuffer;
///
/// let buffer = TransactionalBuffer::new();
/// buffer.push_back(2);
/// assert_eq!(buffer.len(), 1);
///
/// let batch = buffer.consume();
/// assert_eq!(batch, vec![2]);
/// assert!(buffer.is_empty());
/// ```
pub struct TransactionalBuffer<T> {
    /// Accumulated elements, insertion order preserved.
    ///
    /// Only observed and mutated while the lock is held; no reference to it
    /// escapes past a lock release.
    buffer: Mutex<Vec<T>>,
}

impl<T> TransactionalBuffer<T> {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// Create a buffer with pre-allocated capacity
    ///
    /// Useful when the expected batch size between drains is known; avoids
    /// regrowth while producers hold the lock.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// Append a value to the end of the buffer
    ///
    /// Always succeeds. Once this returns, the element is visible to any
    /// operation on any thread that acquires the lock afterward.
    #[inline]
    pub fn push_back(&self, value: T) {
        self.buffer.lock().push(value);
    }

    /// Append a batch of values under a single lock acquisition
    ///
    /// The whole batch lands entirely before or entirely after any
    /// concurrent [`consume`](TransactionalBuffer::consume); it never
    /// straddles a drain.
    pub fn extend(&self, values: impl IntoIterator<Item = T>) {
        self.buffer.lock().extend(values);
    }

    /// Take the entire accumulated batch, leaving the buffer empty
    ///
    /// Detaches the current sequence and installs a fresh empty one inside
    /// one critical section. A copy-then-clear would lose elements pushed
    /// between the copy and the clear; the swap cannot.
    ///
    /// Valid in every state: on an empty buffer this returns an empty `Vec`
    /// (no allocation happens until the next push). The returned `Vec` is
    /// independently owned; mutating it has no effect on the buffer.
    pub fn consume(&self) -> Vec<T> {
        let batch = {
            let mut buffer = self.buffer.lock();
            mem::take(&mut *buffer)
        };
        tracing::trace!(drained = batch.len(), "buffer drained");
        batch
    }

    /// Number of elements currently buffered
    ///
    /// Exact at the instant the lock is held; may be stale by the time the
    /// caller observes it if other threads mutate concurrently.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Check if the buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl<T> Default for TransactionalBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TransactionalBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionalBuffer")
            .field("len", &self.len())
            .finish()
    }
}
