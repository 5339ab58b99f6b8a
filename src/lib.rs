//! # transactional-buffer
//!
//! Thread-safe accumulation buffer with atomic drain.
//!
//! [`TransactionalBuffer`] decouples producers that append values from a
//! consumer that periodically drains them. Any number of threads push;
//! `consume` takes the entire accumulated batch in one critical section, so
//! every element is delivered exactly once and nothing is lost between
//! drains.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use transactional_buffer::TransactionalBuffer;
//!
//! let buffer = Arc::new(TransactionalBuffer::new());
//!
//! // Producers append from any thread
//! let producer = {
//!     let buffer = Arc::clone(&buffer);
//!     thread::spawn(move || {
//!         for i in 0..10 {
//!             buffer.push_back(i);
//!         }
//!     })
//! };
//! producer.join().unwrap();
//!
//! // The consumer takes everything accumulated so far
//! let batch = buffer.consume();
//! assert_eq!(batch.len(), 10);
//! assert!(buffer.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod buffer;

pub use buffer::TransactionalBuffer;
