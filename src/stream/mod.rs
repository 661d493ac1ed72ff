//! Streaming producer
//!
//! Wraps any [`Paginator`](crate::pagination::Paginator) in one background
//! task that emits individual records over a capacity-1 channel. Records
//! arrive in server order, page N before page N+1; the consumer's read pace
//! is the only backpressure. A failed fetch becomes one final `Err` record.

mod producer;

pub use producer::{produce, RecordStream, StreamRecord};
