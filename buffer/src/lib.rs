//! Fixed-capacity queue implementations for embedded and interrupt-adjacent
//! use.
//!
//! This crate provides an allocation-free circular queue whose element type
//! and capacity are compile-time parameters, plus a fixed-length string
//! element for line-oriented transport:
//!
//! - [`RingBuffer<T, N>`]: a fixed-capacity queue that overwrites the oldest
//!   element when full
//! - [`FixedStr<S>`]: a NUL-terminated, fixed-length string value usable as
//!   a queue element
//!
//! # RingBuffer
//!
//! [`RingBuffer<T, N>`] maintains a sliding window of the most recent data
//! by overwriting the oldest elements when full. [`RingBuffer::try_push`]
//! opts out of overwriting for producers that would rather drop the newest
//! element than lose history.
//!
//! ```
//! use embq_buffer::RingBuffer;
//!
//! let mut buf = RingBuffer::<i32, 3>::new();
//! for v in [1, 2, 3, 4, 5] {
//!     buf.push(v); // Overwrites 1, 2
//! }
//! assert_eq!(buf.to_vec(), vec![3, 4, 5]);
//! ```
//!
//! Each `(T, N)` pair monomorphizes to an independent concrete type: no
//! runtime type tag, no shared state between instantiations, and a memory
//! footprint known at compile time. `const` construction supports `static`
//! instances for interrupt-adjacent code.
//!
//! # Line queues
//!
//! A `RingBuffer<FixedStr<S>, N>` carries fixed-length text lines with
//! silent truncation, the classic transport for deferred log output:
//!
//! ```
//! use embq_buffer::{FixedStr, RingBuffer};
//!
//! let mut lines = RingBuffer::<FixedStr<32>, 8>::new();
//! lines.push_str("sensor online");
//!
//! let mut out = [0u8; 32];
//! assert!(lines.pull_str(&mut out));
//! ```
//!
//! # Concurrency
//!
//! The queue is deliberately lock-free in the trivial sense: it contains no
//! locks, no atomics, and never blocks. Mutating operations take `&mut
//! self`; sharing an instance with an interrupt handler requires a
//! caller-side critical section around each whole operation. The crate
//! makes no thread-safety claim.
//!
//! # `no_std`
//!
//! The crate is `no_std`-capable. The default `std` feature only enables
//! [`RingBuffer::to_vec`] and `std::error::Error` integration.

#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod fixed_str;
mod presets;
mod ring_buffer;

pub use error::{QueueError, Result};
pub use fixed_str::FixedStr;
pub use presets::*;
pub use ring_buffer::{Iter, RingBuffer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<RingBuffer<i32, 4>>();
        assert_send::<RingBuffer<FixedStr<32>, 4>>();
    }

    #[test]
    fn test_buffer_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<RingBuffer<i32, 4>>();
        assert_clone::<FixedStr<32>>();
        assert_clone::<QueueError>();
    }

    #[test]
    fn test_footprint_is_fixed() {
        use core::mem::size_of;

        assert_eq!(
            size_of::<RingBuffer<u8, 16>>(),
            16 * size_of::<u8>() + 3 * size_of::<usize>()
        );
        assert_eq!(
            size_of::<RingBuffer<u32, 8>>(),
            8 * size_of::<u32>() + 3 * size_of::<usize>()
        );
    }
}
