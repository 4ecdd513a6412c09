//! Convenience aliases and constructors for common queue shapes.

use crate::fixed_str::FixedStr;
use crate::ring_buffer::RingBuffer;

/// A byte queue holding up to `N` bytes.
pub type ByteRing<const N: usize> = RingBuffer<u8, N>;

/// A line queue holding up to `N` lines of at most `S - 1` bytes each.
pub type LineRing<const S: usize, const N: usize> = RingBuffer<FixedStr<S>, N>;

// ============================================================================
// Byte queue convenience constructors
// ============================================================================

/// Creates a 64-byte queue, sized for a UART transmit buffer.
pub fn byte_ring_64() -> ByteRing<64> {
    RingBuffer::new()
}

/// Creates a 256-byte queue.
pub fn byte_ring_256() -> ByteRing<256> {
    RingBuffer::new()
}

/// Creates a 1KB byte queue.
pub fn byte_ring_1k() -> ByteRing<1024> {
    RingBuffer::new()
}

// ============================================================================
// Line queue convenience constructors
// ============================================================================

/// Creates a queue of 8 lines of up to 63 bytes, sized for terse status
/// messages on stack-constrained targets.
pub fn line_ring_64x8() -> LineRing<64, 8> {
    RingBuffer::new()
}

/// Creates a queue of 16 lines of up to 127 bytes, the balanced default for
/// deferred log transport.
pub fn line_ring_128x16() -> LineRing<128, 16> {
    RingBuffer::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_ring_shapes() {
        let mut b64 = byte_ring_64();
        let mut b256 = byte_ring_256();
        let mut b1k = byte_ring_1k();

        assert_eq!(b64.capacity(), 64);
        assert_eq!(b256.capacity(), 256);
        assert_eq!(b1k.capacity(), 1024);

        b64.push(1);
        b256.push(2);
        b1k.push(3);
        assert_eq!(b64.pull(), Ok(1));
        assert_eq!(b256.pull(), Ok(2));
        assert_eq!(b1k.pull(), Ok(3));
    }

    #[test]
    fn test_line_ring_shapes() {
        let mut small = line_ring_64x8();
        let mut default = line_ring_128x16();

        assert_eq!(small.capacity(), 8);
        assert_eq!(default.capacity(), 16);

        small.push_str("status");
        default.push_str("status");

        let mut out = [0u8; 64];
        assert!(small.pull_str(&mut out));
        assert_eq!(&out[..6], b"status");
        assert!(default.pull_str(&mut out));
    }
}
