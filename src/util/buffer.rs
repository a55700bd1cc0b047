//! Buffer management for frame data

use bytes::{Bytes, BytesMut};

/// A reference-counted, immutable buffer holding one frame plane
#[derive(Debug, Clone)]
pub struct Buffer {
    data: Bytes,
}

impl Buffer {
    /// Create a new buffer from bytes
    pub fn new(data: Bytes) -> Self {
        Buffer { data }
    }

    /// Create a buffer from a vector
    pub fn from_vec(vec: Vec<u8>) -> Self {
        Buffer {
            data: Bytes::from(vec),
        }
    }

    /// Create an empty buffer
    pub fn empty() -> Self {
        Buffer { data: Bytes::new() }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a slice of the buffer data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// A mutable buffer used while a plane is being written
pub struct BufferRef {
    data: BytesMut,
}

impl BufferRef {
    /// Create a zero-filled buffer of the given length
    pub fn zeroed(len: usize) -> Self {
        BufferRef {
            data: BytesMut::zeroed(len),
        }
    }

    /// Create from existing BytesMut
    pub fn new(data: BytesMut) -> Self {
        BufferRef { data }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get mutable access to the buffer
    pub fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get immutable access to the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Freeze the buffer into an immutable Buffer
    pub fn freeze(self) -> Buffer {
        Buffer {
            data: self.data.freeze(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buf = Buffer::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_buffer_empty() {
        let buf = Buffer::empty();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_buffer_ref_zeroed() {
        let buf = BufferRef::zeroed(16);
        assert_eq!(buf.len(), 16);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_buffer_ref_freeze() {
        let mut buf = BufferRef::zeroed(3);
        buf.as_mut().copy_from_slice(&[1, 2, 3]);

        let frozen = buf.freeze();
        assert_eq!(frozen.as_slice(), &[1, 2, 3]);
    }
}
