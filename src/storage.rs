//! Fixed-size backing stores.

use alloc::boxed::Box;

/// Trait for fixed-length contiguous blocks of `i32` that can back a
/// `RingBuffer`.
///
/// The length of the block is the buffer's capacity and must not change
/// for the lifetime of the value.
pub trait Storage {
    /// Converts the block to an immutable slice.
    fn as_slice(&self) -> &[i32];

    /// Converts the block to a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [i32];

    /// Returns the number of elements the block can hold.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.as_slice().len()
    }
}

impl<const N: usize> Storage for [i32; N] {
    #[inline(always)]
    fn as_slice(&self) -> &[i32] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [i32] {
        self
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        N
    }
}

impl Storage for Box<[i32]> {
    #[inline(always)]
    fn as_slice(&self) -> &[i32] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [i32] {
        self
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Storage;
    use generic_array::{ArrayLength, GenericArray};

    impl<N> Storage for GenericArray<i32, N>
    where
        N: ArrayLength<i32>,
    {
        #[inline(always)]
        fn as_slice(&self) -> &[i32] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [i32] {
            GenericArray::as_mut_slice(self)
        }
    }
}
