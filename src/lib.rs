//! A bounded FIFO queue of integers, backed by a fixed-capacity ring buffer.
//!
//! The backing block is allocated once, when the buffer is built, and never
//! grows. `enqueue`, `dequeue` and `peek` are `O(1)` and never allocate.
//! It can be stored directly on the stack if needed.
//!
//! # Feature Flags
//! The **boundedqueue** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd and implement `std::error::Error` for [`Error`]
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for `RingBuffer` storage.
//!
//! Without `std` the crate is `#![no_std]` and only needs `alloc`:
//!
//! ```toml
//! [dependencies]
//! boundedqueue = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! Unlike many ring buffers, every slot of the backing block is usable:
//! `capacity()` is exactly the block length. A capacity of zero is allowed
//! and yields a buffer that is permanently both empty and full.
//!
//! # Examples
//! ```
//! use boundedqueue::{Error, RingBuffer};
//!
//! let mut queue = RingBuffer::new(2);
//! assert_eq!(queue.capacity(), 2);
//! assert!(queue.is_empty());
//!
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(queue.enqueue(3), Err(Error::CapacityExceeded { element: 3 }));
//!
//! assert_eq!(queue.peek(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
//! ```
//!
//! # Inline storage
//! ```
//! use boundedqueue::RingBuffer;
//!
//! let mut queue: RingBuffer<[i32; 4]> = RingBuffer::new_inline();
//! queue.try_extend(0..4).unwrap();
//!
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;
use core::iter;

mod storage;
mod utils;
pub mod error;

pub use error::Error;
pub use storage::Storage;
use utils::wrap_add;

/// A bounded FIFO queue of `i32` values over a fixed-length circular block.
///
/// Values are written at `tail` and read at `head`; both indices wrap to
/// zero after the last slot. The live elements are the `count` slots
/// starting at `head`, oldest first.
///
/// The default storage is a heap block sized at construction. Any
/// [`Storage`] works, including inline arrays.
#[derive(Clone)]
pub struct RingBuffer<S: Storage = Box<[i32]>> {
    storage: S,
    head: usize,
    tail: usize,
    count: usize,
}

impl RingBuffer<Box<[i32]>> {
    /// Creates an empty `RingBuffer` holding at most `capacity` values.
    ///
    /// The backing block is heap allocated once and zero-initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::RingBuffer;
    ///
    /// let queue = RingBuffer::new(60);
    /// assert_eq!(queue.capacity(), 60);
    /// assert_eq!(queue.size(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        RingBuffer::from_storage(alloc::vec![0; capacity].into_boxed_slice())
    }
}

impl<const N: usize> RingBuffer<[i32; N]> {
    /// Creates an empty `RingBuffer` whose storage lives inline, e.g. on
    /// the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::RingBuffer;
    ///
    /// let queue: RingBuffer<[i32; 8]> = RingBuffer::new_inline();
    /// assert_eq!(queue.capacity(), 8);
    /// ```
    #[inline]
    pub const fn new_inline() -> Self {
        RingBuffer {
            storage: [0; N],
            head: 0,
            tail: 0,
            count: 0,
        }
    }
}

impl<const N: usize> Default for RingBuffer<[i32; N]> {
    #[inline]
    fn default() -> Self {
        RingBuffer::new_inline()
    }
}

impl<S: Storage> RingBuffer<S> {
    /// Creates an empty `RingBuffer` on top of `storage`.
    ///
    /// The block is zeroed first; its previous contents are discarded.
    pub fn from_storage(mut storage: S) -> Self {
        storage.as_mut_slice().fill(0);
        RingBuffer {
            storage,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    #[inline]
    fn next_index(&self, index: usize) -> usize {
        wrap_add(index, 1, self.capacity())
    }

    /// Appends `value` at the back of the queue.
    ///
    /// Fails with [`Error::CapacityExceeded`], handing `value` back, when
    /// the queue already holds `capacity()` values. A zero-capacity queue
    /// rejects every value.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::{Error, RingBuffer};
    ///
    /// let mut queue = RingBuffer::new(1);
    /// assert_eq!(queue.enqueue(7), Ok(()));
    /// assert_eq!(queue.enqueue(8), Err(Error::CapacityExceeded { element: 8 }));
    /// assert_eq!(queue.size(), 1);
    /// ```
    pub fn enqueue(&mut self, value: i32) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::CapacityExceeded { element: value });
        }
        let tail = self.tail;
        self.storage.as_mut_slice()[tail] = value;
        self.tail = self.next_index(tail);
        self.count += 1;
        Ok(())
    }

    /// Removes the oldest value and returns it.
    ///
    /// The vacated slot is reset to zero. Fails with
    /// [`Error::EmptyContainer`] when the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::{Error, RingBuffer};
    ///
    /// let mut queue = RingBuffer::new(3);
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    ///
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.dequeue(), Ok(2));
    /// assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
    /// ```
    pub fn dequeue(&mut self) -> Result<i32, Error> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let head = self.head;
        let slot = &mut self.storage.as_mut_slice()[head];
        let value = *slot;
        *slot = 0;
        self.head = self.next_index(head);
        self.count -= 1;
        Ok(value)
    }

    /// Returns the oldest value without removing it.
    ///
    /// Fails with [`Error::EmptyContainer`] when the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::{Error, RingBuffer};
    ///
    /// let mut queue = RingBuffer::new(3);
    /// assert_eq!(queue.peek(), Err(Error::EmptyContainer));
    ///
    /// queue.enqueue(i32::MIN).unwrap();
    /// assert_eq!(queue.peek(), Ok(i32::MIN));
    /// assert_eq!(queue.size(), 1);
    /// ```
    #[inline]
    pub fn peek(&self) -> Result<i32, Error> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.storage.as_slice()[self.head])
    }

    /// Returns the number of values in the queue.
    #[inline]
    pub fn size(&self) -> usize {
        self.count
    }

    /// Returns the number of values in the queue. Same as [`size`].
    ///
    /// [`size`]: #method.size
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the queue holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new(4);
    /// assert!(queue.is_empty());
    /// queue.enqueue(1).unwrap();
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the queue holds `capacity()` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new(1);
    /// assert!(!queue.is_full());
    /// queue.enqueue(1).unwrap();
    /// assert!(queue.is_full());
    ///
    /// assert!(RingBuffer::new(0).is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Returns the maximum number of values the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Removes all values and zeroes the backing block.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new(4);
    /// queue.try_extend(1..=3).unwrap();
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(format!("{:?}", queue), "[0, 0, 0, 0]");
    /// ```
    pub fn clear(&mut self) {
        self.storage.as_mut_slice().fill(0);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Enqueues every value of `iter` in order.
    ///
    /// Stops at the first value that does not fit and returns its
    /// [`Error::CapacityExceeded`]. Values accepted before that stay
    /// enqueued; the rest of `iter` is not consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::{Error, RingBuffer};
    ///
    /// let mut queue = RingBuffer::new(3);
    /// assert_eq!(queue.try_extend(10..20), Err(Error::CapacityExceeded { element: 13 }));
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec![10, 11, 12]);
    /// ```
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = i32>,
    {
        for value in iter {
            self.enqueue(value)?;
        }
        Ok(())
    }

    /// Returns a front-to-back iterator over the live values.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundedqueue::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new(3);
    /// queue.try_extend([5, 3, 4]).unwrap();
    /// queue.dequeue().unwrap();
    /// queue.enqueue(9).unwrap();
    ///
    /// let values: Vec<i32> = queue.iter().collect();
    /// assert_eq!(values, vec![3, 4, 9]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter {
            ring: self.storage.as_slice(),
            head: self.head,
            len: self.count,
        }
    }

    /// Returns the whole backing block, stale and zeroed slots included.
    ///
    /// Only the `size()` slots starting at the head are meaningful.
    #[inline]
    pub fn storage(&self) -> &[i32] {
        self.storage.as_slice()
    }
}

/// Renders the full backing block, not just the live values.
impl<S: Storage> fmt::Debug for RingBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.storage.as_slice()).finish()
    }
}

impl<S: Storage, T: Storage> PartialEq<RingBuffer<T>> for RingBuffer<S> {
    fn eq(&self, other: &RingBuffer<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<S: Storage> Eq for RingBuffer<S> {}

impl<'a, S: Storage> IntoIterator for &'a RingBuffer<S> {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    ring: &'a [i32],
    head: usize,
    len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        if self.len == 0 {
            return None;
        }
        let head = self.head;
        self.head = wrap_add(head, 1, self.ring.len());
        self.len -= 1;
        Some(self.ring[head])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.ring[wrap_add(self.head, self.len, self.ring.len())])
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> iter::FusedIterator for Iter<'a> {}
