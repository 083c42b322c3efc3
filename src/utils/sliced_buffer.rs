/*!
# CSR-based Sliced Buffers

This module provides the **Compressed Sparse Row (CSR)**-like backbone used
for adjacency storage.

The key idea:

- A contiguous `buffer: Vec<T>` stores all elements.
- A non-decreasing `offsets: Vec<I>` stores slice boundaries, where slice `i` is `buffer[offsets[i]..offsets[i+1]]`.

### Invariants
All constructions verify the following invariants:

1. `offsets` is non-empty (a buffer of `n` slices has `n + 1` offsets)
2. `offsets` is non-decreasing
3. `offsets` entries are within `buffer` bounds

These invariants allow **unchecked access** in methods for performance.
*/

use std::ops::{Index, IndexMut};

use num::{FromPrimitive, PrimInt, ToPrimitive};

/// CSR-like structure storing slices of elements.
///
/// - `buffer`: all elements contiguously
/// - `offsets`: start indices of each slice
///
/// Provides indexed access to slices and a disjoint mutable split of all
/// slices at once for bulk-parallel per-slice passes.
#[derive(Debug, Clone)]
pub struct SlicedBuffer<T, I>
where
    I: PrimInt,
{
    buffer: Vec<T>,
    offsets: Vec<I>,
}

impl<T, I: PrimInt> Default for SlicedBuffer<T, I> {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            offsets: vec![I::zero()],
        }
    }
}

impl<T, I> SlicedBuffer<T, I>
where
    I: PrimInt + FromPrimitive,
{
    /// Constructs a new `SlicedBuffer`.
    ///
    /// # Panics
    /// Panics if:
    /// - `offsets` is empty
    /// - `offsets` is not sorted
    /// - `offsets` exceed `buffer` length
    pub fn new(buffer: Vec<T>, offsets: Vec<I>) -> Self {
        assert!(!offsets.is_empty());
        assert!(offsets.is_sorted());
        assert!(offsets.last().unwrap().to_usize().unwrap() <= buffer.len());

        Self { buffer, offsets }
    }

    /// Returns the number of slices as `usize`.
    ///
    /// # Examples
    /// ```
    /// use parcsr::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u64, 2, 4, 7]);
    /// assert_eq!(sb.len(), 3);
    /// ```
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the total number of entries in the buffer.
    #[inline(always)]
    pub fn number_of_entries(&self) -> I {
        I::from_usize(self.buffer.len()).unwrap()
    }

    /// Returns the length of slice `u`.
    ///
    /// # Examples
    /// ```
    /// use parcsr::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u64, 2, 4, 7]);
    /// assert_eq!(sb.size_of(2u32), 3);
    /// ```
    #[inline(always)]
    pub fn size_of<Idx: PrimInt>(&self, u: Idx) -> I {
        self.offsets[u.to_usize().unwrap() + 1] - self.offsets[u.to_usize().unwrap()]
    }

    /// Returns a reference to the complete buffer.
    #[inline(always)]
    pub fn raw_buffer_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns a reference to the offsets array.
    #[inline(always)]
    pub fn raw_offset_slice(&self) -> &[I] {
        &self.offsets
    }

    /// Splits the buffer into one mutable sub-slice per stored slice.
    ///
    /// The sub-slices are disjoint, so the returned vector can be fed into a
    /// parallel iterator for per-slice passes (sorting, compaction).
    pub fn slices_mut(&mut self) -> Vec<&mut [T]> {
        let skip = self.offsets[0].to_usize().unwrap();
        let len = self.len();
        let mut rest = &mut self.buffer[skip..];
        let mut slices = Vec::with_capacity(len);
        for bounds in self.offsets.windows(2) {
            let len = (bounds[1] - bounds[0]).to_usize().unwrap();
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(len);
            slices.push(head);
            rest = tail;
        }
        slices
    }
}

impl<T, I, Idx> Index<Idx> for SlicedBuffer<T, I>
where
    I: PrimInt,
    Idx: PrimInt,
{
    type Output = [T];

    #[inline(always)]
    fn index(&self, idx: Idx) -> &Self::Output {
        let start = self.offsets[idx.to_usize().unwrap()].to_usize().unwrap();
        let end = self.offsets[idx.to_usize().unwrap() + 1]
            .to_usize()
            .unwrap();

        // using unchecked here is safe, since we established in the
        // constructor that all entries within `self.offsets` are
        //  (i) non-decreasing (i.e. produce a valid range) and
        //  (ii) are within bounds of `self.buffer`
        unsafe { self.buffer.get_unchecked(start..end) }
    }
}

impl<T, I, Idx> IndexMut<Idx> for SlicedBuffer<T, I>
where
    I: PrimInt,
    Idx: PrimInt,
{
    #[inline(always)]
    fn index_mut(&mut self, idx: Idx) -> &mut Self::Output {
        let start = self.offsets[idx.to_usize().unwrap()].to_usize().unwrap();
        let end = self.offsets[idx.to_usize().unwrap() + 1]
            .to_usize()
            .unwrap();

        // using unchecked here is safe, since we established in the
        // constructor that all entries within `self.offsets` are
        //  (i) non-decreasing (i.e. produce a valid range) and
        //  (ii) are within bounds of `self.buffer`
        unsafe { self.buffer.get_unchecked_mut(start..end) }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn indexed_access() {
        let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0u64, 2, 4, 7]);
        assert_eq!(sb.len(), 3);
        assert_eq!(sb.number_of_entries(), 7);
        assert_eq!(&sb[0u32], &[1, 2]);
        assert_eq!(&sb[1u32], &[4, 5]);
        assert_eq!(&sb[2u32], &[6, 7, 8]);
        assert_eq!(sb.size_of(2u32), 3);
    }

    #[test]
    fn empty_slices() {
        let sb: SlicedBuffer<u32, u64> = SlicedBuffer::new(vec![3], vec![0, 0, 1, 1]);
        assert_eq!(sb.len(), 3);
        assert!(sb[0u32].is_empty());
        assert_eq!(&sb[1u32], &[3]);
        assert!(sb[2u32].is_empty());
    }

    #[test]
    fn no_slices() {
        let sb: SlicedBuffer<u32, u64> = SlicedBuffer::new(Vec::new(), vec![0]);
        assert_eq!(sb.len(), 0);
        assert_eq!(sb.number_of_entries(), 0);
    }

    #[test]
    fn disjoint_split() {
        let mut sb = SlicedBuffer::new(vec![2u32, 1, 5, 4, 3], vec![0u64, 2, 2, 5]);
        let mut slices = sb.slices_mut();
        assert_eq!(slices.len(), 3);
        for slice in slices.iter_mut() {
            slice.sort_unstable();
        }
        assert_eq!(sb.raw_buffer_slice(), &[1, 2, 3, 4, 5]);
    }
}
