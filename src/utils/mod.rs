/*!
# Utilities

Provides the building blocks of the construction pipeline:
- [`SlicedBuffer`](self::sliced_buffer::SlicedBuffer): the flat-buffer-plus-offsets representation backing [`CsrGraph`](crate::repr::CsrGraph),
- [`Bucket`](self::bucket::Bucket): a parallel-append chunked container for aggregating worker output without per-element synchronization,
- [`prefix_sum()`](self::prefix_sum::prefix_sum) / [`par_prefix_sum()`](self::prefix_sum::par_prefix_sum): exclusive prefix sums over degree vectors,
- [`Timer`](self::timer::Timer) and [`print_time`](self::timer::print_time) for phase reporting.
*/

pub mod bucket;
pub mod prefix_sum;
pub mod sliced_buffer;
pub mod timer;

pub use bucket::{Bucket, BucketCursor, BucketView};
pub use prefix_sum::{par_prefix_sum, prefix_sum};
pub use sliced_buffer::SlicedBuffer;
pub use timer::{print_time, Timer};

/// A shared view over a buffer whose slots are written from many threads at
/// disjoint indices (handed out by fetch-and-add counters).
///
/// The aliasing discipline is the caller's: every index must be written at
/// most once per pass, and the buffer must not be read until the parallel
/// region has joined.
pub(crate) struct ScatterSlots<T> {
    ptr: *mut T,
    len: usize,
}

// Writes land at disjoint indices, so handing the pointer to many threads is
// sound under the documented discipline.
unsafe impl<T: Send> Sync for ScatterSlots<T> {}

impl<T> ScatterSlots<T> {
    pub(crate) fn new(buffer: &mut [T]) -> Self {
        Self {
            ptr: buffer.as_mut_ptr(),
            len: buffer.len(),
        }
    }

    /// Writes `value` at `idx`.
    ///
    /// # Safety
    /// `idx` must be in bounds and written by exactly one thread per pass.
    #[inline(always)]
    pub(crate) unsafe fn write(&self, idx: usize, value: T) {
        debug_assert!(idx < self.len);
        unsafe { self.ptr.add(idx).write(value) }
    }
}
