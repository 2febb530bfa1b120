//! The bump allocator itself.
//!
//! Regions are carved front to back from a fixed buffer. The cursor only
//! ever advances, so every region handed out is disjoint from every
//! other; that disjointness is what makes the `&self -> &mut` API sound.

#![allow(unsafe_code)]

use std::cell::Cell;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// A single contiguous byte buffer with bump allocation and no
/// individual deallocation.
///
/// Allocation takes `&self`: the returned references are pairwise
/// disjoint, so handing out several at once is sound, and the
/// arena-handle strategy depends on being able to hold many placements
/// alive while continuing to allocate. The arena is neither `Send` nor
/// `Sync` — the benchmark core is single-threaded by design.
///
/// Placed objects are never dropped. [`BumpArena::place`] requires
/// `Copy` payloads so that abandoning them when the arena is dropped
/// cannot leak resources.
pub struct BumpArena {
    /// Base of the backing buffer, captured once at construction and
    /// never re-derived through a reference. Re-deriving it (for
    /// example through a `Box` or slice borrow) would create a
    /// transient reference over the whole buffer and invalidate every
    /// region already handed out under the aliasing model.
    base: NonNull<u8>,
    /// Capacity in bytes. The buffer never moves or grows, so pointers
    /// into it stay valid for the arena's lifetime.
    capacity: usize,
    /// Bump pointer: next free byte offset. Monotonically non-decreasing.
    cursor: Cell<usize>,
}

impl BumpArena {
    /// Create an arena with the configured capacity, zero-initialised.
    pub fn new(config: ArenaConfig) -> Self {
        let buf = vec![0u8; config.capacity].into_boxed_slice();
        let base = NonNull::new(Box::into_raw(buf).cast::<u8>())
            .expect("Box::into_raw never returns null");
        Self {
            base,
            capacity: config.capacity,
            cursor: Cell::new(0),
        }
    }

    /// Create an arena with an explicit byte capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Carve `len` bytes at `align` off the front of the free space.
    ///
    /// On success the cursor advances past the region. On failure the
    /// cursor is untouched, so a smaller follow-up request can still
    /// succeed. The capacity check happens before any write.
    fn bump(&self, len: usize, align: usize) -> Result<*mut u8, ArenaError> {
        debug_assert!(align.is_power_of_two());
        let exceeded = ArenaError::CapacityExceeded {
            requested: len,
            capacity: self.capacity,
        };

        let base = self.base.as_ptr();

        // Align against the real address, not the offset: the global
        // allocator only guarantees byte alignment for a `[u8]` buffer.
        let addr = base as usize + self.cursor.get();
        let aligned = addr
            .checked_add(align - 1)
            .map(|a| a & !(align - 1))
            .ok_or(exceeded)?;
        let offset = aligned - base as usize;
        let end = offset.checked_add(len).ok_or(exceeded)?;
        if end > self.capacity {
            return Err(exceeded);
        }

        self.cursor.set(end);
        // SAFETY: offset <= end <= capacity, so the pointer stays within
        // (or one past) the allocated buffer.
        Ok(unsafe { base.add(offset) })
    }

    /// Allocate a zeroed region of exactly `len` bytes.
    ///
    /// The region is disjoint from every previously returned region and
    /// lies entirely within the arena's buffer. Fails with
    /// [`ArenaError::CapacityExceeded`] on the first request that would
    /// cross capacity.
    pub fn alloc_bytes(&self, len: usize) -> Result<&mut [u8], ArenaError> {
        let ptr = self.bump(len, 1)?;
        // SAFETY: `ptr..ptr + len` is in-bounds, disjoint from every
        // region handed out before (the cursor only advances), and the
        // buffer was zero-initialised and never reused, so the bytes are
        // zero and no other reference covers them. The reference is
        // derived from the raw base captured at construction, so later
        // allocations do not invalidate it.
        Ok(unsafe { slice::from_raw_parts_mut(ptr, len) })
    }

    /// Place `value` into the arena and return a unique reference to it.
    ///
    /// The cursor is rounded up to `align_of::<T>()` first. The `Copy`
    /// bound encodes the arena's contract: placed objects are abandoned,
    /// never dropped, which is only sound for payloads without
    /// destructor side effects.
    pub fn place<T: Copy>(&self, value: T) -> Result<&mut T, ArenaError> {
        let ptr = self.bump(mem::size_of::<T>(), mem::align_of::<T>())?;
        let typed = ptr.cast::<T>();
        // SAFETY: `typed` is aligned for `T` (bump aligned the address),
        // points at `size_of::<T>()` in-bounds bytes, and no other
        // reference covers this region.
        unsafe {
            typed.write(value);
            Ok(&mut *typed)
        }
    }

    /// Bytes consumed so far, including alignment padding.
    pub fn used(&self) -> usize {
        self.cursor.get()
    }

    /// Total buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remaining free bytes.
    pub fn remaining(&self) -> usize {
        self.capacity - self.cursor.get()
    }
}

impl Drop for BumpArena {
    fn drop(&mut self) {
        // SAFETY: `base` and `capacity` came from `Box::into_raw` of a
        // boxed slice with exactly this length, ownership was never
        // given away, and all handed-out borrows have ended (they are
        // bounded by `&self`). Rebuilding the box frees the buffer once.
        unsafe {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
                self.base.as_ptr(),
                self.capacity,
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn alloc_returns_zeroed_region() {
        let arena = BumpArena::with_capacity(64);
        let region = arena.alloc_bytes(16).unwrap();
        assert_eq!(region.len(), 16);
        assert!(region.iter().all(|&b| b == 0));
    }

    #[test]
    fn sequential_allocs_are_disjoint_and_ordered() {
        let arena = BumpArena::with_capacity(64);
        let first = arena.alloc_bytes(10).unwrap();
        let second = arena.alloc_bytes(20).unwrap();
        let first_end = first.as_ptr() as usize + first.len();
        assert!(first_end <= second.as_ptr() as usize);
        assert_eq!(arena.used(), 30);
        assert_eq!(arena.remaining(), 34);
    }

    #[test]
    fn exact_fit_succeeds() {
        let arena = BumpArena::with_capacity(32);
        assert!(arena.alloc_bytes(32).is_ok());
        assert_eq!(arena.remaining(), 0);
    }

    #[test]
    fn crossing_request_fails_with_sizes() {
        let arena = BumpArena::with_capacity(32);
        arena.alloc_bytes(30).unwrap();
        let err = arena.alloc_bytes(3).unwrap_err();
        assert_eq!(
            err,
            ArenaError::CapacityExceeded {
                requested: 3,
                capacity: 32,
            }
        );
    }

    #[test]
    fn failed_request_leaves_cursor_untouched() {
        let arena = BumpArena::with_capacity(32);
        arena.alloc_bytes(30).unwrap();
        assert!(arena.alloc_bytes(3).is_err());
        // A smaller request still fits afterwards.
        assert!(arena.alloc_bytes(2).is_ok());
        assert_eq!(arena.used(), 32);
    }

    #[test]
    fn zero_capacity_arena_rejects_any_nonzero_request() {
        let arena = BumpArena::with_capacity(0);
        assert!(arena.alloc_bytes(1).is_err());
        assert!(arena.alloc_bytes(0).is_ok());
    }

    #[test]
    fn place_returns_aligned_writable_reference() {
        let arena = BumpArena::with_capacity(64);
        // Burn one byte so the next placement needs padding.
        arena.alloc_bytes(1).unwrap();
        let value = arena.place(0x1122_3344_5566_7788u64).unwrap();
        let addr = std::ptr::from_mut(&mut *value) as usize;
        assert_eq!(addr % mem::align_of::<u64>(), 0);
        assert_eq!(*value, 0x1122_3344_5566_7788);
        *value = 7;
        assert_eq!(*value, 7);
    }

    #[test]
    fn placements_stay_live_while_allocating() {
        let arena = BumpArena::with_capacity(256);
        let mut placed = Vec::new();
        for i in 0..10u32 {
            placed.push(arena.place(i).unwrap());
        }
        for (i, value) in placed.iter().enumerate() {
            assert_eq!(**value, i as u32);
        }
    }

    #[test]
    fn earlier_regions_stay_usable_across_later_allocations() {
        // Regions handed out early are written and read again after
        // further carving; nothing the allocator does in between may
        // invalidate them, byte regions and typed placements alike.
        let arena = BumpArena::with_capacity(256);
        let first = arena.alloc_bytes(8).unwrap();
        let second = arena.place(11u32).unwrap();
        let third = arena.alloc_bytes(16).unwrap();

        first[0] = 1;
        *second = 22;
        third[15] = 3;

        let fourth = arena.place(0x4444_4444u32).unwrap();
        assert_eq!(first[0], 1);
        assert_eq!(*second, 22);
        assert_eq!(third[15], 3);
        assert_eq!(*fourth, 0x4444_4444);
    }

    #[test]
    fn used_includes_alignment_padding() {
        let arena = BumpArena::with_capacity(64);
        arena.alloc_bytes(1).unwrap();
        arena.place(1u64).unwrap();
        assert!(arena.used() >= 1 + mem::size_of::<u64>());
    }

    proptest! {
        #[test]
        fn regions_within_capacity_are_disjoint_and_in_bounds(
            sizes in proptest::collection::vec(0usize..64, 0..32),
        ) {
            let capacity = 1024;
            let arena = BumpArena::with_capacity(capacity);
            let mut ranges: Vec<(usize, usize)> = Vec::new();
            let mut expected_cursor = 0usize;

            for &len in &sizes {
                let before = arena.used();
                match arena.alloc_bytes(len) {
                    Ok(region) => {
                        let start = region.as_ptr() as usize;
                        let end = start + len;
                        for &(s, e) in &ranges {
                            prop_assert!(end <= s || e <= start, "regions overlap");
                        }
                        ranges.push((start, end));
                        expected_cursor += len;
                        prop_assert_eq!(arena.used(), expected_cursor);
                    }
                    Err(ArenaError::CapacityExceeded { requested, capacity: cap }) => {
                        // Byte allocs have no padding: failure happens
                        // exactly when the request crosses capacity.
                        prop_assert!(before + len > capacity);
                        prop_assert_eq!(requested, len);
                        prop_assert_eq!(cap, capacity);
                        prop_assert_eq!(arena.used(), before);
                    }
                }
                prop_assert!(arena.used() <= capacity);
            }
        }

        #[test]
        fn for_slots_capacity_fits_alternating_placements(len in 0usize..512) {
            let arena = BumpArena::new(
                ArenaConfig::for_slots::<u64, [u8; 3]>(len),
            );
            for i in 0..len {
                if i % 2 == 0 {
                    prop_assert!(arena.place(i as u64).is_ok());
                } else {
                    prop_assert!(arena.place([0u8; 3]).is_ok());
                }
            }
        }
    }
}
