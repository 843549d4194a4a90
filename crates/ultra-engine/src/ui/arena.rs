//! Bulk-reset storage for per-frame records.
//!
//! Records are never freed individually. [`Arena::reset`] drops every record at
//! once while keeping the allocation for the next frame, and bumps the arena
//! epoch so that handles from earlier frames stop resolving.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// Typed index into an [`Arena`], valid until the arena is reset.
pub struct Handle<T> {
    index: u32,
    epoch: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    #[inline]
    const fn new(index: u32, epoch: u32) -> Self {
        Self { index, epoch, _marker: PhantomData }
    }

    /// Slot index within the arena.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Arena epoch the handle was issued in.
    #[inline]
    pub const fn epoch(self) -> u32 {
        self.epoch
    }
}

// Manual impls: deriving would put bounds on `T`.
impl<T> Clone for Handle<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.epoch == other.epoch
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.epoch.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}@{})", self.index, self.epoch)
    }
}

/// Fixed-type record pool with O(1) allocation and O(1) bulk reset.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<T>,
    epoch: u32,
}

impl<T> Arena<T> {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), epoch: 0 }
    }

    /// Stores `value` and returns its handle.
    #[inline]
    pub fn alloc(&mut self, value: T) -> Handle<T> {
        assert!(self.slots.len() < u32::MAX as usize, "arena exhausted");
        let index = self.slots.len() as u32;
        self.slots.push(value);
        Handle::new(index, self.epoch)
    }

    /// Resolves a handle. Handles from before the last [`reset`](Self::reset) yield `None`.
    #[inline]
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        if handle.epoch != self.epoch {
            return None;
        }
        self.slots.get(handle.index as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        if handle.epoch != self.epoch {
            return None;
        }
        self.slots.get_mut(handle.index as usize)
    }

    /// Drops every record and invalidates all outstanding handles.
    ///
    /// Capacity is kept, so a warmed-up arena stops allocating.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte range of a string stored in a [`StrArena`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StrSpan {
    start: usize,
    len: usize,
    epoch: u32,
}

/// Per-frame string storage.
///
/// Text records copy their content here instead of borrowing it from the
/// caller, so UI code may build labels in temporaries.
#[derive(Debug, Default)]
pub struct StrArena {
    buf: String,
    epoch: u32,
}

impl StrArena {
    pub fn with_capacity(bytes: usize) -> Self {
        Self { buf: String::with_capacity(bytes), epoch: 0 }
    }

    pub fn push(&mut self, text: &str) -> StrSpan {
        let start = self.buf.len();
        self.buf.push_str(text);
        StrSpan { start, len: text.len(), epoch: self.epoch }
    }

    pub fn get(&self, span: StrSpan) -> Option<&str> {
        if span.epoch != self.epoch {
            return None;
        }
        self.buf.get(span.start..span.start + span.len)
    }

    pub fn reset(&mut self) {
        self.buf.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Bytes currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Arena ─────────────────────────────────────────────────────────────

    #[test]
    fn alloc_returns_distinct_handles() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_ne!(a, b);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = Arena::new();
        let h = arena.alloc(1);
        *arena.get_mut(h).unwrap() += 41;
        assert_eq!(arena.get(h), Some(&42));
    }

    #[test]
    fn reset_invalidates_old_handles() {
        let mut arena = Arena::new();
        let old = arena.alloc(7u32);
        arena.reset();
        assert!(arena.is_empty());
        assert_eq!(arena.get(old), None);

        // The slot index is reused, the stale handle still must not alias it.
        let new = arena.alloc(9u32);
        assert_eq!(new.index(), old.index());
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&9));
    }

    #[test]
    fn reset_keeps_capacity() {
        let mut arena = Arena::with_capacity(4);
        for i in 0..100 {
            arena.alloc(i);
        }
        let cap = arena.capacity();
        arena.reset();
        assert_eq!(arena.capacity(), cap);
    }

    // ── StrArena ──────────────────────────────────────────────────────────

    #[test]
    fn str_arena_round_trips_spans() {
        let mut strings = StrArena::default();
        let hello = strings.push("hello");
        let empty = strings.push("");
        let world = strings.push("wörld");
        assert_eq!(strings.get(hello), Some("hello"));
        assert_eq!(strings.get(empty), Some(""));
        assert_eq!(strings.get(world), Some("wörld"));
    }

    #[test]
    fn str_arena_spans_address_large_buffers() {
        let mut strings = StrArena::default();
        let filler = "x".repeat(1 << 20);
        for _ in 0..4 {
            strings.push(&filler);
        }
        let tail = strings.push("tail");
        assert_eq!(tail.start, 4 << 20);
        assert_eq!(strings.get(tail), Some("tail"));
        assert_eq!(strings.len(), (4 << 20) + 4);
    }

    #[test]
    fn str_arena_reset_invalidates_spans() {
        let mut strings = StrArena::default();
        let span = strings.push("stale");
        strings.reset();
        strings.push("fresh");
        assert_eq!(strings.get(span), None);
    }
}
