//! Singly-linked command lists threaded through an [`Arena`].
//!
//! Insertion is prepend-only, so iteration yields the most recent record
//! first (LIFO).

use super::arena::{Arena, Handle};

/// Arena cell holding one list element.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    next: Option<Handle<Node<T>>>,
}

/// Arena that backs every list of a given record type.
pub type Pool<T> = Arena<Node<T>>;

/// Head of a LIFO list whose nodes live in a [`Pool`].
#[derive(Debug)]
pub struct CmdList<T> {
    head: Option<Handle<Node<T>>>,
    len: u32,
}

impl<T> CmdList<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Prepends `value`; it becomes the first element yielded by [`iter`](Self::iter).
    #[inline]
    pub fn push_front(&mut self, pool: &mut Pool<T>, value: T) {
        let node = pool.alloc(Node { value, next: self.head });
        self.head = Some(node);
        self.len += 1;
    }

    /// Walks the list newest-first.
    #[inline]
    pub fn iter<'a>(&self, pool: &'a Pool<T>) -> ListIter<'a, T> {
        ListIter { pool, cursor: self.head }
    }
}

impl<T> Clone for CmdList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CmdList<T> {}

impl<T> Default for CmdList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`CmdList::iter`].
pub struct ListIter<'a, T> {
    pool: &'a Pool<T>,
    cursor: Option<Handle<Node<T>>>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.pool.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_yields_nothing() {
        let pool: Pool<i32> = Pool::new();
        let list = CmdList::new();
        assert!(list.is_empty());
        assert_eq!(list.iter(&pool).count(), 0);
    }

    #[test]
    fn iteration_is_reverse_of_insertion() {
        let mut pool = Pool::new();
        let mut list = CmdList::new();
        for i in 1..=4 {
            list.push_front(&mut pool, i);
        }
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter(&pool).copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn lists_sharing_a_pool_stay_separate() {
        let mut pool = Pool::new();
        let mut a = CmdList::new();
        let mut b = CmdList::new();
        a.push_front(&mut pool, 'a');
        b.push_front(&mut pool, 'x');
        a.push_front(&mut pool, 'b');
        b.push_front(&mut pool, 'y');
        assert_eq!(a.iter(&pool).collect::<String>(), "ba");
        assert_eq!(b.iter(&pool).collect::<String>(), "yx");
    }

    #[test]
    fn list_from_previous_frame_is_unreachable() {
        let mut pool = Pool::new();
        let mut list = CmdList::new();
        list.push_front(&mut pool, 1);
        pool.reset();
        assert_eq!(list.iter(&pool).count(), 0);
    }
}
