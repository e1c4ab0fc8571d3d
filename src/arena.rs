//! Region allocation for message instances.
//!
//! An [`Arena`] owns a set of instances and releases them together. Instances are
//! reached through [`ArenaMessage`] handles (arena id + index), so nothing outside the
//! arena ever holds an arena-owned `Message` by value.

use crate::codec::{Allocation, DispatchTable, Message};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaId(u32);

impl ArenaId {
    fn next() -> Self {
        ArenaId(NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to an instance owned by an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaMessage {
    arena: ArenaId,
    index: usize,
}

impl ArenaMessage {
    pub fn arena(&self) -> ArenaId {
        self.arena
    }
}

pub struct Arena<'t> {
    id: ArenaId,
    messages: Vec<Message<'t>>,
}

impl<'t> Arena<'t> {
    pub fn new() -> Self {
        let id = ArenaId::next();
        tracing::trace!(arena = id.0, "arena created");
        Arena {
            id,
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// New empty instance owned by this arena.
    pub fn alloc(&mut self, table: &'t DispatchTable) -> ArenaMessage {
        let msg = Message::with_allocation(table, Allocation::Arena(self.id));
        self.push(msg)
    }

    /// Move an owned instance into the arena.
    pub fn adopt(&mut self, mut msg: Message<'t>) -> ArenaMessage {
        assert_eq!(msg.allocation(), Allocation::Owned, "adopt: instance already arena-owned");
        msg.set_allocation(Allocation::Arena(self.id));
        self.push(msg)
    }

    fn push(&mut self, msg: Message<'t>) -> ArenaMessage {
        self.messages.push(msg);
        ArenaMessage {
            arena: self.id,
            index: self.messages.len() - 1,
        }
    }

    fn check(&self, handle: ArenaMessage) {
        assert_eq!(handle.arena, self.id, "arena handle used with the wrong arena");
    }

    pub fn get(&self, handle: ArenaMessage) -> &Message<'t> {
        self.check(handle);
        &self.messages[handle.index]
    }

    pub fn get_mut(&mut self, handle: ArenaMessage) -> &mut Message<'t> {
        self.check(handle);
        &mut self.messages[handle.index]
    }

    /// Two distinct instances at once, e.g. for `merge_from` or `swap`.
    pub fn get_pair_mut(&mut self, a: ArenaMessage, b: ArenaMessage) -> (&mut Message<'t>, &mut Message<'t>) {
        self.check(a);
        self.check(b);
        assert_ne!(a.index, b.index, "get_pair_mut: same instance twice");
        if a.index < b.index {
            let (lo, hi) = self.messages.split_at_mut(b.index);
            (&mut lo[a.index], &mut hi[0])
        } else {
            let (lo, hi) = self.messages.split_at_mut(a.index);
            (&mut hi[0], &mut lo[b.index])
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Release every instance. Handles issued before the reset must not be reused.
    pub fn reset(&mut self) {
        tracing::trace!(arena = self.id.0, count = self.messages.len(), "arena released");
        for msg in &mut self.messages {
            msg.set_allocation(Allocation::Owned);
        }
        self.messages.clear();
        self.id = ArenaId::next();
    }
}

impl Default for Arena<'_> {
    fn default() -> Self {
        Arena::new()
    }
}

impl Drop for Arena<'_> {
    fn drop(&mut self) {
        self.reset();
    }
}
