//! Stack module - the bounded reserve stack
//!
//! A fixed backing store of `STACK_CAPACITY` slots and a length field. Pushes
//! grow toward higher indices, so slot `len - 1` is the top; an empty stack is
//! simply `len == 0`.

use crate::types::{Piece, STACK_CAPACITY};

/// Fixed-capacity LIFO of reserved pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    /// Slots below `len` are `Some`; the rest stay `None`.
    slots: [Option<Piece>; STACK_CAPACITY],
    len: usize,
}

impl ReserveStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            slots: [None; STACK_CAPACITY],
            len: 0,
        }
    }

    /// Number of reserved pieces.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == STACK_CAPACITY
    }

    /// Maximum number of pieces the stack can hold.
    pub fn capacity(&self) -> usize {
        STACK_CAPACITY
    }

    /// Push a piece onto the top.
    ///
    /// Returns false (and stores nothing) when the stack is full.
    pub fn push(&mut self, piece: Piece) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        true
    }

    /// Remove and return the top piece, or `None` when empty.
    pub fn pop(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let piece = self.slots[self.len].take();
        debug_assert!(piece.is_some(), "slot below len must be occupied");
        piece
    }

    /// The top piece without removing it.
    pub fn peek_top(&self) -> Option<Piece> {
        self.get(0)
    }

    /// The piece `depth` slots below the top (0 = top).
    pub fn get(&self, depth: usize) -> Option<Piece> {
        if depth >= self.len {
            return None;
        }
        self.slots[self.len - 1 - depth]
    }

    /// Mutable access to the piece `depth` slots below the top (0 = top).
    ///
    /// The swap actions use this to exchange piece values in place.
    pub fn get_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        if depth >= self.len {
            return None;
        }
        self.slots[self.len - 1 - depth].as_mut()
    }

    /// Iterate the reserved pieces top to bottom, without mutation.
    pub fn iter_top_down(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |depth| self.get(depth))
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}
