//! Queue module - the circular next-piece queue
//!
//! A fixed backing store of `QUEUE_SLOTS` slots with wraparound front/back
//! indices. One slot always stays unused: `front == back` means empty, and
//! the queue is full at `QUEUE_SLOTS - 1` pieces. This is the classic
//! two-index ring scheme that needs no separate length counter.

use crate::types::{Piece, QUEUE_CAPACITY, QUEUE_SLOTS};

/// Fixed-capacity FIFO of upcoming pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQueue {
    /// Slots in `[front, back)` (circularly) are `Some`; the rest stay `None`.
    slots: [Option<Piece>; QUEUE_SLOTS],
    /// Read end: index of the front piece when non-empty.
    front: usize,
    /// Write end: index the next enqueue stores into.
    back: usize,
}

impl NextQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_SLOTS],
            front: 0,
            back: 0,
        }
    }

    /// Number of queued pieces.
    pub fn len(&self) -> usize {
        (self.back + QUEUE_SLOTS - self.front) % QUEUE_SLOTS
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Full one piece short of the backing store.
    pub fn is_full(&self) -> bool {
        self.len() == QUEUE_CAPACITY
    }

    /// Maximum number of pieces the queue can hold.
    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    /// Append a piece at the back.
    ///
    /// Returns false (and stores nothing) when the queue is full.
    pub fn enqueue(&mut self, piece: Piece) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % QUEUE_SLOTS;
        true
    }

    /// Remove and return the front piece, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.front].take();
        self.front = (self.front + 1) % QUEUE_SLOTS;
        debug_assert!(piece.is_some(), "slot inside [front, back) must be occupied");
        piece
    }

    /// The front piece without removing it.
    pub fn peek_front(&self) -> Option<Piece> {
        self.get(0)
    }

    /// The n-th piece from the front (0 = front).
    pub fn get(&self, n: usize) -> Option<Piece> {
        if n >= self.len() {
            return None;
        }
        self.slots[(self.front + n) % QUEUE_SLOTS]
    }

    /// Mutable access to the n-th piece from the front (0 = front).
    ///
    /// The swap actions use this to exchange piece values in place without
    /// moving any other slot.
    pub fn get_mut(&mut self, n: usize) -> Option<&mut Piece> {
        if n >= self.len() {
            return None;
        }
        self.slots[(self.front + n) % QUEUE_SLOTS].as_mut()
    }

    /// Iterate the queued pieces front to back, without mutation.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len()).filter_map(move |n| self.get(n))
    }
}

impl Default for NextQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::T, id)
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = NextQueue::new();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), QUEUE_CAPACITY);
        assert_eq!(queue.peek_front(), None);
    }

    #[test]
    fn test_enqueue_dequeue_fifo_order() {
        let mut queue = NextQueue::new();
        for id in 0..3 {
            assert!(queue.enqueue(piece(id)));
        }

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some(piece(0)));
        assert_eq!(queue.dequeue(), Some(piece(1)));
        assert_eq!(queue.dequeue(), Some(piece(2)));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_full_at_one_less_than_backing_store() {
        let mut queue = NextQueue::new();
        for id in 0..QUEUE_CAPACITY as u32 {
            assert!(queue.enqueue(piece(id)));
        }

        assert!(queue.is_full());
        assert_eq!(queue.len(), QUEUE_SLOTS - 1);

        // The fifth enqueue is refused and changes nothing.
        assert!(!queue.enqueue(piece(99)));
        assert_eq!(queue.len(), QUEUE_CAPACITY);
        assert_eq!(queue.get(QUEUE_CAPACITY - 1), Some(piece(3)));
    }

    #[test]
    fn test_dequeue_empty_returns_none() {
        let mut queue = NextQueue::new();
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_wraparound_reuses_freed_slots() {
        let mut queue = NextQueue::new();
        for id in 0..QUEUE_CAPACITY as u32 {
            queue.enqueue(piece(id));
        }

        // Cycle well past the backing store size; order must stay FIFO and
        // the queue must accept a new piece after every dequeue.
        for id in QUEUE_CAPACITY as u32..40 {
            let expected_front = id - QUEUE_CAPACITY as u32;
            assert_eq!(queue.dequeue(), Some(piece(expected_front)));
            assert!(queue.enqueue(piece(id)));
            assert!(queue.is_full());
        }
    }

    #[test]
    fn test_get_is_front_relative() {
        let mut queue = NextQueue::new();
        for id in 0..3 {
            queue.enqueue(piece(id));
        }
        // Rotate so front is no longer slot 0.
        queue.dequeue();
        queue.enqueue(piece(3));

        assert_eq!(queue.get(0), Some(piece(1)));
        assert_eq!(queue.get(1), Some(piece(2)));
        assert_eq!(queue.get(2), Some(piece(3)));
        assert_eq!(queue.get(3), None);
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut queue = NextQueue::new();
        queue.enqueue(piece(0));
        queue.enqueue(piece(1));

        if let Some(front) = queue.get_mut(0) {
            *front = Piece::new(PieceKind::I, 42);
        }
        assert_eq!(queue.peek_front(), Some(Piece::new(PieceKind::I, 42)));
        assert_eq!(queue.get(1), Some(piece(1)));
        assert!(queue.get_mut(2).is_none());
    }

    #[test]
    fn test_iter_walks_front_to_back() {
        let mut queue = NextQueue::new();
        for id in 0..QUEUE_CAPACITY as u32 {
            queue.enqueue(piece(id));
        }
        queue.dequeue();
        queue.enqueue(piece(4));

        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        // Iteration does not consume.
        assert_eq!(queue.len(), 4);
    }
}
