//! Snapshot module - read-only render views of the game state

use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Everything the presentation layer needs to draw one state report.
///
/// Views are detached copies in render order; holding a snapshot never
/// borrows the live containers. The bounded `ArrayVec`s keep this type
/// allocation-free so a caller can reuse one snapshot across iterations via
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    /// Queued pieces, front first.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Reserved pieces, top first.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    /// Id the next generated piece will receive.
    pub next_piece_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.next_piece_id = 0;
    }
}
