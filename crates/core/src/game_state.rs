//! Game state module - the queue, the stack, and the five player actions
//!
//! All mutable state lives in [`GameState`]: the circular next-piece queue,
//! the reserve stack, and the piece factory with its id counter. Every action
//! checks its preconditions before touching anything, so a refused action
//! leaves the state exactly as it was. Nothing here performs I/O; callers
//! render outcomes and snapshots.

use arrayvec::ArrayVec;
use log::debug;

use crate::outcome::{ActionError, ActionOutcome};
use crate::queue::NextQueue;
use crate::rng::PieceFactory;
use crate::snapshot::GameSnapshot;
use crate::stack::ReserveStack;
use crate::types::{GameAction, Piece, QUEUE_CAPACITY, SWAP_BLOCK};

/// Complete game state: both containers plus the piece source.
///
/// Operations take `&mut self` and run to completion; the type holds no
/// internal synchronization and assumes a single caller.
#[derive(Debug, Clone)]
pub struct GameState {
    queue: NextQueue,
    stack: ReserveStack,
    factory: PieceFactory,
}

impl GameState {
    /// Create a fresh game with the given RNG seed.
    ///
    /// Both containers start empty; call [`start`](Self::start) to establish
    /// the filled-queue steady state.
    pub fn new(seed: u32) -> Self {
        Self {
            queue: NextQueue::new(),
            stack: ReserveStack::new(),
            factory: PieceFactory::new(seed),
        }
    }

    /// Fill the queue to capacity and return the pieces that were enqueued.
    ///
    /// The game keeps the queue full as its steady state; this establishes
    /// it. Safe to call again: only free room is filled, so a second call on
    /// a running game returns an empty list.
    pub fn start(&mut self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        let mut added = ArrayVec::new();
        while !self.queue.is_full() {
            let piece = self.factory.generate();
            self.queue.enqueue(piece);
            added.push(piece);
        }
        added
    }

    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Id the next generated piece will receive.
    pub fn next_piece_id(&self) -> u32 {
        self.factory.next_id()
    }

    /// Apply one player action.
    ///
    /// Success mutates the state and describes what happened; failure changes
    /// nothing and says why. Either way the call runs to completion before
    /// returning, so state is always consistent between calls.
    pub fn apply_action(&mut self, action: GameAction) -> Result<ActionOutcome, ActionError> {
        let result = match action {
            GameAction::Play => self.play(),
            GameAction::Reserve => self.reserve(),
            GameAction::UseReserved => self.use_reserved(),
            GameAction::SwapSingle => self.swap_single(),
            GameAction::SwapMultiple => self.swap_multiple(),
        };

        match &result {
            Ok(outcome) => debug!("{}: {:?}", action.label(), outcome),
            Err(err) => debug!("{} refused: {}", action.label(), err),
        }
        result
    }

    /// Write a render view of the current state into `out`.
    ///
    /// Callers can keep one snapshot and refresh it every iteration; nothing
    /// here allocates.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        for piece in self.queue.iter() {
            out.queue.push(piece);
        }
        for piece in self.stack.iter_top_down() {
            out.stack.push(piece);
        }
        out.next_piece_id = self.factory.next_id();
    }

    /// Convenience helper that builds a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Play the front piece: dequeue, consume, refill.
    fn play(&mut self) -> Result<ActionOutcome, ActionError> {
        let piece = self.queue.dequeue().ok_or(ActionError::QueueEmpty)?;
        let refill = self.refill();
        Ok(ActionOutcome::Played { piece, refill })
    }

    /// Move the front piece onto the reserve stack, then refill the queue.
    ///
    /// The stack is checked first so a full stack refuses the action before
    /// any dequeue happens.
    fn reserve(&mut self) -> Result<ActionOutcome, ActionError> {
        if self.stack.is_full() {
            return Err(ActionError::StackFull);
        }
        let piece = self.queue.dequeue().ok_or(ActionError::QueueEmpty)?;
        // Cannot be refused: fullness was checked above.
        self.stack.push(piece);
        let refill = self.refill();
        Ok(ActionOutcome::Reserved { piece, refill })
    }

    /// Use the piece on top of the reserve stack.
    fn use_reserved(&mut self) -> Result<ActionOutcome, ActionError> {
        let piece = self.stack.pop().ok_or(ActionError::StackEmpty)?;
        Ok(ActionOutcome::UsedReserve { piece })
    }

    /// Exchange the queue's front piece with the stack's top piece.
    ///
    /// Both containers keep their sizes; only the two slot values move.
    fn swap_single(&mut self) -> Result<ActionOutcome, ActionError> {
        let (Some(front), Some(top)) = (self.queue.get_mut(0), self.stack.get_mut(0)) else {
            return Err(ActionError::SwapNeedsBoth);
        };

        let report = ActionOutcome::SwappedFront {
            from_queue: *front,
            from_stack: *top,
        };
        std::mem::swap(front, top);
        Ok(report)
    }

    /// Exchange the first three queue pieces with the stack's top three.
    ///
    /// Pairing: the piece `i` slots behind the queue front exchanges with the
    /// piece `i` slots above the bottom of the stack's top three. The queue
    /// front therefore lands at the bottom of that block and the stack's
    /// third-from-top lands at the queue front.
    fn swap_multiple(&mut self) -> Result<ActionOutcome, ActionError> {
        let (queue_len, stack_len) = (self.queue.len(), self.stack.len());
        if queue_len < SWAP_BLOCK || stack_len < SWAP_BLOCK {
            return Err(ActionError::SwapBlockTooSmall {
                queue_len,
                stack_len,
            });
        }

        for i in 0..SWAP_BLOCK {
            // Depth below the top: 2, 1, 0 as i walks away from the front.
            let depth = SWAP_BLOCK - 1 - i;
            if let (Some(queued), Some(reserved)) =
                (self.queue.get_mut(i), self.stack.get_mut(depth))
            {
                std::mem::swap(queued, reserved);
            }
        }
        Ok(ActionOutcome::SwappedBlock {
            queue_len,
            stack_len,
        })
    }

    /// Enqueue one freshly generated piece after a successful dequeue.
    ///
    /// Returns the piece, or `None` when the queue had no room. A dequeue
    /// frees a slot, so the `None` path stays theoretical in the normal
    /// action flow; nothing is generated (and no id is consumed) on refusal.
    fn refill(&mut self) -> Option<Piece> {
        if self.queue.is_full() {
            return None;
        }
        let piece = self.factory.generate();
        self.queue.enqueue(piece);
        Some(piece)
    }
}
