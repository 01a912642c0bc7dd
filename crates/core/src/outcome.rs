//! Outcome module - what an action did, or why it was refused
//!
//! Every player action resolves to either an [`ActionOutcome`] (state
//! changed, here is what happened) or an [`ActionError`] (a precondition
//! refused the action and nothing changed). The error `Display` text is the
//! user-facing report line; the presentation layer adds the action tag.

use thiserror::Error;

use crate::types::Piece;

/// Successful result of one applied action.
///
/// Pieces are captured by value at the moment of the action, so reports stay
/// accurate even after later mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Front piece dequeued and consumed; `refill` is the piece enqueued in
    /// its place, or `None` when the queue had no room for the refill.
    Played { piece: Piece, refill: Option<Piece> },
    /// Front piece moved onto the reserve stack, queue refilled as above.
    Reserved { piece: Piece, refill: Option<Piece> },
    /// Top of the reserve stack popped and consumed.
    UsedReserve { piece: Piece },
    /// Queue front exchanged with stack top; fields hold the values as they
    /// were before the exchange.
    SwappedFront { from_queue: Piece, from_stack: Piece },
    /// First three queue pieces exchanged with the stack's top three.
    SwappedBlock { queue_len: usize, stack_len: usize },
}

/// Why an action was refused. None of these mutate any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the next-piece queue is empty")]
    QueueEmpty,
    #[error("the reserve stack is full")]
    StackFull,
    #[error("the reserve stack is empty")]
    StackEmpty,
    #[error("both the queue and the reserve stack must be non-empty to swap")]
    SwapNeedsBoth,
    #[error(
        "at least 3 pieces are needed on each side (queue {queue_len}/3, stack {stack_len}/3)"
    )]
    SwapBlockTooSmall { queue_len: usize, stack_len: usize },
}
