//! Shared types for the Tetris Stack piece manager.
//!
//! This crate defines the vocabulary used by every other crate: piece kinds
//! and identities, the menu actions a player can take, and the fixed container
//! sizes. All types are plain data structures with no external dependencies,
//! making them usable in any context (core logic, rendering, tests).
//!
//! # Container sizes
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_SLOTS` | 5 | Backing slots of the circular next-piece queue |
//! | `QUEUE_CAPACITY` | 4 | Usable queue capacity (one slot stays reserved) |
//! | `STACK_CAPACITY` | 3 | Capacity of the reserve stack |
//! | `SWAP_BLOCK` | 3 | Pieces exchanged by the block-swap action |
//!
//! The queue keeps one backing slot unused so that `front == back` always
//! means "empty" and never "full" under wraparound indexing.
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{GameAction, MenuChoice, Piece, PieceKind};
//!
//! // Menu input maps to actions by code.
//! assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Action(GameAction::Play)));
//! assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Quit));
//! assert_eq!(MenuChoice::parse("nope"), None);
//!
//! // Pieces render the way the game reports them.
//! let piece = Piece::new(PieceKind::T, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//! ```

use std::fmt;

/// Backing slots of the circular next-piece queue.
pub const QUEUE_SLOTS: usize = 5;

/// Usable queue capacity.
///
/// One backing slot is reserved to distinguish a full queue from an empty one
/// using only the front/back indices.
pub const QUEUE_CAPACITY: usize = QUEUE_SLOTS - 1;

/// Capacity of the reserve stack.
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged by the block-swap action.
pub const SWAP_BLOCK: usize = 3;

/// The four tetromino kinds this game deals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// The generation alphabet, in draw order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Single-letter display form.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::L.as_char(), 'L');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// Parse a piece kind from its letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One game tile: a kind plus a unique identity.
///
/// Identity is the `id`; ids are assigned monotonically at creation and never
/// reused within a run. Swapping pieces between containers moves whole values,
/// so a kind and its id always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// The five player actions, keyed by menu code 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Dequeue the front piece and play it; the queue is refilled.
    Play,
    /// Move the front piece onto the reserve stack; the queue is refilled.
    Reserve,
    /// Pop the top of the reserve stack and use that piece.
    UseReserved,
    /// Exchange the queue's front piece with the stack's top piece.
    SwapSingle,
    /// Exchange the first three queue pieces with the stack's top three.
    SwapMultiple,
}

impl GameAction {
    /// Every action, in menu order.
    pub const ALL: [GameAction; 5] = [
        GameAction::Play,
        GameAction::Reserve,
        GameAction::UseReserved,
        GameAction::SwapSingle,
        GameAction::SwapMultiple,
    ];

    /// Menu code for this action.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::GameAction;
    ///
    /// assert_eq!(GameAction::Play.code(), 1);
    /// assert_eq!(GameAction::SwapMultiple.code(), 5);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            GameAction::Play => 1,
            GameAction::Reserve => 2,
            GameAction::UseReserved => 3,
            GameAction::SwapSingle => 4,
            GameAction::SwapMultiple => 5,
        }
    }

    /// Map a menu code back to an action.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(GameAction::Play),
            2 => Some(GameAction::Reserve),
            3 => Some(GameAction::UseReserved),
            4 => Some(GameAction::SwapSingle),
            5 => Some(GameAction::SwapMultiple),
            _ => None,
        }
    }

    /// Short uppercase tag used in action reports.
    pub fn label(&self) -> &'static str {
        match self {
            GameAction::Play => "PLAY",
            GameAction::Reserve => "RESERVE",
            GameAction::UseReserved => "USE RESERVE",
            GameAction::SwapSingle => "SINGLE SWAP",
            GameAction::SwapMultiple => "BLOCK SWAP",
        }
    }

    /// Menu wording for this action.
    pub fn description(&self) -> &'static str {
        match self {
            GameAction::Play => "Play the front piece",
            GameAction::Reserve => "Reserve the front piece",
            GameAction::UseReserved => "Use the reserved piece",
            GameAction::SwapSingle => "Swap the front piece with the reserve top",
            GameAction::SwapMultiple => "Swap the first three pieces with the reserve",
        }
    }
}

/// A parsed line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Action(GameAction),
    Quit,
}

impl MenuChoice {
    /// Parse one line of user input into a menu choice.
    ///
    /// Whitespace is trimmed; `0` quits, `1`-`5` select an action. Anything
    /// else, including non-numeric input, yields `None` and is handled as an
    /// invalid option by the caller.
    pub fn parse(line: &str) -> Option<Self> {
        let code: i64 = line.trim().parse().ok()?;
        match code {
            0 => Some(MenuChoice::Quit),
            1..=5 => GameAction::from_code(code as u8).map(MenuChoice::Action),
            _ => None,
        }
    }
}
