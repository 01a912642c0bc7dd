//! GameView: maps game state and action outcomes into console lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::core::{ActionError, ActionOutcome, GameSnapshot};
use crate::types::{GameAction, Piece, QUEUE_CAPACITY, STACK_CAPACITY, SWAP_BLOCK};

const RULE_WIDTH: usize = 44;

/// How a line should be styled when the output is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Ordinary text.
    Plain,
    /// Section headers and rules.
    Heading,
    /// Announcements the game makes on its own (pieces entering the queue).
    System,
    /// Report of an action that went through.
    Success,
    /// Refused action or invalid input.
    Warning,
}

/// One line of console output with its styling class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Plain,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Heading,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::System,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Warning,
            text: text.into(),
        }
    }
}

/// Builds every block of console output the game shows.
///
/// All methods push [`Line`]s into a caller-owned buffer, so one `Vec<Line>`
/// can be cleared and refilled every menu iteration.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Opening banner with the RNG seed for reproducing a session.
    pub fn banner_into(&self, seed: u32, out: &mut Vec<Line>) {
        out.push(Line::heading("Tetris piece manager"));
        out.push(Line::plain(format!("seed: {seed}")));
    }

    /// Announce pieces that entered the queue outside of a player action.
    pub fn pieces_entered_into(&self, pieces: &[Piece], out: &mut Vec<Line>) {
        for piece in pieces {
            out.push(Line::system(format!(">> piece {piece} entered the queue")));
        }
    }

    /// The full state block: both containers with their markers and counts.
    pub fn state_into(&self, snap: &GameSnapshot, out: &mut Vec<Line>) {
        out.push(Line::heading(titled_rule("PIECES")));
        out.push(Line::plain(format!(
            "Queue (front -> back)  (pieces: {}/{}):",
            snap.queue.len(),
            QUEUE_CAPACITY
        )));
        out.push(Line::plain(lineup('F', &snap.queue)));
        out.push(Line::plain(format!(
            "Stack (top -> bottom)  (pieces: {}/{}):",
            snap.stack.len(),
            STACK_CAPACITY
        )));
        out.push(Line::plain(lineup('T', &snap.stack)));
        out.push(Line::heading("=".repeat(RULE_WIDTH)));
    }

    /// The action menu, one numbered option per line plus quit.
    pub fn menu_into(&self, out: &mut Vec<Line>) {
        out.push(Line::heading("Choose an action:"));
        for action in GameAction::ALL {
            out.push(Line::plain(format!(
                "  {} - {}",
                action.code(),
                action.description()
            )));
        }
        out.push(Line::plain("  0 - Quit"));
    }

    /// Report a successful action, including any queue refill it triggered.
    pub fn outcome_into(&self, outcome: &ActionOutcome, out: &mut Vec<Line>) {
        match outcome {
            ActionOutcome::Played { piece, refill } => {
                out.push(Line::success(format!("Played piece {piece}")));
                self.refill_into(*refill, out);
            }
            ActionOutcome::Reserved { piece, refill } => {
                out.push(Line::success(format!("Reserved piece {piece}")));
                self.refill_into(*refill, out);
            }
            ActionOutcome::UsedReserve { piece } => {
                out.push(Line::success(format!("Used reserved piece {piece}")));
            }
            ActionOutcome::SwappedFront {
                from_queue,
                from_stack,
            } => {
                out.push(Line::success(format!(
                    "Swapped queue front {from_queue} with reserve top {from_stack}"
                )));
            }
            ActionOutcome::SwappedBlock { .. } => {
                out.push(Line::success(format!(
                    "Swapped the front {SWAP_BLOCK} queue pieces with the top {SWAP_BLOCK} reserved pieces"
                )));
            }
        }
    }

    /// Report a refused action.
    pub fn refusal_into(&self, err: &ActionError, out: &mut Vec<Line>) {
        out.push(Line::warning(format!("Action refused: {err}")));
    }

    /// Report input that is not a menu code.
    pub fn invalid_choice_into(&self, out: &mut Vec<Line>) {
        out.push(Line::warning("Invalid option, enter a number from 0 to 5"));
    }

    pub fn farewell_into(&self, out: &mut Vec<Line>) {
        out.push(Line::plain("Exiting..."));
    }

    fn refill_into(&self, refill: Option<Piece>, out: &mut Vec<Line>) {
        match refill {
            Some(piece) => out.push(Line::system(format!(">> piece {piece} entered the queue"))),
            None => out.push(Line::warning(
                "The queue was full, no replacement piece was added",
            )),
        }
    }
}

/// A `=` rule with a centered title, always `RULE_WIDTH` wide.
fn titled_rule(title: &str) -> String {
    let pad = RULE_WIDTH.saturating_sub(title.len() + 2);
    let left = pad / 2;
    let right = pad - left;
    format!("{} {title} {}", "=".repeat(left), "=".repeat(right))
}

/// One container's contents: marker before the first piece, `[empty]` when
/// there is none.
fn lineup(marker: char, pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return String::from("  [empty]");
    }
    let mut text = format!("  ({marker})");
    for piece in pieces {
        let _ = write!(text, " {piece}");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn snapshot(queue: &[(PieceKind, u32)], stack: &[(PieceKind, u32)]) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        for &(kind, id) in queue {
            snap.queue.push(Piece::new(kind, id));
        }
        for &(kind, id) in stack {
            snap.stack.push(Piece::new(kind, id));
        }
        snap
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_state_block_shows_markers_and_counts() {
        let snap = snapshot(
            &[
                (PieceKind::T, 3),
                (PieceKind::I, 4),
                (PieceKind::O, 5),
                (PieceKind::L, 6),
            ],
            &[(PieceKind::I, 2), (PieceKind::O, 1)],
        );

        let mut lines = Vec::new();
        GameView::new().state_into(&snap, &mut lines);

        let texts = texts(&lines);
        assert_eq!(texts[1], "Queue (front -> back)  (pieces: 4/4):");
        assert_eq!(texts[2], "  (F) [T 3] [I 4] [O 5] [L 6]");
        assert_eq!(texts[3], "Stack (top -> bottom)  (pieces: 2/3):");
        assert_eq!(texts[4], "  (T) [I 2] [O 1]");
    }

    #[test]
    fn test_state_block_marks_empty_containers() {
        let snap = snapshot(&[], &[]);

        let mut lines = Vec::new();
        GameView::new().state_into(&snap, &mut lines);

        let texts = texts(&lines);
        assert_eq!(texts[1], "Queue (front -> back)  (pieces: 0/4):");
        assert_eq!(texts[2], "  [empty]");
        assert_eq!(texts[4], "  [empty]");
    }

    #[test]
    fn test_rules_are_uniform_width() {
        let mut lines = Vec::new();
        GameView::new().state_into(&snapshot(&[], &[]), &mut lines);

        assert_eq!(lines[0].kind, LineKind::Heading);
        assert_eq!(lines[0].text.chars().count(), RULE_WIDTH);
        assert_eq!(lines[5].text.chars().count(), RULE_WIDTH);
    }

    #[test]
    fn test_menu_lists_all_actions_and_quit() {
        let mut lines = Vec::new();
        GameView::new().menu_into(&mut lines);

        // Heading plus five actions plus quit.
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1].text, "  1 - Play the front piece");
        assert_eq!(lines[6].text, "  0 - Quit");
    }

    #[test]
    fn test_play_outcome_reports_piece_and_refill() {
        let outcome = ActionOutcome::Played {
            piece: Piece::new(PieceKind::T, 0),
            refill: Some(Piece::new(PieceKind::I, 4)),
        };

        let mut lines = Vec::new();
        GameView::new().outcome_into(&outcome, &mut lines);

        assert_eq!(lines[0].kind, LineKind::Success);
        assert_eq!(lines[0].text, "Played piece [T 0]");
        assert_eq!(lines[1].kind, LineKind::System);
        assert_eq!(lines[1].text, ">> piece [I 4] entered the queue");
    }

    #[test]
    fn test_missing_refill_is_reported_as_warning() {
        let outcome = ActionOutcome::Played {
            piece: Piece::new(PieceKind::T, 0),
            refill: None,
        };

        let mut lines = Vec::new();
        GameView::new().outcome_into(&outcome, &mut lines);

        assert_eq!(lines[1].kind, LineKind::Warning);
        assert_eq!(lines[1].text, "The queue was full, no replacement piece was added");
    }

    #[test]
    fn test_swap_outcome_names_both_pieces() {
        let outcome = ActionOutcome::SwappedFront {
            from_queue: Piece::new(PieceKind::L, 3),
            from_stack: Piece::new(PieceKind::O, 1),
        };

        let mut lines = Vec::new();
        GameView::new().outcome_into(&outcome, &mut lines);

        assert_eq!(
            lines[0].text,
            "Swapped queue front [L 3] with reserve top [O 1]"
        );
    }

    #[test]
    fn test_refusal_uses_the_error_message() {
        let mut lines = Vec::new();
        GameView::new().refusal_into(&ActionError::StackFull, &mut lines);

        assert_eq!(lines[0].kind, LineKind::Warning);
        assert_eq!(lines[0].text, "Action refused: the reserve stack is full");
    }

    #[test]
    fn test_piece_announcements_one_line_each() {
        let pieces = [Piece::new(PieceKind::I, 0), Piece::new(PieceKind::T, 1)];

        let mut lines = Vec::new();
        GameView::new().pieces_entered_into(&pieces, &mut lines);

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.kind == LineKind::System));
        assert_eq!(lines[0].text, ">> piece [I 0] entered the queue");
    }
}
