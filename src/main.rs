//! Menu-driven piece manager (default binary).
//!
//! Reads menu codes from stdin, applies the chosen action, and prints the
//! report followed by the full container state. A seed can be passed as the
//! first argument to reproduce a session; otherwise the clock seeds the run.

use std::env;
use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::info;

use tetris_stack::core::{GameSnapshot, GameState};
use tetris_stack::term::{ConsoleRenderer, GameView};
use tetris_stack::types::MenuChoice;

fn main() -> Result<()> {
    env_logger::init();

    let seed = seed_from_args().unwrap_or_else(clock_seed);
    info!("starting with seed {seed}");

    let stdin = io::stdin();
    run(seed, &mut stdin.lock())
}

fn run(seed: u32, input: &mut impl BufRead) -> Result<()> {
    let mut term = ConsoleRenderer::new();
    let view = GameView::new();

    let mut game = GameState::new(seed);
    let mut snap = GameSnapshot::default();
    let mut lines = Vec::new();

    view.banner_into(seed, &mut lines);
    let added = game.start();
    view.pieces_entered_into(&added, &mut lines);
    term.render(&lines)?;

    let mut buf = String::new();
    loop {
        lines.clear();
        game.snapshot_into(&mut snap);
        view.state_into(&snap, &mut lines);
        view.menu_into(&mut lines);
        term.render(&lines)?;
        term.prompt("Option: ")?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            // End of input quits like a 0 would.
            break;
        }

        lines.clear();
        match MenuChoice::parse(&buf) {
            Some(MenuChoice::Quit) => break,
            Some(MenuChoice::Action(action)) => match game.apply_action(action) {
                Ok(outcome) => view.outcome_into(&outcome, &mut lines),
                Err(err) => view.refusal_into(&err, &mut lines),
            },
            None => view.invalid_choice_into(&mut lines),
        }
        term.render(&lines)?;
    }

    lines.clear();
    view.farewell_into(&mut lines);
    term.render(&lines)?;
    Ok(())
}

fn seed_from_args() -> Option<u32> {
    env::args().nth(1)?.parse().ok()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
