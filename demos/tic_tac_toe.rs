extern crate ttt_minimax;

use std::env;
use ttt_minimax::board::Symbol;
use ttt_minimax::difficulty::{Difficulty, MoveSource, choose_move_with_source};
use ttt_minimax::engine::Engine;
use ttt_minimax::outcome::GameOutcome;
use ttt_minimax::random::{RandomGenerator, StandardRandomGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ttt_minimax::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Difficulty for X, e.g. `cargo run --example tic_tac_toe -- easy`
    let x_difficulty = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => Difficulty::Medium,
    };
    let o_difficulty = Difficulty::Hard;

    let mut rng = StandardRandomGenerator::default();
    let outcome = play_game(x_difficulty, o_difficulty, &mut rng)?;
    println!("X ({x_difficulty}) vs O ({o_difficulty}): {outcome:?}");
    Ok(())
}

/// Plays one game between two computer players and prints every move.
fn play_game<R: RandomGenerator>(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut R,
) -> Result<GameOutcome, ttt_minimax::Error> {
    let mut engine = Engine::new();

    while !engine.is_terminal() {
        let player = engine.current_player();
        let difficulty = match player {
            Symbol::X => x_difficulty,
            Symbol::O => o_difficulty,
        };

        let choice = choose_move_with_source(engine.board(), difficulty, rng)?;
        engine.apply_move(choice.action)?;

        let how = match choice.source {
            MoveSource::Random => "random",
            MoveSource::Minimax => "minimax",
        };
        println!("{player} plays {} ({how})", choice.action);
        println!("{}\n", engine.board());
    }

    Ok(engine.outcome())
}
