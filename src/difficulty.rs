use crate::board::{Action, Board};
use crate::error::{Error, Result};
use crate::minimax::minimax;
use crate::moves::actions;
use crate::outcome::terminal;
use crate::random::RandomGenerator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Number of distinct values of the per-move difficulty roll (`0..=10`).
pub const RANDOM_ROLL_RANGE: usize = 11;

/// How often the computer plays a random legal move instead of the optimal one.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random on roughly six moves out of eleven.
    Easy,
    /// Random on roughly three moves out of eleven.
    Medium,
    /// Always optimal, apart from the opening move.
    #[default]
    Hard,
}

impl Difficulty {
    /// A roll below this value makes the move random.
    pub fn random_threshold(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 3,
            Difficulty::Hard => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::InvalidDifficulty {
                input: s.to_string(),
            }),
        }
    }
}

/// Which path produced a computer move.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MoveSource {
    /// Uniform pick among the legal actions.
    Random,
    /// Full minimax search.
    Minimax,
}

/// A computer move together with the path that produced it.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct MoveChoice {
    pub action: Action,
    pub source: MoveSource,
}

/// Decides whether the next computer move on `board` should be random.
///
/// The opening move on an empty board is always random, whatever the difficulty. Otherwise one
/// value is drawn from `0..RANDOM_ROLL_RANGE` and compared against
/// [`Difficulty::random_threshold`].
pub fn is_random_move<R: RandomGenerator>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> bool {
    if board.is_empty_board() {
        return true;
    }

    let roll = rng.next_range(0, RANDOM_ROLL_RANGE);
    let random = roll < difficulty.random_threshold();
    trace!(%difficulty, roll, random, "difficulty roll");
    random
}

/// Picks one of the legal actions on `board` uniformly at random.
///
/// Fails with [`Error::PreconditionViolation`] on a full board, and with
/// [`Error::RandomOutOfRange`] if `rng` returns an index past the end of the legal actions.
pub fn random_action<R: RandomGenerator>(board: &Board, rng: &mut R) -> Result<Action> {
    let legal = actions(board);
    if legal.is_empty() {
        return Err(Error::PreconditionViolation {
            operation: "random_action",
        });
    }

    let index = rng.next_range(0, legal.len());
    legal.get(index).copied().ok_or(Error::RandomOutOfRange {
        value: index,
        bound: legal.len(),
    })
}

/// Chooses the computer's next action, substituting a random one as often as `difficulty` asks.
pub fn choose_move<R: RandomGenerator>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Action> {
    choose_move_with_source(board, difficulty, rng).map(|choice| choice.action)
}

/// Same as [`choose_move`], also reporting whether the move was random.
pub fn choose_move_with_source<R: RandomGenerator>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<MoveChoice> {
    if terminal(board) {
        return Err(Error::PreconditionViolation {
            operation: "choose_move",
        });
    }

    let choice = if is_random_move(board, difficulty, rng) {
        MoveChoice {
            action: random_action(board, rng)?,
            source: MoveSource::Random,
        }
    } else {
        MoveChoice {
            action: minimax(board)?,
            source: MoveSource::Minimax,
        }
    };
    debug!(%difficulty, action = %choice.action, source = ?choice.source, "computer move chosen");
    Ok(choice)
}
