use crate::board::{Action, Board, Symbol};
use crate::difficulty::{Difficulty, choose_move};
use crate::error::Result;
use crate::moves::actions;
use crate::outcome::{GameOutcome, outcome, terminal, winner};
use crate::random::RandomGenerator;
use tracing::{debug, instrument};

/// The game state a front end drives: the authoritative board and the configured difficulty.
///
/// The board only changes through [`Engine::apply_move`], [`Engine::play_computer_move`] and
/// [`Engine::reset`]. A reset also restores the default difficulty; pick the level for the next
/// game with [`Engine::set_difficulty`] after resetting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    difficulty: Difficulty,
}

/// A builder for creating instances of `Engine`.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    board: Board,
    difficulty: Difficulty,
}

impl EngineBuilder {
    /// Creates a builder with an empty board and the default difficulty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the difficulty used by [`Engine::choose_move`].
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Starts from the given position instead of an empty board.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            board: self.board,
            difficulty: self.difficulty,
        }
    }
}

impl Engine {
    /// Returns a new builder for `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Creates an engine with an empty board and the default difficulty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the board and restores the default difficulty for a new game.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.difficulty = Difficulty::default();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Sets the difficulty for the current game.
    ///
    /// Callers holding a level name as text should parse it with `str::parse::<Difficulty>`,
    /// which fails with [`Error::InvalidDifficulty`](crate::error::Error::InvalidDifficulty) for
    /// unknown names.
    #[instrument(level = "debug", skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn current_player(&self) -> Symbol {
        self.board.player()
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        actions(&self.board)
    }

    /// Marks `action` for the player to move. The board is unchanged on error.
    #[instrument(level = "debug", skip(self), err)]
    pub fn apply_move(&mut self, action: Action) -> Result<()> {
        self.board.make_move(action)
    }

    pub fn is_terminal(&self) -> bool {
        terminal(&self.board)
    }

    pub fn winner(&self) -> Option<Symbol> {
        winner(&self.board)
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board)
    }

    /// Chooses the computer's next action under the configured difficulty without applying it.
    pub fn choose_move<R: RandomGenerator>(&self, rng: &mut R) -> Result<Action> {
        choose_move(&self.board, self.difficulty, rng)
    }

    /// Chooses the computer's next action and applies it, returning the action played.
    pub fn play_computer_move<R: RandomGenerator>(&mut self, rng: &mut R) -> Result<Action> {
        let player = self.current_player();
        let action = self.choose_move(rng)?;
        self.apply_move(action)?;
        debug!(%player, %action, outcome = ?self.outcome(), "computer played");
        Ok(action)
    }
}
