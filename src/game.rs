//! Game logic and game board.

use core::fmt;

use log::{debug, trace};

use crate::config::GameConfig;
use crate::error::MoveError;

/// Number of coins in a row to win the game.
pub const SERIES_LEN: usize = 4;

/// Line directions as `(row step, column step)`: horizontal, vertical,
/// diagonal down-right and diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Coordinates `(row, column)` of a series of coins.
pub type Line = [(usize, usize); SERIES_LEN];

#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    #[must_use]
    pub fn opponent(self) -> Self {
        if self == Self::Player1 {
            Self::Player2
        } else {
            Self::Player1
        }
    }

    /// Returns `1` or `2`.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Player1 => 1,
            Self::Player2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// The result of [`Game::drop_piece`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    /// Coin was placed, the other player is next.
    Continued,
    /// Player won with that insertion.
    Win(Player),
    /// The game field is full without a winner.
    Tie,
    /// Nothing changed.
    Rejected(MoveError),
}

impl Outcome {
    /// Whether the game ended with this move.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win(_) | Self::Tie)
    }

    #[must_use]
    pub const fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continued => f.write_str("game continues"),
            Self::Win(player) => write!(f, "{player} won!"),
            Self::Tie => f.write_str("Tie!"),
            Self::Rejected(e) => write!(f, "move rejected: {e}"),
        }
    }
}

/// Where a game session stands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameStatus {
    /// Waiting for a move of the given player.
    InProgress(Player),
    Won(Player),
    Tied,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress(_))
    }
}

/// A coin that was accepted by the board.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Game with all its state.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Game {
    board: Gameboard,
    current_player: Player,
    status: GameStatus,
    round: usize,
    last_move: Option<Placement>,
}

impl Game {
    /// Creates a game on an empty board; [`Player::Player1`] starts.
    ///
    /// # Panics
    /// If `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            board: Gameboard::new(width, height),
            current_player: Player::Player1,
            status: GameStatus::InProgress(Player::Player1),
            round: 0,
            last_move: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Throws away the current session and starts over with the given
    /// dimensions.
    pub fn reset(&mut self, width: usize, height: usize) {
        debug!("new game on a {width}x{height} board");
        *self = Self::new(width, height);
    }

    /// Starts over with the current dimensions.
    pub fn restart(&mut self) {
        self.reset(self.board.width(), self.board.height());
    }

    /// See [`Gameboard::find_landing_row`].
    #[must_use]
    pub fn find_landing_row(&self, column: usize) -> Option<usize> {
        self.board.find_landing_row(column)
    }

    /// Drops a coin of the current player into `column`.
    ///
    /// Turns only alternate after a move that neither wins nor fills the
    /// board. Rejected moves leave the game untouched.
    pub fn drop_piece(&mut self, column: usize) -> Outcome {
        match self.try_drop_piece(column) {
            Ok(outcome) => outcome,
            Err(e) => {
                trace!("{} cannot drop into column {column}: {e}", self.current_player);
                Outcome::Rejected(e)
            }
        }
    }

    fn try_drop_piece(&mut self, column: usize) -> Result<Outcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.insert_player_chip(column, player)?;
        self.round += 1;
        self.last_move = Some(Placement {
            row,
            column,
            player,
        });
        debug!("{player} dropped into column {column}, landed on row {row}");

        if let Some(line) = self.board.winning_line(player) {
            trace!("winning line: {line:?}");
            debug!("{player} won after {} moves", self.round);
            self.status = GameStatus::Won(player);
            return Ok(Outcome::Win(player));
        }

        if self.board.is_full() {
            debug!("board full after {} moves, tie", self.round);
            self.status = GameStatus::Tied;
            return Ok(Outcome::Tie);
        }

        self.current_player = player.opponent();
        self.status = GameStatus::InProgress(self.current_player);
        Ok(Outcome::Continued)
    }

    /// The player whose turn it is, or who made the final move once the
    /// game is over.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub const fn board(&self) -> &Gameboard {
        &self.board
    }

    /// Number of accepted moves.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn last_move(&self) -> Option<Placement> {
        self.last_move
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Gameboard.
///
/// Cells are stored row by row; `(row=0, col=0)` is the top left of the
/// board, so coins fall towards higher row indices.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Gameboard {
    width: usize,
    height: usize,
    cells: Vec<Option<Player>>,
}

impl Default for Gameboard {
    fn default() -> Self {
        let config = GameConfig::default();
        Self::new(config.width, config.height)
    }
}

impl Gameboard {
    /// # Panics
    /// If `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "board width must be positive");
        assert!(height > 0, "board height must be positive");

        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    /// Returns the coin at the given position. Positions outside of the
    /// board read as empty.
    #[must_use]
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Player> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.cells[self.index(row, column)]
    }

    /// Iterates the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Player>]> {
        self.cells.chunks(self.width)
    }

    /// Returns the row a coin dropped into `column` would land on.
    ///
    /// Returns `None` if the column is full or does not exist.
    #[must_use]
    pub fn find_landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[self.index(row, column)].is_none())
    }

    /// Emits the column indices where moves are legal.
    pub fn available_columns_iter(&self) -> impl Iterator<Item = usize> {
        (0..self.width).filter(|&col| self.find_landing_row(col).is_some())
    }

    /// Returns the number of free slots in the given column.
    #[must_use]
    pub fn free_slots_in_column(&self, column: usize) -> usize {
        self.find_landing_row(column).map_or(0, |row| row + 1)
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Places a coin and returns its landing row.
    pub(crate) fn insert_player_chip(
        &mut self,
        column: usize,
        player: Player,
    ) -> Result<usize, MoveError> {
        if column >= self.width {
            return Err(MoveError::InvalidColumn);
        }

        let row = self
            .find_landing_row(column)
            .ok_or(MoveError::ColumnFull)?;
        let index = self.index(row, column);
        self.cells[index] = Some(player);
        Ok(row)
    }

    /// The series of [`SERIES_LEN`] cells starting at `(row, column)` and
    /// going into `direction`, if it fits onto the board.
    fn line_from(&self, row: usize, column: usize, direction: (isize, isize)) -> Option<Line> {
        let (row_step, col_step) = direction;
        let mut line = [(0, 0); SERIES_LEN];
        for (k, slot) in (0..).zip(line.iter_mut()) {
            let r = row.checked_add_signed(row_step * k)?;
            let c = column.checked_add_signed(col_step * k)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }

    /// Scans the board cell by cell, row-major, for a series owned by
    /// `player` starting there. Returns the first one found.
    #[must_use]
    pub fn winning_line(&self, player: Player) -> Option<Line> {
        for row in 0..self.height {
            for column in 0..self.width {
                for direction in DIRECTIONS {
                    if let Some(line) = self.line_from(row, column, direction)
                        && line
                            .iter()
                            .all(|&(r, c)| self.cell_at(r, c) == Some(player))
                    {
                        return Some(line);
                    }
                }
            }
        }
        None
    }
}

/// Whether `player` owns [`SERIES_LEN`] cells in a row (horizontally,
/// vertically or diagonally) on `board`.
#[must_use]
pub fn check_for_win(board: &Gameboard, player: Player) -> bool {
    board.winning_line(player).is_some()
}
