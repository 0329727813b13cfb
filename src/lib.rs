//! Engine for the two-player game _Connect Four_.
//!
//! Players take turns dropping coins into the columns of a grid. A coin falls
//! to the lowest free cell of its column. Whoever first owns four cells in a
//! row (horizontally, vertically or diagonally) wins; a full grid without such
//! a series is a tie.
//!
//! [`Game`] owns the board and the turn. Front ends call
//! [`Game::drop_piece`] with the column the user selected and render the
//! returned [`Outcome`] together with [`Game::last_move`] and [`Game::board`].

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::must_use_candidate,
)]
#![allow(clippy::redundant_pub_crate)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod error;
mod game;

pub use config::GameConfig;
pub use error::{ConfigError, MoveError};
pub use game::{
    Game, GameStatus, Gameboard, Line, Outcome, Placement, Player, SERIES_LEN, check_for_win,
};
