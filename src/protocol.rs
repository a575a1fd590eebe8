//! JSON request and reply shapes used by the command-line caller

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::error::GomokuError;

/// `{"board": [[0, 1, 2, ...], ...], "player": 1}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: Vec<Vec<u8>>,
    pub player: u8,
}

impl MoveRequest {
    /// Validate the request into a board and the side to move.
    pub fn parse(&self) -> Result<(Board, Player), GomokuError> {
        let player =
            Player::from_code(self.player).ok_or(GomokuError::InvalidPlayer(self.player))?;
        let board = Board::from_codes(&self.board)?;
        Ok((board, player))
    }
}

/// Reply written by the caller, one of `{"move": [r, c]}`,
/// `{"error": "..."}` or `{"status": "ok"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveResponse {
    Move {
        #[serde(rename = "move")]
        mov: [usize; 2],
    },
    Error {
        error: String,
    },
    Status {
        status: String,
    },
}

impl MoveResponse {
    pub fn from_move(row: usize, col: usize) -> Self {
        MoveResponse::Move { mov: [row, col] }
    }

    pub fn error(message: impl Into<String>) -> Self {
        MoveResponse::Error {
            error: message.into(),
        }
    }

    pub fn ok() -> Self {
        MoveResponse::Status {
            status: "ok".to_string(),
        }
    }
}
