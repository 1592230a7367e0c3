//! Square addressing: file letters `a`..`h` and raw 0-based ranks `0`..`7`.
//!
//! `e6` is file 4, rank 6. The rank is the row index of the board grid, not a
//! traditional 1-based chess rank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    /// Returns `None` unless both file and rank are in `0..8`.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if (file as usize) < BOARD_SIZE && (rank as usize) < BOARD_SIZE {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Grid position as `(row, col)`; the row is the rank, the column the file.
    pub fn to_index(self) -> (usize, usize) {
        (self.rank as usize, self.file as usize)
    }

    pub fn from_index(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                file: col as u8,
                rank: row as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, rank 0 first, files `a`..`h` within a rank.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Coordinate {
                file: col as u8,
                rank: row as u8,
            })
        })
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCoordinate(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            c @ b'a'..=b'h' => c - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            c @ b'0'..=b'7' => c - b'0',
            _ => return Err(invalid()),
        };

        Ok(Self { file, rank })
    }
}

impl TryFrom<String> for Coordinate {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coord: Coordinate) -> Self {
        coord.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank)
    }
}
