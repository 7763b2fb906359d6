//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Number -> Rank conversion failed (argument is given number)
    InvalidRankNumber(String),
    /// Char -> Rank conversion failed (argument is given character)
    InvalidRankChar(char),
    /// Char -> Suit conversion failed (argument is given character)
    InvalidSuitChar(char),
    /// Card representation is not two characters long (argument is the representation)
    InvalidCardRepr(String),
    /// Raise input is not a positive chip amount (argument is the input)
    InvalidRaiseAmount(String),
    /// No stake for the given player name in the game state
    UnknownPlayer(String),
    /// Wire message could not be (de)serialized
    Serde(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidRankNumber(s) => write!(f, "invalid rank number: {}", s),
            Error::InvalidRankChar(c) => write!(f, "invalid rank character: {}", c),
            Error::InvalidSuitChar(c) => write!(f, "invalid suit character: {}", c),
            Error::InvalidCardRepr(s) => write!(f, "invalid card: {:?}", s),
            Error::InvalidRaiseAmount(s) => write!(f, "invalid raise amount: {:?}", s),
            Error::UnknownPlayer(s) => write!(f, "unknown player: {}", s),
            Error::Serde(e) => write!(f, "message encoding error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serde(e)
    }
}
