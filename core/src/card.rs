//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::convert::TryFrom;
use super::error as e;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// ♠
    Spade,
    /// ♣
    Club,
    /// ♥
    Heart,
    /// ♦
    Diamond,
}

/// Card rank: 2..=14 (aces are high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

/// Playing card
#[derive(PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

pub const ACE: u8 = 14;

impl TryFrom<u8> for Rank {
    type Error = e::Error;

    fn try_from(val: u8) -> Result<Rank, e::Error> {
        if val < 2 || val > ACE {
            Err(e::Error::InvalidRankNumber(format!("{}", val)))
        } else {
            Ok(Rank(val))
        }
    }
}

impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.0
    }
}

impl Rank {
    pub fn to_symbol(&self) -> char {
        match self.0 {
            2..=9 => (b'0' + self.0) as char,
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            ACE => 'A',
            _ => unreachable!("rank is checked on construction"),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_face(&self) -> bool {
        (11..=13).contains(&self.0)
    }
}

impl Suit {
    pub fn is_red(&self) -> bool {
        match self {
            Self::Spade | Self::Club => false,
            Self::Heart | Self::Diamond => true,
        }
    }

    pub fn to_symbol(&self) -> char {
        match self {
            Self::Spade => '♠',
            Self::Club => '♣',
            Self::Heart => '♥',
            Self::Diamond => '♦',
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = e::Error;

    fn try_from(val: char) -> Result<Rank, e::Error> {
        match val {
            't' | 'T' => Ok(Rank(10)),
            'j' | 'J' => Ok(Rank(11)),
            'q' | 'Q' => Ok(Rank(12)),
            'k' | 'K' => Ok(Rank(13)),
            'a' | 'A' => Ok(Rank(ACE)),
            '2'..='9' => Rank::try_from((val as u8) - b'0'),
            _ => Err(e::Error::InvalidRankChar(val)),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = e::Error;

    fn try_from(val: char) -> Result<Suit, e::Error> {
        match val {
            's' | 'S' | '♠' => Ok(Suit::Spade),
            'c' | 'C' | '♣' => Ok(Suit::Club),
            'd' | 'D' | '♦' => Ok(Suit::Diamond),
            'h' | 'H' | '♥' => Ok(Suit::Heart),
            _ => Err(e::Error::InvalidSuitChar(val)),
        }
    }
}

impl TryFrom<[char; 2]> for Card {
    type Error = e::Error;

    /// suit first
    fn try_from(val: [char; 2]) -> Result<Card, e::Error> {
        let suit = Suit::try_from(val[0])?;
        let rank = Rank::try_from(val[1])?;
        Ok(Card { suit, rank })
    }
}

impl std::str::FromStr for Card {
    type Err = e::Error;

    /// Parse a card such as "HT" or "♠A"
    fn from_str(s: &str) -> Result<Card, e::Error> {
        let chars: Vec<char> = s.trim().chars().collect();
        match chars.as_slice() {
            [suit, rank] => Card::try_from([*suit, *rank]),
            _ => Err(e::Error::InvalidCardRepr(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("{}{}", self.suit.to_symbol(), self.rank.to_symbol()))
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("{}{}", self.suit.to_symbol(), self.rank.to_symbol()))
    }
}

#[test]
fn try_from_tests() {
    // rank
    assert_eq!(Rank::try_from('2').unwrap(), Rank(2));
    assert_eq!(Rank::try_from('A').unwrap(), Rank(14));
    assert!(Rank::try_from('1').is_err());
    assert!(Rank::try_from('x').is_err());
    assert!(Rank::try_from(15u8).is_err());
    // suit
    assert_eq!(Suit::try_from('♥').unwrap(), Suit::Heart);
    assert!(Suit::try_from('x').is_err());
    // card
    assert_eq!(Card::try_from(['♥','T']).unwrap(), Card{suit: Suit::Heart, rank: Rank(10)});
    assert_eq!("SA".parse::<Card>().unwrap(), Card{suit: Suit::Spade, rank: Rank(14)});
    assert!("SAX".parse::<Card>().is_err());
}

#[test]
fn display_and_serde() {
    let card: Card = "dq".parse().unwrap();
    assert_eq!(card.to_string(), "♦Q");
    assert!(card.suit.is_red());
    assert!(card.rank.is_face());

    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(json, r#"{"suit":"Diamond","rank":12}"#);
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);

    assert!(serde_json::from_str::<Card>(r#"{"suit":"Club","rank":1}"#).is_err());
}
