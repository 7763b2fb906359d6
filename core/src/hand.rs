//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error as e;

/// A player's hole cards, in the order they were dealt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn empty() -> Hand {
        Hand { cards: vec![] }
    }

    /// Parse a whitespace separated list of cards (e.g., "SA HK")
    pub fn parse(s: &str) -> Result<Hand, e::Error> {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Hand { cards })
    }

    pub fn ncards(&self) -> usize {
        self.cards.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.cards.iter()).finish()
    }
}

#[test]
fn parse_hand() {
    let hand = Hand::parse("SA  hk").unwrap();
    assert_eq!(hand.ncards(), 2);
    assert_eq!(hand.to_string(), "[♠A, ♥K]");
    assert!(Hand::parse("SA H1").is_err());
    assert_eq!(Hand::parse("").unwrap(), Hand::empty());
}
