//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use serde::{Deserialize, Serialize};

use crate::{Chips, error as e};
use crate::card::Card;
use crate::eligibility::ActionKind;
use crate::round::{GameState, PlayerStake};

/// Server <-> client interaction

/// Cards dealt to one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    pub player: String,
    pub hand: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Raise(Chips),
    Call,
    Check,
    Fold,
}

/**
 * Message types
 */

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ServerMsg {
    PlayerJoined { player: PlayerStake },
    ChipUpdate { player: String, chips: Chips },
    GameStarted { hands: Vec<PlayerHand> },
    StateUpdate(GameState),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ClientMsg {
    PlayerAction { player: String, action: PlayerAction },
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Raise(_) => ActionKind::Raise,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Fold => ActionKind::Fold,
        }
    }

    /// Parse the contents of the raise-amount input.
    ///
    /// Blank input means "no raise" (`Ok(None)`).
    pub fn parse_raise(input: &str) -> Result<Option<PlayerAction>, e::Error> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        match input.parse::<Chips>() {
            Ok(amount) if amount > 0 => Ok(Some(PlayerAction::Raise(amount))),
            _ => Err(e::Error::InvalidRaiseAmount(input.to_string())),
        }
    }
}

impl ServerMsg {
    pub fn decode(text: &str) -> Result<ServerMsg, e::Error> {
        Ok(serde_json::from_str(text)?)
    }
}

impl ClientMsg {
    pub fn encode(&self) -> Result<String, e::Error> {
        Ok(serde_json::to_string(self)?)
    }
}
