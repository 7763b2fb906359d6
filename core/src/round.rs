//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Chips;
use crate::eligibility::{self, ActionSet};
use crate::error as e;

/// A player and the chips they have left to wager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStake {
    pub name: String,
    pub chips: Chips,
}

/// Contributions for the current betting round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// what each player has put in so far (players that have not acted are missing)
    #[serde(default)]
    pub round: HashMap<String, Chips>,
    /// what every player has to reach to stay in the hand
    #[serde(default)]
    pub to_call: Chips,
}

/// Table state as seen by a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// name of the player whose turn it is
    pub active: String,
    #[serde(flatten)]
    pub round: RoundState,
    #[serde(default)]
    pub players: Vec<PlayerStake>,
}

impl PlayerStake {
    pub fn new(name: &str, chips: Chips) -> PlayerStake {
        PlayerStake { name: name.to_string(), chips }
    }
}

impl RoundState {
    pub fn new(to_call: Chips) -> RoundState {
        RoundState { round: HashMap::new(), to_call }
    }

    pub fn paid_by(&self, name: &str) -> Chips {
        self.round.get(name).copied().unwrap_or(0)
    }

    /// Record that `name` has brought their contribution up to `total`.
    ///
    /// `to_call` follows the highest contribution and never goes down within a round.
    pub fn record_contribution(&mut self, name: &str, total: Chips) {
        self.round.insert(name.to_string(), total);
        if total > self.to_call {
            log::debug!("{} raised to_call: {} -> {}", name, self.to_call, total);
            self.to_call = total;
        }
    }

    pub fn amount_owed(&self, name: &str) -> Chips {
        eligibility::amount_owed(self.paid_by(name), self.to_call)
    }

    pub fn legal_actions(&self, stake: &PlayerStake) -> ActionSet {
        eligibility::resolve(self.paid_by(&stake.name), self.to_call, stake.chips)
    }
}

impl GameState {
    pub fn player(&self, name: &str) -> Result<&PlayerStake, e::Error> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| e::Error::UnknownPlayer(name.to_string()))
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active == name
    }

    pub fn legal_actions_for(&self, name: &str) -> Result<ActionSet, e::Error> {
        let stake = self.player(name)?;
        Ok(self.round.legal_actions(stake))
    }
}
