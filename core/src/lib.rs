//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

pub mod error;
pub mod card;
pub mod hand;
pub mod eligibility;
pub mod round;
pub mod srvcli;

#[cfg(test)]
mod tests;

/// Chip amounts (stakes, bets, amounts to call)
pub type Chips = u64;

pub use card::{Card, Rank, Suit};
pub use hand::Hand;
pub use eligibility::{ActionKind, ActionSet, ActionTable, Eligibility, resolve, amount_owed};
pub use round::{RoundState, PlayerStake, GameState};
pub use srvcli::{ServerMsg, ClientMsg, PlayerAction, PlayerHand};
