//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

//! Which actions a player may take at a decision point.

use serde::{Deserialize, Serialize};

use crate::Chips;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Call,
    Raise,
    Check,
    Fold,
}

impl ActionKind {
    /// All kinds, in control-panel order
    pub const ALL: [ActionKind; 4] = [ActionKind::Call, ActionKind::Raise, ActionKind::Check, ActionKind::Fold];

    fn index(self) -> usize {
        match self {
            ActionKind::Call => 0,
            ActionKind::Raise => 1,
            ActionKind::Check => 2,
            ActionKind::Fold => 3,
        }
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }

    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
            ActionKind::Check => "check",
            ActionKind::Fold => "fold",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of action kinds.
///
/// Iteration yields Raise, Call, Check, Fold (in that order), i.e., the order in which the
/// controls are presented.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionSet(u8);

const PRESENTATION_ORDER: [ActionKind; 4] = [ActionKind::Raise, ActionKind::Call, ActionKind::Check, ActionKind::Fold];

impl ActionSet {
    pub fn empty() -> ActionSet {
        ActionSet(0)
    }

    pub fn all() -> ActionSet {
        ActionKind::ALL.iter().copied().collect()
    }

    pub fn insert(&mut self, kind: ActionKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: ActionKind) {
        self.0 &= !kind.bit();
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(&self, other: &ActionSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionKind> {
        let set = *self;
        PRESENTATION_ORDER.iter().copied().filter(move |k| set.contains(*k))
    }
}

impl std::iter::FromIterator<ActionKind> for ActionSet {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> ActionSet {
        let mut set = ActionSet::empty();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl std::fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Fixed-size table with one entry per action kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTable<T> {
    entries: [T; 4],
}

impl<T> ActionTable<T> {
    pub fn new(call: T, raise: T, check: T, fold: T) -> ActionTable<T> {
        ActionTable { entries: [call, raise, check, fold] }
    }

    pub fn from_fn<F: FnMut(ActionKind) -> T>(mut f: F) -> ActionTable<T> {
        ActionTable::new(
            f(ActionKind::Call),
            f(ActionKind::Raise),
            f(ActionKind::Check),
            f(ActionKind::Fold),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionKind, &T)> {
        ActionKind::ALL.iter().copied().zip(self.entries.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActionKind, &mut T)> {
        ActionKind::ALL.iter().copied().zip(self.entries.iter_mut())
    }
}

impl<T> std::ops::Index<ActionKind> for ActionTable<T> {
    type Output = T;

    fn index(&self, kind: ActionKind) -> &T {
        &self.entries[kind.index()]
    }
}

impl<T> std::ops::IndexMut<ActionKind> for ActionTable<T> {
    fn index_mut(&mut self, kind: ActionKind) -> &mut T {
        &mut self.entries[kind.index()]
    }
}

/// The situation a player is in, as far as legal actions are concerned.
///
/// NB: raise capacity compares the player's chips with the table-wide amount to call, not with
/// what the player still owes. A player that has paid 5 of 10 and holds 10 chips cannot raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// owes chips and can raise
    OwesCanRaise,
    /// owes chips, stack is at most call-sized
    OwesCannotRaise,
    /// paid up and can raise
    SquareCanRaise,
    /// paid up, no raise capacity
    Square,
}

impl Eligibility {
    pub fn classify(paid: Chips, to_call: Chips, chips: Chips) -> Eligibility {
        let owes = paid < to_call;
        let can_raise = chips > to_call;
        match (owes, can_raise) {
            (true, true) => Eligibility::OwesCanRaise,
            (true, false) => Eligibility::OwesCannotRaise,
            (false, true) => Eligibility::SquareCanRaise,
            (false, false) => Eligibility::Square,
        }
    }

    pub fn actions(self) -> ActionSet {
        use ActionKind::*;
        let kinds: &[ActionKind] = match self {
            Eligibility::OwesCanRaise => &[Raise, Call, Fold],
            Eligibility::OwesCannotRaise => &[Call, Fold],
            Eligibility::SquareCanRaise => &[Raise, Check],
            Eligibility::Square => &[Check],
        };
        kinds.iter().copied().collect()
    }
}

/// Legal actions for a player that has paid `paid` this round, when the table requires
/// `to_call` and the player holds `chips`.
pub fn resolve(paid: Chips, to_call: Chips, chips: Chips) -> ActionSet {
    Eligibility::classify(paid, to_call, chips).actions()
}

/// What the player still has to put in to call.
///
/// Saturates at zero if `paid` exceeds `to_call`, which a well-formed round never allows.
pub fn amount_owed(paid: Chips, to_call: Chips) -> Chips {
    to_call.saturating_sub(paid)
}

#[test]
fn action_set_basics() {
    let mut set = ActionSet::empty();
    assert!(set.is_empty());
    set.insert(ActionKind::Fold);
    set.insert(ActionKind::Raise);
    set.insert(ActionKind::Fold);
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![ActionKind::Raise, ActionKind::Fold]);
    assert!(set.is_subset(&ActionSet::all()));
    set.remove(ActionKind::Raise);
    assert!(!set.contains(ActionKind::Raise));
    assert_eq!(format!("{:?}", set), "{Fold}");
}

#[test]
fn action_table_index() {
    let mut table = ActionTable::from_fn(|k| k.name().len());
    assert_eq!(table[ActionKind::Check], 5);
    table[ActionKind::Fold] = 0;
    let kinds: Vec<_> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(kinds, ActionKind::ALL.to_vec());
    assert_eq!(table[ActionKind::Fold], 0);
}
