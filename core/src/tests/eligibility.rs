//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use crate::{
    Chips,
    eligibility::{resolve, amount_owed, ActionKind, ActionSet, Eligibility},
};

use crate::eligibility::ActionKind::*;

fn kinds(set: ActionSet) -> Vec<ActionKind> {
    set.iter().collect()
}

#[test]
fn owes_and_can_raise() {
    assert_eq!(kinds(resolve(0, 10, 50)), vec![Raise, Call, Fold]);
    assert_eq!(amount_owed(0, 10), 10);
}

#[test]
fn owes_short_stack() {
    assert_eq!(kinds(resolve(0, 10, 5)), vec![Call, Fold]);
}

#[test]
fn square_and_can_raise() {
    assert_eq!(kinds(resolve(10, 10, 50)), vec![Raise, Check]);
    assert_eq!(amount_owed(10, 10), 0);
}

#[test]
fn square_no_raise() {
    assert_eq!(kinds(resolve(10, 10, 10)), vec![Check]);
}

#[test]
fn stack_compared_with_table_total() {
    // 5 more would cover the call and leave chips over, but the stack is not above to_call
    assert_eq!(Eligibility::classify(5, 10, 10), Eligibility::OwesCannotRaise);
    assert_eq!(kinds(resolve(5, 10, 10)), vec![Call, Fold]);
    assert_eq!(kinds(resolve(5, 10, 11)), vec![Raise, Call, Fold]);
}

#[test]
fn nothing_to_call() {
    assert_eq!(kinds(resolve(0, 0, 0)), vec![Check]);
    assert_eq!(kinds(resolve(0, 0, 1)), vec![Raise, Check]);
}

#[test]
fn amount_owed_saturates() {
    assert_eq!(amount_owed(15, 10), 0);
}

// Enumerate inputs around every comparison boundary
fn boundary_inputs() -> Vec<(Chips, Chips, Chips)> {
    let mut ret = vec![];
    for to_call in [0, 1, 2, 10, 11].iter().copied() {
        let mut around: Vec<Chips> = vec![0, 1, 20, Chips::max_value()];
        for d in [-1i64, 0, 1].iter() {
            let v = to_call as i64 + d;
            if v >= 0 {
                around.push(v as Chips);
            }
        }
        for paid in around.iter().copied() {
            for chips in around.iter().copied() {
                ret.push((paid, to_call, chips));
            }
        }
    }
    ret
}

#[test]
fn rules_partition_inputs() {
    for (paid, to_call, chips) in boundary_inputs() {
        let rules = [
            paid < to_call && chips > to_call,
            paid < to_call && chips <= to_call,
            paid >= to_call && chips > to_call,
            paid >= to_call && chips <= to_call,
        ];
        let nmatching = rules.iter().filter(|x| **x).count();
        assert_eq!(nmatching, 1, "inputs: {:?}", (paid, to_call, chips));

        let expected = match rules.iter().position(|x| *x).unwrap() {
            0 => Eligibility::OwesCanRaise,
            1 => Eligibility::OwesCannotRaise,
            2 => Eligibility::SquareCanRaise,
            _ => Eligibility::Square,
        };
        assert_eq!(Eligibility::classify(paid, to_call, chips), expected);
    }
}

#[test]
fn result_is_nonempty_and_stable() {
    for (paid, to_call, chips) in boundary_inputs() {
        let set = resolve(paid, to_call, chips);
        assert!(!set.is_empty());
        assert!(set.is_subset(&ActionSet::all()));
        assert_eq!(set, resolve(paid, to_call, chips));
        // fold and check are never offered together
        assert!(!(set.contains(Fold) && set.contains(Check)));
    }
}
