//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use futures::channel::mpsc;

use pokercore::{
    Chips, GameState,
    eligibility::{self, ActionKind, ActionSet, ActionTable},
    srvcli::{ClientMsg, PlayerAction},
};

use crate::error::ClientError;

/// Channel for client -> server messages
pub type Outbox = mpsc::UnboundedSender<ClientMsg>;

/// A single action control (e.g., a button and its enclosing element) of the presentation layer
pub trait ControlHandle {
    fn show(&mut self);
    fn hide(&mut self);

    /// Amount to display on the control. Only the call control gets one.
    fn set_amount(&mut self, _amount: Option<Chips>) {}

    /// Start delivering clicks to `Controls::act`
    fn attach(&mut self);
    /// Stop delivering clicks
    fn detach(&mut self);
}

/// The action control panel of a single player.
///
/// Handles are shown and attached only during the player's turn. Attached handles are always
/// detached before the panel goes away.
pub struct Controls<H: ControlHandle> {
    player: String,
    outbox: Outbox,
    handles: ActionTable<H>,
    to_call: Chips,
    paid: Chips,
    visible: ActionSet,
    attached: ActionSet,
}

impl<H: ControlHandle> Controls<H> {
    pub fn new(player: &str, outbox: Outbox, handles: ActionTable<H>) -> Controls<H> {
        let mut ret = Controls {
            player: player.to_string(),
            outbox,
            handles,
            to_call: 0,
            paid: 0,
            visible: ActionSet::empty(),
            attached: ActionSet::empty(),
        };
        ret.hide_all();
        ret
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn handles(&self) -> &ActionTable<H> {
        &self.handles
    }

    /// Currently shown controls
    pub fn visible(&self) -> ActionSet {
        self.visible
    }

    pub fn attached(&self) -> ActionSet {
        self.attached
    }

    /// Re-evaluate the panel for a new game state. Returns the controls that are now shown.
    pub fn update(&mut self, state: &GameState) -> ActionSet {
        self.hide_all_and_detach();
        self.to_call = state.round.to_call;
        self.paid = state.round.paid_by(&self.player);
        log::debug!("{}: updating controls (to_call: {}, paid: {})", self.player, self.to_call, self.paid);

        if !state.is_active(&self.player) {
            return self.visible;
        }

        match state.legal_actions_for(&self.player) {
            Ok(ctrls) => self.show_all_and_attach(ctrls),
            Err(e) => log::warn!("{}: cannot select controls: {}", self.player, e),
        }

        self.visible
    }

    pub fn clear(&mut self) {
        self.hide_all_and_detach();
    }

    /// What we still need to put in to call
    pub fn amount_to_call(&self) -> Chips {
        eligibility::amount_owed(self.paid, self.to_call)
    }

    /// Submit an action through an attached control and close the panel
    pub fn act(&mut self, action: PlayerAction) -> Result<(), ClientError> {
        let kind = action.kind();
        if !self.attached.contains(kind) {
            return Err(ClientError::ActionNotAvailable(kind));
        }

        log::info!("{}: {:?}", self.player, action);
        let msg = ClientMsg::PlayerAction { player: self.player.clone(), action };
        self.outbox
            .unbounded_send(msg)
            .map_err(|_| ClientError::ChannelClosed)?;

        self.clear();
        Ok(())
    }

    /// Submit a raise from the raise-amount input. Blank input is ignored.
    pub fn raise_from_input(&mut self, input: &str) -> Result<(), ClientError> {
        match PlayerAction::parse_raise(input)? {
            None => Ok(()),
            Some(action) => self.act(action),
        }
    }

    /**
     * Private
     */

    fn show(&mut self, kind: ActionKind) {
        if kind == ActionKind::Call {
            let amount = self.amount_to_call();
            self.handles[kind].set_amount(Some(amount));
        }
        self.handles[kind].show();
        self.visible.insert(kind);
    }

    fn hide(&mut self, kind: ActionKind) {
        self.handles[kind].hide();
        self.visible.remove(kind);
    }

    fn hide_all(&mut self) {
        for kind in ActionKind::ALL.iter() {
            self.hide(*kind);
        }
    }

    fn attach(&mut self, ctrls: ActionSet) {
        for kind in ctrls.iter() {
            if !self.attached.contains(kind) {
                self.handles[kind].attach();
                self.attached.insert(kind);
            }
        }
    }

    fn detach(&mut self) {
        for kind in self.attached.iter() {
            self.handles[kind].detach();
        }
        self.attached = ActionSet::empty();
    }

    fn show_all_and_attach(&mut self, ctrls: ActionSet) {
        for kind in ctrls.iter() {
            self.show(kind);
        }
        self.attach(ctrls);
    }

    fn hide_all_and_detach(&mut self) {
        self.hide_all();
        self.detach();
    }
}

impl<H: ControlHandle> Drop for Controls<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pokercore::{PlayerStake, RoundState};

    /// Records what the panel did to a control
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub shown: bool,
        pub attached: bool,
        pub amount: Option<Chips>,
        pub detaches: usize,
    }

    impl ControlHandle for Recorder {
        fn show(&mut self) { self.shown = true; }
        fn hide(&mut self) { self.shown = false; }
        fn set_amount(&mut self, amount: Option<Chips>) { self.amount = amount; }
        fn attach(&mut self) {
            assert!(!self.attached, "attached twice");
            self.attached = true;
        }
        fn detach(&mut self) {
            assert!(self.attached, "detached while not attached");
            self.attached = false;
            self.detaches += 1;
        }
    }

    pub fn game_state(active: &str, to_call: Chips, paid: &[(&str, Chips)], chips: &[(&str, Chips)]) -> GameState {
        let mut round = RoundState::new(to_call);
        for (name, amount) in paid {
            round.round.insert(name.to_string(), *amount);
        }
        GameState {
            active: active.to_string(),
            round,
            players: chips.iter().map(|(n, c)| PlayerStake::new(n, *c)).collect(),
        }
    }

    fn controls() -> (Controls<Recorder>, mpsc::UnboundedReceiver<ClientMsg>) {
        let (tx, rx) = mpsc::unbounded();
        let ctrls = Controls::new("alice", tx, ActionTable::from_fn(|_| Recorder::default()));
        (ctrls, rx)
    }

    fn shown(ctrls: &Controls<Recorder>) -> Vec<ActionKind> {
        ctrls.handles().iter().filter(|(_, h)| h.shown).map(|(k, _)| k).collect()
    }

    #[test]
    fn shows_legal_controls_on_our_turn() {
        let (mut ctrls, _rx) = controls();
        let st = game_state("alice", 10, &[], &[("alice", 50), ("bob", 30)]);
        let visible = ctrls.update(&st);

        use pokercore::ActionKind::*;
        assert_eq!(visible.iter().collect::<Vec<_>>(), vec![Raise, Call, Fold]);
        assert_eq!(shown(&ctrls), vec![Call, Raise, Fold]);
        assert_eq!(ctrls.attached(), visible);
        assert_eq!(ctrls.handles()[Call].amount, Some(10));
        assert_eq!(ctrls.amount_to_call(), 10);
    }

    #[test]
    fn hidden_on_others_turn() {
        let (mut ctrls, _rx) = controls();
        ctrls.update(&game_state("alice", 10, &[], &[("alice", 50)]));
        let visible = ctrls.update(&game_state("bob", 20, &[("alice", 10)], &[("alice", 40)]));
        assert!(visible.is_empty());
        assert!(shown(&ctrls).is_empty());
        assert!(ctrls.attached().is_empty());
        assert_eq!(ctrls.amount_to_call(), 10);
    }

    #[test]
    fn missing_player_shows_nothing() {
        let (mut ctrls, _rx) = controls();
        let visible = ctrls.update(&game_state("alice", 10, &[], &[("bob", 50)]));
        assert!(visible.is_empty());
        assert!(ctrls.attached().is_empty());
    }

    #[test]
    fn partial_contribution_with_call_sized_stack() {
        let (mut ctrls, _rx) = controls();
        let st = game_state("alice", 10, &[("alice", 5)], &[("alice", 10)]);
        let visible = ctrls.update(&st);
        assert_eq!(visible, st.legal_actions_for("alice").unwrap());
        assert_eq!(visible.iter().collect::<Vec<_>>(), vec![ActionKind::Call, ActionKind::Fold]);
        assert_eq!(ctrls.handles()[ActionKind::Call].amount, Some(5));
    }

    #[test]
    fn act_sends_and_closes() {
        let (mut ctrls, mut rx) = controls();
        ctrls.update(&game_state("alice", 10, &[("alice", 10)], &[("alice", 50)]));
        ctrls.act(PlayerAction::Check).unwrap();

        let msg = rx.try_next().unwrap().unwrap();
        assert_eq!(msg, ClientMsg::PlayerAction { player: "alice".to_string(), action: PlayerAction::Check });
        assert!(ctrls.visible().is_empty());
        assert!(ctrls.attached().is_empty());

        // the panel is closed until the next update
        assert!(matches!(ctrls.act(PlayerAction::Check), Err(ClientError::ActionNotAvailable(ActionKind::Check))));
    }

    #[test]
    fn illegal_action_is_rejected() {
        let (mut ctrls, mut rx) = controls();
        ctrls.update(&game_state("alice", 10, &[], &[("alice", 5)]));
        assert!(matches!(ctrls.act(PlayerAction::Check), Err(ClientError::ActionNotAvailable(_))));
        assert!(matches!(ctrls.act(PlayerAction::Raise(20)), Err(ClientError::ActionNotAvailable(_))));
        assert!(rx.try_next().is_err());
        assert_eq!(ctrls.visible().len(), 2);
    }

    #[test]
    fn raise_input() {
        let (mut ctrls, mut rx) = controls();
        ctrls.update(&game_state("alice", 10, &[], &[("alice", 50)]));

        ctrls.raise_from_input("").unwrap();
        assert!(rx.try_next().is_err());
        assert!(matches!(ctrls.raise_from_input("abc"), Err(ClientError::Core(_))));

        ctrls.raise_from_input("25").unwrap();
        let msg = rx.try_next().unwrap().unwrap();
        assert_eq!(msg, ClientMsg::PlayerAction { player: "alice".to_string(), action: PlayerAction::Raise(25) });
    }

    #[test]
    fn closed_outbox() {
        let (mut ctrls, rx) = controls();
        drop(rx);
        ctrls.update(&game_state("alice", 0, &[], &[("alice", 50)]));
        assert!(matches!(ctrls.act(PlayerAction::Check), Err(ClientError::ChannelClosed)));
        // still our turn
        assert!(ctrls.attached().contains(ActionKind::Check));
    }

    #[test]
    fn detach_on_drop() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Shared(Rc<RefCell<Recorder>>);
        impl ControlHandle for Shared {
            fn show(&mut self) { self.0.borrow_mut().show() }
            fn hide(&mut self) { self.0.borrow_mut().hide() }
            fn attach(&mut self) { self.0.borrow_mut().attach() }
            fn detach(&mut self) { self.0.borrow_mut().detach() }
        }

        let recs = ActionTable::from_fn(|_| Rc::new(RefCell::new(Recorder::default())));
        let (tx, _rx) = mpsc::unbounded();
        {
            let mut ctrls = Controls::new("alice", tx, ActionTable::from_fn(|k| Shared(recs[k].clone())));
            ctrls.update(&game_state("alice", 10, &[], &[("alice", 50)]));
            assert!(recs[ActionKind::Raise].borrow().attached);
        }

        for (_, rec) in recs.iter() {
            assert!(!rec.borrow().attached);
        }
        assert_eq!(recs[ActionKind::Call].borrow().detaches, 1);
        assert_eq!(recs[ActionKind::Check].borrow().detaches, 0);
    }
}
