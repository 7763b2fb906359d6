//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use futures::{Stream, StreamExt};

use pokercore::{
    Hand, PlayerStake,
    srvcli::{ServerMsg, PlayerHand},
};

use crate::controls::{Controls, ControlHandle};

/// Player-facing parts of the presentation layer (everything except the action controls)
pub trait PlayerUi {
    /// Show our name and chips
    fn render_player_info(&mut self, player: &PlayerStake);
    /// Append a line to the message box
    fn append_message(&mut self, msg: &str);
    /// Bring the table and card holder into view
    fn show_card_holder(&mut self);
    /// Replace the displayed hole cards
    fn render_hand(&mut self, hand: &Hand);
}

/// Handles server messages for a single player
pub struct PlayerMessages<U: PlayerUi, H: ControlHandle> {
    name: String,
    player: Option<PlayerStake>,
    ui: U,
    controls: Controls<H>,
}

pub fn joined_msg(player: &PlayerStake) -> String {
    format!("{} joined the table ({} chips)", player.name, player.chips)
}

impl<U: PlayerUi, H: ControlHandle> PlayerMessages<U, H> {
    pub fn new(ui: U, controls: Controls<H>) -> PlayerMessages<U, H> {
        PlayerMessages {
            name: controls.player().to_string(),
            player: None,
            ui,
            controls,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Our own stake, once the server has told us we joined
    pub fn player(&self) -> Option<&PlayerStake> {
        self.player.as_ref()
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn controls(&self) -> &Controls<H> {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls<H> {
        &mut self.controls
    }

    pub fn handle(&mut self, msg: ServerMsg) {
        log::debug!("{}: handling {:?}", self.name, msg);
        match msg {
            ServerMsg::PlayerJoined { player } => self.player_joined(player),
            ServerMsg::ChipUpdate { player, chips } => self.chip_update(&player, chips),
            ServerMsg::GameStarted { hands } => self.game_started(hands),
            ServerMsg::StateUpdate(state) => {
                self.controls.update(&state);
            }
        }
    }

    /// Handle messages in order until the stream ends. The controls are cleared afterwards.
    pub async fn run<S>(mut self, mut inbox: S) -> Self
    where S: Stream<Item = ServerMsg> + Unpin {
        while let Some(msg) = inbox.next().await {
            self.handle(msg);
        }

        log::info!("{}: inbound channel closed", self.name);
        self.controls.clear();
        self
    }

    fn player_joined(&mut self, player: PlayerStake) {
        let msg = joined_msg(&player);
        if player.name == self.name {
            self.ui.render_player_info(&player);
            self.player = Some(player);
        }
        self.ui.append_message(&msg);
    }

    fn chip_update(&mut self, name: &str, chips: pokercore::Chips) {
        if name != self.name {
            return;
        }

        match self.player.as_mut() {
            Some(p) => {
                p.chips = chips;
                self.ui.render_player_info(p);
            }
            None => log::warn!("{}: chip update before joining", self.name),
        }
    }

    fn game_started(&mut self, hands: Vec<PlayerHand>) {
        self.ui.show_card_holder();
        if let Some(own) = hands.into_iter().find(|h| h.player == self.name) {
            self.ui.render_hand(&Hand { cards: own.hand });
        }
    }
}
