//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

//! Replay a transcript of server messages (one JSON message per line) through the client.
//!
//! UI effects go to the log; messages the client sends back are written out as JSON lines.

use std::io::{BufRead, Write};

use futures::channel::mpsc;

use pokercore::{
    ActionKind, ActionSet, ActionTable, Chips, Hand, PlayerStake,
    srvcli::{ServerMsg, PlayerAction},
};

use crate::{
    config::ClientConfig,
    controls::{Controls, ControlHandle},
    error::ClientError,
    messages::{PlayerMessages, PlayerUi},
};

pub struct LogHandle {
    kind: ActionKind,
}

impl ControlHandle for LogHandle {
    fn show(&mut self) { log::info!("[controls] show {}", self.kind) }
    fn hide(&mut self) { log::debug!("[controls] hide {}", self.kind) }
    fn set_amount(&mut self, amount: Option<Chips>) {
        if let Some(x) = amount {
            log::info!("[controls] {} amount: {}", self.kind, x);
        }
    }
    fn attach(&mut self) { log::debug!("[controls] attach {}", self.kind) }
    fn detach(&mut self) { log::debug!("[controls] detach {}", self.kind) }
}

pub struct LogUi;

impl PlayerUi for LogUi {
    fn render_player_info(&mut self, player: &PlayerStake) {
        log::info!("[player] {}: {} chips", player.name, player.chips);
    }
    fn append_message(&mut self, msg: &str) {
        log::info!("[messages] {}", msg);
    }
    fn show_card_holder(&mut self) {
        log::info!("[table] shown");
    }
    fn render_hand(&mut self, hand: &Hand) {
        log::info!("[hand] {}", hand);
    }
}

/// Line counts of a finished replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub handled: usize,
    pub skipped: usize,
    pub sent: usize,
}

/// The least aggressive of the available actions: check, then call, then fold
pub fn passive_action(ctrls: ActionSet) -> Option<PlayerAction> {
    if ctrls.contains(ActionKind::Check) {
        Some(PlayerAction::Check)
    } else if ctrls.contains(ActionKind::Call) {
        Some(PlayerAction::Call)
    } else if ctrls.contains(ActionKind::Fold) {
        Some(PlayerAction::Fold)
    } else {
        None
    }
}

/// Feed every line of `input` to the client. Lines that do not decode are logged and skipped.
pub fn replay<R, W>(cfg: &ClientConfig, input: R, out: &mut W) -> Result<ReplayStats, ClientError>
where R: BufRead, W: Write {
    let (out_tx, mut out_rx) = mpsc::unbounded();
    let handles = ActionTable::from_fn(|kind| LogHandle { kind });
    let controls = Controls::new(&cfg.player_name, out_tx, handles);
    let mut handler = PlayerMessages::new(LogUi, controls);
    let mut stats = ReplayStats::default();

    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let msg = match ServerMsg::decode(&line) {
            Ok(x) => x,
            Err(e) => {
                log::error!("line {}: {}", lineno + 1, e);
                stats.skipped += 1;
                continue;
            }
        };
        handler.handle(msg);
        stats.handled += 1;

        if cfg.autoplay {
            if let Some(action) = passive_action(handler.controls().visible()) {
                handler.controls_mut().act(action)?;
            }
        }

        while let Ok(Some(msg)) = out_rx.try_next() {
            writeln!(out, "{}", msg.encode()?)?;
            stats.sent += 1;
        }
    }

    handler.controls_mut().clear();
    Ok(stats)
}
