//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

pub mod error;
pub mod config;
pub mod controls;
pub mod messages;
pub mod replay;

pub use config::ClientConfig;
pub use controls::{Controls, ControlHandle, Outbox};
pub use error::ClientError;
pub use messages::{PlayerMessages, PlayerUi};
