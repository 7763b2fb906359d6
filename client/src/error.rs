//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::fmt;

use pokercore::{ActionKind, error as core_error};

#[derive(Debug)]
pub enum ClientError {
    Core(core_error::Error),
    /// The action's control is not currently attached (not our turn, or not a legal action)
    ActionNotAvailable(ActionKind),
    /// The outgoing channel has been closed
    ChannelClosed,
    /// Bad configuration (argument describes the problem)
    Config(String),
    Io(std::io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Core(e) => write!(f, "{}", e),
            ClientError::ActionNotAvailable(k) => write!(f, "action not available: {}", k),
            ClientError::ChannelClosed => write!(f, "channel closed"),
            ClientError::Config(s) => write!(f, "configuration error: {}", s),
            ClientError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Core(e) => Some(e),
            ClientError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<core_error::Error> for ClientError {
    fn from(e: core_error::Error) -> Self {
        ClientError::Core(e)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Io(e)
    }
}
