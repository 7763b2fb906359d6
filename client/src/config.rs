//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::path::PathBuf;

use crate::error::ClientError;

pub const PLAYER_NAME_VAR: &str = "POKER_PLAYER_NAME";
pub const TRANSCRIPT_VAR: &str = "POKER_TRANSCRIPT";
pub const AUTOPLAY_VAR: &str = "POKER_AUTOPLAY";

const DEFAULT_AUTOPLAY: bool = false;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// name we play under (identifies us in server messages)
    pub player_name: String,
    /// file with one JSON server message per line (stdin if None)
    pub transcript: Option<PathBuf>,
    /// take the most passive legal action whenever it is our turn
    pub autoplay: bool,
}

impl ClientConfig {
    pub fn from_env() -> Result<ClientConfig, ClientError> {
        Self::from_vars(|k| std::env::var(k).ok())
    }

    pub fn from_vars<F>(get: F) -> Result<ClientConfig, ClientError>
    where F: Fn(&str) -> Option<String> {
        let player_name = match get(PLAYER_NAME_VAR) {
            Some(x) if !x.trim().is_empty() => x.trim().to_string(),
            _ => return Err(ClientError::Config(format!("{} is not set", PLAYER_NAME_VAR))),
        };

        let transcript = get(TRANSCRIPT_VAR)
            .filter(|x| !x.is_empty())
            .map(PathBuf::from);

        let autoplay = match get(AUTOPLAY_VAR).as_deref().map(str::trim) {
            None | Some("") => DEFAULT_AUTOPLAY,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(x) => return Err(ClientError::Config(format!("invalid {} value: {}", AUTOPLAY_VAR, x))),
        };

        Ok(ClientConfig { player_name, transcript, autoplay })
    }
}
