//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use pokerclient::{ClientConfig, ClientError, replay};

fn run(cfg: &ClientConfig) -> Result<replay::ReplayStats, ClientError> {
    let input: Box<dyn BufRead> = match &cfg.transcript {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    replay::replay(cfg, input, &mut out)
}

fn main() {
    env_logger::init();

    let cfg = match ClientConfig::from_env() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("replaying as {}", cfg.player_name);
    match run(&cfg) {
        Ok(stats) => log::info!("done: {:?}", stats),
        Err(e) => {
            log::error!("replay failed: {}", e);
            std::process::exit(1);
        }
    }
}
