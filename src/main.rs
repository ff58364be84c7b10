//! Self-playing Cosmo Jumpers demo
//!
//! Presses Play, walks the player to every star, celebrates, and exits.
//! Set `RUST_LOG=debug` to watch each pickup.

use std::process::ExitCode;

use cosmo_jumpers::prelude::*;

fn main() -> ExitCode {
    let seed = rand::random::<u64>();
    let game = match CosmoJumpers::new(SessionConfig::default(), seed) {
        Ok(game) => game.with_default_audio().with_autopilot(Autopilot::default()),
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = EngineConfig::default()
        .with_title("Cosmo Jumpers")
        .with_target_fps(60)
        .with_max_frames(60 * 120);

    match Engine::new(config, game).run() {
        Ok(summary) if summary.quit_requested => {
            log::info!("Demo finished after {} frames", summary.frames);
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            log::error!("Demo did not finish within {} frames", summary.frames);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Engine error: {e}");
            ExitCode::FAILURE
        }
    }
}
