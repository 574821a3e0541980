//! `deck-gen` — render the playing-card deck to PNG files.
//!
//! Configuration comes from `DECK_CONFIG` (JSON) plus the `DECK_OUTPUT_DIR`,
//! `DECK_ATLAS` and `DECK_FACE_EXPORT_DIR` overrides. Set `RUST_LOG` for
//! more detail.

use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match deck_gen::config_from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "deck-gen: writing {}×{} cards to {}",
        config.card_width,
        config.card_height,
        config.output_dir.display()
    );

    // Missing-asset warnings were already logged where they arose.
    match deck_gen::generate_deck(&config) {
        Ok(report) => {
            info!("deck-gen: {}", report.summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("deck-gen failed: {err}");
            ExitCode::FAILURE
        }
    }
}
