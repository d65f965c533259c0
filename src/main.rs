//! pixtile status utility
//!
//! Mirrors the device boot flow on a host: mount the card directory,
//! drop an incrementally named marker file, log the card details and
//! render the SD info screen to a PPM image.
//!
//! Usage: `pixtile [card-root] [output.ppm]`

use log::{error, info};
use pixtile::sdcard::SdManager;
use pixtile::status;

/// Capacity reported for the simulated card
const CARD_CAPACITY_BYTES: u64 = 64 * 1024 * 1024;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let root = args.next().unwrap_or_else(|| "sdcard".into());
    let output = args.next().unwrap_or_else(|| "sd_info.ppm".into());

    let sd = SdManager::mount(&root, CARD_CAPACITY_BYTES);

    if sd.is_mounted() {
        let name = sd.next_incremental_name("note", "txt");
        match sd.create_file(&name, "created by the pixtile status utility\n") {
            Ok(()) => info!("marker file '{name}' created"),
            Err(err) => error!("could not create '{name}': {err}"),
        }
        if let Err(err) = sd.details() {
            error!("could not read card details: {err}");
        }
    }

    let frame = status::sd_info_screen(&sd);
    let hash = frame.content_hash();

    if let Err(err) = frame.write_ppm(&output) {
        error!("could not write '{output}': {err}");
        std::process::exit(1);
    }
    info!(
        "wrote '{output}' ({}x{}, content {:02x}{:02x}{:02x}{:02x})",
        frame.width(),
        frame.height(),
        hash[0],
        hash[1],
        hash[2],
        hash[3]
    );
}
