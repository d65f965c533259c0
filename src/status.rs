//! SD card status screen
//!
//! Composes the fixed 240x135 info screen the device shows after boot:
//! violet backdrop strip, red header bar with the title, white
//! separator, then the card statistics as coloured labels and the root
//! file listing. An unmounted or unreadable card swaps the statistics
//! for a red error label at the same position.

use crate::color::{CYAN, GREEN, ORANGE, RED, VIOLET, WHITE, YELLOW};
use crate::draw::{rect, PaintSpec};
use crate::scene::Frame;
use crate::sdcard::{CardDetails, SdManager};
use crate::text::label;
use log::{info, warn};

/// Panel width in pixels
pub const SCREEN_WIDTH: usize = 240;
/// Panel height in pixels
pub const SCREEN_HEIGHT: usize = 135;

fn place_line(frame: &mut Frame, text: &str, color: crate::color::Rgb, x: i32, y: i32) {
    let mut line = label(text, color, 1);
    line.set_position(x, y);
    frame.blit(&line);
}

fn place_details(frame: &mut Frame, details: &CardDetails) {
    place_line(
        frame,
        &format!("CAPACITY: {:.2} MB", details.capacity_mb),
        GREEN,
        10,
        40,
    );
    place_line(
        frame,
        &format!("FREE: {:.2} MB", details.free_mb),
        CYAN,
        10,
        55,
    );
    place_line(
        frame,
        &format!("USED: {:.2} MB", details.used_mb),
        YELLOW,
        10,
        70,
    );
    place_line(frame, "FILES:", ORANGE, 10, 90);

    let mut y = 105;
    for file in &details.files {
        place_line(frame, file, WHITE, 15, y);
        y += 10;
    }
}

/// Render the SD info screen for the manager's current state
pub fn sd_info_screen(sd: &SdManager) -> Frame {
    let mut frame = Frame::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    // backdrop strip behind the header
    frame.blit(&rect(
        0,
        0,
        SCREEN_WIDTH as i32,
        15,
        &PaintSpec::fill(VIOLET).opaque_bg(),
    ));
    // header bar and title
    frame.blit(&rect(0, 0, SCREEN_WIDTH as i32, 30, &PaintSpec::fill(RED)));
    let mut title = label("SD CARD INFO", WHITE, 2);
    title.set_position(60, 10);
    frame.blit(&title);
    // separator under the header
    frame.blit(&rect(0, 30, SCREEN_WIDTH as i32, 2, &PaintSpec::fill(WHITE)));

    if sd.is_mounted() {
        match sd.details() {
            Ok(details) => place_details(&mut frame, &details),
            Err(err) => {
                warn!("card details unavailable: {err}");
                place_line(&mut frame, "NO INFO AVAILABLE.", RED, 10, 40);
            }
        }
    } else {
        warn!("sd card not mounted, rendering error screen");
        place_line(&mut frame, "SD NOT MOUNTED.", RED, 10, 40);
    }

    info!("status screen rendered");
    frame
}
