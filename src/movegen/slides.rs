//! Legal slide enumeration.

use crate::board::{Board, SlideIndicator, ALL_DIRECTIONS};

/// Returns every slide indicator the board currently accepts, grouped by
/// entry side (north, east, south, west) and ordered by index.
pub fn legal_slides(board: &Board) -> Vec<SlideIndicator> {
    let mut slides = Vec::new();
    for side in ALL_DIRECTIONS {
        let probe = SlideIndicator::new(side, 0);
        let line_count = if probe.is_row() { board.height() } else { board.width() };
        for index in (2..line_count).step_by(2) {
            let indicator = SlideIndicator::new(side, index);
            if board.check_slide(indicator).is_ok() {
                slides.push(indicator);
            }
        }
    }
    slides
}
