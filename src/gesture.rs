//! Pointer gesture interpretation.
//!
//! This module turns a pointer displacement into one of the four discrete directions accepted by
//! the movement engine. The displacement is measured from the center of the player's cell and
//! expressed in cell units, so a threshold of one means the pointer has to travel further than a
//! whole cell before anything happens.

use crate::grid::Direction;

/// Pointer travel, in cells, required before a gesture is turned into a move.
pub(crate) const DRAG_THRESHOLD: f64 = 1.0;

/// Classifies a displacement into a direction.
///
/// Returns `None` while the pointer stays within `threshold` on both axes. Otherwise the axis with
/// the larger travel wins, vertical on ties, and its sign picks the direction. Screen coordinates
/// grow downwards, so a positive `dy` means [`Direction::Down`].
pub(crate) fn classify(dx: f64, dy: f64, threshold: f64) -> Option<Direction> {
    let (horizontal, vertical) = (dx.abs(), dy.abs());
    if horizontal <= threshold && vertical <= threshold {
        return None;
    }

    Some(if horizontal > vertical {
        if dx > 0. {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0. {
        Direction::Down
    } else {
        Direction::Up
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_travel_is_ignored() {
        assert_eq!(classify(0.0, 0.0, DRAG_THRESHOLD), None);
        assert_eq!(classify(0.9, -0.9, DRAG_THRESHOLD), None);
        assert_eq!(classify(-1.0, 1.0, DRAG_THRESHOLD), None);
    }

    #[test]
    fn test_horizontal_gestures() {
        assert_eq!(classify(1.5, 0.2, DRAG_THRESHOLD), Some(Direction::Right));
        assert_eq!(classify(-2.0, 1.1, DRAG_THRESHOLD), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_gestures() {
        assert_eq!(classify(0.3, 1.2, DRAG_THRESHOLD), Some(Direction::Down));
        assert_eq!(classify(-0.5, -3.0, DRAG_THRESHOLD), Some(Direction::Up));
    }

    #[test]
    fn test_ties_go_vertical() {
        assert_eq!(classify(2.0, 2.0, DRAG_THRESHOLD), Some(Direction::Down));
        assert_eq!(classify(-2.0, -2.0, DRAG_THRESHOLD), Some(Direction::Up));
    }

    #[test]
    fn test_one_axis_over_threshold_is_enough() {
        assert_eq!(classify(0.1, -1.01, DRAG_THRESHOLD), Some(Direction::Up));
        assert_eq!(classify(4.0, 0.0, 3.0), Some(Direction::Right));
    }
}
