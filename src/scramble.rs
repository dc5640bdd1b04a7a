//! Random move sequences.

use log::info;

use crate::error::{CubeError, Result};
use crate::geometry::Axis;
use crate::rotation::Rotation;

/// Draws `count` uniformly random rotations for a cube of `size`.
///
/// No two consecutive moves turn the same layer; a draw that would is thrown
/// away and redrawn.
pub fn scramble(size: usize, count: usize, rng: &mut fastrand::Rng) -> Result<Vec<Rotation>> {
    if size == 0 {
        return Err(CubeError::empty_cube());
    }

    let mut moves: Vec<Rotation> = Vec::with_capacity(count);
    while moves.len() < count {
        let rotation = Rotation::new(
            Axis::from_index(rng.usize(..3)),
            rng.usize(..size),
            rng.bool(),
        );
        if let Some(previous) = moves.last() {
            if previous.axis == rotation.axis && previous.layer == rotation.layer {
                continue;
            }
        }
        moves.push(rotation);
    }

    info!("scrambled {count} moves for size {size}");
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CubeState;

    #[test]
    fn test_zero_size_is_rejected() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(matches!(
            scramble(0, 5, &mut rng),
            Err(CubeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_count_and_layer_bounds() {
        let mut rng = fastrand::Rng::with_seed(2);
        for size in 1..=6 {
            let moves = scramble(size, 50, &mut rng).unwrap();
            assert_eq!(moves.len(), 50);
            assert!(moves.iter().all(|rotation| rotation.layer < size));
        }
        assert!(scramble(3, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_no_layer_turns_twice_in_a_row() {
        let mut rng = fastrand::Rng::with_seed(3);
        // a single-piece cube has only three layers to pick from
        for size in [1, 2, 3] {
            let moves = scramble(size, 200, &mut rng).unwrap();
            for pair in moves.windows(2) {
                assert!(
                    (pair[0].axis, pair[0].layer) != (pair[1].axis, pair[1].layer),
                    "{} followed by {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let a = scramble(5, 40, &mut fastrand::Rng::with_seed(42)).unwrap();
        let b = scramble(5, 40, &mut fastrand::Rng::with_seed(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scramble_keeps_stickers() {
        let mut rng = fastrand::Rng::with_seed(4);
        let solved = CubeState::solved(4).unwrap();
        let mut cube = solved.clone();
        for rotation in scramble(4, 100, &mut rng).unwrap() {
            cube.apply(rotation).unwrap();
        }
        assert_eq!(cube.sticker_counts(), solved.sticker_counts());
        assert!(!cube.is_solved());
    }
}
