//! Inferring a layer rotation from two picked stickers.
//!
//! The gesture grammar: the user picks one (coordinate, face) pair, then a
//! second. Two picks on the same face mean "drag the sticker along this
//! face"; two picks on the same piece mean "roll the piece from one face
//! onto the other". Anything else is not a move.
//!
//! Both picks must be stickers a user can actually see, i.e. the picked face
//! of a piece on that face of the cube; a picking buffer never reports
//! anything else.
//!
//! In both cases the sticker under the first pick travels toward the second
//! pick. The turn is clockwise exactly when that travel is a step of
//! [`Axis::clockwise_cycle`], which also takes care of the sign flip on the
//! far faces (Right, Down, Back).

use std::fmt;

use crate::geometry::{clockwise_step, Axis, Coord, Face};
use crate::rotation::Rotation;

/// A picked sticker: a grid coordinate and one of its faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pick {
    pub coord: Coord,
    pub face: Face,
}

impl Pick {
    pub const fn new(coord: Coord, face: Face) -> Self {
        Self { coord, face }
    }

    /// Whether this pick is a visible sticker position on a cube of `size`.
    pub fn is_visible(self, size: usize) -> bool {
        self.coord.is_within(size) && self.coord.is_on(self.face, size)
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} | {}]", self.coord, self.face)
    }
}

/// Derives the unique rotation implied by picking `a` and then `b` on a cube
/// of `size`.
///
/// Returns `None` when the picks imply no rotation or an ambiguous one. This
/// is a normal outcome, not an error.
pub fn infer_rotation(size: usize, a: Pick, b: Pick) -> Option<Rotation> {
    if !a.is_visible(size) || !b.is_visible(size) {
        return None;
    }

    if a.face == b.face && a.coord != b.coord {
        infer_drag(a, b)
    } else if a.coord == b.coord && a.face != b.face {
        infer_roll(a, b)
    } else {
        None
    }
}

/// Same face, different pieces.
fn infer_drag(a: Pick, b: Pick) -> Option<Rotation> {
    let face = a.face;
    let normal = face.axis();
    let [first, second] = [
        Axis::from_index(normal.index() + 1),
        Axis::from_index(normal.index() + 2),
    ];

    // exactly one of the in-face components must stay fixed
    let (axis, drag) = match (
        a.coord.along(first) == b.coord.along(first),
        a.coord.along(second) == b.coord.along(second),
    ) {
        (true, false) => (first, second),
        (false, true) => (second, first),
        _ => return None,
    };

    let toward = if b.coord.along(drag) > a.coord.along(drag) {
        drag.far_face()
    } else {
        drag.near_face()
    };
    let clockwise = clockwise_step(axis, face, toward)?;

    Some(Rotation::new(axis, a.coord.along(axis), clockwise))
}

/// Same piece, different faces.
fn infer_roll(a: Pick, b: Pick) -> Option<Rotation> {
    let axis = a.face.axis().remaining(b.face.axis())?;
    let clockwise = clockwise_step(axis, a.face, b.face)?;

    Some(Rotation::new(axis, a.coord.along(axis), clockwise))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CubeState;

    fn pick(left: usize, top: usize, depth: usize, face: Face) -> Pick {
        Pick::new(Coord::new(left, top, depth), face)
    }

    #[test]
    fn test_drag_along_top_front_row() {
        let a = pick(0, 0, 0, Face::Up);
        let b = pick(1, 0, 0, Face::Up);

        assert_eq!(
            infer_rotation(3, a, b),
            Some(Rotation::new(Axis::FrontBack, 0, false))
        );
        assert_eq!(
            infer_rotation(3, b, a),
            Some(Rotation::new(Axis::FrontBack, 0, true))
        );
    }

    #[test]
    fn test_ambiguous_drag_is_rejected() {
        // (1, 1, *) shows no Up sticker
        assert_eq!(
            infer_rotation(3, pick(1, 1, 0, Face::Up), pick(1, 1, 2, Face::Up)),
            None
        );
        // both in-face components differ
        assert_eq!(
            infer_rotation(3, pick(0, 0, 0, Face::Front), pick(2, 2, 0, Face::Front)),
            None
        );
    }

    #[test]
    fn test_same_pick_is_rejected() {
        let a = pick(0, 0, 0, Face::Up);
        assert_eq!(infer_rotation(3, a, a), None);
    }

    #[test]
    fn test_unrelated_picks_are_rejected() {
        assert_eq!(
            infer_rotation(3, pick(0, 0, 0, Face::Up), pick(1, 0, 0, Face::Front)),
            None
        );
    }

    #[test]
    fn test_roll_across_opposite_faces_is_rejected() {
        let coord = Coord::new(0, 0, 0);
        assert_eq!(
            infer_rotation(3, Pick::new(coord, Face::Left), Pick::new(coord, Face::Right)),
            None
        );
    }

    #[test]
    fn test_roll_uses_remaining_axis() {
        let coord = Coord::new(0, 0, 2);
        assert_eq!(
            infer_rotation(3, Pick::new(coord, Face::Up), Pick::new(coord, Face::Back)),
            Some(Rotation::new(Axis::LeftRight, 0, true))
        );
        assert_eq!(
            infer_rotation(3, Pick::new(coord, Face::Back), Pick::new(coord, Face::Up)),
            Some(Rotation::new(Axis::LeftRight, 0, false))
        );
        assert_eq!(
            infer_rotation(3, Pick::new(coord, Face::Left), Pick::new(coord, Face::Up)),
            Some(Rotation::new(Axis::FrontBack, 2, false))
        );
    }

    #[test]
    fn test_far_face_drag_flips_direction() {
        // same drag direction (toward larger depth) on the near and far faces
        let near = infer_rotation(3, pick(0, 1, 0, Face::Left), pick(0, 1, 1, Face::Left));
        let far = infer_rotation(3, pick(2, 1, 0, Face::Right), pick(2, 1, 1, Face::Right));
        assert_eq!(near, Some(Rotation::new(Axis::TopBottom, 1, false)));
        assert_eq!(far, Some(Rotation::new(Axis::TopBottom, 1, true)));
    }

    #[test]
    fn test_mirror_drags_are_inverse() {
        let size = 3;
        for face in Face::ALL {
            for a in Coord::all(size).filter(|c| c.is_on(face, size)) {
                for b in Coord::all(size).filter(|c| c.is_on(face, size)) {
                    let forward = infer_rotation(size, Pick::new(a, face), Pick::new(b, face));
                    let backward = infer_rotation(size, Pick::new(b, face), Pick::new(a, face));
                    match (forward, backward) {
                        (Some(f), Some(r)) => {
                            assert_eq!(f.axis, r.axis);
                            assert_eq!(f.layer, r.layer);
                            assert_ne!(f.clockwise, r.clockwise);
                        }
                        (None, None) => {}
                        other => panic!("asymmetric inference for ({a}) ({b}) on {face}: {other:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn test_drag_moves_sticker_toward_second_pick() {
        // dragging from the back row of Up toward the front carries the
        // picked sticker over the front edge
        let mut cube = CubeState::solved(3).unwrap();
        let a = pick(1, 0, 2, Face::Up);
        let b = pick(1, 0, 1, Face::Up);
        let marked = cube.get(a.coord).unwrap().with(Face::Up, 77);
        cube.set(a.coord, marked).unwrap();

        let rotation = infer_rotation(3, a, b).unwrap();
        assert_eq!(rotation, Rotation::new(Axis::LeftRight, 1, false));
        cube.apply(rotation).unwrap();

        assert_eq!(cube.get(Coord::new(1, 0, 0)).unwrap().get(Face::Front), 77);
    }

    #[test]
    fn test_hidden_picks_are_rejected() {
        // neither piece shows an Up sticker on a 3x3x3 cube
        assert_eq!(
            infer_rotation(3, pick(1, 1, 0, Face::Up), pick(1, 2, 0, Face::Up)),
            None
        );
        // outside the cube
        assert_eq!(
            infer_rotation(3, pick(0, 0, 0, Face::Up), pick(3, 0, 0, Face::Up)),
            None
        );
    }

    #[test]
    fn test_roll_moves_sticker_onto_second_face() {
        let coord = Coord::new(2, 0, 0);
        let mut cube = CubeState::solved(3).unwrap();
        let marked = cube.get(coord).unwrap().with(Face::Front, 77);
        cube.set(coord, marked).unwrap();

        let rotation = infer_rotation(3, Pick::new(coord, Face::Front), Pick::new(coord, Face::Right));
        let rotation = rotation.unwrap();
        cube.apply(rotation).unwrap();

        let on_right = Coord::all(3)
            .filter(|c| c.is_on(Face::Right, 3))
            .any(|c| cube.get(c).unwrap().get(Face::Right) == 77);
        assert!(on_right, "{rotation} did not roll the sticker onto Right");
    }
}
