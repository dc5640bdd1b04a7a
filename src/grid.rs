//! Grid representation of the cube state.
//!
//! The grid is stored as a flat vector of `size^3` pieces in linear-index
//! order (see [`coord_to_idx`]). The only way pieces change slots is through
//! the layer rotations in [`crate::rotation`].

use rustc_hash::FxHashMap;

use crate::error::{CubeError, Result};
use crate::geometry::{Axis, Coord, Face};
use crate::pieces::{face_of_label, solved_label, Label, Piece, NO_STICKER};

/// Converts a coordinate to a linear cell index.
///
/// Index order is left-major: `idx = left * size^2 + top * size + depth`.
/// The same index doubles as the piece id a renderer encodes into its
/// picking buffer; with a 16-bit channel that limits `size` to 40.
#[inline(always)]
pub const fn coord_to_idx(size: usize, coord: Coord) -> usize {
    coord.left * size * size + coord.top * size + coord.depth
}

/// Converts a linear cell index to a coordinate.
#[inline(always)]
pub const fn idx_to_coord(size: usize, cell_index: usize) -> Coord {
    Coord::new(
        cell_index / (size * size),
        (cell_index / size) % size,
        cell_index % size,
    )
}

/// A `size × size × size` grid of pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    size: usize,
    pub(crate) pieces: Vec<Piece>,
}

impl CubeState {
    /// Builds a solved cube.
    ///
    /// Each axis is painted independently: a piece with component 0 gets the
    /// near face's label, a piece with component `size - 1` gets the far
    /// face's label. Corners end up with three stickers, edges with two,
    /// centers with one and interior pieces with none.
    pub fn solved(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CubeError::empty_cube());
        }

        let pieces = Coord::all(size)
            .map(|coord| {
                let mut piece = Piece::EMPTY;
                for axis in Axis::ALL {
                    let component = coord.along(axis);
                    if component == 0 {
                        piece.set(axis.near_face(), solved_label(axis.near_face()));
                    }
                    if component == size - 1 {
                        piece.set(axis.far_face(), solved_label(axis.far_face()));
                    }
                }
                piece
            })
            .collect();

        Ok(Self { size, pieces })
    }

    /// Number of pieces along each edge.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fails with [`CubeError::OutOfRange`] unless `coord` is inside the grid.
    pub fn check_coord(&self, coord: Coord) -> Result<()> {
        if coord.is_within(self.size) {
            Ok(())
        } else {
            Err(CubeError::OutOfRange {
                coord,
                size: self.size,
            })
        }
    }

    /// Returns the piece at `coord`.
    pub fn get(&self, coord: Coord) -> Result<Piece> {
        self.check_coord(coord)?;
        Ok(self.pieces[coord_to_idx(self.size, coord)])
    }

    /// Replaces the piece at `coord`.
    pub fn set(&mut self, coord: Coord, piece: Piece) -> Result<()> {
        self.check_coord(coord)?;
        self.pieces[coord_to_idx(self.size, coord)] = piece;
        Ok(())
    }

    /// All pieces in linear-index order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Counts stickers by label, ignoring [`NO_STICKER`].
    ///
    /// Rotations only move stickers around, so this is the same for every
    /// reachable state of a given size.
    pub fn sticker_counts(&self) -> FxHashMap<Label, usize> {
        let mut counts = FxHashMap::default();
        for piece in &self.pieces {
            for (_, label) in piece.stickers() {
                *counts.entry(label).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Whether every face shows a single label.
    ///
    /// Unlike comparing against [`CubeState::solved`], this ignores the
    /// orientation of the cube as a whole.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let mut labels = self.face_labels(face);
            let Some(first) = labels.next() else {
                return true;
            };
            first != NO_STICKER && labels.all(|label| label == first)
        })
    }

    /// Labels visible on `face`, in the row-major order used by
    /// [`CubeState::format_faces`].
    pub fn face_labels(&self, face: Face) -> impl Iterator<Item = Label> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| {
            (0..size).map(move |col| {
                let coord = face_cell(face, size, row, col);
                self.pieces[coord_to_idx(size, coord)].get(face)
            })
        })
    }

    /// Formats the visible stickers as one line per face.
    ///
    /// Each line is the face letter followed by the face's rows, as seen from
    /// outside the cube with Up on top (Front and Back on top for the Up and
    /// Down faces). Stickers print as the letter of the face they were
    /// painted on; missing stickers print as '.'.
    pub fn format_faces(&self) -> String {
        const ORDER: [Face; 6] = [
            Face::Up,
            Face::Left,
            Face::Front,
            Face::Right,
            Face::Back,
            Face::Down,
        ];

        let mut output = String::new();
        for face in ORDER {
            output.push(face.letter());
            let labels: Vec<Label> = self.face_labels(face).collect();
            for row in labels.chunks(self.size) {
                output.push(' ');
                output.extend(row.iter().map(|&label| label_char(label)));
            }
            output.push('\n');
        }
        output
    }
}

/// Display character for a sticker label.
fn label_char(label: Label) -> char {
    face_of_label(label).map_or('.', Face::letter)
}

/// Grid coordinate shown at (`row`, `col`) of `face`, viewed from outside.
///
/// Side faces are viewed with Up on top. Up is viewed from above with Front
/// at the bottom; Down from below with Front at the top.
fn face_cell(face: Face, size: usize, row: usize, col: usize) -> Coord {
    let max = size - 1;
    match face {
        Face::Front => Coord::new(col, row, 0),
        Face::Back => Coord::new(max - col, row, max),
        Face::Left => Coord::new(0, row, max - col),
        Face::Right => Coord::new(max, row, col),
        Face::Up => Coord::new(col, 0, max - row),
        Face::Down => Coord::new(col, max, row),
    }
}
