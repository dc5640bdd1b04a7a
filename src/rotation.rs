//! Quarter-turn layer rotations.
//!
//! A layer is the slice of the grid where one axis component is fixed. It is
//! addressed as a `size × size` matrix by `(u, v)`, the two components that
//! follow the turning axis cyclically:
//!
//! - left-right: `(top, depth)`
//! - top-bottom: `(depth, left)`
//! - front-back: `(left, top)`
//!
//! With that parameterization a clockwise turn (as seen from the axis' far
//! face) moves the piece at `(u, v)` to `(v, size - 1 - u)` for every axis,
//! matching the sticker cycles in [`Axis::clockwise_cycle`].

use std::fmt;

use crate::error::{CubeError, Result};
use crate::geometry::{Axis, Coord};
use crate::grid::{coord_to_idx, CubeState};

/// A quarter turn of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub axis: Axis,
    pub layer: usize,
    pub clockwise: bool,
}

impl Rotation {
    pub const fn new(axis: Axis, layer: usize, clockwise: bool) -> Self {
        Self {
            axis,
            layer,
            clockwise,
        }
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// Fails with [`CubeError::InvalidArgument`] if the layer does not exist
    /// on a cube of `size`.
    pub fn check_layer(self, size: usize) -> Result<()> {
        if self.layer < size {
            Ok(())
        } else {
            Err(CubeError::layer_out_of_range(self.layer, size))
        }
    }

    /// Whether the piece at `coord` belongs to the turning layer.
    #[inline]
    pub fn contains(self, coord: Coord) -> bool {
        coord.along(self.axis) == self.layer
    }

    /// Every coordinate in the turning layer of a cube of `size`.
    pub fn layer_coords(self, size: usize) -> impl Iterator<Item = Coord> {
        (0..size).flat_map(move |u| {
            (0..size).map(move |v| slice_coord(self.axis, self.layer, u, v))
        })
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.clockwise { "cw" } else { "ccw" };
        write!(f, "{}[{}] {direction}", self.axis, self.layer)
    }
}

/// Grid coordinate of cell `(u, v)` in layer `layer` of `axis`.
#[inline]
fn slice_coord(axis: Axis, layer: usize, u: usize, v: usize) -> Coord {
    Coord::default()
        .with(axis, layer)
        .with(Axis::from_index(axis.index() + 1), u)
        .with(Axis::from_index(axis.index() + 2), v)
}

impl CubeState {
    /// Applies one quarter turn to a layer.
    ///
    /// Pieces in the layer trade places in 4-cycles, ring by ring from the
    /// outside in, and then every piece in the layer has its stickers
    /// re-oriented. Cells outside the layer are untouched.
    pub fn rotate_layer(&mut self, axis: Axis, layer: usize, clockwise: bool) -> Result<()> {
        Rotation::new(axis, layer, clockwise).check_layer(self.size())?;
        self.turn_slice(axis, layer, clockwise);
        Ok(())
    }

    /// Applies `rotation` via [`CubeState::rotate_layer`].
    pub fn apply(&mut self, rotation: Rotation) -> Result<()> {
        self.rotate_layer(rotation.axis, rotation.layer, rotation.clockwise)
    }

    /// Turns the whole cube a quarter turn about `axis`.
    pub fn rotate_cube(&mut self, axis: Axis, clockwise: bool) {
        for layer in 0..self.size() {
            self.turn_slice(axis, layer, clockwise);
        }
    }

    /// Turns a layer already known to exist.
    fn turn_slice(&mut self, axis: Axis, layer: usize, clockwise: bool) {
        let size = self.size();
        let max = size - 1;
        let idx = |u, v| coord_to_idx(size, slice_coord(axis, layer, u, v));

        for i in 0..size.div_ceil(2) {
            for j in i..max - i {
                // clockwise, the piece in each slot moves to the next one
                let ring = [
                    idx(i, j),
                    idx(j, max - i),
                    idx(max - i, max - j),
                    idx(max - j, i),
                ];
                self.cycle_pieces(ring, clockwise);
            }
        }

        for u in 0..size {
            for v in 0..size {
                self.pieces[idx(u, v)].turn(axis, clockwise);
            }
        }
    }

    /// Moves the piece at `ring[k]` to `ring[k + 1]` (or `ring[k - 1]` when
    /// going backwards).
    fn cycle_pieces(&mut self, ring: [usize; 4], forward: bool) {
        let [a, b, c, d] = ring;
        let p = &mut self.pieces;
        if forward {
            let last = p[d];
            p[d] = p[c];
            p[c] = p[b];
            p[b] = p[a];
            p[a] = last;
        } else {
            let first = p[a];
            p[a] = p[b];
            p[b] = p[c];
            p[c] = p[d];
            p[d] = first;
        }
    }
}
