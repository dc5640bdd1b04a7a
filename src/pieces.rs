//! Piece definitions and sticker labels.
//!
//! A piece is one cell of the grid. It stores a sticker label for each of
//! its six faces, indexed by [`Face::index`]. Faces without a sticker hold
//! [`NO_STICKER`].

use crate::geometry::{Axis, Face};

/// A sticker label. Zero means "no sticker".
pub type Label = u8;

/// Label of a face that carries no sticker (interior or hidden faces).
pub const NO_STICKER: Label = 0;

/// Label painted on `face` of a solved cube.
///
/// Labels are 1-based in [`Face::ALL`] order: Left 1, Right 2, Up 3, Down 4,
/// Front 5, Back 6.
#[inline]
pub const fn solved_label(face: Face) -> Label {
    face.index() as Label + 1
}

/// The face painted with `label` on a solved cube, if any.
pub fn face_of_label(label: Label) -> Option<Face> {
    Face::ALL
        .into_iter()
        .find(|&face| solved_label(face) == label)
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece {
    stickers: [Label; 6],
}

impl Piece {
    /// A piece with no stickers at all.
    pub const EMPTY: Self = Self {
        stickers: [NO_STICKER; 6],
    };

    /// Returns the label on `face`.
    #[inline]
    pub const fn get(&self, face: Face) -> Label {
        self.stickers[face.index()]
    }

    /// Sets the label on `face`.
    #[inline]
    pub fn set(&mut self, face: Face, label: Label) {
        self.stickers[face.index()] = label;
    }

    /// Builder-style variant of [`Piece::set`].
    #[inline]
    pub fn with(mut self, face: Face, label: Label) -> Self {
        self.set(face, label);
        self
    }

    /// Faces that carry a sticker, with their labels.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, Label)> + '_ {
        Face::ALL
            .into_iter()
            .map(|face| (face, self.get(face)))
            .filter(|&(_, label)| label != NO_STICKER)
    }

    /// Whether this piece carries no sticker.
    pub fn is_blank(&self) -> bool {
        self.stickers.iter().all(|&label| label == NO_STICKER)
    }

    /// Re-orients the stickers for a quarter turn about `axis`.
    ///
    /// The four faces around the axis shift one step along
    /// [`Axis::clockwise_cycle`] (backwards when counter-clockwise); the two
    /// faces on the axis keep their labels.
    pub fn turn(&mut self, axis: Axis, clockwise: bool) {
        let [a, b, c, d] = axis.clockwise_cycle().map(Face::index);
        let s = &mut self.stickers;
        if clockwise {
            let last = s[d];
            s[d] = s[c];
            s[c] = s[b];
            s[b] = s[a];
            s[a] = last;
        } else {
            let first = s[a];
            s[a] = s[b];
            s[b] = s[c];
            s[c] = s[d];
            s[d] = first;
        }
    }
}
