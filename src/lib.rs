//! N×N×N Rubik's cube state library
//!
//! Holds the logical state of a cube of any size and turns its layers. It also
//! infers which layer to turn from two picked stickers, and drives a step-wise
//! animation that never exposes a half-rotated cube.
//!
//! Rendering, input devices and timing are left to the host: it feeds picks
//! into a [`Session`] and calls [`Session::tick`] once per frame.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod inference;
pub mod pieces;
pub mod rotation;
pub mod scramble;
pub mod session;
pub mod shared;

pub use animation::{AnimationState, LayerAnimation, PieceTransform, ViewRotation};
pub use error::{CubeError, Result};
pub use geometry::{Axis, Coord, Face};
pub use grid::CubeState;
pub use inference::{infer_rotation, Pick};
pub use pieces::{Label, Piece, NO_STICKER};
pub use rotation::Rotation;
pub use session::{Session, SessionConfig};
pub use shared::SharedSession;
