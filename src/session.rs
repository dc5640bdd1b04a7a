//! Interactive cube session: move queue, undo history, selection and the
//! layer animation, driven by [`Session::tick`].
//!
//! A rotation is applied to the cube state in full the moment it begins; the
//! animation afterwards only moves the turning layer's *visual* transforms
//! toward that state. Readers therefore never observe a half-rotated cube.

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, trace};

use crate::animation::{AnimationState, LayerAnimation, PieceTransform};
use crate::error::{CubeError, Result};
use crate::geometry::{position_in_space, Coord, Face};
use crate::grid::{coord_to_idx, CubeState};
use crate::inference::{infer_rotation, Pick};
use crate::rotation::Rotation;
use crate::scramble::scramble;

/// Edge length of a new session's cube.
pub const DEFAULT_SIZE: usize = 3;

/// Animation steps per quarter turn.
pub const DEFAULT_STEP_COUNT: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub size: usize,
    pub step_count: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(CubeError::empty_cube());
        }
        if self.step_count == 0 {
            return Err(CubeError::InvalidArgument(
                "step count must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// A single-threaded interactive session.
///
/// The view orientation is not part of the session; keep a
/// [`ViewRotation`](crate::animation::ViewRotation) next to it and call
/// `reset` on it to reset the orientation, or use
/// [`SharedSession::reset_orientation`](crate::shared::SharedSession::reset_orientation).
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    state: CubeState,
    /// Forward moves waiting to be played.
    queue: VecDeque<Rotation>,
    /// Inverses of played moves, most recent last.
    undo_stack: Vec<Rotation>,
    undo_mode: bool,
    selection: Option<Pick>,
    animation: AnimationState,
    /// Visual transform per cell, in linear-index order.
    piece_transforms: Vec<PieceTransform>,
    last_tick: Option<Duration>,
}

impl Session {
    /// Starts a session on a solved cube.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let state = CubeState::solved(config.size)?;
        let cell_count = state.pieces().len();

        Ok(Self {
            config,
            state,
            queue: VecDeque::new(),
            undo_stack: Vec::new(),
            undo_mode: false,
            selection: None,
            animation: AnimationState::Idle,
            piece_transforms: vec![PieceTransform::IDENTITY; cell_count],
            last_tick: None,
        })
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    /// The logical cube state. Always a whole number of quarter turns.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_undo_mode(&self) -> bool {
        self.undo_mode
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn current_animation(&self) -> Option<&LayerAnimation> {
        self.animation.current()
    }

    /// Whether `tick` has nothing left to do.
    pub fn is_settled(&self) -> bool {
        !self.is_animating()
            && if self.undo_mode {
                self.undo_stack.is_empty()
            } else {
                self.queue.is_empty()
            }
    }

    /// Appends a rotation to the move queue. Playback happens in
    /// [`Session::tick`].
    pub fn enqueue(&mut self, rotation: Rotation) -> Result<()> {
        rotation.check_layer(self.size())?;
        trace!("queued {rotation}");
        self.queue.push_back(rotation);
        Ok(())
    }

    /// Infers a rotation from two picks and queues it.
    ///
    /// Returns the queued rotation and clears the selection, which the picks
    /// have been consumed into. Returns `None` if the picks do not describe a
    /// rotation; the queue and the selection are left unchanged in that case.
    pub fn enqueue_inferred(&mut self, a: Pick, b: Pick) -> Result<Option<Rotation>> {
        let Some(rotation) = infer_rotation(self.size(), a, b) else {
            debug!("no rotation between {a} and {b}");
            return Ok(None);
        };
        self.enqueue(rotation)?;
        self.selection = None;
        Ok(Some(rotation))
    }

    /// Queues `count` random moves drawn from a generator seeded with `seed`.
    pub fn enqueue_randomized(&mut self, count: usize, seed: u64) -> Result<Vec<Rotation>> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let moves = scramble(self.size(), count, &mut rng)?;
        debug!("queued {count} random moves (seed {seed})");
        self.queue.extend(moves.iter().copied());
        Ok(moves)
    }

    /// Flips undo mode and returns the new setting.
    ///
    /// While undo mode is on, `tick` plays back the undo stack and leaves the
    /// move queue alone. Undo mode switches itself off once the stack is
    /// empty.
    pub fn toggle_undo_mode(&mut self) -> bool {
        self.undo_mode = !self.undo_mode;
        debug!(
            "undo mode {} ({} moves to undo)",
            if self.undo_mode { "on" } else { "off" },
            self.undo_stack.len()
        );
        self.undo_mode
    }

    /// Marks a sticker as the first half of a two-pick gesture.
    ///
    /// Fails with [`CubeError::OutOfRange`] outside the cube and with
    /// [`CubeError::InvalidArgument`] for a face the piece does not show.
    pub fn select(&mut self, coord: Coord, face: Face) -> Result<()> {
        let pick = Pick::new(coord, face);
        self.check_pick(pick)?;
        self.selection = Some(pick);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn current_selection(&self) -> Option<Pick> {
        self.selection
    }

    /// Feeds one pick into the two-pick gesture.
    ///
    /// With no outstanding selection, `pick` becomes the selection. Otherwise
    /// the selection and `pick` are run through move inference: on success
    /// the rotation is queued and the selection cleared, on failure `pick`
    /// replaces the selection.
    pub fn pick(&mut self, pick: Pick) -> Result<Option<Rotation>> {
        self.check_pick(pick)?;

        if let Some(selected) = self.selection {
            if let Some(rotation) = self.enqueue_inferred(selected, pick)? {
                debug!("selection {selected} consumed by {pick}: {rotation}");
                return Ok(Some(rotation));
            }
        }

        self.selection = Some(pick);
        Ok(None)
    }

    /// Advances the session by one frame. Returns whether anything changed
    /// that needs a redraw.
    ///
    /// Each call does one of: advance the running animation by a step, begin
    /// the next rotation (from the undo stack in undo mode, otherwise from
    /// the queue), or leave undo mode once the undo stack is empty.
    pub fn tick(&mut self, timestamp: Duration) -> Result<bool> {
        if let Some(last) = self.last_tick.replace(timestamp) {
            trace!("tick after {:?}", timestamp.saturating_sub(last));
        }

        if let Some(animation) = self.animation.advance() {
            trace!(
                "{}: {} steps left",
                animation.rotation(),
                animation.steps_remaining()
            );
            self.set_layer_transform(animation.rotation(), animation.lag());
            return Ok(true);
        }

        if self.undo_mode {
            match self.undo_stack.pop() {
                Some(rotation) => self.start(rotation, false)?,
                None => {
                    debug!("undo stack drained, leaving undo mode");
                    self.undo_mode = false;
                    return Ok(false);
                }
            }
        } else {
            let Some(rotation) = self.queue.pop_front() else {
                return Ok(false);
            };
            self.start(rotation, true)?;
        }
        Ok(true)
    }

    /// Begins `rotation` right away, bypassing the queue.
    ///
    /// Fails with [`CubeError::InvalidState`] while another rotation is
    /// animating.
    pub fn begin(&mut self, rotation: Rotation) -> Result<()> {
        if self.is_animating() {
            return Err(CubeError::InvalidState(
                "a layer rotation is already in progress",
            ));
        }
        self.start(rotation, true)
    }

    /// Like [`Session::begin`], but completes a running animation first.
    pub fn begin_interrupting(&mut self, rotation: Rotation) -> Result<()> {
        rotation.check_layer(self.size())?;
        if self.is_animating() {
            self.force_complete()?;
        }
        self.start(rotation, true)
    }

    /// Snaps the running animation to its end.
    pub fn force_complete(&mut self) -> Result<()> {
        let animation = self.animation.finish()?;
        debug!(
            "{} completed early with {} steps left",
            animation.rotation(),
            animation.steps_remaining()
        );
        self.set_layer_transform(animation.rotation(), PieceTransform::IDENTITY);
        Ok(())
    }

    /// Visual transform of the piece currently at `coord`.
    pub fn piece_transform(&self, coord: Coord) -> Result<PieceTransform> {
        self.state.check_coord(coord)?;
        Ok(self.piece_transforms[coord_to_idx(self.size(), coord)])
    }

    /// Visual transforms of every cell, in linear-index order.
    pub fn piece_transforms(&self) -> &[PieceTransform] {
        &self.piece_transforms
    }

    /// Where the piece at `coord` is drawn right now, in model space.
    pub fn piece_position(&self, coord: Coord) -> Result<[f32; 3]> {
        let transform = self.piece_transform(coord)?;
        Ok(transform.apply(position_in_space(coord, self.size())))
    }

    fn check_pick(&self, pick: Pick) -> Result<()> {
        self.state.check_coord(pick.coord)?;
        if pick.is_visible(self.size()) {
            Ok(())
        } else {
            Err(CubeError::InvalidArgument(format!(
                "{pick} is not a visible sticker"
            )))
        }
    }

    /// Applies `rotation` to the cube state and starts its animation.
    fn start(&mut self, rotation: Rotation, record: bool) -> Result<()> {
        self.animation.begin(rotation, self.config.step_count)?;
        if let Err(err) = self.state.apply(rotation) {
            self.animation = AnimationState::Idle;
            return Err(err);
        }
        if record {
            self.undo_stack.push(rotation.inverse());
        }
        debug!(
            "begin {rotation}{}",
            if record { "" } else { " (undo)" }
        );

        if let Some(animation) = self.animation.current() {
            let lag = animation.lag();
            self.set_layer_transform(rotation, lag);
        }
        Ok(())
    }

    fn set_layer_transform(&mut self, rotation: Rotation, transform: PieceTransform) {
        let size = self.size();
        for coord in rotation.layer_coords(size) {
            self.piece_transforms[coord_to_idx(size, coord)] = transform;
        }
    }
}
