//! Layer-rotation animation state.
//!
//! The cube state is updated the moment a rotation begins. The animation only
//! tracks how far the turning layer still *lags behind* that state visually,
//! counted in fixed steps of `±π / (2 × step_count)`.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::error::{CubeError, Result};
use crate::geometry::{rotate_point, Axis};
use crate::rotation::Rotation;

/// A single in-flight layer rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerAnimation {
    rotation: Rotation,
    /// Angle per step in clockwise units; negative for counter-clockwise.
    step_angle: f32,
    steps_remaining: u32,
}

impl LayerAnimation {
    fn new(rotation: Rotation, step_count: u32) -> Self {
        let step_angle = FRAC_PI_2 / step_count as f32;
        Self {
            rotation,
            step_angle: if rotation.clockwise {
                step_angle
            } else {
                -step_angle
            },
            steps_remaining: step_count,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn step_angle(&self) -> f32 {
        self.step_angle
    }

    pub fn steps_remaining(&self) -> u32 {
        self.steps_remaining
    }

    /// Angle the layer still has to turn, in clockwise units.
    pub fn remaining_angle(&self) -> f32 {
        self.step_angle * self.steps_remaining as f32
    }

    /// Transform for pieces in the turning layer.
    ///
    /// Applied to a piece's current (post-turn) position this gives where the
    /// piece is drawn right now.
    pub fn lag(&self) -> PieceTransform {
        PieceTransform {
            axis: self.rotation.axis,
            angle: -self.remaining_angle() * self.rotation.axis.clockwise_sign(),
        }
    }
}

/// Whether a layer is currently turning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    InProgress(LayerAnimation),
}

impl AnimationState {
    /// Starts animating `rotation` over `step_count` steps.
    pub fn begin(&mut self, rotation: Rotation, step_count: u32) -> Result<()> {
        if step_count == 0 {
            return Err(CubeError::InvalidArgument(
                "step count must be > 0".to_owned(),
            ));
        }
        if self.is_animating() {
            return Err(CubeError::InvalidState(
                "a layer rotation is already in progress",
            ));
        }
        *self = Self::InProgress(LayerAnimation::new(rotation, step_count));
        Ok(())
    }

    /// Advances one step. Returns the animation as it stands after the step,
    /// or `None` if nothing was animating.
    ///
    /// Reaching the last step goes back to [`AnimationState::Idle`].
    pub fn advance(&mut self) -> Option<LayerAnimation> {
        let Self::InProgress(animation) = self else {
            return None;
        };
        animation.steps_remaining = animation.steps_remaining.saturating_sub(1);
        let animation = *animation;
        if animation.steps_remaining == 0 {
            *self = Self::Idle;
        }
        Some(animation)
    }

    /// Drops the remaining steps at once.
    pub fn finish(&mut self) -> Result<LayerAnimation> {
        match std::mem::take(self) {
            Self::InProgress(animation) => Ok(animation),
            Self::Idle => Err(CubeError::InvalidState("no layer rotation in progress")),
        }
    }

    pub fn current(&self) -> Option<&LayerAnimation> {
        match self {
            Self::Idle => None,
            Self::InProgress(animation) => Some(animation),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::InProgress(_))
    }
}

/// Visual rotation of a single piece about the center of the cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceTransform {
    pub axis: Axis,
    /// Right-handed angle in radians about the spatial axis of `axis`.
    pub angle: f32,
}

impl PieceTransform {
    pub const IDENTITY: Self = Self {
        axis: Axis::LeftRight,
        angle: 0.0,
    };

    pub fn apply(&self, point: [f32; 3]) -> [f32; 3] {
        if self.is_identity() {
            point
        } else {
            rotate_point(point, self.axis, self.angle)
        }
    }

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }
}

impl Default for PieceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Orientation of the whole cube in the viewer, driven by free drags.
///
/// This is purely presentational and never touches the cube state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewRotation {
    /// Turn about the vertical axis, kept in `[-π, π)`.
    pub yaw: f32,
    /// Tilt toward the viewer, clamped to `[-π/2, π/2]`.
    pub pitch: f32,
}

impl ViewRotation {
    pub fn rotate(&mut self, yaw: f32, pitch: f32) {
        self.yaw = (self.yaw + yaw + PI).rem_euclid(2.0 * PI) - PI;
        self.pitch = (self.pitch + pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Maps a model-space point to view space: yaw first, then pitch.
    pub fn apply(&self, point: [f32; 3]) -> [f32; 3] {
        let point = rotate_point(point, Axis::TopBottom, self.yaw);
        rotate_point(point, Axis::LeftRight, self.pitch)
    }
}
