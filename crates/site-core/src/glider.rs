//! Motion model for the hero hang glider.
//!
//! The controller alternates between two modes. While [`GliderMode::Idle`]
//! it drifts toward a target that is rerolled every couple of seconds, with
//! a vertical bob and a little turbulence on top. While
//! [`GliderMode::Dragging`] the pointer owns the position outright. All state
//! belongs to one controller instance and is dropped with the scene.

use crate::constants::*;
use crate::random::RandomSource;
use glam::Vec2;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GliderMode {
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    /// Pointer minus position at the moment the drag began.
    pub offset: Vec2,
}

/// Rendered attitude of the glider for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub translation: Vec2,
    /// Rotation about the z axis (bank).
    pub roll: f32,
    /// Rotation about the x axis (nose up/down).
    pub pitch: f32,
}

#[inline]
pub fn clamp_to_bounds(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x.clamp(BOUNDS_X.0, BOUNDS_X.1),
        p.y.clamp(BOUNDS_Y.0, BOUNDS_Y.1),
    )
}

#[inline]
pub fn in_bounds(p: Vec2) -> bool {
    (BOUNDS_X.0..=BOUNDS_X.1).contains(&p.x) && (BOUNDS_Y.0..=BOUNDS_Y.1).contains(&p.y)
}

/// Pick a fresh target within one max-step neighbourhood of `current`.
pub fn nearby_position(current: Vec2, rng: &mut impl RandomSource) -> Vec2 {
    let half_step = WANDER_MAX_STEP * 0.5;
    let dx = rng.signed_unit() * half_step;
    let dy = rng.signed_unit() * half_step;
    clamp_to_bounds(current + Vec2::new(dx, dy))
}

/// Vertical bob applied to the rendered pose only.
#[inline]
pub fn bob_offset(t: f32) -> f32 {
    (t * BOB_PRIMARY.0).sin() * BOB_PRIMARY.1 + (t * BOB_SECONDARY.0).cos() * BOB_SECONDARY.1
}

pub struct GliderController<R: RandomSource = StdRng> {
    position: Vec2,
    target: Vec2,
    drag: DragState,
    pose: Pose,
    rng: R,
}

impl<R: RandomSource> GliderController<R> {
    /// Controller parked at the origin, as on scene mount.
    pub fn new(rng: R) -> Self {
        Self::starting_at(Vec2::ZERO, Vec2::ZERO, rng)
    }

    pub fn starting_at(position: Vec2, target: Vec2, rng: R) -> Self {
        let position = clamp_to_bounds(position);
        Self {
            position,
            target: clamp_to_bounds(target),
            drag: DragState::default(),
            pose: Pose {
                translation: position,
                ..Pose::default()
            },
            rng,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn mode(&self) -> GliderMode {
        if self.drag.dragging {
            GliderMode::Dragging
        } else {
            GliderMode::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Advance one rendered frame. `elapsed_sec` is the time since mount.
    pub fn on_frame(&mut self, elapsed_sec: f32) {
        if self.drag.dragging {
            // Pointer owns the position; keep the last attitude.
            self.pose.translation = self.position;
            return;
        }
        let t = elapsed_sec;
        let mut p = self.position;
        p.x += (self.target.x - p.x) * SMOOTHING_X;
        p.y += (self.target.y - p.y) * SMOOTHING_Y;
        p.x += self.rng.signed_unit() * TURBULENCE_AMPLITUDE;
        self.position = clamp_to_bounds(p);

        let dx = self.target.x - self.position.x;
        let dy = self.target.y - self.position.y;
        self.pose = Pose {
            translation: Vec2::new(self.position.x, self.position.y + bob_offset(t)),
            roll: dx * ROLL_PER_UNIT_DX + (t * ROLL_SWAY.0).sin() * ROLL_SWAY.1,
            pitch: dy * PITCH_PER_UNIT_DY + (t * PITCH_DRIFT.0).cos() * PITCH_DRIFT.1,
        };
    }

    /// Periodic reroll of the wander target. Ignored mid-drag.
    pub fn on_idle_tick(&mut self) {
        if self.drag.dragging {
            return;
        }
        self.target = self.nearby_position(self.position);
    }

    pub fn nearby_position(&mut self, current: Vec2) -> Vec2 {
        nearby_position(current, &mut self.rng)
    }

    pub fn on_drag_start(&mut self, pointer: Vec2) {
        self.drag = DragState {
            dragging: true,
            offset: pointer - self.position,
        };
        log::debug!(
            "[glider] drag start at ({:.2},{:.2})",
            self.position.x,
            self.position.y
        );
    }

    pub fn on_drag_move(&mut self, pointer: Vec2) {
        if !self.drag.dragging {
            return;
        }
        self.position = clamp_to_bounds(pointer - self.drag.offset);
        self.pose.translation = self.position;
    }

    pub fn on_drag_end(&mut self) {
        self.release();
    }

    pub fn on_drag_cancel(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.drag.dragging = false;
        self.target = self.nearby_position(self.position);
        log::debug!(
            "[glider] released at ({:.2},{:.2}) -> target ({:.2},{:.2})",
            self.position.x,
            self.position.y,
            self.target.x,
            self.target.y
        );
    }
}
