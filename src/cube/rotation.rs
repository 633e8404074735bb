//! Quarter-turn state machine.
//!
//! `Idle -> Animating` on a request, `Animating -> Idle` once the configured
//! duration has elapsed. Requests while animating are dropped.

use std::time::Duration;

use crate::cube::lattice::{Axis, Face, quarter_turns};
use crate::utils::constants::cube_constants::QUARTER_TURN;

/// The single in-flight face turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationSession {
    pub face: Face,
    pub axis: Axis,
    pub sign: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub started_at: Duration,
}

impl RotationSession {
    /// Face frame angle `elapsed` into the turn. Not wrapped.
    pub fn angle_at(&self, elapsed: Duration, duration: Duration) -> f32 {
        let rate = QUARTER_TURN / duration.as_secs_f32();
        self.start_angle + self.sign * elapsed.as_secs_f32() * rate
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RotationState {
    #[default]
    Idle,
    Animating(RotationSession),
}

/// Outcome of one frame tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    Idle,
    Turning { face: Face, angle: f32 },
    Finished(RotationSession),
}

#[derive(Clone, Debug)]
pub struct RotationMachine {
    state: RotationState,
    duration: Duration,
}

impl RotationMachine {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: RotationState::Idle,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, RotationState::Animating(_))
    }

    pub fn session(&self) -> Option<&RotationSession> {
        match &self.state {
            RotationState::Idle => None,
            RotationState::Animating(session) => Some(session),
        }
    }

    /// Starts turning `face` from `current_angle`. Returns `None` and leaves
    /// the live session untouched if one is already running.
    pub fn begin(
        &mut self,
        face: Face,
        current_angle: f32,
        now: Duration,
    ) -> Option<RotationSession> {
        if self.is_animating() {
            return None;
        }

        let sign = face.turn_sign();
        let start = quarter_turns(current_angle);
        let end = (start + sign as i32).rem_euclid(4);
        let session = RotationSession {
            face,
            axis: face.axis(),
            sign,
            start_angle: start as f32 * QUARTER_TURN,
            end_angle: end as f32 * QUARTER_TURN,
            started_at: now,
        };
        self.state = RotationState::Animating(session);
        Some(session)
    }

    /// Advances the live session to `now`.
    pub fn tick(&mut self, now: Duration) -> Tick {
        let RotationState::Animating(session) = self.state else {
            return Tick::Idle;
        };

        let elapsed = now.saturating_sub(session.started_at);
        if elapsed >= self.duration {
            self.state = RotationState::Idle;
            return Tick::Finished(session);
        }

        Tick::Turning {
            face: session.face,
            angle: session.angle_at(elapsed, self.duration),
        }
    }
}
