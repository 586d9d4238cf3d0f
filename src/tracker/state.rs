//! Idle/Active state machine
//!
//! Pure and clock-free: the caller owns the actual timer and reports expiry
//! back with the token it was armed with. Every arm bumps the generation, so
//! only the most recently armed token can move the state into `Idle`.

use crate::capture::input::types::PointerPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePhase {
    /// Movement observed within the idle window
    Active,
    /// No qualifying movement for the idle delay
    Idle,
}

/// What the presentation layer is told after each transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub position: PointerPosition,
    pub idle: bool,
}

/// Identifies one arming of the idle timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
pub struct IdleState {
    position: PointerPosition,
    phase: IdlePhase,
    generation: u64,
    pending: Option<TimerToken>,
}

impl IdleState {
    /// Fresh state for a new attachment.
    ///
    /// Starts `Active` when the timer will be armed immediately, `Idle`
    /// otherwise.
    pub fn new(arm_on_attach: bool) -> Self {
        Self {
            position: PointerPosition::default(),
            phase: if arm_on_attach {
                IdlePhase::Active
            } else {
                IdlePhase::Idle
            },
            generation: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> IdlePhase {
        self.phase
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            idle: self.phase == IdlePhase::Idle,
        }
    }

    /// Replace any pending timer with a new one.
    pub fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some(token);
        token
    }

    /// Record a qualifying move. Always leaves the state `Active` with a
    /// freshly armed timer.
    pub fn on_pointer_move(&mut self, position: PointerPosition) -> (Snapshot, TimerToken) {
        self.position = position;
        self.phase = IdlePhase::Active;
        let token = self.arm();
        (self.snapshot(), token)
    }

    /// Timer expiry. Stale tokens are ignored.
    pub fn on_timer_expired(&mut self, token: TimerToken) -> Option<Snapshot> {
        if self.pending != Some(token) {
            return None;
        }
        self.pending = None;
        self.phase = IdlePhase::Idle;
        Some(self.snapshot())
    }
}
