//! Synthetic progress model for an in-flight generation.
//!
//! The provider gives no progress feedback, so the UI shows a fabricated
//! percentage: each tick advances by a fixed step toward a ceiling short of
//! 100, and only the final outcome moves it to completion (or back to zero).
//! The periodic driving of [`SyntheticProgress::tick`] lives in the
//! orchestrator crate; this state machine is pure so the curve itself can be
//! tested without timers.

/// Percentage added per tick.
pub const PROGRESS_STEP: u8 = 5;
/// Ceiling the ticker may reach on its own; never passed until resolution.
pub const PROGRESS_CEILING: u8 = 90;
/// Value reported once the provider call has succeeded.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Fabricated progress percentage for one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntheticProgress(u8);

impl SyntheticProgress {
    /// Start a fresh attempt at zero.
    pub fn new() -> Self {
        Self(0)
    }

    /// Current percentage, `0..=100`.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Advance one step, saturating at [`PROGRESS_CEILING`].
    pub fn tick(&mut self) -> u8 {
        self.0 = (self.0 + PROGRESS_STEP).min(PROGRESS_CEILING);
        self.0
    }

    /// Jump to [`PROGRESS_COMPLETE`] on success.
    pub fn complete(&mut self) -> u8 {
        self.0 = PROGRESS_COMPLETE;
        self.0
    }

    /// Drop back to zero on failure.
    pub fn reset(&mut self) -> u8 {
        self.0 = 0;
        self.0
    }
}
