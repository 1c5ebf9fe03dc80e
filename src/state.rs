use serde::Serialize;
use std::time::Instant;

use crate::i18n::Messages;

/// How long the button must stay pressed before the door request fires.
pub const HOLD_DURATION_MS: u64 = 1500;
/// How long the success message stays on screen before reverting.
pub const SUCCESS_RESET_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Holding,
    Loading,
}

/// Result of one door request. A release before the hold completes is a
/// plain transition back to Idle, not an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The relay answered with the success sentinel.
    Success,
    /// The relay answered with a human-readable failure reason.
    ServerFailure(String),
    /// The relay answered with an empty body.
    Unknown,
    /// The request never produced a usable answer (connect error, timeout,
    /// non-2xx status).
    TransportFailure,
}

/// Display color class. The frontend maps these to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Default,
    Opening,
    Success,
    Failure,
    Unknown,
}

/// What the main screen shows. Strings are resolved against the active
/// language at transition time, like the original app did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Display {
    pub title: String,
    pub accent: Accent,
    pub subtitle: Option<String>,
}

impl Display {
    fn idle(messages: &Messages) -> Self {
        Self {
            title: messages.title.to_string(),
            accent: Accent::Default,
            subtitle: None,
        }
    }
}

/// Payload for `display-changed` events and the `get_display` command.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    #[serde(flatten)]
    pub display: Display,
}

/// The hold-to-open controller.
///
/// The epoch counter invalidates timers scheduled for a superseded hold or
/// result: every transition that makes pending timers stale bumps it, and a
/// timer callback carrying an old epoch is a no-op. Cancellation never
/// touches the spawned task itself.
pub struct AppState {
    phase: Phase,
    display: Display,
    epoch: u64,
    hold_started: Option<Instant>,
}

impl AppState {
    pub fn new(messages: &Messages) -> Self {
        Self {
            phase: Phase::Idle,
            display: Display::idle(messages),
            epoch: 0,
            hold_started: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            display: self.display.clone(),
        }
    }

    /// Fraction of the hold completed so far, in [0, 1].
    pub fn progress(&self) -> f32 {
        match (self.phase, self.hold_started) {
            (Phase::Holding, Some(started)) => {
                let elapsed = started.elapsed().as_millis() as f32;
                (elapsed / HOLD_DURATION_MS as f32).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Pointer down. Ignored while a request is in flight; otherwise enters
    /// Holding, clears any lingering subtitle and returns the epoch the
    /// caller must schedule the hold timer under.
    pub fn press(&mut self) -> Option<u64> {
        if self.phase == Phase::Loading {
            return None;
        }
        self.phase = Phase::Holding;
        self.display.subtitle = None;
        self.hold_started = Some(Instant::now());
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Pointer up. Only a release during Holding cancels anything; lifting
    /// the pointer while Idle or Loading (after the hold already fired)
    /// must not invalidate a scheduled success auto-reset.
    pub fn release(&mut self) {
        if self.phase != Phase::Holding {
            return;
        }
        self.phase = Phase::Idle;
        self.hold_started = None;
        self.epoch += 1;
    }

    /// The hold timer fired. Returns true when the caller must issue the
    /// door request; false when the hold was released or superseded in the
    /// meantime.
    pub fn hold_elapsed(&mut self, epoch: u64, messages: &Messages) -> bool {
        if epoch != self.epoch || self.phase != Phase::Holding {
            return false;
        }
        self.phase = Phase::Loading;
        self.hold_started = None;
        self.display = Display {
            title: messages.opening.to_string(),
            accent: Accent::Opening,
            subtitle: None,
        };
        true
    }

    /// Apply the request outcome. Leaves Loading in all branches, which
    /// re-enables the trigger. Returns true when the success display must be
    /// reverted after [`SUCCESS_RESET_MS`]; failure and unknown displays
    /// stay until the next hold.
    pub fn finish(&mut self, outcome: &Outcome, messages: &Messages) -> bool {
        self.phase = Phase::Idle;
        self.hold_started = None;
        self.epoch += 1;
        match outcome {
            Outcome::Success => {
                self.display = Display {
                    title: messages.funny_success.to_string(),
                    accent: Accent::Success,
                    subtitle: None,
                };
                true
            }
            Outcome::ServerFailure(reason) => {
                self.display = Display {
                    title: messages.fail.to_string(),
                    accent: Accent::Failure,
                    subtitle: Some(format!("{}\n({})", messages.fail_reason, reason)),
                };
                false
            }
            Outcome::Unknown => {
                self.display = Display {
                    title: messages.unknown.to_string(),
                    accent: Accent::Unknown,
                    subtitle: None,
                };
                false
            }
            Outcome::TransportFailure => {
                self.display = Display {
                    title: messages.error.to_string(),
                    accent: Accent::Failure,
                    subtitle: Some(messages.fail_reason.to_string()),
                };
                false
            }
        }
    }

    /// The success display window elapsed. A stale epoch means a newer hold
    /// or result owns the screen now.
    pub fn reset_display(&mut self, epoch: u64, messages: &Messages) {
        if epoch != self.epoch {
            return;
        }
        self.display = Display::idle(messages);
    }

    /// Re-resolve the idle display after a language change. Result text from
    /// the previous request keeps its original language until the next
    /// transition.
    pub fn relocalize(&mut self, messages: &Messages) {
        if self.phase == Phase::Idle && self.display.accent == Accent::Default {
            self.display = Display::idle(messages);
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
