//! In-flight guard for mutating calls.
//!
//! Disabled buttons are advisory only; a double-click or a race between two
//! triggers can still fire twice. Handlers check this flag atomically before
//! dispatching, so a second submit/delete for the same logical action is a
//! no-op while the first is outstanding.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct InFlight(RwSignal<bool>);

impl InFlight {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    /// Claim the slot. Returns `false` when an operation is already running.
    pub fn try_begin(&self) -> bool {
        if self.0.get_untracked() {
            return false;
        }
        self.0.set(true);
        true
    }

    pub fn finish(&self) {
        self.0.set(false);
    }

    /// Reactive read for disabling controls / busy affixes.
    pub fn running(&self) -> bool {
        self.0.get()
    }
}

impl Default for InFlight {
    fn default() -> Self {
        Self::new()
    }
}
