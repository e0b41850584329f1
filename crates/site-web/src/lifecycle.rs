use std::cell::Cell;

/// Identifies one hero mount attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountTicket(u32);

/// Tracks page visibility across `pagehide`/`pageshow` so an async hero
/// mount that finishes after the page was hidden can be discarded.
#[derive(Debug, Default)]
pub struct PageLifecycle {
    generation: Cell<u32>,
    hidden: Cell<bool>,
}

impl PageLifecycle {
    pub const fn new() -> Self {
        Self {
            generation: Cell::new(0),
            hidden: Cell::new(false),
        }
    }

    /// Taken before awaiting the renderer.
    pub fn begin_mount(&self) -> MountTicket {
        MountTicket(self.generation.get())
    }

    /// Whether a mount started with `ticket` may be installed.
    pub fn is_current(&self, ticket: MountTicket) -> bool {
        !self.hidden.get() && self.generation.get() == ticket.0
    }

    /// Page hidden: outstanding mounts become stale.
    pub fn hide(&self) {
        self.hidden.set(true);
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Page shown again. Returns true when the hero must be mounted anew,
    /// which is the case for a restore from the back/forward cache.
    pub fn show(&self, persisted: bool) -> bool {
        self.hidden.set(false);
        persisted
    }
}
