//! Host-side run loop state
//!
//! The engine has no run/pause notion. `Driver` is the context object a
//! host keeps next to its timer: it owns the engine plus the play flag, and
//! `tick()` is what the periodic callback calls.

use super::LatticeCore;

pub struct Driver {
    core: LatticeCore,
    playing: bool,
    ticks: u64,
}

impl Driver {
    /// Starts paused.
    pub fn new(core: LatticeCore) -> Self {
        Self { core, playing: false, ticks: 0 }
    }

    pub fn is_playing(&self) -> bool { self.playing }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Flip play/pause, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// One timer callback: steps iff playing.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.playing {
            self.core.step();
        }
        self.playing
    }

    /// Timer callbacks seen, including paused ones
    pub fn ticks(&self) -> u64 { self.ticks }

    pub fn core(&self) -> &LatticeCore { &self.core }

    pub fn core_mut(&mut self) -> &mut LatticeCore { &mut self.core }
}
