use crate::FRAME_STATES;

use super::{LookupTables, Registers, Z80};

impl Default for Z80 {
    fn default() -> Self {
        Self::new()
    }
}

impl Z80 {
    /// Build a CPU in its power-on state.
    ///
    /// The flag tables are computed here, so no instruction can run before
    /// they exist.
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            tables: LookupTables::new(),
            states: 0,
            frame_states: FRAME_STATES,
            statements_to_fetch: None,
            fetch_observers: Vec::new(),
            block_io_warned: false,
        };
        cpu.reset();
        cpu
    }

    /// Restore power-on register state.
    ///
    /// Timing counters and fetch observers belong to the host and survive.
    pub fn reset(&mut self) {
        self.regs.reset();
        log::debug!("Z80 reset");
    }
}
