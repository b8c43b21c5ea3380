use super::{Bus, Z80};

/// Restart address used by IM 0 (RST 38h on the data bus) and IM 1.
const IM1_VECTOR: u16 = 0x0038;

impl Z80 {
    /// Raise the maskable interrupt line once.
    ///
    /// With IFF1 clear the request is dropped, not latched. Otherwise the CPU
    /// leaves HALT, disables interrupts, pushes PC and jumps according to the
    /// interrupt mode. Returns the T-states charged (also added to `states`).
    pub fn interrupt<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if !self.regs.iff1 {
            return 0;
        }

        self.regs.halted = false;
        self.regs.iff1 = false;
        self.regs.iff2 = false;

        let ret = self.regs.pc;
        self.push_word(bus, ret);

        let (vector, cycles) = match self.regs.im {
            0 => (IM1_VECTOR, 12),
            1 => (IM1_VECTOR, 13),
            2 => {
                let table = u16::from_be_bytes([self.regs.i, 0xFF]);
                (bus.read_word(table), 19)
            }
            mode => {
                log::error!("Z80 interrupt in invalid mode {mode}, serviced as IM 1");
                (IM1_VECTOR, 13)
            }
        };

        log::debug!(
            "Z80 interrupt: IM {} vector=0x{:04X} return=0x{:04X}",
            self.regs.im,
            vector,
            ret
        );

        self.regs.pc = vector;
        self.states = self.states.wrapping_add(cycles);
        cycles
    }
}
