use crate::cpu::{Bus, Z80};

/// PC after fetching `EX AF,AF'` at 0x04D0, the ROM's SA-BYTES tape saver.
const TAPE_SAVE_TRAP: u16 = 0x04D1;

impl Z80 {
    pub(super) fn exec_halt(&mut self) -> u32 {
        self.regs.halted = true;
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.regs.iff1 = false;
        self.regs.iff2 = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        self.regs.iff1 = true;
        self.regs.iff2 = true;
        4
    }

    pub(super) fn exec_ex_af(&mut self) -> u32 {
        if self.regs.pc == TAPE_SAVE_TRAP {
            self.tape_trap("save");
        }
        self.regs.ex_af();
        4
    }

    pub(super) fn exec_exx(&mut self) -> u32 {
        self.regs.exx();
        4
    }

    pub(super) fn exec_ex_de_hl(&mut self) -> u32 {
        std::mem::swap(&mut self.regs.de, &mut self.regs.hl);
        4
    }

    /// OUT (n),A puts A on the upper half of the port address.
    pub(super) fn exec_out_n_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let n = self.fetch8(bus);
        let a = self.regs.a();
        bus.write_port(u16::from_be_bytes([a, n]), a);
        11
    }

    /// IN A,(n) leaves the flags untouched.
    pub(super) fn exec_in_a_n<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let n = self.fetch8(bus);
        let port = u16::from_be_bytes([self.regs.a(), n]);
        let value = bus.read_port(port);
        self.regs.set_a(value);
        11
    }

    /// Tape traps are recognised but not emulated; the ROM routine runs as
    /// normal code.
    pub(super) fn tape_trap(&self, kind: &str) {
        log::debug!(
            "Z80 tape {kind} trap at PC=0x{pc:04X} ignored",
            pc = self.regs.pc.wrapping_sub(1)
        );
    }
}
