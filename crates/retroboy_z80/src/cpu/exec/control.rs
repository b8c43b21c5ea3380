use crate::cpu::{Bus, Z80};

/// PC after fetching `RET NZ` at 0x056B, the ROM's LD-BYTES tape loader.
const TAPE_LOAD_TRAP: u16 = 0x056C;

impl Z80 {
    /// Relative jump: the displacement is relative to the following opcode.
    pub(super) fn jr<B: Bus>(&mut self, bus: &mut B, taken: bool) -> u32 {
        let offset = self.fetch8(bus) as i8;
        if taken {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            12
        } else {
            7
        }
    }

    pub(super) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        // JR only knows NZ, Z, NC and C.
        let taken = self.condition(opcode & 0x18);
        self.jr(bus, taken)
    }

    pub(super) fn exec_djnz<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let b = self.regs.bc.hi.wrapping_sub(1);
        self.regs.bc.hi = b;
        self.jr(bus, b != 0) + 1
    }

    pub(super) fn exec_jp_nn<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = self.fetch16(bus);
        10
    }

    pub(super) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if self.condition(opcode) {
            self.regs.pc = addr;
        }
        10
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }

    pub(super) fn exec_call_nn<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let ret = self.regs.pc;
        self.push_word(bus, ret);
        self.regs.pc = addr;
        17
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if self.condition(opcode) {
            let ret = self.regs.pc;
            self.push_word(bus, ret);
            self.regs.pc = addr;
            17
        } else {
            10
        }
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = self.pop_word(bus);
        10
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        if opcode == 0xC0 && self.regs.pc == TAPE_LOAD_TRAP {
            self.tape_trap("load");
        }

        if self.condition(opcode) {
            self.regs.pc = self.pop_word(bus);
            11
        } else {
            5
        }
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));

        let ret = self.regs.pc;
        self.push_word(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        11
    }
}
