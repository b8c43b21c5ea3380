use crate::cpu::{Bus, Z80};

impl Z80 {
    /// 10 ooo rrr: accumulator op against a register or (HL).
    pub(super) fn exec_alu_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x80..=0xBF));

        let src = self.operand(opcode);
        let value = self.read_operand(bus, src);
        self.alu_op(opcode >> 3, value);

        if src.is_mem() { 7 } else { 4 }
    }

    /// 11 ooo 110 n: accumulator op against an immediate byte.
    pub(super) fn exec_alu_n<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));

        let value = self.fetch8(bus);
        self.alu_op(opcode >> 3, value);
        7
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.regs.get16_sp(opcode);
        let result = self.alu_add16(self.regs.hl(), value);
        self.regs.set_hl(result);
        11
    }

    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        match opcode {
            0x07 => self.alu_rlca(),
            0x0F => self.alu_rrca(),
            0x17 => self.alu_rla(),
            0x1F => self.alu_rra(),
            _ => self.decode_failure(None, opcode),
        }
        4
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.alu_cpl();
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.alu_scf();
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        self.alu_ccf();
        4
    }
}
