use crate::cpu::{Bus, Z80};

impl Z80 {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(
            matches!(opcode, 0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C),
            "unexpected INC r opcode {opcode:#04x}"
        );

        let target = self.operand(opcode >> 3);
        let value = self.read_operand(bus, target);
        let result = self.alu_inc(value);
        self.write_operand(bus, target, result);

        if target.is_mem() { 11 } else { 4 }
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(
            matches!(opcode, 0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D),
            "unexpected DEC r opcode {opcode:#04x}"
        );

        let target = self.operand(opcode >> 3);
        let value = self.read_operand(bus, target);
        let result = self.alu_dec(value);
        self.write_operand(bus, target, result);

        if target.is_mem() { 11 } else { 4 }
    }

    /// 16-bit INC/DEC leave the flags alone.
    pub(super) fn exec_inc16(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));
        let value = self.regs.get16_sp(opcode).wrapping_add(1);
        self.regs.set16_sp(opcode, value);
        6
    }

    pub(super) fn exec_dec16(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));
        let value = self.regs.get16_sp(opcode).wrapping_sub(1);
        self.regs.set16_sp(opcode, value);
        6
    }
}
