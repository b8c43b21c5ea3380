use crate::cpu::{Bus, Z80};

impl Z80 {
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x40..=0x7F) && opcode != 0x76);

        let dst = self.operand(opcode >> 3);
        let src = self.operand(opcode);
        let value = self.read_operand(bus, src);
        self.write_operand(bus, dst, value);

        if dst.is_mem() || src.is_mem() { 7 } else { 4 }
    }

    pub(super) fn exec_ld_r_n<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(
            matches!(opcode, 0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E),
            "unexpected LD r,n opcode {opcode:#04x}"
        );

        let dst = self.operand(opcode >> 3);
        let value = self.fetch8(bus);
        self.write_operand(bus, dst, value);

        if dst.is_mem() { 10 } else { 7 }
    }

    pub(super) fn exec_ld_rr_nn<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.fetch16(bus);
        self.regs.set16_sp(opcode, value);
        10
    }

    /// LD (BC),A / LD (DE),A
    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        bus.write_byte(addr, self.regs.a());
        7
    }

    /// LD A,(BC) / LD A,(DE)
    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        let value = bus.read_byte(addr);
        self.regs.set_a(value);
        7
    }

    pub(super) fn exec_ld_nn_hl<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        bus.write_word(addr, self.regs.hl());
        16
    }

    pub(super) fn exec_ld_hl_nn<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let value = bus.read_word(addr);
        self.regs.set_hl(value);
        16
    }

    pub(super) fn exec_ld_nn_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        bus.write_byte(addr, self.regs.a());
        13
    }

    pub(super) fn exec_ld_a_nn<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let value = bus.read_byte(addr);
        self.regs.set_a(value);
        13
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        6
    }
}
