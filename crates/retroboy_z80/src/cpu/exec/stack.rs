use crate::cpu::{Bus, Z80};

impl Z80 {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let pair = *self.regs.pair_af_mut(opcode);
        self.push_pair(bus, pair);
        11
    }

    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let pair = self.pop_pair(bus);
        *self.regs.pair_af_mut(opcode) = pair;
        10
    }

    pub(super) fn exec_ex_sp_hl<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let sp = self.regs.sp;
        let top = bus.read_word(sp);
        bus.write_word(sp, self.regs.hl());
        self.regs.set_hl(top);
        19
    }
}
