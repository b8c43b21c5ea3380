use super::{Bus, RegisterPair, Z80};

/// Stack discipline: SP is pre-decremented on push and post-incremented on
/// pop, wrapping modulo 64 KiB. Words are stored little-endian.
impl Z80 {
    pub fn push_byte<B: Bus>(&mut self, bus: &mut B, value: u8) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write_byte(self.regs.sp, value);
    }

    pub fn pop_byte<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read_byte(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        value
    }

    pub fn push_word<B: Bus>(&mut self, bus: &mut B, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        bus.write_word(self.regs.sp, value);
    }

    pub fn pop_word<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read_word(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    pub fn push_pair<B: Bus>(&mut self, bus: &mut B, pair: RegisterPair) {
        self.push_word(bus, pair.word());
    }

    pub fn pop_pair<B: Bus>(&mut self, bus: &mut B) -> RegisterPair {
        RegisterPair::new(self.pop_word(bus))
    }
}
