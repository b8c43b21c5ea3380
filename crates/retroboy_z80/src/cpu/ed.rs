use super::flags::{FLAG_C, FLAG_V};
use super::regs::Reg8;
use super::{Bus, Z80};

impl Z80 {
    /// Handle ED-prefixed instructions. Holes in the table behave as an
    /// 8 T-state NOP.
    pub(super) fn exec_ed<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        match opcode {
            0x40..=0x7F => self.exec_ed_misc(bus, opcode),

            // LDI LDD LDIR LDDR / CPI CPD CPIR CPDR
            // INI IND INIR INDR / OUTI OUTD OTIR OTDR
            0xA0..=0xA3 | 0xA8..=0xAB | 0xB0..=0xB3 | 0xB8..=0xBB => self.exec_block(bus, opcode),

            _ => 8,
        }
    }

    /// The 01 xxx zzz quarter of the ED table, decoded on the low 3 bits.
    fn exec_ed_misc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        match opcode & 0x07 {
            0 => self.exec_in_r_c(bus, opcode),
            1 => self.exec_out_c_r(bus, opcode),
            2 => {
                let value = self.regs.get16_sp(opcode);
                if opcode & 0x08 == 0 {
                    self.alu_sbc_hl(value);
                } else {
                    self.alu_adc_hl(value);
                }
                15
            }
            3 => {
                let addr = self.fetch16(bus);
                if opcode & 0x08 == 0 {
                    bus.write_word(addr, self.regs.get16_sp(opcode));
                } else {
                    let value = bus.read_word(addr);
                    self.regs.set16_sp(opcode, value);
                }
                20
            }
            4 => {
                self.alu_neg();
                8
            }
            5 => {
                // RETN, RETI and their mirrors all restore IFF1 from IFF2.
                self.regs.iff1 = self.regs.iff2;
                self.regs.pc = self.pop_word(bus);
                14
            }
            6 => {
                self.regs.im = match (opcode >> 3) & 0x03 {
                    0 | 1 => 0,
                    2 => 1,
                    _ => 2,
                };
                8
            }
            7 => self.exec_ed_special(bus, opcode),
            _ => self.decode_failure(Some(0xED), opcode),
        }
    }

    /// LD I,A / LD R,A / LD A,I / LD A,R / RRD / RLD.
    fn exec_ed_special<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        match opcode {
            0x47 => {
                self.regs.i = self.regs.a();
                9
            }
            0x4F => {
                let a = self.regs.a();
                self.regs.r = a;
                self.regs.r7 = a;
                9
            }
            0x57 => {
                let i = self.regs.i;
                self.ld_a_special(i);
                9
            }
            0x5F => {
                let r = self.regs.r_value();
                self.ld_a_special(r);
                9
            }
            0x67 => {
                self.alu_rrd(bus);
                18
            }
            0x6F => {
                self.alu_rld(bus);
                18
            }
            // ED 77 / ED 7F
            _ => 8,
        }
    }

    /// LD A,I and LD A,R copy IFF2 into P/V.
    fn ld_a_special(&mut self, value: u8) {
        self.regs.set_a(value);
        let iff2 = if self.regs.iff2 { FLAG_V } else { 0 };
        let f = (self.regs.f() & FLAG_C) | self.tables.sz53[value as usize] | iff2;
        self.regs.set_f(f);
    }

    /// IN r,(C). Field 110 only updates the flags.
    fn exec_in_r_c<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let value = bus.read_port(self.regs.bc());
        if let Some(reg) = Reg8::decode(opcode >> 3) {
            self.regs.set8(reg, value);
        }
        let f = (self.regs.f() & FLAG_C) | self.tables.sz53p[value as usize];
        self.regs.set_f(f);
        12
    }

    /// OUT (C),r. Field 110 outputs zero.
    fn exec_out_c_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let value = Reg8::decode(opcode >> 3).map_or(0, |reg| self.regs.get8(reg));
        bus.write_port(self.regs.bc(), value);
        12
    }
}
