use super::flags::{FLAG_3, FLAG_5, FLAG_C, FLAG_H, FLAG_N, FLAG_S, FLAG_V, FLAG_Z};
use super::{Bus, Z80};

/// Extra T-states charged when a repeating block instruction reissues itself.
const REPEAT_STATES: u32 = 5;

impl Z80 {
    /// ED 101 rdx ff: LD/CP/IN/OUT block instructions.
    ///
    /// One call performs one iteration. Repeating forms whose condition still
    /// holds rewind PC onto the ED prefix so the next fetch reissues them.
    pub(super) fn exec_block<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xA0..=0xA3 | 0xA8..=0xAB | 0xB0..=0xB3 | 0xB8..=0xBB));

        let decrement = opcode & 0x08 != 0;
        let repeat = opcode & 0x10 != 0;

        let again = match opcode & 0x03 {
            0 => {
                self.block_ld(bus, decrement);
                self.regs.bc() != 0
            }
            1 => {
                self.block_cp(bus, decrement);
                self.regs.f() & (FLAG_V | FLAG_Z) == FLAG_V
            }
            2 => {
                self.block_in(bus, decrement);
                self.regs.bc.hi != 0
            }
            _ => {
                self.block_out(bus, decrement);
                self.regs.bc.hi != 0
            }
        };

        if repeat && again {
            self.regs.pc = self.regs.pc.wrapping_sub(2);
            16 + REPEAT_STATES
        } else {
            16
        }
    }

    #[inline]
    fn step_hl(&mut self, decrement: bool) {
        let hl = self.regs.hl();
        self.regs
            .set_hl(if decrement { hl.wrapping_sub(1) } else { hl.wrapping_add(1) });
    }

    /// LDI / LDD. Bits 3 and 5 come from (transferred byte + A).
    fn block_ld<B: Bus>(&mut self, bus: &mut B, decrement: bool) {
        let value = bus.read_byte(self.regs.hl());
        bus.write_byte(self.regs.de(), value);

        let bc = self.regs.bc().wrapping_sub(1);
        self.regs.set_bc(bc);
        let de = self.regs.de();
        self.regs
            .set_de(if decrement { de.wrapping_sub(1) } else { de.wrapping_add(1) });
        self.step_hl(decrement);

        let n = value.wrapping_add(self.regs.a());
        let f = (self.regs.f() & (FLAG_C | FLAG_Z | FLAG_S))
            | (if bc != 0 { FLAG_V } else { 0 })
            | (n & FLAG_3)
            | (if n & 0x02 != 0 { FLAG_5 } else { 0 });
        self.regs.set_f(f);
    }

    /// CPI / CPD. Bits 3 and 5 come from A - (HL) - H.
    fn block_cp<B: Bus>(&mut self, bus: &mut B, decrement: bool) {
        let value = bus.read_byte(self.regs.hl());
        let a = self.regs.a();
        let mut result = a.wrapping_sub(value);
        let lookup = (((a & 0x08) >> 3) | ((value & 0x08) >> 2) | ((result & 0x08) >> 1)) as usize;

        self.step_hl(decrement);
        let bc = self.regs.bc().wrapping_sub(1);
        self.regs.set_bc(bc);

        let mut f = (self.regs.f() & FLAG_C)
            | FLAG_N
            | (if bc != 0 { FLAG_V } else { 0 })
            | self.tables.halfcarry_sub[lookup]
            | (if result == 0 { FLAG_Z } else { 0 })
            | (result & FLAG_S);
        if f & FLAG_H != 0 {
            result = result.wrapping_sub(1);
        }
        f |= (result & FLAG_3) | (if result & 0x02 != 0 { FLAG_5 } else { 0 });
        self.regs.set_f(f);
    }

    /// INI / IND. Only N, S, Z, 3 and 5 are derived.
    fn block_in<B: Bus>(&mut self, bus: &mut B, decrement: bool) {
        self.warn_block_io_flags();

        let value = bus.read_port(self.regs.bc());
        bus.write_byte(self.regs.hl(), value);
        let b = self.regs.bc.hi.wrapping_sub(1);
        self.regs.bc.hi = b;
        self.step_hl(decrement);

        self.regs.set_f(self.block_io_flags(value, b));
    }

    /// OUTI / OUTD. B is decremented before the port write.
    fn block_out<B: Bus>(&mut self, bus: &mut B, decrement: bool) {
        self.warn_block_io_flags();

        let value = bus.read_byte(self.regs.hl());
        let b = self.regs.bc.hi.wrapping_sub(1);
        self.regs.bc.hi = b;
        bus.write_port(self.regs.bc(), value);
        self.step_hl(decrement);

        self.regs.set_f(self.block_io_flags(value, b));
    }

    #[inline]
    fn block_io_flags(&self, value: u8, b: u8) -> u8 {
        (if value & 0x80 != 0 { FLAG_N } else { 0 }) | self.tables.sz53[b as usize]
    }

    // TODO: derive H, C and P/V for block I/O from the (HL)+C/L sum once a
    // test ROM that checks them is wired in.
    fn warn_block_io_flags(&mut self) {
        if !self.block_io_warned {
            self.block_io_warned = true;
            log::warn!(
                "Z80 block I/O at PC=0x{:04X}: H, C and P/V flags are not emulated",
                self.regs.pc.wrapping_sub(2)
            );
        }
    }
}
