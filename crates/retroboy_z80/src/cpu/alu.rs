use super::flags::{FLAG_3, FLAG_5, FLAG_C, FLAG_H, FLAG_N, FLAG_P, FLAG_S, FLAG_V, FLAG_Z};
use super::{Bus, Z80};

/// 3-bit lookup pattern for the 8-bit flag tables: bits 3 and 7 of both
/// operands and the result.
#[inline]
fn lookup8(a: u8, b: u8, result: u8) -> usize {
    (((a & 0x88) >> 3) | ((b & 0x88) >> 2) | ((result & 0x88) >> 1)) as usize
}

/// Same pattern for 16-bit ops, from bits 11 and 15.
#[inline]
fn lookup16(a: u16, b: u16, result: u32) -> usize {
    ((((a & 0x8800) >> 11) | ((b & 0x8800) >> 10)) as u32 | ((result & 0x8800) >> 9)) as usize
}

impl Z80 {
    /// Dispatch the `ooo` field of an accumulator op: ADD ADC SUB SBC AND XOR OR CP.
    pub(super) fn alu_op(&mut self, op: u8, value: u8) {
        match op & 0x07 {
            0 => self.alu_add(value),
            1 => self.alu_adc(value),
            2 => self.alu_sub(value),
            3 => self.alu_sbc(value),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    fn add_with_carry(&mut self, value: u8, carry: u8) {
        let a = self.regs.a();
        let result = a as u16 + value as u16 + carry as u16;
        let res = result as u8;
        let lookup = lookup8(a, value, res);
        let t = &self.tables;

        self.regs.set_a(res);
        self.regs.set_f(
            (if result & 0x100 != 0 { FLAG_C } else { 0 })
                | t.halfcarry_add[lookup & 0x07]
                | t.overflow_add[lookup >> 4]
                | t.sz53[res as usize],
        );
    }

    fn sub_with_borrow(&mut self, value: u8, borrow: u8) {
        let a = self.regs.a();
        let result = (a as u16).wrapping_sub(value as u16).wrapping_sub(borrow as u16);
        let res = result as u8;
        let lookup = lookup8(a, value, res);
        let t = &self.tables;

        self.regs.set_a(res);
        self.regs.set_f(
            (if result & 0x100 != 0 { FLAG_C } else { 0 })
                | FLAG_N
                | t.halfcarry_sub[lookup & 0x07]
                | t.overflow_sub[lookup >> 4]
                | t.sz53[res as usize],
        );
    }

    pub(super) fn alu_add(&mut self, value: u8) {
        self.add_with_carry(value, 0);
    }

    pub(super) fn alu_adc(&mut self, value: u8) {
        let carry = self.regs.f() & FLAG_C;
        self.add_with_carry(value, carry);
    }

    pub(super) fn alu_sub(&mut self, value: u8) {
        self.sub_with_borrow(value, 0);
    }

    pub(super) fn alu_sbc(&mut self, value: u8) {
        let carry = self.regs.f() & FLAG_C;
        self.sub_with_borrow(value, carry);
    }

    pub(super) fn alu_and(&mut self, value: u8) {
        let a = self.regs.a() & value;
        self.regs.set_a(a);
        self.regs.set_f(FLAG_H | self.tables.sz53p[a as usize]);
    }

    pub(super) fn alu_xor(&mut self, value: u8) {
        let a = self.regs.a() ^ value;
        self.regs.set_a(a);
        self.regs.set_f(self.tables.sz53p[a as usize]);
    }

    pub(super) fn alu_or(&mut self, value: u8) {
        let a = self.regs.a() | value;
        self.regs.set_a(a);
        self.regs.set_f(self.tables.sz53p[a as usize]);
    }

    /// Compare: a subtraction that only keeps flags. Bits 3 and 5 come from
    /// the operand, not the result.
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a();
        let result = (a as u16).wrapping_sub(value as u16);
        let res = result as u8;
        let lookup = lookup8(a, value, res);
        let t = &self.tables;

        let carry_or_zero = if result & 0x100 != 0 {
            FLAG_C
        } else if res == 0 {
            FLAG_Z
        } else {
            0
        };
        self.regs.set_f(
            carry_or_zero
                | FLAG_N
                | t.halfcarry_sub[lookup & 0x07]
                | t.overflow_sub[lookup >> 4]
                | (value & (FLAG_3 | FLAG_5))
                | (res & FLAG_S),
        );
    }

    /// `NEG`: A = 0 - A with full subtraction flags.
    pub(super) fn alu_neg(&mut self) {
        let value = self.regs.a();
        self.regs.set_a(0);
        self.alu_sub(value);
    }

    /// 8-bit increment; carry is preserved.
    pub(super) fn alu_inc(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let f = (self.regs.f() & FLAG_C)
            | (if result == 0x80 { FLAG_V } else { 0 })
            | (if result & 0x0F == 0 { FLAG_H } else { 0 })
            | self.tables.sz53[result as usize];
        self.regs.set_f(f);
        result
    }

    /// 8-bit decrement; carry is preserved.
    pub(super) fn alu_dec(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let f = (self.regs.f() & FLAG_C)
            | (if value & 0x0F == 0 { FLAG_H } else { 0 })
            | FLAG_N
            | (if result == 0x7F { FLAG_V } else { 0 })
            | self.tables.sz53[result as usize];
        self.regs.set_f(f);
        result
    }

    /// `ADD HL/IX/IY,rr`: S, Z and P/V are left alone.
    pub(super) fn alu_add16(&mut self, lhs: u16, rhs: u16) -> u16 {
        let result = lhs as u32 + rhs as u32;
        let lookup = (((lhs & 0x0800) >> 11) | ((rhs & 0x0800) >> 10)) as u32
            | ((result & 0x0800) >> 9);
        let f = (self.regs.f() & (FLAG_V | FLAG_Z | FLAG_S))
            | (if result & 0x10000 != 0 { FLAG_C } else { 0 })
            | ((result >> 8) as u8 & (FLAG_3 | FLAG_5))
            | self.tables.halfcarry_add[lookup as usize];
        self.regs.set_f(f);
        result as u16
    }

    /// `ADC HL,rr`
    pub(super) fn alu_adc_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let carry = (self.regs.f() & FLAG_C) as u32;
        let result = hl as u32 + value as u32 + carry;
        let lookup = lookup16(hl, value, result);
        let res = result as u16;

        self.regs.set_hl(res);
        let f = (if result & 0x10000 != 0 { FLAG_C } else { 0 })
            | self.tables.overflow_add[lookup >> 4]
            | (self.regs.hl.hi & (FLAG_3 | FLAG_5 | FLAG_S))
            | self.tables.halfcarry_add[lookup & 0x07]
            | (if res == 0 { FLAG_Z } else { 0 });
        self.regs.set_f(f);
    }

    /// `SBC HL,rr`
    pub(super) fn alu_sbc_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let carry = (self.regs.f() & FLAG_C) as u32;
        let result = (hl as u32).wrapping_sub(value as u32).wrapping_sub(carry);
        let lookup = lookup16(hl, value, result);
        let res = result as u16;

        self.regs.set_hl(res);
        let f = (if result & 0x10000 != 0 { FLAG_C } else { 0 })
            | FLAG_N
            | self.tables.overflow_sub[lookup >> 4]
            | (self.regs.hl.hi & (FLAG_3 | FLAG_5 | FLAG_S))
            | self.tables.halfcarry_sub[lookup & 0x07]
            | (if res == 0 { FLAG_Z } else { 0 });
        self.regs.set_f(f);
    }

    /// Decimal adjust after a BCD add (N clear) or subtract (N set).
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a();
        let f = self.regs.f();
        let mut correction = 0u8;
        let mut carry = f & FLAG_C;

        if f & FLAG_H != 0 || a & 0x0F > 9 {
            correction = 0x06;
        }
        if carry != 0 || a > 0x99 {
            correction |= 0x60;
        }
        if a > 0x99 {
            carry = FLAG_C;
        }

        if f & FLAG_N != 0 {
            self.alu_sub(correction);
        } else {
            self.alu_add(correction);
        }

        let a = self.regs.a();
        let f = (self.regs.f() & !(FLAG_C | FLAG_P)) | carry | self.tables.parity[a as usize];
        self.regs.set_f(f);
    }

    pub(super) fn alu_cpl(&mut self) {
        let a = self.regs.a() ^ 0xFF;
        self.regs.set_a(a);
        let f = (self.regs.f() & (FLAG_C | FLAG_P | FLAG_Z | FLAG_S))
            | (a & (FLAG_3 | FLAG_5))
            | FLAG_N
            | FLAG_H;
        self.regs.set_f(f);
    }

    /// `CCF`: H receives the old carry.
    pub(super) fn alu_ccf(&mut self) {
        let f = self.regs.f();
        let a = self.regs.a();
        let flipped = if f & FLAG_C != 0 { FLAG_H } else { FLAG_C };
        self.regs
            .set_f((f & (FLAG_P | FLAG_Z | FLAG_S)) | flipped | (a & (FLAG_3 | FLAG_5)));
    }

    pub(super) fn alu_scf(&mut self) {
        let f = self.regs.f();
        let a = self.regs.a();
        self.regs
            .set_f((f & (FLAG_P | FLAG_Z | FLAG_S)) | FLAG_C | (a & (FLAG_3 | FLAG_5)));
    }

    // Accumulator rotates keep S, Z and P/V.

    pub(super) fn alu_rlca(&mut self) {
        let a = self.regs.a().rotate_left(1);
        self.regs.set_a(a);
        let f = (self.regs.f() & (FLAG_P | FLAG_Z | FLAG_S)) | (a & (FLAG_C | FLAG_3 | FLAG_5));
        self.regs.set_f(f);
    }

    pub(super) fn alu_rrca(&mut self) {
        let old = self.regs.a();
        let a = old.rotate_right(1);
        self.regs.set_a(a);
        let f = (self.regs.f() & (FLAG_P | FLAG_Z | FLAG_S))
            | (old & FLAG_C)
            | (a & (FLAG_3 | FLAG_5));
        self.regs.set_f(f);
    }

    pub(super) fn alu_rla(&mut self) {
        let old = self.regs.a();
        let f = self.regs.f();
        let a = (old << 1) | (f & FLAG_C);
        self.regs.set_a(a);
        self.regs
            .set_f((f & (FLAG_P | FLAG_Z | FLAG_S)) | (a & (FLAG_3 | FLAG_5)) | (old >> 7));
    }

    pub(super) fn alu_rra(&mut self) {
        let old = self.regs.a();
        let f = self.regs.f();
        let a = (old >> 1) | (f << 7);
        self.regs.set_a(a);
        self.regs
            .set_f((f & (FLAG_P | FLAG_Z | FLAG_S)) | (a & (FLAG_3 | FLAG_5)) | (old & FLAG_C));
    }

    /// CB rotate/shift selected by bits 3-5: RLC RRC RL RR SLA SRA SLL SRL.
    ///
    /// The shifted-out bit lands in carry; S, Z, 3, 5 and parity come from
    /// the new value.
    pub(super) fn alu_shift(&mut self, kind: u8, value: u8) -> u8 {
        let carry_in = self.regs.f() & FLAG_C;
        let (result, carry_out) = match kind & 0x07 {
            0 => (value.rotate_left(1), value >> 7),
            1 => (value.rotate_right(1), value & 0x01),
            2 => ((value << 1) | carry_in, value >> 7),
            3 => ((value >> 1) | (carry_in << 7), value & 0x01),
            4 => (value << 1, value >> 7),
            5 => ((value & 0x80) | (value >> 1), value & 0x01),
            6 => ((value << 1) | 0x01, value >> 7),
            _ => (value >> 1, value & 0x01),
        };
        self.regs.set_f(carry_out | self.tables.sz53p[result as usize]);
        result
    }

    /// `BIT n,v`: bits 3 and 5 are copied from the tested byte.
    pub(super) fn alu_bit(&mut self, bit: u8, value: u8) {
        let mut f = (self.regs.f() & FLAG_C) | FLAG_H | (value & (FLAG_3 | FLAG_5));
        if value & (1 << bit) == 0 {
            f |= FLAG_P | FLAG_Z;
        }
        if bit == 7 && value & 0x80 != 0 {
            f |= FLAG_S;
        }
        self.regs.set_f(f);
    }

    /// `RLD`: rotate the 12-bit value A[3:0]:(HL) left by one nibble.
    pub(super) fn alu_rld<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.regs.hl();
        let byte = bus.read_byte(addr);
        let a = self.regs.a();

        bus.write_byte(addr, (byte << 4) | (a & 0x0F));
        let a = (a & 0xF0) | (byte >> 4);
        self.regs.set_a(a);
        let f = (self.regs.f() & FLAG_C) | self.tables.sz53p[a as usize];
        self.regs.set_f(f);
    }

    /// `RRD`: rotate the 12-bit value A[3:0]:(HL) right by one nibble.
    pub(super) fn alu_rrd<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.regs.hl();
        let byte = bus.read_byte(addr);
        let a = self.regs.a();

        bus.write_byte(addr, (a << 4) | (byte >> 4));
        let a = (a & 0xF0) | (byte & 0x0F);
        self.regs.set_a(a);
        let f = (self.regs.f() & FLAG_C) | self.tables.sz53p[a as usize];
        self.regs.set_f(f);
    }
}
