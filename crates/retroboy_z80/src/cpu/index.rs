use super::helpers::{Index, Operand};
use super::regs::Reg8;
use super::{Bus, Z80};

impl Z80 {
    /// Handle DD/FD-prefixed instructions.
    ///
    /// HL becomes the index register, H/L become its halves and (HL) becomes
    /// (index+d). An opcode that never touches HL costs 4 T-states for the
    /// prefix alone; PC is stepped back so the opcode is decoded again
    /// without it.
    pub(super) fn exec_index<B: Bus>(&mut self, bus: &mut B, index: Index, opcode: u8) -> u32 {
        match opcode {
            // Would be LD (idx+d),(idx+d). Like the chip, the prefix is spent
            // on its own (4 states, one R tick) and HALT is decoded on the
            // next step rather than in this one.
            0x76 => self.index_fallthrough(index, opcode),

            0x40..=0x7F => self.exec_index_ld_r_r(bus, index, opcode),
            0x80..=0xBF => self.exec_index_alu(bus, index, opcode),

            // ADD idx,rr (rr = BC, DE, idx, SP)
            0x09 | 0x19 | 0x29 | 0x39 => {
                let idx = self.index_word(index);
                let value = match opcode {
                    0x29 => idx,
                    _ => self.regs.get16_sp(opcode),
                };
                let result = self.alu_add16(idx, value);
                self.set_index_word(index, result);
                15
            }
            0x21 => {
                let value = self.fetch16(bus);
                self.set_index_word(index, value);
                14
            }
            0x22 => {
                let addr = self.fetch16(bus);
                bus.write_word(addr, self.index_word(index));
                20
            }
            0x2A => {
                let addr = self.fetch16(bus);
                let value = bus.read_word(addr);
                self.set_index_word(index, value);
                20
            }
            0x23 => {
                let value = self.index_word(index).wrapping_add(1);
                self.set_index_word(index, value);
                10
            }
            0x2B => {
                let value = self.index_word(index).wrapping_sub(1);
                self.set_index_word(index, value);
                10
            }

            // INC/DEC/LD n on the index halves.
            0x24 | 0x25 | 0x26 | 0x2C | 0x2D | 0x2E => {
                let reg = index.substitute(if opcode < 0x28 { Reg8::H } else { Reg8::L });
                match opcode & 0x07 {
                    4 => {
                        let result = self.alu_inc(self.regs.get8(reg));
                        self.regs.set8(reg, result);
                        8
                    }
                    5 => {
                        let result = self.alu_dec(self.regs.get8(reg));
                        self.regs.set8(reg, result);
                        8
                    }
                    _ => {
                        let value = self.fetch8(bus);
                        self.regs.set8(reg, value);
                        11
                    }
                }
            }

            0x34 | 0x35 => {
                let addr = self.indexed_address(bus, index);
                let value = bus.read_byte(addr);
                let result = if opcode == 0x34 {
                    self.alu_inc(value)
                } else {
                    self.alu_dec(value)
                };
                bus.write_byte(addr, result);
                23
            }
            0x36 => {
                let addr = self.indexed_address(bus, index);
                let value = self.fetch8(bus);
                bus.write_byte(addr, value);
                19
            }

            0xCB => {
                let addr = self.indexed_address(bus, index);
                let opcode = self.fetch8(bus);
                self.exec_index_cb(bus, addr, opcode)
            }

            0xE1 => {
                let value = self.pop_word(bus);
                self.set_index_word(index, value);
                14
            }
            0xE3 => {
                let sp = self.regs.sp;
                let top = bus.read_word(sp);
                bus.write_word(sp, self.index_word(index));
                self.set_index_word(index, top);
                23
            }
            0xE5 => {
                let value = self.index_word(index);
                self.push_word(bus, value);
                15
            }
            0xE9 => {
                self.regs.pc = self.index_word(index);
                8
            }
            0xF9 => {
                self.regs.sp = self.index_word(index);
                10
            }

            // EX DE,HL is deliberately absent: it never sees IX/IY.
            _ => self.index_fallthrough(index, opcode),
        }
    }

    fn index_fallthrough(&mut self, index: Index, opcode: u8) -> u32 {
        log::trace!(
            "Z80 {} prefix ignored for opcode 0x{opcode:02X} at PC=0x{pc:04X}",
            index.name(),
            pc = self.regs.pc.wrapping_sub(1)
        );
        self.regs.pc = self.regs.pc.wrapping_sub(1);
        4
    }

    /// Resolve an operand field after a DD/FD prefix. The displacement is
    /// fetched here, so call this exactly once per memory operand.
    fn index_operand<B: Bus>(&mut self, bus: &mut B, index: Index, code: u8) -> Operand {
        match Reg8::decode(code) {
            Some(reg) => Operand::Reg(index.substitute(reg)),
            None => Operand::Mem(self.indexed_address(bus, index)),
        }
    }

    /// LD r,r' with substitution. When one side is (idx+d) the other side
    /// names the real H or L.
    fn exec_index_ld_r_r<B: Bus>(&mut self, bus: &mut B, index: Index, opcode: u8) -> u32 {
        let dst = Reg8::decode(opcode >> 3);
        let src = Reg8::decode(opcode);

        match (dst, src) {
            (None, Some(src)) => {
                let addr = self.indexed_address(bus, index);
                bus.write_byte(addr, self.regs.get8(src));
                19
            }
            (Some(dst), None) => {
                let addr = self.indexed_address(bus, index);
                let value = bus.read_byte(addr);
                self.regs.set8(dst, value);
                19
            }
            (Some(dst), Some(src)) => {
                let value = self.regs.get8(index.substitute(src));
                self.regs.set8(index.substitute(dst), value);
                8
            }
            (None, None) => self.decode_failure(Some(index.prefix()), opcode),
        }
    }

    fn exec_index_alu<B: Bus>(&mut self, bus: &mut B, index: Index, opcode: u8) -> u32 {
        let src = self.index_operand(bus, index, opcode);
        let value = self.read_operand(bus, src);
        self.alu_op(opcode >> 3, value);

        if src.is_mem() { 19 } else { 8 }
    }

    /// DDCB d op / FDCB d op: CB semantics on (idx+d). The register field is
    /// ignored; every form except BIT writes the result back to memory.
    fn exec_index_cb<B: Bus>(&mut self, bus: &mut B, addr: u16, opcode: u8) -> u32 {
        let value = bus.read_byte(addr);
        match self.apply_cb(opcode, value) {
            Some(result) => {
                bus.write_byte(addr, result);
                23
            }
            None => 20,
        }
    }
}
