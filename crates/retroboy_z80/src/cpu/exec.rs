mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::helpers::Index;
use super::{Bus, Z80};

impl Z80 {
    /// Decode and execute one unprefixed opcode, returning its T-states.
    ///
    /// Prefix bytes cost one extra refresh tick and hand the following byte
    /// to the matching prefix table; the returned count covers the whole
    /// prefixed instruction.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        match opcode {
            // HALT sits in the middle of the LD r,r' block, check it first.
            0x76 => self.exec_halt(),

            // LD r,r' / LD r,(HL) / LD (HL),r
            0x40..=0x7F => self.exec_ld_r_r(bus, opcode),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP r
            0x80..=0xBF => self.exec_alu_r(bus, opcode),

            // INC r
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => self.exec_inc8(bus, opcode),

            // DEC r
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => self.exec_dec8(bus, opcode),

            // LD r,n
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => self.exec_ld_r_n(bus, opcode),

            // RET cc
            0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => self.exec_ret_cc(bus, opcode),

            // JP cc,nn
            0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => self.exec_jp_cc(bus, opcode),

            // CALL cc,nn
            0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
                self.exec_call_cc(bus, opcode)
            }

            // RST p
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(bus, opcode),

            // LD dd,nn
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_nn(bus, opcode),

            // INC rr / DEC rr
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16(opcode),

            // ADD HL,rr
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),

            // PUSH qq / POP qq
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push(bus, opcode),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop(bus, opcode),

            0x00 => 4,
            0x02 => self.exec_ld_indirect_a(bus, self.regs.bc()),
            0x07 => self.exec_rotate_a(opcode),
            0x08 => self.exec_ex_af(),
            0x0A => self.exec_ld_a_indirect(bus, self.regs.bc()),
            0x0F => self.exec_rotate_a(opcode),
            0x10 => self.exec_djnz(bus),
            0x12 => self.exec_ld_indirect_a(bus, self.regs.de()),
            0x17 => self.exec_rotate_a(opcode),
            0x18 => self.jr(bus, true),
            0x1A => self.exec_ld_a_indirect(bus, self.regs.de()),
            0x1F => self.exec_rotate_a(opcode),
            0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr_cc(bus, opcode),
            0x22 => self.exec_ld_nn_hl(bus),
            0x27 => self.exec_daa(),
            0x2A => self.exec_ld_hl_nn(bus),
            0x2F => self.exec_cpl(),
            0x32 => self.exec_ld_nn_a(bus),
            0x37 => self.exec_scf(),
            0x3A => self.exec_ld_a_nn(bus),
            0x3F => self.exec_ccf(),

            0xC3 => self.exec_jp_nn(bus),
            0xC9 => self.exec_ret(bus),
            0xCD => self.exec_call_nn(bus),
            0xD3 => self.exec_out_n_a(bus),
            0xD9 => self.exec_exx(),
            0xDB => self.exec_in_a_n(bus),
            0xE3 => self.exec_ex_sp_hl(bus),
            0xE9 => self.exec_jp_hl(),
            0xEB => self.exec_ex_de_hl(),
            0xF3 => self.exec_di(),
            0xF9 => self.exec_ld_sp_hl(),
            0xFB => self.exec_ei(),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP n
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.exec_alu_n(bus, opcode),

            0xCB => {
                let opcode = self.fetch_opcode(bus);
                self.exec_cb(bus, opcode)
            }
            0xED => {
                let opcode = self.fetch_opcode(bus);
                self.exec_ed(bus, opcode)
            }
            0xDD => {
                let opcode = self.fetch_opcode(bus);
                self.exec_index(bus, Index::Ix, opcode)
            }
            0xFD => {
                let opcode = self.fetch_opcode(bus);
                self.exec_index(bus, Index::Iy, opcode)
            }
        }
    }
}
