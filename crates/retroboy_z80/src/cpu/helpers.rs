use super::flags::{FLAG_C, FLAG_P, FLAG_S, FLAG_Z};
use super::regs::Reg8;
use super::{Bus, Z80};

/// Index register addressed by a DD (IX) or FD (IY) prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Index {
    Ix,
    Iy,
}

impl Index {
    /// Swap H/L for the matching half of the index register.
    #[inline]
    pub(super) fn substitute(self, reg: Reg8) -> Reg8 {
        match (self, reg) {
            (Index::Ix, Reg8::H) => Reg8::Ixh,
            (Index::Ix, Reg8::L) => Reg8::Ixl,
            (Index::Iy, Reg8::H) => Reg8::Iyh,
            (Index::Iy, Reg8::L) => Reg8::Iyl,
            (_, other) => other,
        }
    }

    pub(super) fn name(self) -> &'static str {
        match self {
            Index::Ix => "IX",
            Index::Iy => "IY",
        }
    }

    pub(super) fn prefix(self) -> u8 {
        match self {
            Index::Ix => 0xDD,
            Index::Iy => 0xFD,
        }
    }
}

/// An 8-bit instruction operand, resolved once before dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Operand {
    Reg(Reg8),
    /// Memory byte: (HL), (IX+d) or (IY+d).
    Mem(u16),
}

impl Operand {
    #[inline]
    pub(super) fn is_mem(self) -> bool {
        matches!(self, Operand::Mem(_))
    }
}

impl Z80 {
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Opcode fetch: like `fetch8` but also ticks the refresh counter.
    #[inline]
    pub(super) fn fetch_opcode<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let opcode = self.fetch8(bus);
        self.regs.inc_r();
        opcode
    }

    #[inline]
    pub(super) fn index_word(&self, index: Index) -> u16 {
        match index {
            Index::Ix => self.regs.ix(),
            Index::Iy => self.regs.iy(),
        }
    }

    #[inline]
    pub(super) fn set_index_word(&mut self, index: Index, value: u16) {
        match index {
            Index::Ix => self.regs.set_ix(value),
            Index::Iy => self.regs.set_iy(value),
        }
    }

    /// Fetch a signed displacement and form `index + d`.
    #[inline]
    pub(super) fn indexed_address<B: Bus>(&mut self, bus: &mut B, index: Index) -> u16 {
        let displacement = self.fetch8(bus) as i8;
        self.index_word(index).wrapping_add(displacement as u16)
    }

    /// Resolve a plain (unprefixed) register field; 110 becomes (HL).
    #[inline]
    pub(super) fn operand(&self, code: u8) -> Operand {
        match Reg8::decode(code) {
            Some(reg) => Operand::Reg(reg),
            None => Operand::Mem(self.regs.hl()),
        }
    }

    #[inline]
    pub(super) fn read_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> u8 {
        match operand {
            Operand::Reg(reg) => self.regs.get8(reg),
            Operand::Mem(addr) => bus.read_byte(addr),
        }
    }

    #[inline]
    pub(super) fn write_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand, value: u8) {
        match operand {
            Operand::Reg(reg) => self.regs.set8(reg, value),
            Operand::Mem(addr) => bus.write_byte(addr, value),
        }
    }

    /// Evaluate the `ccc` condition field (bits 3-5): NZ Z NC C PO PE P M.
    pub(super) fn condition(&self, opcode: u8) -> bool {
        let f = self.regs.f();
        let (mask, set) = match (opcode >> 3) & 0x07 {
            0 => (FLAG_Z, false),
            1 => (FLAG_Z, true),
            2 => (FLAG_C, false),
            3 => (FLAG_C, true),
            4 => (FLAG_P, false),
            5 => (FLAG_P, true),
            6 => (FLAG_S, false),
            _ => (FLAG_S, true),
        };
        (f & mask != 0) == set
    }

    /// An opcode that no table covers. The decoder is exhaustive, so reaching
    /// this is a bug in the dispatch code, not a guest error.
    pub(super) fn decode_failure(&self, prefix: Option<u8>, opcode: u8) -> ! {
        let pc = self.regs.pc;
        match prefix {
            Some(prefix) => log::error!(
                "Z80 decode failure: opcode 0x{prefix:02X} 0x{opcode:02X} near PC=0x{pc:04X}"
            ),
            None => log::error!("Z80 decode failure: opcode 0x{opcode:02X} near PC=0x{pc:04X}"),
        }
        unreachable!("no decoder for opcode 0x{opcode:02X}");
    }
}
