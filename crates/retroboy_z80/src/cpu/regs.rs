use super::flags::Flags;

/// A 16-bit register made of two independently addressable bytes.
///
/// `word() == hi * 256 + lo` always holds; arithmetic on either view wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterPair {
    pub hi: u8,
    pub lo: u8,
}

impl RegisterPair {
    #[inline]
    pub const fn new(word: u16) -> Self {
        let [hi, lo] = word.to_be_bytes();
        Self { hi, lo }
    }

    #[inline]
    pub fn word(&self) -> u16 {
        u16::from_be_bytes([self.hi, self.lo])
    }

    #[inline]
    pub fn set_word(&mut self, value: u16) {
        *self = Self::new(value);
    }

    /// Exchange contents with another pair (EX AF,AF' and EXX).
    #[inline]
    pub fn swap(&mut self, other: &mut RegisterPair) {
        std::mem::swap(self, other);
    }
}

/// 8-bit register selectors used by the decoder.
///
/// The index halves only appear after a DD/FD prefix has substituted them
/// for H and L.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
    Ixh,
    Ixl,
    Iyh,
    Iyl,
}

impl Reg8 {
    /// Decode the 3-bit register field of an opcode.
    ///
    /// Field 110 addresses (HL) rather than a register and yields `None`.
    #[inline]
    pub(crate) fn decode(code: u8) -> Option<Reg8> {
        match code & 0x07 {
            0 => Some(Reg8::B),
            1 => Some(Reg8::C),
            2 => Some(Reg8::D),
            3 => Some(Reg8::E),
            4 => Some(Reg8::H),
            5 => Some(Reg8::L),
            6 => None,
            _ => Some(Reg8::A),
        }
    }
}

/// Complete architectural state of the Z80.
///
/// This is the `Status` snapshot exchanged with hosts and snapshot loaders;
/// copying it produces an independent save state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub af: RegisterPair,
    pub bc: RegisterPair,
    pub de: RegisterPair,
    pub hl: RegisterPair,
    pub af_alt: RegisterPair,
    pub bc_alt: RegisterPair,
    pub de_alt: RegisterPair,
    pub hl_alt: RegisterPair,
    pub ix: RegisterPair,
    pub iy: RegisterPair,
    pub sp: u16,
    pub pc: u16,
    /// Interrupt vector base (high byte of the IM 2 table address).
    pub i: u8,
    /// Refresh counter; only the low seven bits are meaningful.
    pub r: u8,
    /// Bit 7 of R as last written by `LD R,A`.
    pub r7: u8,
    pub iff1: bool,
    pub iff2: bool,
    /// Interrupt mode: 0, 1 or 2.
    pub im: u8,
    pub halted: bool,
}

impl Registers {
    /// Power-on state: SP at the top of memory, everything else cleared.
    pub fn reset(&mut self) {
        *self = Registers {
            sp: 0xFFFF,
            ..Registers::default()
        };
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.af.hi
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af.hi = value;
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.af.lo
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.af.lo = value;
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_retain(self.af.lo)
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.af.lo = flags.bits();
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.af.word()
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        self.af.set_word(value);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.bc.word()
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.bc.set_word(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.de.word()
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.de.set_word(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.hl.word()
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.hl.set_word(value);
    }

    #[inline]
    pub fn ix(&self) -> u16 {
        self.ix.word()
    }

    #[inline]
    pub fn set_ix(&mut self, value: u16) {
        self.ix.set_word(value);
    }

    #[inline]
    pub fn iy(&self) -> u16 {
        self.iy.word()
    }

    #[inline]
    pub fn set_iy(&mut self, value: u16) {
        self.iy.set_word(value);
    }

    /// Bump the refresh counter once per opcode fetch.
    #[inline]
    pub fn inc_r(&mut self) {
        self.r = self.r.wrapping_add(1);
    }

    /// R as seen by `LD A,R`: counter bits 0-6 plus the latched bit 7.
    #[inline]
    pub fn r_value(&self) -> u8 {
        (self.r & 0x7F) | (self.r7 & 0x80)
    }

    /// `EX AF,AF'`
    #[inline]
    pub fn ex_af(&mut self) {
        self.af.swap(&mut self.af_alt);
    }

    /// `EXX`
    #[inline]
    pub fn exx(&mut self) {
        self.bc.swap(&mut self.bc_alt);
        self.de.swap(&mut self.de_alt);
        self.hl.swap(&mut self.hl_alt);
    }

    pub(crate) fn get8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.bc.hi,
            Reg8::C => self.bc.lo,
            Reg8::D => self.de.hi,
            Reg8::E => self.de.lo,
            Reg8::H => self.hl.hi,
            Reg8::L => self.hl.lo,
            Reg8::A => self.af.hi,
            Reg8::Ixh => self.ix.hi,
            Reg8::Ixl => self.ix.lo,
            Reg8::Iyh => self.iy.hi,
            Reg8::Iyl => self.iy.lo,
        }
    }

    pub(crate) fn set8(&mut self, reg: Reg8, value: u8) {
        let slot = match reg {
            Reg8::B => &mut self.bc.hi,
            Reg8::C => &mut self.bc.lo,
            Reg8::D => &mut self.de.hi,
            Reg8::E => &mut self.de.lo,
            Reg8::H => &mut self.hl.hi,
            Reg8::L => &mut self.hl.lo,
            Reg8::A => &mut self.af.hi,
            Reg8::Ixh => &mut self.ix.hi,
            Reg8::Ixl => &mut self.ix.lo,
            Reg8::Iyh => &mut self.iy.hi,
            Reg8::Iyl => &mut self.iy.lo,
        };
        *slot = value;
    }

    /// Register pair selected by the `dd`/`ss` field (bits 4-5): BC, DE, HL, SP.
    pub(crate) fn get16_sp(&self, code: u8) -> u16 {
        match (code >> 4) & 0x03 {
            0 => self.bc(),
            1 => self.de(),
            2 => self.hl(),
            _ => self.sp,
        }
    }

    pub(crate) fn set16_sp(&mut self, code: u8, value: u16) {
        match (code >> 4) & 0x03 {
            0 => self.set_bc(value),
            1 => self.set_de(value),
            2 => self.set_hl(value),
            _ => self.sp = value,
        }
    }

    /// Register pair selected by the `qq` field of PUSH/POP: BC, DE, HL, AF.
    pub(crate) fn pair_af_mut(&mut self, code: u8) -> &mut RegisterPair {
        match (code >> 4) & 0x03 {
            0 => &mut self.bc,
            1 => &mut self.de,
            2 => &mut self.hl,
            _ => &mut self.af,
        }
    }
}
