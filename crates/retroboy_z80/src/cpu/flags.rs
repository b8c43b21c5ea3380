use bitflags::bitflags;

bitflags! {
    /// Bits of the F register.
    ///
    /// BIT3 and BIT5 are undocumented but observable: most instructions copy
    /// them from the result (or a related intermediate byte).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const CARRY = 0x01;
        const SUBTRACT = 0x02;
        const PARITY_OVERFLOW = 0x04;
        const BIT3 = 0x08;
        const HALF_CARRY = 0x10;
        const BIT5 = 0x20;
        const ZERO = 0x40;
        const SIGN = 0x80;
    }
}

pub(crate) const FLAG_C: u8 = Flags::CARRY.bits();
pub(crate) const FLAG_N: u8 = Flags::SUBTRACT.bits();
pub(crate) const FLAG_P: u8 = Flags::PARITY_OVERFLOW.bits();
pub(crate) const FLAG_V: u8 = FLAG_P;
pub(crate) const FLAG_3: u8 = Flags::BIT3.bits();
pub(crate) const FLAG_H: u8 = Flags::HALF_CARRY.bits();
pub(crate) const FLAG_5: u8 = Flags::BIT5.bits();
pub(crate) const FLAG_Z: u8 = Flags::ZERO.bits();
pub(crate) const FLAG_S: u8 = Flags::SIGN.bits();
