use super::flags::{FLAG_3, FLAG_5, FLAG_H, FLAG_P, FLAG_S, FLAG_V, FLAG_Z};

/// Precomputed flag tables shared by the ALU and the execution unit.
///
/// The four 8-entry tables are indexed by a 3-bit pattern made of one bit
/// from each operand and the result (bit 3 for half-carry, bit 7 for
/// overflow; bit 11/15 for 16-bit ops), packed as `op1 | op2 << 1 | res << 2`.
#[derive(Clone, Debug)]
pub struct LookupTables {
    pub halfcarry_add: [u8; 8],
    pub halfcarry_sub: [u8; 8],
    pub overflow_add: [u8; 8],
    pub overflow_sub: [u8; 8],
    /// Sign, zero, bit 3 and bit 5 of the index.
    pub sz53: [u8; 256],
    /// P when the index has an even number of set bits.
    pub parity: [u8; 256],
    pub sz53p: [u8; 256],
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupTables {
    pub fn new() -> Self {
        let mut sz53 = [0u8; 256];
        let mut parity = [0u8; 256];
        let mut sz53p = [0u8; 256];

        for i in 0..256usize {
            let value = i as u8;
            sz53[i] = value & (FLAG_3 | FLAG_5 | FLAG_S);
            parity[i] = if value.count_ones() % 2 == 0 { FLAG_P } else { 0 };
            sz53p[i] = sz53[i] | parity[i];
        }
        sz53[0] |= FLAG_Z;
        sz53p[0] |= FLAG_Z;

        Self {
            halfcarry_add: [0, FLAG_H, FLAG_H, FLAG_H, 0, 0, 0, FLAG_H],
            halfcarry_sub: [0, 0, FLAG_H, 0, FLAG_H, 0, FLAG_H, FLAG_H],
            overflow_add: [0, 0, 0, FLAG_V, FLAG_V, 0, 0, 0],
            overflow_sub: [0, FLAG_V, 0, 0, 0, 0, FLAG_V, 0],
            sz53,
            parity,
            sz53p,
        }
    }
}
