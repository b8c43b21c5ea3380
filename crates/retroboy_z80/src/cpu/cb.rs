use super::{Bus, Z80};

impl Z80 {
    /// Handle CB-prefixed instructions (rotates, shifts and bit operations).
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let target = self.operand(opcode);
        let value = self.read_operand(bus, target);

        let written = self.apply_cb(opcode, value);
        if let Some(result) = written {
            self.write_operand(bus, target, result);
        }

        match (target.is_mem(), written.is_some()) {
            (false, _) => 8,
            // BIT n,(HL) only reads.
            (true, false) => 12,
            (true, true) => 15,
        }
    }

    /// Apply a CB-table operation to `value`.
    ///
    /// The layout is `oo bbb rrr`: oo=00 selects a rotate/shift by `bbb`,
    /// otherwise 01 BIT, 10 RES, 11 SET on bit `bbb`. Returns the new value,
    /// or `None` for BIT, which only sets flags. Also used by DDCB/FDCB.
    pub(super) fn apply_cb(&mut self, opcode: u8, value: u8) -> Option<u8> {
        let bit = (opcode >> 3) & 0x07;
        match opcode >> 6 {
            0 => Some(self.alu_shift(bit, value)),
            1 => {
                self.alu_bit(bit, value);
                None
            }
            2 => Some(value & !(1 << bit)),
            3 => Some(value | (1 << bit)),
            _ => self.decode_failure(Some(0xCB), opcode),
        }
    }
}
