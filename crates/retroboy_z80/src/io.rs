use crate::memory::Memory;

/// Port-mapped I/O as seen by the Z80.
///
/// Ports are full 16-bit values: the upper half carries A (for `IN A,(n)` /
/// `OUT (n),A`) or B (for the `(C)` forms), which several machines decode.
pub trait IoDevice {
    fn read_port(&mut self, port: u16) -> u8;
    fn write_port(&mut self, port: u16, value: u8);
}

/// Nothing attached: reads float high and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatingBus;

impl IoDevice for FloatingBus {
    fn read_port(&mut self, _port: u16) -> u8 {
        0xFF
    }

    fn write_port(&mut self, _port: u16, _value: u8) {}
}

/// Pairs separately owned memory and I/O devices into one CPU bus.
pub struct SystemBus<'a, M: Memory, I: IoDevice> {
    pub memory: &'a mut M,
    pub io: &'a mut I,
}

impl<'a, M: Memory, I: IoDevice> SystemBus<'a, M, I> {
    pub fn new(memory: &'a mut M, io: &'a mut I) -> Self {
        Self { memory, io }
    }
}

impl<M: Memory, I: IoDevice> Memory for SystemBus<'_, M, I> {
    #[inline]
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.memory.read_byte(addr)
    }

    #[inline]
    fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory.write_byte(addr, value)
    }

    #[inline]
    fn read_word(&mut self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    #[inline]
    fn write_word(&mut self, addr: u16, value: u16) {
        self.memory.write_word(addr, value)
    }
}

impl<M: Memory, I: IoDevice> IoDevice for SystemBus<'_, M, I> {
    #[inline]
    fn read_port(&mut self, port: u16) -> u8 {
        self.io.read_port(port)
    }

    #[inline]
    fn write_port(&mut self, port: u16, value: u8) {
        self.io.write_port(port, value)
    }
}
