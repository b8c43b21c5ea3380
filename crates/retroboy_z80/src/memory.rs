use anyhow::{ensure, Result};

/// Byte-addressable 64 KiB memory as seen by the Z80.
///
/// Word accesses are little-endian: the low byte lives at `addr`, the high
/// byte at `addr + 1` (wrapping at the top of the address space).
pub trait Memory {
    fn read_byte(&mut self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);

    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }
}

type ReadObserver = Box<dyn FnMut(u16)>;
type WriteObserver = Box<dyn FnMut(u16, u8)>;

/// Flat 48K Spectrum memory map: 16 KiB ROM followed by 48 KiB RAM.
///
/// CPU writes into the ROM area are dropped. Observers are notified in
/// registration order; read observers run before the read, write observers
/// after an accepted write (the video renderer hooks in here).
pub struct SpectrumMemory {
    bytes: Box<[u8; SpectrumMemory::SIZE]>,
    on_read: Vec<ReadObserver>,
    on_write: Vec<WriteObserver>,
}

impl Default for SpectrumMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumMemory {
    pub const SIZE: usize = 0x10000;
    pub const ROM_SIZE: usize = 0x4000;
    pub const RAM_START: usize = 0x4000;
    pub const RAM_SIZE: usize = Self::SIZE - Self::RAM_START;

    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; Self::SIZE]),
            on_read: Vec::new(),
            on_write: Vec::new(),
        }
    }

    /// Whole address space, bypassing ROM protection and observers.
    pub fn raw(&self) -> &[u8] {
        &self.bytes[..]
    }

    pub fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..]
    }

    pub fn add_read_observer(&mut self, observer: impl FnMut(u16) + 'static) {
        self.on_read.push(Box::new(observer));
    }

    pub fn add_write_observer(&mut self, observer: impl FnMut(u16, u8) + 'static) {
        self.on_write.push(Box::new(observer));
    }

    /// Load a 16 KiB ROM image at 0x0000.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        ensure!(
            rom.len() == Self::ROM_SIZE,
            "invalid ROM size: expected {} bytes, got {}",
            Self::ROM_SIZE,
            rom.len()
        );
        self.bytes[..Self::ROM_SIZE].copy_from_slice(rom);
        Ok(())
    }

    /// Load a 48 KiB RAM image at 0x4000.
    pub fn load_ram(&mut self, ram: &[u8]) -> Result<()> {
        ensure!(
            ram.len() == Self::RAM_SIZE,
            "invalid RAM image size: expected {} bytes, got {}",
            Self::RAM_SIZE,
            ram.len()
        );
        self.bytes[Self::RAM_START..].copy_from_slice(ram);
        Ok(())
    }

    /// Copy a page image to `offset`, ignoring ROM protection.
    pub fn load_page(&mut self, page: &[u8], offset: usize) -> Result<()> {
        let end = offset.saturating_add(page.len());
        ensure!(
            end <= Self::SIZE,
            "page of {} bytes at 0x{:04X} runs past the end of memory",
            page.len(),
            offset
        );
        self.bytes[offset..end].copy_from_slice(page);
        Ok(())
    }
}

impl Memory for SpectrumMemory {
    fn read_byte(&mut self, addr: u16) -> u8 {
        for observer in self.on_read.iter_mut() {
            observer(addr);
        }
        self.bytes[addr as usize]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        if (addr as usize) < Self::ROM_SIZE {
            return;
        }
        self.bytes[addr as usize] = value;
        for observer in self.on_write.iter_mut() {
            observer(addr, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn rom_area_is_write_protected() {
        let mut mem = SpectrumMemory::new();
        mem.raw_mut()[0x1000] = 0xAA;

        mem.write_byte(0x1000, 0x55);
        mem.write_byte(0x3FFF, 0x55);
        mem.write_byte(0x4000, 0x55);

        assert_eq!(mem.read_byte(0x1000), 0xAA);
        assert_eq!(mem.read_byte(0x3FFF), 0x00);
        assert_eq!(mem.read_byte(0x4000), 0x55);
    }

    #[test]
    fn words_are_little_endian_and_wrap() {
        let mut mem = SpectrumMemory::new();
        mem.write_word(0x8000, 0x1234);
        assert_eq!(mem.raw()[0x8000], 0x34);
        assert_eq!(mem.raw()[0x8001], 0x12);
        assert_eq!(mem.read_word(0x8000), 0x1234);

        mem.write_word(0xFFFF, 0xBEEF);
        assert_eq!(mem.raw()[0xFFFF], 0xEF);
        // High byte lands on 0x0000, which is ROM.
        assert_eq!(mem.raw()[0x0000], 0x00);
    }

    #[test]
    fn write_observers_fire_in_order_for_accepted_writes() {
        let mut mem = SpectrumMemory::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        mem.add_write_observer(move |addr, value| first.borrow_mut().push((1, addr, value)));
        let second = Rc::clone(&seen);
        mem.add_write_observer(move |addr, value| second.borrow_mut().push((2, addr, value)));

        mem.write_byte(0x0010, 0x01);
        mem.write_byte(0x5800, 0x47);

        assert_eq!(*seen.borrow(), vec![(1, 0x5800, 0x47), (2, 0x5800, 0x47)]);
    }

    #[test]
    fn read_observers_fire_in_order() {
        let mut mem = SpectrumMemory::new();
        mem.raw_mut()[0xFFFF] = 0x34;
        mem.raw_mut()[0x0000] = 0x12;
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        mem.add_read_observer(move |addr| first.borrow_mut().push((1, addr)));
        let second = Rc::clone(&seen);
        mem.add_read_observer(move |addr| second.borrow_mut().push((2, addr)));

        assert_eq!(mem.read_byte(0x5800), 0x00);
        assert_eq!(mem.read_word(0xFFFF), 0x1234);

        assert_eq!(
            *seen.borrow(),
            vec![
                (1, 0x5800),
                (2, 0x5800),
                (1, 0xFFFF),
                (2, 0xFFFF),
                (1, 0x0000),
                (2, 0x0000),
            ]
        );
    }

    #[test]
    fn image_loaders_check_sizes() {
        let mut mem = SpectrumMemory::new();
        assert!(mem.load_rom(&[0u8; 0x100]).is_err());
        assert!(mem.load_rom(&[0xF3; 0x4000]).is_ok());
        assert_eq!(mem.raw()[0x0000], 0xF3);

        assert!(mem.load_ram(&[0u8; 0x4000]).is_err());
        assert!(mem.load_ram(&[0x11; 0xC000]).is_ok());
        assert_eq!(mem.raw()[0xFFFF], 0x11);

        assert!(mem.load_page(&[0u8; 0x4000], 0xC001).is_err());
        assert!(mem.load_page(&[0x22; 0x4000], 0x8000).is_ok());
        assert_eq!(mem.raw()[0xBFFF], 0x22);
        assert_eq!(mem.raw()[0xC000], 0x11);
    }
}
