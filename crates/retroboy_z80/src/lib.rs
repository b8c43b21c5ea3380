pub mod cpu;
pub mod io;
pub mod memory;

pub use cpu::{Bus, Flags, RegisterPair, Registers, Z80};
pub use io::{FloatingBus, IoDevice, SystemBus};
pub use memory::{Memory, SpectrumMemory};

/// T-states per video frame on the 48K Spectrum (224 states x 312 lines).
///
/// The CPU uses this as the default event boundary for `Z80::execute`.
pub const FRAME_STATES: u32 = 69_888;
