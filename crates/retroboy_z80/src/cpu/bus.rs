use crate::io::IoDevice;
use crate::memory::Memory;

/// Everything the CPU talks to: memory plus the port space.
///
/// Implemented automatically for any type providing both halves, e.g. a
/// machine struct or a [`SystemBus`](crate::io::SystemBus) pairing.
pub trait Bus: Memory + IoDevice {}

impl<T: Memory + IoDevice + ?Sized> Bus for T {}
