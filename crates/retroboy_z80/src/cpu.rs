mod alu;
mod block;
mod bus;
mod cb;
mod ed;
mod exec;
mod flags;
mod helpers;
mod index;
mod init;
mod interrupts;
mod regs;
mod stack;
mod tables;


pub use bus::Bus;
pub use flags::Flags;
pub use regs::{RegisterPair, Registers};
pub use tables::LookupTables;

/// Zilog Z80 CPU.
///
/// The CPU owns only its architectural state and timing counters; memory and
/// I/O are supplied by the host on every call through a [`Bus`]. A host
/// normally runs one video frame at a time:
///
/// ```
/// use retroboy_z80::{FloatingBus, SpectrumMemory, SystemBus, Z80, FRAME_STATES};
///
/// let mut memory = SpectrumMemory::new();
/// let mut io = FloatingBus;
/// let mut cpu = Z80::new();
///
/// let mut bus = SystemBus::new(&mut memory, &mut io);
/// cpu.execute(&mut bus);
/// cpu.set_states(cpu.states() - FRAME_STATES);
/// cpu.interrupt(&mut bus);
/// ```
pub struct Z80 {
    pub regs: Registers,
    tables: LookupTables,
    /// T-states elapsed in the current frame.
    states: u32,
    frame_states: u32,
    statements_to_fetch: Option<u32>,
    fetch_observers: Vec<Box<dyn FnMut()>>,
    block_io_warned: bool,
}

impl Z80 {
    /// Run until the frame budget is used up or the statement limit hits zero.
    pub fn execute<B: Bus>(&mut self, bus: &mut B) {
        while self.states < self.frame_states {
            if let Some(remaining) = self.statements_to_fetch {
                if remaining == 0 {
                    // One-shot: the next call runs unbounded again.
                    self.statements_to_fetch = None;
                    return;
                }
                self.statements_to_fetch = Some(remaining - 1);
            }

            let cycles = self.step(bus);
            self.states = self.states.wrapping_add(cycles);
        }
    }

    /// Execute a single instruction and return its cost in T-states.
    ///
    /// A halted CPU idles for 4 T-states without fetching. Block-repeat
    /// instructions perform one iteration per call and rewind PC to reissue
    /// themselves. Unlike `execute`, this does not touch the state counter.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        for observer in self.fetch_observers.iter_mut() {
            observer();
        }

        if self.regs.halted {
            return 4;
        }

        let opcode = self.fetch_opcode(bus);
        self.exec_opcode(bus, opcode)
    }

    /// Register a callback raised before every instruction fetch.
    ///
    /// Observers run in registration order and cannot reach CPU state.
    pub fn add_fetch_observer(&mut self, observer: impl FnMut() + 'static) {
        self.fetch_observers.push(Box::new(observer));
    }

    /// Snapshot of the full register file.
    pub fn status(&self) -> Registers {
        self.regs
    }

    /// Replace the register file wholesale (snapshot restore).
    pub fn set_status(&mut self, status: Registers) {
        self.regs = status;
    }

    pub fn states(&self) -> u32 {
        self.states
    }

    pub fn set_states(&mut self, states: u32) {
        self.states = states;
    }

    /// Remaining instructions before `execute` returns early; `None` is
    /// unlimited.
    pub fn statements_to_fetch(&self) -> Option<u32> {
        self.statements_to_fetch
    }

    pub fn set_statements_to_fetch(&mut self, statements: Option<u32>) {
        self.statements_to_fetch = statements;
    }

    pub fn frame_states(&self) -> u32 {
        self.frame_states
    }

    pub fn set_frame_states(&mut self, frame_states: u32) {
        self.frame_states = frame_states;
    }
}
