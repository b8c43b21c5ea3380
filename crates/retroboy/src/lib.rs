use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use retroboy_z80::{FloatingBus, IoDevice, SpectrumMemory, SystemBus, Z80};

/// Frames run when the command line does not say otherwise (one second).
pub const DEFAULT_FRAMES: u32 = 50;

/// ULA port decoding: any even port address selects the ULA.
const ULA_PORT_MASK: u16 = 0x0001;

/// The ULA's side of the port space: border colour out, keyboard in.
///
/// No keys are ever pressed and there is no tape signal, so reads return all
/// ones. Odd ports fall through to the floating bus.
#[derive(Default)]
pub struct UlaPorts {
    border: u8,
    unattached: FloatingBus,
}

impl UlaPorts {
    pub fn border(&self) -> u8 {
        self.border
    }
}

impl IoDevice for UlaPorts {
    fn read_port(&mut self, port: u16) -> u8 {
        if port & ULA_PORT_MASK == 0 {
            0xFF
        } else {
            self.unattached.read_port(port)
        }
    }

    fn write_port(&mut self, port: u16, value: u8) {
        if port & ULA_PORT_MASK == 0 {
            let border = value & 0x07;
            if border != self.border {
                log::trace!("Border colour {} -> {}", self.border, border);
            }
            self.border = border;
        } else {
            self.unattached.write_port(port, value);
        }
    }
}

/// A 48K ZX Spectrum without video or audio output: memory, ULA ports and
/// the Z80, driven one frame at a time.
pub struct Spectrum48 {
    cpu: Z80,
    memory: SpectrumMemory,
    ula: UlaPorts,
}

impl Default for Spectrum48 {
    fn default() -> Self {
        Self::new()
    }
}

impl Spectrum48 {
    pub fn new() -> Self {
        Self {
            cpu: Z80::new(),
            memory: SpectrumMemory::new(),
            ula: UlaPorts::default(),
        }
    }

    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.memory.load_rom(rom)
    }

    pub fn load_ram(&mut self, ram: &[u8]) -> Result<()> {
        self.memory.load_ram(ram)
    }

    pub fn cpu(&self) -> &Z80 {
        &self.cpu
    }

    pub fn memory(&self) -> &SpectrumMemory {
        &self.memory
    }

    pub fn border(&self) -> u8 {
        self.ula.border()
    }

    /// Run the CPU up to the frame boundary, carry the overshoot into the
    /// next frame and raise the 50 Hz interrupt.
    ///
    /// Returns the T-states charged by the interrupt (0 if it was ignored).
    pub fn run_frame(&mut self) -> u32 {
        let mut bus = SystemBus::new(&mut self.memory, &mut self.ula);
        self.cpu.execute(&mut bus);

        let frame = self.cpu.frame_states();
        self.cpu.set_states(self.cpu.states().saturating_sub(frame));
        self.cpu.interrupt(&mut bus)
    }
}

/// Command line: `retroboy <rom> [frames] [ram-image]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub rom_path: PathBuf,
    pub frames: u32,
    pub ram_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let rom_path = args
            .next()
            .map(PathBuf::from)
            .context("missing ROM path\nusage: retroboy <rom> [frames] [ram-image]")?;
        let frames = match args.next() {
            Some(frames) => frames
                .parse()
                .with_context(|| format!("invalid frame count '{frames}'"))?,
            None => DEFAULT_FRAMES,
        };
        let ram_path = args.next().map(PathBuf::from);

        Ok(Self {
            rom_path,
            frames,
            ram_path,
        })
    }
}

fn read_image(path: &Path, what: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {what} '{}'", path.display()))
}

pub fn run(config: &RunConfig) -> Result<Spectrum48> {
    let mut machine = Spectrum48::new();

    let rom = read_image(&config.rom_path, "ROM")?;
    machine
        .load_rom(&rom)
        .with_context(|| format!("cannot load ROM '{}'", config.rom_path.display()))?;
    log::info!("Loaded ROM '{}'", config.rom_path.display());

    if let Some(ram_path) = &config.ram_path {
        let ram = read_image(ram_path, "RAM image")?;
        machine
            .load_ram(&ram)
            .with_context(|| format!("cannot load RAM image '{}'", ram_path.display()))?;
        log::info!("Loaded RAM image '{}'", ram_path.display());
    }

    let mut interrupts = 0;
    for _ in 0..config.frames {
        if machine.run_frame() > 0 {
            interrupts += 1;
        }
    }

    let regs = machine.cpu().status();
    log::info!(
        "Ran {} frames ({} interrupts accepted), border {}",
        config.frames,
        interrupts,
        machine.border()
    );
    log::info!(
        "PC={:04X} SP={:04X} AF={:04X} BC={:04X} DE={:04X} HL={:04X} IX={:04X} IY={:04X} IM={} IFF1={}",
        regs.pc,
        regs.sp,
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.ix(),
        regs.iy(),
        regs.im,
        regs.iff1
    );

    Ok(machine)
}
