use crate::cpu_instruction::{LogLine, MicrocodeError, INIT_VECTOR_ADDR};
use crate::memory::{AddressableIO, ChunkKind, MemoryError, MemoryMap as Memory};
use crate::ports::{PortIO, ShiftRegister};
use crate::processing_unit::{execute_step, interrupt};
use crate::registers::Registers;
use std::error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/*
 * Board timings. The CPU runs at 1.9968 MHz and the video beam paints
 * 224 lines 60 times a second, with the scanline interrupt fired when
 * the beam reaches line 96 and the vertical blank one at the bottom.
 */
pub const CPU_CLOCK_HZ: usize = 1_996_800;
pub const FRAMES_PER_SECOND: usize = 60;
pub const SCREEN_HEIGHT: usize = 224;
pub const MID_SCREEN_SCANLINE: usize = 96;
pub const CYCLES_PER_FRAME: usize = CPU_CLOCK_HZ / FRAMES_PER_SECOND;
pub const CYCLES_PER_SCANLINE: usize = CYCLES_PER_FRAME / SCREEN_HEIGHT;

pub const VRAM_ADDR: usize = 0x2400;
pub const VRAM_SIZE: usize = 0x1c00;

/// the four 2 KiB images, in mapping order from address 0x0000
pub const ROM_FILES: [&str; 4] = ["invaders.h", "invaders.g", "invaders.f", "invaders.e"];
pub const ROM_FILE_SIZE: usize = 0x0800;

#[derive(Debug)]
pub enum MachineError {
    Io(PathBuf, std::io::Error),
    RomSize {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    Memory(MemoryError),
    Execution(MicrocodeError),
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MachineError::Io(path, e) => {
                write!(f, "could not read ROM file {}: {}", path.display(), e)
            }
            MachineError::RomSize {
                path,
                expected,
                found,
            } => write!(
                f,
                "ROM file {} holds {} bytes, expected {}",
                path.display(),
                found,
                expected
            ),
            MachineError::Memory(e) => write!(f, "memory setup error: {}", e),
            MachineError::Execution(e) => write!(f, "execution error: {}", e),
        }
    }
}

impl error::Error for MachineError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl From<MemoryError> for MachineError {
    fn from(err: MemoryError) -> MachineError {
        MachineError::Memory(err)
    }
}

impl From<MicrocodeError> for MachineError {
    fn from(err: MicrocodeError) -> MachineError {
        MachineError::Execution(err)
    }
}

/*
 * The cabinet hardware on the port bus: shift register, DIP switches
 * and the two player input latches. The sound latches on ports 3 & 5
 * and the watchdog on port 6 are accepted and dropped.
 */
#[derive(Debug)]
pub struct CabinetPorts {
    shift_register: ShiftRegister,
    pub dip_switches: u8,
    pub input_port_1: u8,
    pub input_port_2: u8,
}

impl Default for CabinetPorts {
    fn default() -> CabinetPorts {
        CabinetPorts {
            shift_register: ShiftRegister::default(),
            dip_switches: 0x00,
            // bit 3 is wired high on the board
            input_port_1: 0b0000_1000,
            input_port_2: 0x00,
        }
    }
}

impl PortIO for CabinetPorts {
    fn port_in(&mut self, port: u8) -> u8 {
        match port {
            0x00 => 0b0000_1110,
            0x01 => self.input_port_1,
            0x02 => self.dip_switches | self.input_port_2,
            0x03 => self.shift_register.result(),
            _ => 0x00,
        }
    }

    fn port_out(&mut self, port: u8, byte: u8) {
        match port {
            0x02 => self.shift_register.set_offset(byte),
            0x04 => self.shift_register.fill(byte),
            _ => {}
        }
    }
}

pub struct Machine {
    pub memory: Memory,
    pub registers: Registers,
    pub ports: CabinetPorts,
    frame_count: usize,
}

impl Machine {
    /*
     * memory map of the board:
     *   0x0000 → 0x1fff  ROM (four 2 KiB images)
     *   0x2000 → 0x3fff  RAM, the video frame buffer at 0x2400
     *   0x4000 → 0x5fff  RAM mirror
     */
    pub fn new(rom_dir: &Path) -> Result<Machine, MachineError> {
        let mut memory = Memory::new(0x4000);
        memory.add_chunk("ROM", ChunkKind::Rom, 0x0000, 0x0000, 0x2000)?;
        memory.add_chunk("RAM", ChunkKind::Ram, 0x2000, 0x2000, 0x2000)?;
        memory.add_chunk("RAM mirror", ChunkKind::Ram, 0x4000, 0x2000, 0x2000)?;

        for (index, name) in ROM_FILES.iter().enumerate() {
            let path = rom_dir.join(name);
            let data = fs::read(&path).map_err(|e| MachineError::Io(path.clone(), e))?;
            if data.len() != ROM_FILE_SIZE {
                return Err(MachineError::RomSize {
                    path,
                    expected: ROM_FILE_SIZE,
                    found: data.len(),
                });
            }
            memory.load_store(index * ROM_FILE_SIZE, &data)?;
        }

        Ok(Machine {
            memory,
            registers: Registers::new(INIT_VECTOR_ADDR),
            ports: CabinetPorts::default(),
            frame_count: 0,
        })
    }

    pub fn step(&mut self) -> Result<LogLine, MachineError> {
        let log_line = execute_step(&mut self.registers, &mut self.memory, &mut self.ports)?;

        Ok(log_line)
    }

    /*
     * One frame of emulation: burn a frame worth of cycles, raise RST 1
     * when the beam crosses mid screen and RST 2 at the vertical blank.
     * A halted processor still consumes cycles so the interrupts keep
     * their pace.
     */
    pub fn run_frame(&mut self) -> Result<(), MachineError> {
        let mut cycles: usize = 0;
        let mut mid_screen_fired = false;

        while cycles < CYCLES_PER_FRAME {
            if !mid_screen_fired && cycles / CYCLES_PER_SCANLINE >= MID_SCREEN_SCANLINE {
                interrupt(&mut self.registers, &mut self.memory, 1)?;
                mid_screen_fired = true;
            }
            let log_line = execute_step(&mut self.registers, &mut self.memory, &mut self.ports)?;
            cycles += log_line.cycles as usize;
        }
        interrupt(&mut self.registers, &mut self.memory, 2)?;
        self.frame_count += 1;

        Ok(())
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// raw 1 bit per pixel frame buffer, one 256 pixel column per 32 bytes
    pub fn framebuffer(&self) -> Result<Vec<u8>, MachineError> {
        let bytes = self.memory.read(VRAM_ADDR, VRAM_SIZE)?;

        Ok(bytes)
    }
}
