use super::microcode::Result as MicrocodeResult;
use crate::memory::{little_endian, MemoryMap as Memory};
use crate::ports::PortIO;
use crate::registers::Registers;
use std::cell::Cell;
use std::fmt;

/// Cycle timings for the 8080 instructions
/// Values taken from the Intel 8080 Assembly Language Programming Manual
/// state tables. Conditional CALL & RET list the not-taken cost, the
/// taken penalty is added at execution time.
const INSTRUCTION_CYCLES: [u8; 256] = [
    4, 10, 7, 5, 5, 5, 7, 4, 4, 10, 7, 5, 5, 5, 7, 4, // 0x00-0x0f
    4, 10, 7, 5, 5, 5, 7, 4, 4, 10, 7, 5, 5, 5, 7, 4, // 0x10-0x1f
    4, 10, 16, 5, 5, 5, 7, 4, 4, 10, 16, 5, 5, 5, 7, 4, // 0x20-0x2f
    4, 10, 13, 5, 10, 10, 10, 4, 4, 10, 13, 5, 5, 5, 7, 4, // 0x30-0x3f
    5, 5, 5, 5, 5, 5, 7, 5, 5, 5, 5, 5, 5, 5, 7, 5, // 0x40-0x4f
    5, 5, 5, 5, 5, 5, 7, 5, 5, 5, 5, 5, 5, 5, 7, 5, // 0x50-0x5f
    5, 5, 5, 5, 5, 5, 7, 5, 5, 5, 5, 5, 5, 5, 7, 5, // 0x60-0x6f
    7, 7, 7, 7, 7, 7, 7, 7, 5, 5, 5, 5, 5, 5, 7, 5, // 0x70-0x7f
    4, 4, 4, 4, 4, 4, 7, 4, 4, 4, 4, 4, 4, 4, 7, 4, // 0x80-0x8f
    4, 4, 4, 4, 4, 4, 7, 4, 4, 4, 4, 4, 4, 4, 7, 4, // 0x90-0x9f
    4, 4, 4, 4, 4, 4, 7, 4, 4, 4, 4, 4, 4, 4, 7, 4, // 0xa0-0xaf
    4, 4, 4, 4, 4, 4, 7, 4, 4, 4, 4, 4, 4, 4, 7, 4, // 0xb0-0xbf
    5, 10, 10, 10, 11, 11, 7, 11, 5, 10, 10, 10, 11, 17, 7, 11, // 0xc0-0xcf
    5, 10, 10, 10, 11, 11, 7, 11, 5, 10, 10, 10, 11, 17, 7, 11, // 0xd0-0xdf
    5, 10, 10, 18, 11, 11, 7, 11, 5, 5, 10, 4, 11, 17, 7, 11, // 0xe0-0xef
    5, 10, 10, 4, 11, 11, 7, 11, 5, 5, 10, 4, 11, 17, 7, 11, // 0xf0-0xff
];

pub type BoxedMicrocode = Box<
    dyn Fn(
        &mut Memory,
        &mut Registers,
        &mut dyn PortIO,
        &CPUInstruction,
    ) -> MicrocodeResult<LogLine>,
>;

pub struct CPUInstruction {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub operands: Vec<u8>,
    pub microcode: BoxedMicrocode,
    pub cycles: Cell<u8>,
}

impl CPUInstruction {
    pub fn new(
        address: usize,
        opcode: u8,
        mnemonic: &str,
        operands: Vec<u8>,
        microcode: impl Fn(
                &mut Memory,
                &mut Registers,
                &mut dyn PortIO,
                &CPUInstruction,
            ) -> MicrocodeResult<LogLine>
            + 'static,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: mnemonic.to_owned(),
            operands,
            microcode: Box::new(microcode),
            cycles: Cell::new(INSTRUCTION_CYCLES[opcode as usize]),
        }
    }

    /// opcode byte + operand bytes
    pub fn size(&self) -> usize {
        1 + self.operands.len()
    }

    pub fn execute(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
        ports: &mut dyn PortIO,
    ) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, ports, self)
    }

    // conditional CALL & RET pay 6 extra states when the branch is taken
    pub fn add_branch_cycles(&self) {
        self.cycles.set(self.cycles.get() + 6);
    }

    /*
     * A mnemonic ending with a comma already carries its register
     * operand ("MVI B,"), the immediate is glued right after it.
     */
    pub fn format_assembly(&self) -> String {
        let operand = match self.operands.len() {
            0 => String::new(),
            1 => format!("${:02x}", self.operands[0]),
            _ => format!("${:04x}", little_endian(self.operands.clone())),
        };

        if operand.is_empty() {
            self.mnemonic.clone()
        } else if self.mnemonic.ends_with(',') {
            format!("{}{}", self.mnemonic, operand)
        } else {
            format!("{} {}", self.mnemonic, operand)
        }
    }
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = vec![self.opcode];

        for i in self.operands.iter() {
            bytes.push(*i);
        }
        let byte_sequence = format!(
            "({})",
            bytes
                .iter()
                .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
                .trim()
        );

        write!(
            f,
            "#0x{:04X}: {: <14}{}",
            self.address,
            byte_sequence,
            self.format_assembly()
        )
    }
}

#[derive(Debug)]
pub struct LogLine {
    pub address: usize,
    pub opcode: u8,
    pub assembly: String,
    pub operands: Vec<u8>,
    pub outcome: String,
    pub cycles: u8,
}

impl LogLine {
    pub fn new(cpu_instruction: &CPUInstruction, outcome: String) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            assembly: cpu_instruction.format_assembly(),
            operands: cpu_instruction.operands.clone(),
            outcome,
            cycles: cpu_instruction.cycles.get(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = vec![self.opcode];
        for i in self.operands.clone() {
            bytes.push(i);
        }
        let byte_sequence = format!(
            "({})",
            bytes
                .iter()
                .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
                .trim()
        );

        write!(
            f,
            "#0x{:04X}: {: <14}{: <16}  {}[{}]",
            self.address, byte_sequence, self.assembly, self.outcome, self.cycles
        )
    }
}
