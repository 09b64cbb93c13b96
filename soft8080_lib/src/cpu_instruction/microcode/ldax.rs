use super::*;

pub fn ldax(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let pair = (cpu_instruction.opcode >> 4) & 0x03;
    let addr = read_pair(registers, pair);
    registers.accumulator = memory.read(addr, 1)?[0];

    Ok(LogLine::new(
        cpu_instruction,
        format!("[A=0x{:02x}]", registers.accumulator),
    ))
}
