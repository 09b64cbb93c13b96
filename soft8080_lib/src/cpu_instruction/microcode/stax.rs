use super::*;

pub fn stax(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let pair = (cpu_instruction.opcode >> 4) & 0x03;
    let addr = read_pair(registers, pair);
    memory.write(addr, &[registers.accumulator])?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[0x{:04x}=0x{:02x}]", addr, registers.accumulator),
    ))
}
