use super::*;

pub fn sta(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let addr = little_endian(cpu_instruction.operands.clone());
    memory.write(addr, &[registers.accumulator])?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[0x{:04x}=0x{:02x}]", addr, registers.accumulator),
    ))
}
