use super::*;

pub fn lda(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let addr = little_endian(cpu_instruction.operands.clone());
    registers.accumulator = memory.read(addr, 1)?[0];

    Ok(LogLine::new(
        cpu_instruction,
        format!("[A=0x{:02x}]", registers.accumulator),
    ))
}
