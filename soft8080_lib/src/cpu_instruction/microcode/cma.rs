use super::*;

pub fn cma(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.accumulator = !registers.accumulator;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[A=0x{:02x}]", registers.accumulator),
    ))
}
