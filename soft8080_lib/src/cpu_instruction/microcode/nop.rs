use super::*;

pub fn nop(
    _memory: &mut Memory,
    _registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Ok(LogLine::new(cpu_instruction, String::new()))
}
