use super::*;

pub fn hlt(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.halted = true;

    Ok(LogLine::new(cpu_instruction, "[HLT]".to_owned()))
}
