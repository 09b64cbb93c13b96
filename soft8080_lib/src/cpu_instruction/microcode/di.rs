use super::*;

pub fn di(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.interrupt_enabled = false;

    Ok(LogLine::new(cpu_instruction, "[INTE=0]".to_owned()))
}
