use super::*;

pub fn sphl(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.stack_pointer = registers.get_hl();

    Ok(LogLine::new(
        cpu_instruction,
        format!("[SP=0x{:04x}]", registers.stack_pointer),
    ))
}
