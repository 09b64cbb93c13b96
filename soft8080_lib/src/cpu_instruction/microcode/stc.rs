use super::*;

pub fn stc(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.set_c_flag(true);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", registers.format_status()),
    ))
}
