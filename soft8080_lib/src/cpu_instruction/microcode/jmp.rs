use super::*;

pub fn jmp(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.command_pointer = little_endian(cpu_instruction.operands.clone());

    Ok(LogLine::new(
        cpu_instruction,
        format!("[CP=0x{:04x}]", registers.command_pointer),
    ))
}

// conditional jumps cost the same 10 states either way
pub fn jmp_if(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = (cpu_instruction.opcode >> 3) & 0x07;
    let outcome = if condition_is_met(condition, registers) {
        registers.command_pointer = little_endian(cpu_instruction.operands.clone());
        format!("[CP=0x{:04x}]", registers.command_pointer)
    } else {
        "[jump not taken]".to_owned()
    };

    Ok(LogLine::new(cpu_instruction, outcome))
}
