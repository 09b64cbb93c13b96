use super::*;

pub fn cmp(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = read_register(memory, registers, cpu_instruction.opcode & 0x07)?;
    // flags only, the accumulator keeps its value
    let _ = subtract_and_set_flags(registers, byte, false);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", registers.format_status()),
    ))
}

pub fn cpi(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = cpu_instruction.operands[0];
    let _ = subtract_and_set_flags(registers, byte, false);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", registers.format_status()),
    ))
}
