use super::*;

pub fn sbb(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = read_register(memory, registers, cpu_instruction.opcode & 0x07)?;
    let borrow = registers.c_flag_is_set();
    registers.accumulator = subtract_and_set_flags(registers, byte, borrow);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

pub fn sbi(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = cpu_instruction.operands[0];
    let borrow = registers.c_flag_is_set();
    registers.accumulator = subtract_and_set_flags(registers, byte, borrow);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}
