use super::*;

/*
 * The four accumulator rotations. Only the carry flag is affected.
 * RLC/RRC rotate within the byte, RAL/RAR rotate through the carry.
 */
pub fn rlc(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let high_bit = registers.accumulator >> 7;
    registers.accumulator = registers.accumulator << 1 | high_bit;
    registers.set_c_flag(high_bit != 0);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

pub fn rrc(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let low_bit = registers.accumulator & 0x01;
    registers.accumulator = registers.accumulator >> 1 | low_bit << 7;
    registers.set_c_flag(low_bit != 0);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

pub fn ral(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let high_bit = registers.accumulator >> 7;
    registers.accumulator = registers.accumulator << 1 | u8::from(registers.c_flag_is_set());
    registers.set_c_flag(high_bit != 0);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

pub fn rar(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let low_bit = registers.accumulator & 0x01;
    registers.accumulator =
        registers.accumulator >> 1 | u8::from(registers.c_flag_is_set()) << 7;
    registers.set_c_flag(low_bit != 0);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}
