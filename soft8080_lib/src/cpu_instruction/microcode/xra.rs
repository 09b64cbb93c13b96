use super::*;

fn xor_accumulator(registers: &mut Registers, byte: u8) {
    registers.accumulator ^= byte;
    registers.set_zsp_flags(registers.accumulator);
    registers.set_c_flag(false);
    registers.set_ac_flag(false);
}

pub fn xra(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = read_register(memory, registers, cpu_instruction.opcode & 0x07)?;
    xor_accumulator(registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

pub fn xri(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = cpu_instruction.operands[0];
    xor_accumulator(registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}
