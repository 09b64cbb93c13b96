use super::*;

// ANA copies the 8080 quirk where AC reflects bit 3 of (A | operand)
fn and_accumulator(registers: &mut Registers, byte: u8) {
    let result = registers.accumulator & byte;
    registers.set_zsp_flags(result);
    registers.set_c_flag(false);
    registers.set_ac_flag((registers.accumulator | byte) & 0x08 != 0);
    registers.accumulator = result;
}

pub fn ana(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = read_register(memory, registers, cpu_instruction.opcode & 0x07)?;
    and_accumulator(registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

pub fn ani(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = cpu_instruction.operands[0];
    and_accumulator(registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}
