use super::*;

pub fn dcr(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let destination = (cpu_instruction.opcode >> 3) & 0x07;
    let byte = read_register(memory, registers, destination)?;
    let result = byte.wrapping_sub(1);
    write_register(memory, registers, destination, result)?;
    registers.set_zsp_flags(result);
    // AC set when no borrow leaves the low nibble
    registers.set_ac_flag(byte & 0x0f != 0);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[{}=0x{:02x}][S={}]",
            register_name(destination),
            result,
            registers.format_status()
        ),
    ))
}
