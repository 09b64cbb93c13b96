use super::*;

pub fn xthl(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let stack_top = memory.read(registers.stack_pointer, 2)?;
    memory.write(
        registers.stack_pointer,
        &[registers.register_l, registers.register_h],
    )?;
    registers.set_hl(little_endian(stack_top));

    Ok(LogLine::new(
        cpu_instruction,
        format!("[HL=0x{:04x}]", registers.get_hl()),
    ))
}
