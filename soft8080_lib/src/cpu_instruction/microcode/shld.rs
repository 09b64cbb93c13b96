use super::*;

pub fn shld(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let addr = little_endian(cpu_instruction.operands.clone());
    memory.write(addr, &[registers.register_l, registers.register_h])?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[0x{:04x}=0x{:04x}]", addr, registers.get_hl()),
    ))
}
