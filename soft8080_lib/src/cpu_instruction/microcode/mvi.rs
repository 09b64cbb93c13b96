use super::*;

pub fn mvi(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let destination = (cpu_instruction.opcode >> 3) & 0x07;
    let byte = cpu_instruction.operands[0];
    write_register(memory, registers, destination, byte)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[{}=0x{:02x}]", register_name(destination), byte),
    ))
}
