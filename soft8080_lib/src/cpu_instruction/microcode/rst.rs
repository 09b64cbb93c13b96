use super::*;

pub fn rst(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let vector = ((cpu_instruction.opcode >> 3) & 0x07) as usize;
    let bytes = usize::to_le_bytes(registers.command_pointer);
    registers.stack_push(memory, bytes[1])?;
    registers.stack_push(memory, bytes[0])?;
    registers.command_pointer = vector * 8;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[CP=0x{:04x}][SP=0x{:04x}]",
            registers.command_pointer, registers.stack_pointer
        ),
    ))
}
