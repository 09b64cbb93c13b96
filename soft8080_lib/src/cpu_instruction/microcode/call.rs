use super::*;

/*
 * The command pointer already sits past the three instruction bytes, so
 * pushing it as-is gives RET the right resume address.
 */
fn perform_call(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<()> {
    let bytes = usize::to_le_bytes(registers.command_pointer);
    registers.stack_push(memory, bytes[1])?;
    registers.stack_push(memory, bytes[0])?;
    registers.command_pointer = little_endian(cpu_instruction.operands.clone());

    Ok(())
}

pub fn call(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    perform_call(memory, registers, cpu_instruction)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[CP=0x{:04x}][SP=0x{:04x}]",
            registers.command_pointer, registers.stack_pointer
        ),
    ))
}

pub fn call_if(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = (cpu_instruction.opcode >> 3) & 0x07;
    let outcome = if condition_is_met(condition, registers) {
        cpu_instruction.add_branch_cycles();
        perform_call(memory, registers, cpu_instruction)?;
        format!(
            "[CP=0x{:04x}][SP=0x{:04x}]",
            registers.command_pointer, registers.stack_pointer
        )
    } else {
        "[call not taken]".to_owned()
    };

    Ok(LogLine::new(cpu_instruction, outcome))
}
