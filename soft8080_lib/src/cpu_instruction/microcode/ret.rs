use super::*;

fn perform_return(memory: &Memory, registers: &mut Registers) -> Result<()> {
    let low = registers.stack_pull(memory)?;
    let high = registers.stack_pull(memory)?;
    registers.command_pointer = little_endian(vec![low, high]);

    Ok(())
}

pub fn ret(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    perform_return(memory, registers)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[CP=0x{:04x}][SP=0x{:04x}]",
            registers.command_pointer, registers.stack_pointer
        ),
    ))
}

pub fn ret_if(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = (cpu_instruction.opcode >> 3) & 0x07;
    let outcome = if condition_is_met(condition, registers) {
        cpu_instruction.add_branch_cycles();
        perform_return(memory, registers)?;
        format!(
            "[CP=0x{:04x}][SP=0x{:04x}]",
            registers.command_pointer, registers.stack_pointer
        )
    } else {
        "[return not taken]".to_owned()
    };

    Ok(LogLine::new(cpu_instruction, outcome))
}
