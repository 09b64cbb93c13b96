use super::*;

pub fn pop(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let pair = (cpu_instruction.opcode >> 4) & 0x03;
    let low = registers.stack_pull(memory)?;
    let high = registers.stack_pull(memory)?;
    let name = if pair == 0x03 {
        registers.set_status_register(low);
        registers.accumulator = high;
        "PSW"
    } else {
        write_pair(registers, pair, (high as usize) << 8 | low as usize);
        pair_name(pair)
    };

    Ok(LogLine::new(
        cpu_instruction,
        format!("[{}=0x{:02x}{:02x}][SP=0x{:04x}]", name, high, low, registers.stack_pointer),
    ))
}
