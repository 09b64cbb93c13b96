use super::*;

pub fn lxi(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let pair = (cpu_instruction.opcode >> 4) & 0x03;
    let word = little_endian(cpu_instruction.operands.clone());
    write_pair(registers, pair, word);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[{}=0x{:04x}]", pair_name(pair), word),
    ))
}
