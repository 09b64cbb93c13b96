use super::*;

pub fn dad(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let pair = (cpu_instruction.opcode >> 4) & 0x03;
    let sum = registers.get_hl() as u32 + read_pair(registers, pair) as u32;
    registers.set_hl((sum & 0xffff) as usize);
    registers.set_c_flag(sum > 0xffff);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[HL=0x{:04x}][S={}]",
            registers.get_hl(),
            registers.format_status()
        ),
    ))
}
