use super::*;

pub fn xchg(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let de = registers.get_de();
    registers.set_de(registers.get_hl());
    registers.set_hl(de);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[DE=0x{:04x}][HL=0x{:04x}]",
            registers.get_de(),
            registers.get_hl()
        ),
    ))
}
